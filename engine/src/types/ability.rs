//! Abilities that change how much damage a creature takes from a type

use std::collections::HashMap;
use std::sync::LazyLock;

use super::pokemon_type::Type;

/// Ability that lets only super-effective damage through.
///
/// Not a table entry: it is applied as a rule after every other modifier.
pub const WONDER_GUARD: &str = "WONDER GUARD";

/// Type-chart modifiers granted by an ability
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AbilityEffect {
    /// Types that deal no damage to the holder
    pub immunities: Vec<Type>,

    /// Types whose damage is halved
    pub halves: Vec<Type>,

    /// Types whose damage is scaled by an arbitrary factor
    pub multipliers: Vec<(Type, f32)>,
}

impl AbilityEffect {
    fn immune(types: &[Type]) -> Self {
        Self {
            immunities: types.to_vec(),
            ..Self::default()
        }
    }

    fn halve(types: &[Type]) -> Self {
        Self {
            halves: types.to_vec(),
            ..Self::default()
        }
    }

    /// Look up the effect of an ability by name (case-insensitive, trimmed)
    pub fn lookup(name: &str) -> Option<&'static AbilityEffect> {
        ABILITY_EFFECTS.get(normalize_ability(name).as_str())
    }

    /// Whether this effect touches the type chart at all
    pub fn is_empty(&self) -> bool {
        self.immunities.is_empty() && self.halves.is_empty() && self.multipliers.is_empty()
    }
}

static ABILITY_EFFECTS: LazyLock<HashMap<&'static str, AbilityEffect>> = LazyLock::new(|| {
    use Type::*;

    HashMap::from([
        ("LEVITATE", AbilityEffect::immune(&[Ground])),
        ("EARTH EATER", AbilityEffect::immune(&[Ground])),
        ("WATER ABSORB", AbilityEffect::immune(&[Water])),
        (
            "DRY SKIN",
            AbilityEffect {
                immunities: vec![Water],
                multipliers: vec![(Fire, 1.25)],
                ..AbilityEffect::default()
            },
        ),
        ("STORM DRAIN", AbilityEffect::immune(&[Water])),
        ("FLASH FIRE", AbilityEffect::immune(&[Fire])),
        ("WELL-BAKED BODY", AbilityEffect::immune(&[Fire])),
        ("VOLT ABSORB", AbilityEffect::immune(&[Electric])),
        ("LIGHTNING ROD", AbilityEffect::immune(&[Electric])),
        ("MOTOR DRIVE", AbilityEffect::immune(&[Electric])),
        ("SAP SIPPER", AbilityEffect::immune(&[Grass])),
        ("SAPSIPPER", AbilityEffect::immune(&[Grass])),
        ("PURIFYING SALT", AbilityEffect::halve(&[Ghost])),
        ("THICK FAT", AbilityEffect::halve(&[Fire, Ice])),
        ("HEATPROOF", AbilityEffect::halve(&[Fire])),
        ("WATER BUBBLE", AbilityEffect::halve(&[Fire])),
    ])
});

/// Canonical lookup key for an ability name
pub fn normalize_ability(name: &str) -> String {
    name.trim().to_uppercase()
}

/// Check whether a (possibly unnormalized) ability name is Wonder Guard
pub fn is_wonder_guard(name: &str) -> bool {
    normalize_ability(name) == WONDER_GUARD
}

/// One-line description of what an ability does to the type chart.
///
/// Returns `None` for abilities with no type-chart effect.
pub fn ability_summary(name: &str) -> Option<String> {
    let mut parts = Vec::new();

    if let Some(effect) = AbilityEffect::lookup(name) {
        if !effect.immunities.is_empty() {
            parts.push(format!("immunities: {}", join_types(&effect.immunities)));
        }
        if !effect.halves.is_empty() {
            parts.push(format!("halves: {}", join_types(&effect.halves)));
        }
        for (t, factor) in &effect.multipliers {
            parts.push(format!("{t}: x{factor}"));
        }
    }

    if is_wonder_guard(name) {
        parts.push("wonder guard: immune to all non-super-effective".to_string());
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("; "))
    }
}

fn join_types(types: &[Type]) -> String {
    types
        .iter()
        .map(Type::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
