//! Damage-taken profile for a defending typing plus abilities

use tracing::{debug, warn};

use crate::types::{is_wonder_guard, AbilityEffect, Type};

/// Damage multiplier taken from every attacking type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageProfile {
    multipliers: [f32; 18],
}

/// Attacking types that share a multiplier
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DamageGroup {
    pub multiplier: f32,
    pub types: Vec<Type>,
}

impl DamageProfile {
    /// Every type at 1x
    pub fn neutral() -> Self {
        Self {
            multipliers: [1.0; 18],
        }
    }

    /// Multiplier taken from an attacking type
    pub fn get(&self, attacking: Type) -> f32 {
        self.multipliers[attacking.index()]
    }

    /// `(attacking type, multiplier)` pairs in chart order
    pub fn iter(&self) -> impl Iterator<Item = (Type, f32)> + '_ {
        Type::ALL.into_iter().map(move |t| (t, self.get(t)))
    }

    fn scale(&mut self, attacking: Type, factor: f32) {
        self.multipliers[attacking.index()] *= factor;
    }

    fn nullify(&mut self, attacking: Type) {
        self.multipliers[attacking.index()] = 0.0;
    }

    fn apply_defender(&mut self, defender: Type) {
        let relation = defender.relation();
        for &t in &relation.weak_to {
            self.scale(t, 2.0);
        }
        for &t in &relation.resists {
            self.scale(t, 0.5);
        }
        for &t in &relation.immune_to {
            self.nullify(t);
        }
    }

    fn apply_ability(&mut self, effect: &AbilityEffect) {
        for &t in &effect.immunities {
            self.nullify(t);
        }
        for &t in &effect.halves {
            self.scale(t, 0.5);
        }
        for &(t, factor) in &effect.multipliers {
            self.scale(t, factor);
        }
    }

    /// Only super-effective damage gets through
    fn apply_wonder_guard(&mut self) {
        for multiplier in &mut self.multipliers {
            if *multiplier < 2.0 {
                *multiplier = 0.0;
            }
        }
    }

    /// Types grouped by multiplier: immunities first, then highest to lowest.
    ///
    /// Multipliers are compared after rounding to three decimals; types in a
    /// group are sorted by name.
    pub fn grouped(&self) -> Vec<DamageGroup> {
        let mut groups: Vec<(i64, DamageGroup)> = Vec::new();

        for (t, multiplier) in self.iter() {
            let key = (f64::from(multiplier) * 1000.0).round() as i64;
            match groups.iter_mut().find(|(k, _)| *k == key) {
                Some((_, group)) => group.types.push(t),
                None => groups.push((
                    key,
                    DamageGroup {
                        multiplier: key as f32 / 1000.0,
                        types: vec![t],
                    },
                )),
            }
        }

        // Immune (key 0) sorts first, everything else descending
        groups.sort_by_key(|(k, _)| (*k != 0, std::cmp::Reverse(*k)));

        groups
            .into_iter()
            .map(|(_, mut group)| {
                group.types.sort_by_key(|t| t.as_str());
                group
            })
            .collect()
    }

    /// All types that deal more than neutral damage
    pub fn weaknesses(&self) -> Vec<Type> {
        self.iter().filter(|(_, m)| *m > 1.0).map(|(t, _)| t).collect()
    }

    /// All types that deal reduced, non-zero damage
    pub fn resistances(&self) -> Vec<Type> {
        self.iter()
            .filter(|(_, m)| *m > 0.0 && *m < 1.0)
            .map(|(t, _)| t)
            .collect()
    }

    /// All types that deal no damage
    pub fn immunities(&self) -> Vec<Type> {
        self.iter().filter(|(_, m)| *m == 0.0).map(|(t, _)| t).collect()
    }

    pub fn is_immune_to(&self, attacking: Type) -> bool {
        self.get(attacking) == 0.0
    }
}

impl Default for DamageProfile {
    fn default() -> Self {
        Self::neutral()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DamageProfile {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(t, m)| (t.as_str(), m)))
    }
}

/// Compute the damage a typing takes from every attacking type.
///
/// `secondary` is ignored when equal to `primary`. The active ability is
/// applied before the passive one; either being Wonder Guard zeroes every
/// multiplier below 2 afterwards.
pub fn effectiveness(
    primary: Type,
    secondary: Option<Type>,
    active_ability: Option<&str>,
    passive_ability: Option<&str>,
) -> DamageProfile {
    let mut defenders = vec![primary];
    if let Some(secondary) = secondary.filter(|t| *t != primary) {
        defenders.push(secondary);
    }
    compute(&defenders, active_ability, passive_ability)
}

/// Same as [`effectiveness`], taking type names as they appear in records.
///
/// Unrecognised type names are logged and contribute nothing.
pub fn effectiveness_for_names(
    primary: &str,
    secondary: Option<&str>,
    active_ability: Option<&str>,
    passive_ability: Option<&str>,
) -> DamageProfile {
    let mut defenders: Vec<Type> = Vec::with_capacity(2);
    for name in std::iter::once(primary).chain(secondary) {
        match Type::from_name(name) {
            Some(t) if !defenders.contains(&t) => defenders.push(t),
            Some(_) => {}
            None => warn!(type_name = name, "Unknown type, skipping its contribution"),
        }
    }
    compute(&defenders, active_ability, passive_ability)
}

fn compute(
    defenders: &[Type],
    active_ability: Option<&str>,
    passive_ability: Option<&str>,
) -> DamageProfile {
    let mut profile = DamageProfile::neutral();

    for &defender in defenders {
        profile.apply_defender(defender);
    }

    let abilities = [active_ability, passive_ability];
    for effect in abilities.iter().flatten().filter_map(|name| AbilityEffect::lookup(name)) {
        profile.apply_ability(effect);
    }

    if abilities.iter().flatten().any(|name| is_wonder_guard(name)) {
        profile.apply_wonder_guard();
    }

    debug!(
        ?defenders,
        active = ?active_ability,
        passive = ?passive_ability,
        "Calculated type effectiveness"
    );
    profile
}
