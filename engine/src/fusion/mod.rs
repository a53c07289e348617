//! Fusing two creature records
//!
//! The fusion takes its primary type and passive from the first record and
//! its secondary type and abilities from the second. Stats are blended
//! evenly.

mod stats;
mod typing;

pub use stats::{bst_difference, fuse_stats, round_tenth, FusedStats};
pub use typing::resolve_fusion_typing;

use tracing::debug;

use crate::query::{effectiveness_for_names, DamageProfile};
use crate::types::{type_label, CreatureRecord, StatBlock};

/// Caller-controlled knobs for a fusion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FusionOptions {
    /// Ability of the second record to treat as active; defaults to its first ability
    pub active_ability: Option<String>,

    /// Whether the first record's passive counts towards damage taken
    pub passive_enabled: bool,

    /// Show stats through the flip permutation
    pub flip: bool,
}

impl Default for FusionOptions {
    fn default() -> Self {
        Self {
            active_ability: None,
            passive_enabled: true,
            flip: false,
        }
    }
}

/// A fusion of two records. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Fusion {
    pub first: String,
    pub second: String,

    pub primary_type: String,
    pub secondary_type: Option<String>,

    pub stats: FusedStats,

    /// Fused total minus the first record's total
    pub difference_from_first: f64,

    /// Fused total minus the second record's total
    pub difference_from_second: f64,

    /// Visible abilities of the second record
    pub abilities: Vec<String>,

    pub active_ability: Option<String>,

    /// Whether the active ability is the second record's hidden ability
    pub hidden_ability_active: bool,

    /// The first record's passive, when enabled
    pub passive: Option<String>,

    pub flip: bool,

    pub damage_taken: DamageProfile,
}

impl Fusion {
    pub fn new(first: &CreatureRecord, second: &CreatureRecord, options: &FusionOptions) -> Self {
        let (primary, secondary) = resolve_fusion_typing(first.typing(), second.typing());
        let stats = fuse_stats(&first.stats, &second.stats);

        let active_ability = choose_active_ability(second, options.active_ability.as_deref());
        let hidden_ability_active = active_ability.is_some()
            && active_ability.as_deref() == second.hidden_ability();

        let passive = if options.passive_enabled {
            first.passive.clone()
        } else {
            None
        };

        let damage_taken = effectiveness_for_names(
            primary,
            secondary,
            active_ability.as_deref(),
            passive.as_deref(),
        );

        debug!(
            first = %first.name,
            second = %second.name,
            typing = %type_label(primary, secondary),
            total = stats.total,
            "Fused records"
        );

        Self {
            first: first.name.clone(),
            second: second.name.clone(),
            primary_type: primary.to_string(),
            secondary_type: secondary.map(str::to_string),
            difference_from_first: stats.difference_from(first.bst),
            difference_from_second: stats.difference_from(second.bst),
            stats,
            abilities: second
                .visible_abilities()
                .into_iter()
                .map(str::to_string)
                .collect(),
            active_ability,
            hidden_ability_active,
            passive,
            flip: options.flip,
            damage_taken,
        }
    }

    /// "Fire" or "Fire/Ground"
    pub fn type_label(&self) -> String {
        type_label(&self.primary_type, self.secondary_type.as_deref())
    }

    /// Fused stats as they should be displayed
    pub fn shown_stats(&self) -> StatBlock<f64> {
        self.stats.display(self.flip)
    }
}

/// The requested ability if the record has it, otherwise its first ability
fn choose_active_ability(record: &CreatureRecord, requested: Option<&str>) -> Option<String> {
    if let Some(requested) = requested.map(str::trim).filter(|r| !r.is_empty()) {
        if let Some(found) = record
            .abilities
            .iter()
            .find(|a| a.eq_ignore_ascii_case(requested))
        {
            return Some(found.clone());
        }
        debug!(
            record = %record.name,
            requested,
            "Requested ability not available, using default"
        );
    }
    record.abilities.first().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Type;

    fn charizard() -> CreatureRecord {
        CreatureRecord::new(
            6,
            "Charizard",
            "Fire",
            Some("Flying"),
            StatBlock {
                hp: 78,
                attack: 84,
                defense: 78,
                sp_atk: 109,
                sp_def: 85,
                speed: 100,
            },
        )
        .with_abilities(["Blaze", "Solar Power"])
        .with_passive(Some("Beast Boost"))
    }

    fn swampert() -> CreatureRecord {
        CreatureRecord::new(
            260,
            "Swampert",
            "Water",
            Some("Ground"),
            StatBlock {
                hp: 100,
                attack: 110,
                defense: 90,
                sp_atk: 85,
                sp_def: 90,
                speed: 60,
            },
        )
        .with_abilities(["Torrent", "Damp", "Levitate"])
        .with_passive(Some("Thick Fat"))
    }

    #[test]
    fn test_fusion_typing_and_stats() {
        let fusion = Fusion::new(&charizard(), &swampert(), &FusionOptions::default());
        assert_eq!(fusion.type_label(), "Fire/Ground");
        assert_eq!(fusion.stats.total, 534.5);
        assert_eq!(fusion.difference_from_first, 0.5);
        assert_eq!(fusion.difference_from_second, -0.5);
        assert_eq!(fusion.abilities, vec!["Torrent", "Levitate"]);
    }

    #[test]
    fn test_default_active_ability_is_first() {
        let fusion = Fusion::new(&charizard(), &swampert(), &FusionOptions::default());
        assert_eq!(fusion.active_ability.as_deref(), Some("Torrent"));
        assert!(!fusion.hidden_ability_active);
        assert_eq!(fusion.damage_taken.get(Type::Ground), 2.0);
    }

    #[test]
    fn test_levitate_active_removes_ground_weakness() {
        let options = FusionOptions {
            active_ability: Some("levitate".to_string()),
            ..FusionOptions::default()
        };
        let fusion = Fusion::new(&charizard(), &swampert(), &options);
        assert_eq!(fusion.active_ability.as_deref(), Some("Levitate"));
        assert_eq!(fusion.damage_taken.get(Type::Ground), 0.0);
    }

    #[test]
    fn test_hidden_ability_flagged() {
        let options = FusionOptions {
            active_ability: Some("Damp".to_string()),
            ..FusionOptions::default()
        };
        let fusion = Fusion::new(&charizard(), &swampert(), &options);
        assert!(fusion.hidden_ability_active);
    }

    #[test]
    fn test_unavailable_ability_falls_back() {
        let options = FusionOptions {
            active_ability: Some("Wonder Guard".to_string()),
            ..FusionOptions::default()
        };
        let fusion = Fusion::new(&charizard(), &swampert(), &options);
        assert_eq!(fusion.active_ability.as_deref(), Some("Torrent"));
    }

    #[test]
    fn test_passive_toggle() {
        // Swampert first: Water/Flying fusion with Thick Fat passive
        let on = Fusion::new(&swampert(), &charizard(), &FusionOptions::default());
        assert_eq!(on.type_label(), "Water/Flying");
        assert_eq!(on.passive.as_deref(), Some("Thick Fat"));
        // Water/Flying takes 0.5x from Fire, halved by Thick Fat
        assert_eq!(on.damage_taken.get(Type::Fire), 0.25);

        let options = FusionOptions {
            passive_enabled: false,
            ..FusionOptions::default()
        };
        let off = Fusion::new(&swampert(), &charizard(), &options);
        assert_eq!(off.passive, None);
        assert_eq!(off.damage_taken.get(Type::Fire), 0.5);
    }

    #[test]
    fn test_shown_stats_follow_flip_option() {
        let options = FusionOptions {
            flip: true,
            ..FusionOptions::default()
        };
        let fusion = Fusion::new(&charizard(), &swampert(), &options);
        assert_eq!(fusion.shown_stats().hp, 80.0);
        assert_eq!(fusion.stats.stats.hp, 89.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_fusion_serializes_with_named_damage_map() {
        let options = FusionOptions {
            active_ability: Some("Levitate".to_string()),
            ..FusionOptions::default()
        };
        let fusion = Fusion::new(&charizard(), &swampert(), &options);
        let json = serde_json::to_value(&fusion).unwrap();

        assert_eq!(json["primary_type"], "Fire");
        assert_eq!(json["secondary_type"], "Ground");
        assert_eq!(json["stats"]["stats"]["hp"], 89.0);
        assert_eq!(json["stats"]["total"], 534.5);
        assert_eq!(json["active_ability"], "Levitate");
        assert_eq!(json["passive"], "Beast Boost");
        assert_eq!(json["damage_taken"]["Ground"], 0.0);
        assert_eq!(json["damage_taken"]["Water"], 4.0);
        assert_eq!(json["damage_taken"].as_object().unwrap().len(), 18);
    }
}
