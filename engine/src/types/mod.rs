//! Domain types: elemental types, abilities, stats and creature records

mod ability;
mod creature;
mod pokemon_type;
mod stats;

pub use ability::{ability_summary, is_wonder_guard, normalize_ability, AbilityEffect, WONDER_GUARD};
pub use creature::{type_label, CreatureRecord, UNKNOWN_TYPE};
pub use pokemon_type::{Type, TypeRelation, TYPE_CHART};
pub use stats::{Stat, StatBlock};
