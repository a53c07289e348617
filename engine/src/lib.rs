//! Rule engine for creature fusions.
//!
//! This crate holds the pure, side-effect-free rules behind a fusion
//! calculator. It does no I/O; records come from `fusedex-dex` or are built
//! by hand.
//!
//! # Overview
//!
//! ```text
//! fusedex-dex (record source)
//!        │
//!        ▼
//! fusedex-engine (rules) ← THIS CRATE
//!        │
//!        └─> fusedex-cli (rendering)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`Type`] - Elemental types with effectiveness chart
//! - [`AbilityEffect`] - Type-chart modifiers granted by abilities
//! - [`StatBlock`] - Six base stats, with the flip permutation
//! - [`CreatureRecord`] - A loaded creature
//!
//! ## Rules
//! - [`effectiveness`] - Damage taken from every type, abilities included
//! - [`resolve_fusion_typing`] - Combined typing of two records
//! - [`fuse_stats`] - Blended stats of two records
//! - [`FilterQuery`] - Search filter language
//! - [`Fusion`] - Everything above composed for a pair of records
//!
//! # Example Usage
//!
//! ```
//! use fusedex_engine::{effectiveness, resolve_fusion_typing, Type};
//!
//! let (primary, secondary) =
//!     resolve_fusion_typing((Type::Fire, Some(Type::Flying)), (Type::Water, Some(Type::Ground)));
//! assert_eq!((primary, secondary), (Type::Fire, Some(Type::Ground)));
//!
//! let profile = effectiveness(primary, secondary, Some("Levitate"), None);
//! assert_eq!(profile.get(Type::Ground), 0.0);
//! ```
//!
//! Every function here is pure and every static table is read-only, so all
//! of it can be shared freely across threads.

pub mod fusion;
pub mod query;
pub mod types;

// Re-export main types at crate root for convenience
pub use fusion::{
    bst_difference, fuse_stats, resolve_fusion_typing, round_tenth, FusedStats, Fusion,
    FusionOptions,
};
pub use query::{
    effectiveness, effectiveness_for_names, matches_query, DamageGroup, DamageProfile,
    FilterQuery, Predicate,
};
pub use types::{
    ability_summary, is_wonder_guard, normalize_ability, type_label, AbilityEffect,
    CreatureRecord, Stat, StatBlock, Type, TypeRelation, TYPE_CHART, UNKNOWN_TYPE, WONDER_GUARD,
};
