//! Queries over records: damage-taken profiles and search filters

mod filter;
mod matchup;

pub use filter::{matches_query, Comparison, FilterQuery, Predicate, StatField};
pub use matchup::{effectiveness, effectiveness_for_names, DamageGroup, DamageProfile};
