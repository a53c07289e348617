//! Creature records as loaded from the record source

use super::stats::StatBlock;

/// Primary type used when the source leaves it blank
pub const UNKNOWN_TYPE: &str = "Unknown";

/// A single creature record.
///
/// Records are immutable once loaded. Type names are kept as the source
/// spells them so that unrecognised types (e.g. "Unknown") still display.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CreatureRecord {
    /// Dex number
    pub id: u32,

    /// Display name, also the lookup key
    pub name: String,

    pub primary_type: String,

    /// Never equal to `primary_type`
    pub secondary_type: Option<String>,

    /// Base battle stats
    pub stats: StatBlock<u32>,

    /// Base stat total as given by the source
    pub bst: u32,

    /// Abilities in source order, deduplicated. The second entry is the hidden ability.
    pub abilities: Vec<String>,

    pub passive: Option<String>,

    /// Names of the other records in this creature's evolution line
    pub evolution_line: Vec<String>,
}

impl CreatureRecord {
    /// Create a record, normalizing the typing.
    ///
    /// A blank primary type becomes [`UNKNOWN_TYPE`]; a blank secondary type,
    /// or one equal to the primary, is dropped.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        primary_type: &str,
        secondary_type: Option<&str>,
        stats: StatBlock<u32>,
    ) -> Self {
        let primary = match primary_type.trim() {
            "" => UNKNOWN_TYPE.to_string(),
            t => t.to_string(),
        };
        let secondary = secondary_type
            .map(str::trim)
            .filter(|t| !t.is_empty() && *t != primary)
            .map(str::to_string);

        Self {
            id,
            name: name.into(),
            primary_type: primary,
            secondary_type: secondary,
            bst: stats.total(),
            stats,
            abilities: Vec::new(),
            passive: None,
            evolution_line: Vec::new(),
        }
    }

    /// Override the base stat total (the source carries its own column)
    pub fn with_bst(mut self, bst: u32) -> Self {
        self.bst = bst;
        self
    }

    /// Set abilities, dropping blanks and repeats while keeping source order
    pub fn with_abilities<I, S>(mut self, abilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.abilities.clear();
        for ability in abilities {
            let ability = ability.into();
            let ability = ability.trim();
            if !ability.is_empty() && !self.abilities.iter().any(|a| a == ability) {
                self.abilities.push(ability.to_string());
            }
        }
        self
    }

    pub fn with_passive(mut self, passive: Option<&str>) -> Self {
        self.passive = passive
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string);
        self
    }

    pub fn with_evolution_line<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.evolution_line = names.into_iter().map(Into::into).collect();
        self
    }

    /// Typing as text, secondary absent for mono-typed records
    pub fn typing(&self) -> (&str, Option<&str>) {
        (&self.primary_type, self.secondary_type.as_deref())
    }

    /// "Fire" or "Fire/Flying"
    pub fn type_label(&self) -> String {
        type_label(&self.primary_type, self.secondary_type.as_deref())
    }

    /// The hidden ability: the second listed ability, if any
    pub fn hidden_ability(&self) -> Option<&str> {
        self.abilities.get(1).map(String::as_str)
    }

    /// Every ability except the hidden one, in source order
    pub fn visible_abilities(&self) -> Vec<&str> {
        self.abilities
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != 1)
            .map(|(_, a)| a.as_str())
            .collect()
    }
}

/// Format a typing as "Primary" or "Primary/Secondary"
pub fn type_label(primary: &str, secondary: Option<&str>) -> String {
    match secondary {
        Some(secondary) if secondary != primary => format!("{primary}/{secondary}"),
        _ => primary.to_string(),
    }
}
