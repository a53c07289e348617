//! Search filter language for narrowing a set of records
//!
//! A query is split on whitespace; a record matches when every token does.
//!
//! ```text
//! name:char        name contains "char"
//! type:fire        either type is exactly "fire"
//! ability:blaze    any ability contains "blaze"
//! passive:guard    passive contains "guard"
//! id:7  #:7        dex number starts with "7"
//! speed>=100       numeric comparison (hp, attack, defense, sp.atk, sp.def, speed, bst)
//! 25  #25          dex number is exactly 25
//! flying           name, type, ability or passive contains "flying"
//! ```
//!
//! Malformed tokens simply fail to match.

use crate::types::{CreatureRecord, Stat};

/// Numeric field a comparator can target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatField {
    Stat(Stat),
    Bst,
}

impl StatField {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "hp" => Some(Self::Stat(Stat::Hp)),
            "attack" => Some(Self::Stat(Stat::Attack)),
            "defense" => Some(Self::Stat(Stat::Defense)),
            "sp. atk" | "sp.atk" | "spatk" => Some(Self::Stat(Stat::SpAtk)),
            "sp. def" | "sp.def" | "spdef" => Some(Self::Stat(Stat::SpDef)),
            "speed" => Some(Self::Stat(Stat::Speed)),
            "bst" => Some(Self::Bst),
            _ => None,
        }
    }

    fn value(self, record: &CreatureRecord) -> f64 {
        match self {
            Self::Stat(stat) => f64::from(record.stats.get(stat)),
            Self::Bst => f64::from(record.bst),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
}

impl Comparison {
    fn holds(self, left: f64, right: f64) -> bool {
        match self {
            Self::Lt => left < right,
            Self::Le => left <= right,
            Self::Gt => left > right,
            Self::Ge => left >= right,
            Self::Eq => left == right,
        }
    }
}

/// A single parsed query token
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Name(String),
    Type(String),
    Ability(String),
    Passive(String),
    IdPrefix(String),
    Compare {
        field: StatField,
        op: Comparison,
        value: f64,
    },
    Id(u32),
    Text(String),
    /// Unknown key, unknown stat, or unparsable number
    Never,
}

impl Predicate {
    /// Interpret one lower-cased token
    pub fn parse(token: &str) -> Self {
        if let Some((key, value)) = token.split_once(':') {
            return Self::parse_keyed(key, value.trim());
        }

        if let Some(predicate) = Self::parse_comparison(token) {
            return predicate;
        }

        let id_term = token.trim_start_matches('#');
        if !id_term.is_empty() && id_term.bytes().all(|b| b.is_ascii_digit()) {
            // Too many digits for any dex number
            return id_term.parse().map(Self::Id).unwrap_or(Self::Never);
        }

        Self::Text(token.to_string())
    }

    fn parse_keyed(key: &str, value: &str) -> Self {
        let value = value.to_string();
        match key {
            "name" => Self::Name(value),
            "type" => Self::Type(value),
            "ability" => Self::Ability(value),
            "passive" => Self::Passive(value),
            "id" | "#" => Self::IdPrefix(value),
            _ => Self::Never,
        }
    }

    /// `<stat><op><number>`; `None` when the token holds no operator
    fn parse_comparison(token: &str) -> Option<Self> {
        let start = token.find(['<', '>', '='])?;
        let (keyword, rest) = token.split_at(start);

        let (op, number) = if let Some(n) = rest.strip_prefix("<=") {
            (Comparison::Le, n)
        } else if let Some(n) = rest.strip_prefix(">=") {
            (Comparison::Ge, n)
        } else if let Some(n) = rest.strip_prefix("==") {
            (Comparison::Eq, n)
        } else if let Some(n) = rest.strip_prefix('<') {
            (Comparison::Lt, n)
        } else if let Some(n) = rest.strip_prefix('>') {
            (Comparison::Gt, n)
        } else if let Some(n) = rest.strip_prefix('=') {
            (Comparison::Eq, n)
        } else {
            return Some(Self::Never);
        };

        let field = StatField::from_keyword(keyword.trim());
        let value = number.trim().parse::<f64>().ok().filter(|v| v.is_finite());

        Some(match (field, value) {
            (Some(field), Some(value)) => Self::Compare { field, op, value },
            _ => Self::Never,
        })
    }

    /// Test this predicate against a record
    pub fn matches(&self, record: &CreatureRecord) -> bool {
        match self {
            Self::Name(term) => contains(&record.name, term),
            Self::Type(term) => {
                record.primary_type.to_lowercase() == *term
                    || record.secondary_type.as_deref().unwrap_or("").to_lowercase() == *term
            }
            Self::Ability(term) => record.abilities.iter().any(|a| contains(a, term)),
            Self::Passive(term) => contains(record.passive.as_deref().unwrap_or(""), term),
            Self::IdPrefix(digits) => record.id.to_string().starts_with(digits.as_str()),
            Self::Compare { field, op, value } => op.holds(field.value(record), *value),
            Self::Id(id) => record.id == *id,
            Self::Text(term) => {
                contains(&record.name, term)
                    || contains(&record.primary_type, term)
                    || record
                        .secondary_type
                        .as_deref()
                        .is_some_and(|t| contains(t, term))
                    || record.abilities.iter().any(|a| contains(a, term))
                    || record.passive.as_deref().is_some_and(|p| contains(p, term))
            }
            Self::Never => false,
        }
    }
}

/// A parsed search query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterQuery {
    predicates: Vec<Predicate>,
}

impl FilterQuery {
    /// Parse raw user input (case-insensitive)
    pub fn parse(query: &str) -> Self {
        let lowered = query.to_lowercase();
        Self {
            predicates: lowered.split_whitespace().map(Predicate::parse).collect(),
        }
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// An empty query matches every record
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Whether every token matches the record
    pub fn matches(&self, record: &CreatureRecord) -> bool {
        self.predicates.iter().all(|p| p.matches(record))
    }
}

/// Parse `query` and test it against one record
pub fn matches_query(query: &str, record: &CreatureRecord) -> bool {
    FilterQuery::parse(query).matches(record)
}

/// `term` must already be lower-case
fn contains(haystack: &str, term: &str) -> bool {
    haystack.to_lowercase().contains(term)
}
