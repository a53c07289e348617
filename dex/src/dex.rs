//! Name-keyed, load-ordered collection of creature records

use std::collections::HashMap;

use fusedex_engine::{CreatureRecord, FilterQuery, Fusion, FusionOptions};

use crate::LookupError;

/// All loaded records. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct Dex {
    records: Vec<CreatureRecord>,
    index: HashMap<String, usize>,
}

impl Dex {
    /// Build from records in source order.
    ///
    /// A later record with an already-seen name replaces the earlier one but
    /// keeps its position.
    pub fn new(records: impl IntoIterator<Item = CreatureRecord>) -> Self {
        let mut dex = Self::default();
        for record in records {
            match dex.index.get(&record.name) {
                Some(&slot) => dex.records[slot] = record,
                None => {
                    dex.index.insert(record.name.clone(), dex.records.len());
                    dex.records.push(record);
                }
            }
        }
        dex
    }

    /// Look up a record by exact display name (surrounding whitespace ignored)
    pub fn get(&self, name: &str) -> Result<&CreatureRecord, LookupError> {
        let name = name.trim();
        self.index
            .get(name)
            .map(|&slot| &self.records[slot])
            .ok_or_else(|| LookupError::NotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in source order
    pub fn iter(&self) -> impl Iterator<Item = &CreatureRecord> {
        self.records.iter()
    }

    /// Records matching a parsed query, in source order
    pub fn search<'a>(
        &'a self,
        query: &'a FilterQuery,
    ) -> impl Iterator<Item = &'a CreatureRecord> + 'a {
        self.iter().filter(move |r| query.matches(r))
    }

    /// Records matching raw query text, in source order
    pub fn filter(&self, query: &str) -> Vec<&CreatureRecord> {
        let query = FilterQuery::parse(query);
        self.iter().filter(|r| query.matches(r)).collect()
    }

    /// Fuse two records by name
    pub fn fuse(
        &self,
        first: &str,
        second: &str,
        options: &FusionOptions,
    ) -> Result<Fusion, LookupError> {
        Ok(Fusion::new(self.get(first)?, self.get(second)?, options))
    }

    /// Resolve the evolution line of a record; names missing from the dex stay as errors
    pub fn evolution_line<'a>(
        &'a self,
        record: &'a CreatureRecord,
    ) -> impl Iterator<Item = Result<&'a CreatureRecord, LookupError>> + 'a {
        record.evolution_line.iter().map(move |name| self.get(name))
    }
}
