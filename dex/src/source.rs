//! CSV parsing with the source's defaulting rules

use std::io::Read;
use std::path::Path;

use fusedex_engine::{CreatureRecord, StatBlock};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::{Dex, LoadError};

/// One row as it appears in the file. Every cell is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRow {
    id: Option<String>,
    name: Option<String>,
    hp: Option<String>,
    attack: Option<String>,
    defense: Option<String>,
    #[serde(rename = "spAttack")]
    sp_attack: Option<String>,
    #[serde(rename = "spDefense")]
    sp_defense: Option<String>,
    speed: Option<String>,
    bst: Option<String>,
    type1: Option<String>,
    type2: Option<String>,
    abilities: Option<String>,
    passive: Option<String>,
    #[serde(rename = "evolution line")]
    evolution_line: Option<String>,
}

impl RawRow {
    fn into_record(self) -> CreatureRecord {
        let name = match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => "Unknown".to_string(),
        };

        let number = |cell: &Option<String>, column: &str| parse_number(cell, column, &name);

        let stats = StatBlock {
            hp: number(&self.hp, "hp"),
            attack: number(&self.attack, "attack"),
            defense: number(&self.defense, "defense"),
            sp_atk: number(&self.sp_attack, "spAttack"),
            sp_def: number(&self.sp_defense, "spDefense"),
            speed: number(&self.speed, "speed"),
        };
        let id = number(&self.id, "id");
        let bst = number(&self.bst, "bst");

        let abilities = self
            .abilities
            .as_deref()
            .unwrap_or("")
            .split(", ")
            .filter(|a| !a.is_empty())
            .map(str::to_string)
            .collect::<Vec<_>>();

        let evolution_line = self
            .evolution_line
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .collect::<Vec<_>>();

        CreatureRecord::new(
            id,
            name,
            self.type1.as_deref().unwrap_or(""),
            self.type2.as_deref(),
            stats,
        )
        .with_bst(bst)
        .with_abilities(abilities)
        .with_passive(self.passive.as_deref())
        .with_evolution_line(evolution_line)
    }
}

/// Parse a numeric cell, defaulting to 0.
///
/// Cells are unsigned whole numbers, so negative (`-3`) and fractional
/// (`1.5`) values count as unparsable and also become 0.
fn parse_number(cell: &Option<String>, column: &str, record: &str) -> u32 {
    let raw = cell.as_deref().map(str::trim).unwrap_or("");
    if raw.is_empty() {
        debug!(record, column, "Missing numeric value, defaulting to 0");
        return 0;
    }
    raw.parse().unwrap_or_else(|_| {
        warn!(record, column, value = raw, "Unparsable numeric value, defaulting to 0");
        0
    })
}

/// Load records from any CSV reader with a header row
pub fn load_from_reader<R: Read>(reader: R) -> Result<Dex, LoadError> {
    let mut rows = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let mut records = Vec::new();
    for row in rows.deserialize::<RawRow>() {
        records.push(row?.into_record());
    }

    let dex = Dex::new(records);
    info!(records = dex.len(), "Loaded creature records");
    Ok(dex)
}

/// Load records from a CSV file
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Dex, LoadError> {
    let path = path.as_ref();
    info!(path = %path.display(), "Loading creature records");

    let file = std::fs::File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_reader(file)
}
