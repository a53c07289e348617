//! CLI runtime configuration and loaders.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Default location of the record source, relative to the working directory
pub const DEFAULT_DATA_PATH: &str = "pokemon_data.csv";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    /// CSV file holding the creature records
    pub data_path: PathBuf,

    /// Show stats through the flip permutation unless told otherwise
    pub flip: bool,

    /// Maximum number of search results to print
    pub search_limit: Option<usize>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            flip: false,
            search_limit: None,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `FUSEDEX_DATA`
    /// - `FUSEDEX_FLIP`
    /// - `FUSEDEX_LIMIT`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup("FUSEDEX_DATA").filter(|p| !p.trim().is_empty()) {
            config.data_path = PathBuf::from(path);
        }

        if let Some(flip) = read::<bool>(&lookup, "FUSEDEX_FLIP") {
            config.flip = flip;
        }

        if let Some(limit) = read::<usize>(&lookup, "FUSEDEX_LIMIT") {
            config.search_limit = Some(limit.max(1));
        }

        config
    }
}

fn read<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let value = lookup(key)?;
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            tracing::warn!(key, value = %value, "Ignoring unparsable environment variable");
            None
        }
    }
}
