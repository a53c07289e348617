//! Creature record source for fusedex.
//!
//! Loads the tabular creature data (CSV) into an immutable [`Dex`] keyed by
//! display name. Bad numeric cells and unknown types are data defects, not
//! errors: they are logged and defaulted. Only an unreadable source fails.

use std::path::PathBuf;

use thiserror::Error;

mod dex;
mod source;

pub use dex::Dex;
pub use source::{load_from_path, load_from_reader};

/// Failure to read the record source at all
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to open record source {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record source: {0}")]
    Csv(#[from] csv::Error),
}

/// A name that is not in the dex
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("'{0}' was not found in the data")]
    NotFound(String),
}
