//! Subcommand implementations

use std::process::ExitCode;

use anyhow::{Context, Result};
use fusedex_dex::{Dex, LookupError};
use fusedex_engine::{effectiveness_for_names, FilterQuery, FusionOptions};

use crate::render;

/// Print a lookup miss in place of the panel
fn not_found(err: &LookupError) -> ExitCode {
    tracing::warn!(error = %err, "Lookup failed");
    println!("{err}.");
    ExitCode::FAILURE
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{text}");
    Ok(())
}

pub fn show(dex: &Dex, name: &str, flip: bool, json: bool) -> Result<ExitCode> {
    let record = match dex.get(name) {
        Ok(record) => record,
        Err(err) => return Ok(not_found(&err)),
    };

    if json {
        print_json(record)?;
    } else {
        print!("{}", render::RecordPanel { dex, record, flip });
    }
    Ok(ExitCode::SUCCESS)
}

pub fn fuse(
    dex: &Dex,
    first: &str,
    second: &str,
    options: &FusionOptions,
    json: bool,
) -> Result<ExitCode> {
    let fusion = match dex.fuse(first, second, options) {
        Ok(fusion) => fusion,
        Err(err) => return Ok(not_found(&err)),
    };

    if json {
        print_json(&fusion)?;
    } else {
        print!("{}", render::FusionPanel(&fusion));
    }
    Ok(ExitCode::SUCCESS)
}

pub fn search(dex: &Dex, query: &str, limit: Option<usize>) -> Result<ExitCode> {
    let query = FilterQuery::parse(query);
    tracing::debug!(tokens = query.predicates().len(), "Searching");
    let results = render::SearchResults {
        records: dex.search(&query).collect(),
        limit,
    };
    print!("{results}");
    Ok(ExitCode::SUCCESS)
}

pub fn types(
    primary: &str,
    secondary: Option<&str>,
    active: Option<&str>,
    passive: Option<&str>,
    json: bool,
) -> Result<ExitCode> {
    let profile = effectiveness_for_names(primary, secondary, active, passive);
    if json {
        print_json(&profile)?;
    } else {
        println!("Damage Taken:");
        println!();
        print!("{}", render::DamageTaken(&profile));
    }
    Ok(ExitCode::SUCCESS)
}

pub fn filters() -> Result<ExitCode> {
    print!("{}", render::FILTER_HELP);
    Ok(ExitCode::SUCCESS)
}
