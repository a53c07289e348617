//! `fusedex`: look up, fuse and search creature records from the terminal.
mod commands;
mod config;
mod render;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fusedex_dex::Dex;
use fusedex_engine::FusionOptions;
use tracing_subscriber::EnvFilter;

use config::CliConfig;

#[derive(Parser)]
#[command(version, about = "Fusion calculator: look up, fuse and search creature records")]
struct Cli {
    /// CSV record source (defaults to $FUSEDEX_DATA or ./pokemon_data.csv)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a single record
    Show {
        name: String,
        /// Flip stat challenge: swap HP/Speed, Attack/Sp. Def, Defense/Sp. Atk
        #[arg(long)]
        flip: bool,
        #[arg(long)]
        json: bool,
    },
    /// Fuse two records
    Fuse {
        first: String,
        second: String,
        /// Ability of the second record to treat as active
        #[arg(short, long)]
        active: Option<String>,
        /// Ignore the first record's passive
        #[arg(long)]
        no_passive: bool,
        #[arg(long)]
        flip: bool,
        #[arg(long)]
        json: bool,
    },
    /// Filter records (see `fusedex filters`)
    Search {
        query: Vec<String>,
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Damage taken by a typing, with optional abilities
    Types {
        primary: String,
        secondary: Option<String>,
        #[arg(long)]
        active: Option<String>,
        #[arg(long)]
        passive: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Explain the search filter syntax
    Filters,
}

/// `info` unless the directives say otherwise
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .parse_lossy(directives)
}

fn load(path: &Path) -> Result<Dex> {
    let dex = fusedex_dex::load_from_path(path)
        .with_context(|| format!("Failed to load records from {}", path.display()))?;
    if dex.is_empty() {
        tracing::warn!(path = %path.display(), "Record source has no rows");
    }
    Ok(dex)
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&std::env::var("RUST_LOG").unwrap_or_default()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig::from_env();
    let data_path = cli.data.unwrap_or(config.data_path);

    match cli.command {
        Commands::Show { name, flip, json } => {
            let dex = load(&data_path)?;
            commands::show(&dex, &name, flip || config.flip, json)
        }
        Commands::Fuse {
            first,
            second,
            active,
            no_passive,
            flip,
            json,
        } => {
            let dex = load(&data_path)?;
            let options = FusionOptions {
                active_ability: active,
                passive_enabled: !no_passive,
                flip: flip || config.flip,
            };
            commands::fuse(&dex, &first, &second, &options, json)
        }
        Commands::Search { query, limit } => {
            let dex = load(&data_path)?;
            commands::search(&dex, &query.join(" "), limit.or(config.search_limit))
        }
        Commands::Types {
            primary,
            secondary,
            active,
            passive,
            json,
        } => commands::types(
            &primary,
            secondary.as_deref(),
            active.as_deref(),
            passive.as_deref(),
            json,
        ),
        Commands::Filters => commands::filters(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_log_filter_defaults_to_info() {
        assert_eq!(log_filter("").max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_log_filter_plain_level_overrides_default() {
        assert_eq!(log_filter("debug").max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter("warn").max_level_hint(), Some(LevelFilter::WARN));
    }
}
