//! Generate `table.json`, which maps every finger trigram to its category.
//!
//! With `--check`, compares an existing artifact against a fresh build
//! instead of writing, and exits non-zero if they differ.

use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use trigram_table::env_config;
use trigram_table::storage::{self, OutputFormat};
use trigram_table::TrigramTable;

/// Trigram table generator
#[derive(Parser, Debug)]
#[command(name = "trigram-generate")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Output file (default: $TRIGRAM_OUTPUT or table.json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write single-line JSON instead of 4-space indented
    #[arg(long)]
    compact: bool,

    /// Verify the existing output file instead of writing it
    #[arg(long)]
    check: bool,

    /// Log the number of trigrams per category
    #[arg(short, long)]
    summary: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    env_config::init_base_path()?;
    let output = env_config::output_path(cli.output);

    let table = TrigramTable::build();

    if cli.summary {
        for (category, count) in table.category_counts() {
            info!(category = category.as_str(), count, "category");
        }
    }

    if cli.check {
        let existing = storage::load_table(&output)?;
        if let Some((key, ours, theirs)) = table.first_difference(&existing) {
            warn!(
                path = %output.display(),
                key = %key,
                expected = ?ours.map(|c| c.as_str()),
                found = ?theirs.map(|c| c.as_str()),
                "table is out of date"
            );
            bail!("{} differs from a fresh build at {}", output.display(), key);
        }
        info!(path = %output.display(), entries = existing.len(), "table is up to date");
        return Ok(());
    }

    let format = if cli.compact {
        OutputFormat::Compact
    } else {
        OutputFormat::Pretty
    };
    storage::write_table(&table, &output, format)?;
    Ok(())
}
