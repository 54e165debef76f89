//! CLI binary: rank a JSON array of search results read from a file or stdin.
//!
//! Ranked records go to stdout as JSON. All tracing/diagnostic output and
//! `--explain` tables go to stderr so stdout stays clean JSON.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serp::AppConfig;
use serp::pipeline::{read_candidates, run, write_explanation, write_ranked};
use serp_rank::SearchEngine;
use tracing_subscriber::EnvFilter;

/// Order search results by engine trust, then by where the query matched.
#[derive(Parser)]
#[command(name = "serp-rank", version, about)]
struct Cli {
    /// Query the results were retrieved for.
    #[arg(short, long, default_value = "")]
    query: String,

    /// JSON file holding an array of result records (stdin if omitted).
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ignore query tokens shorter than this many characters.
    #[arg(long)]
    min_token_length: Option<usize>,

    /// Treat every record as coming from this engine (e.g. `naver`).
    #[arg(short, long)]
    engine: Option<SearchEngine>,

    /// Print each record's priority and bucket to stderr.
    #[arg(long)]
    explain: bool,
}

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "serp=info,serp_rank=info";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("failed to load config")?;
    if let Some(min) = cli.min_token_length {
        config.ranker.min_token_length = min;
    }

    let records = match cli.input {
        Some(ref path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            read_candidates(BufReader::new(file))?
        }
        None => read_candidates(io::stdin().lock())?,
    };
    tracing::debug!(count = records.len(), "read candidates");

    let ranking = run(&config, &cli.query, records, cli.engine).map_err(|e| {
        tracing::error!(error = %e, "ranking failed");
        anyhow::anyhow!("serp-rank failed: {e}")
    })?;

    if cli.explain {
        write_explanation(io::stderr().lock(), &ranking)?;
    }

    let ranked = ranking.into_records();
    let mut out = BufWriter::new(io::stdout().lock());
    write_ranked(&mut out, &ranked)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_log_filter_is_info_for_both_crates() {
        assert_eq!(DEFAULT_LOG_FILTER, "serp=info,serp_rank=info");
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }
}
