use crate::config::{RegionId, SearchConfig, DEFAULT_OUT_FILE, DEFAULT_REGIONS, TIME_RANGE_DAYS};
use crate::scraper::RedfinScraper;
use crate::spreadsheets::SoldCsv;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

mod config;
mod domain;
mod errors;
mod runner;
mod scraper;
mod spreadsheets;

#[cfg(test)]
mod tests;

/// Recently sold Redfin listings to CSV.
#[derive(Parser, Debug)]
#[command(name = "redfin_sold", version)]
struct Cli {
    /// Output CSV file (truncated on start)
    #[arg(short, long, env = "REDFIN_OUT", default_value = DEFAULT_OUT_FILE)]
    out: PathBuf,

    /// Region ids to query, in order (default: the built-in list)
    #[arg(
        short,
        long = "region",
        env = "REDFIN_REGIONS",
        value_delimiter = ','
    )]
    regions: Vec<RegionId>,

    /// Only homes sold within this many days
    #[arg(long, env = "REDFIN_SOLD_WITHIN_DAYS", default_value_t = TIME_RANGE_DAYS)]
    days: u32,

    /// Request timeout; the HTTP client default applies when unset
    #[arg(long, env = "REDFIN_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let t0 = Instant::now();

    let config = SearchConfig {
        sold_within_days: cli.days,
        timeout: cli.timeout_secs.map(Duration::from_secs),
        ..SearchConfig::default()
    };
    let regions = if cli.regions.is_empty() {
        DEFAULT_REGIONS.to_vec()
    } else {
        cli.regions
    };

    let scraper = RedfinScraper::new(config).context("building HTTP client")?;
    let mut sink = SoldCsv::create(&cli.out)
        .with_context(|| format!("creating {}", cli.out.display()))?;

    let summary = runner::run(
        &scraper,
        &regions,
        &mut sink,
        &scraper.config().listing_base_url,
    )?;
    sink.finish()
        .with_context(|| format!("closing {}", cli.out.display()))?;

    info!(
        regions = summary.regions,
        skipped = summary.skipped,
        rows = summary.rows,
        elapsed = ?t0.elapsed(),
        out = %cli.out.display(),
        "run complete"
    );
    println!("\nCompleted!");

    Ok(())
}
