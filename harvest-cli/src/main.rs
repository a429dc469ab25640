//! Harvests both apprenticeship catalogs, writes them as NDJSON and prints a
//! coverage report.
//!
//! Usage: `harvest [CONFIG.json]`. Settings can be overridden through
//! `HARVEST_BATCH_SIZE`, `HARVEST_MAX_WORKERS` and `HARVEST_OUTPUT_DIR`;
//! log verbosity follows `RUST_LOG`.

mod output;
mod report;
mod settings;

use anyhow::Context;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use harvest::prelude::*;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config_path = std::env::args_os().nth(1).map(std::path::PathBuf::from);
    let settings = settings::Settings::load(config_path.as_deref(), |key| std::env::var(key).ok())?;

    let fetcher = HttpFetcher::new(&settings.config).context("building HTTP client")?;
    let harvester = Harvester::new(
        settings.config.clone(),
        Arc::new(fetcher),
        Arc::new(ScraperExtractor::new()),
    )?;

    let outcome = harvester.run().await.context("harvest failed")?;
    let written = output::write_outcome(&settings.output_dir, &outcome)?;
    for path in &written {
        info!(path = %path.display(), "Wrote dataset");
    }

    print!("{}", report::render(&outcome.stats));
    Ok(())
}
