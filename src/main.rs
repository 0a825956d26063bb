//! # News Archive Parser
//!
//! A batch pipeline that extracts structured article records from
//! pre-downloaded HTML news archives and appends newly-seen records to a
//! durable CSV store.
//!
//! ## Features
//!
//! - Outlet-specific extraction heuristics for four archived media outlets
//!   (New York Times, New York Post, InfoWars, Time Magazine)
//! - Publish dates derived from the `YYYY_MM_DD_<suffix>.html` file names
//! - Deduplication against the store by (date, outlet) key and exact headline
//! - Per-run missing-field tallies reported in the logs
//!
//! ## Usage
//!
//! ```sh
//! news_archive_parser -d ./data -o "InfoWars" -o "New York Post" -s media_data.csv
//! ```
//!
//! ## Architecture
//!
//! Each run is a synchronous, single-threaded loop over one outlet's files:
//! 1. **Enumerate**: list the outlet's directory, keep `.html` files
//! 2. **Extract**: dispatch to the outlet's extractor for the four fields
//! 3. **Deduplicate**: skip records the store already holds for that date
//! 4. **Append**: write surviving rows to the CSV store

use chrono::Local;
use clap::Parser;
use std::error::Error;
use tracing::{debug, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod extractors;
mod models;
mod pipeline;
mod store;
mod utils;

use cli::Cli;
use models::Outlet;

#[instrument]
fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!(session = %Local::now(), "news_archive_parser starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.data_dir, ?args.outlets, ?args.store, "Parsed CLI arguments");

    // Resolve every outlet identifier up front: an unknown identifier is a
    // configuration error and no file should be processed.
    let outlets = args
        .outlets
        .iter()
        .map(|name| name.parse::<Outlet>())
        .collect::<Result<Vec<_>, _>>()?;

    for outlet in outlets {
        let summary = pipeline::run(outlet, &args.data_dir, args.store.as_deref())?;
        info!(
            %outlet,
            files = summary.html_files,
            written = summary.written,
            duplicates = summary.duplicates,
            skipped_files = summary.skipped_files,
            "Outlet processed"
        );
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
