//! Command-line interface definitions for the archive parser.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! The invocation surface is deliberately small: a data directory, one or more
//! outlet identifiers, and an optional store path. The outlet→extractor
//! mapping itself is a closed internal table and not configurable.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the news archive parser.
///
/// Each `--outlet` value must be one of the known outlet identifiers
/// (`New York Times`, `New York Post`, `InfoWars`, `Time Magazine`); unknown
/// identifiers abort the program before any file is processed.
///
/// # Examples
///
/// ```sh
/// # Parse one outlet, counters only (nothing persisted)
/// news_archive_parser --outlet "Time Magazine"
///
/// # Parse two outlets into the shared store
/// news_archive_parser -o "InfoWars" -o "New York Post" -s media_data.csv
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Root directory holding one subdirectory of HTML files per outlet
    #[arg(short, long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Outlet identifier to process (repeatable; processed in order)
    #[arg(short, long = "outlet", required = true)]
    pub outlets: Vec<String>,

    /// CSV store to append accepted records to (created on first use)
    #[arg(short, long)]
    pub store: Option<PathBuf>,
}
