//! The per-outlet ingestion pipeline.
//!
//! One [`run`] processes one outlet's archive directory to completion,
//! synchronously: enumerate the HTML files, extract fields with the outlet's
//! heuristics, derive the publish date from the file name, deduplicate
//! against the store, and append the surviving records. Counters and the
//! existing-headline index are rebuilt per run; nothing is shared across runs.
//!
//! Files with markup the extractor was never written for are logged, counted,
//! and skipped — one bad file never aborts a run. Configuration problems
//! (missing directory) and store I/O problems are fatal.

use crate::models::{ArticleRecord, MissingFieldCounters, Outlet};
use crate::store::{read_headline_index, ArchiveStore};
use crate::utils::parse_publish_date;
use scraper::Html;
use std::error::Error;
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Counts reported at the end of one pipeline run.
///
/// The same numbers are also emitted as summary log lines; the struct exists
/// so callers and tests can assert on them directly.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// HTML files found in the outlet's directory.
    pub html_files: usize,
    /// Records appended to the store (0 when no store path was given).
    pub written: usize,
    /// Records skipped because the store already held the same headline for
    /// that date.
    pub duplicates: usize,
    /// Files skipped because they could not be read or their structure defeated
    /// the extractor.
    pub skipped_files: usize,
    /// Missing-field tallies accumulated by the extractor.
    pub counters: MissingFieldCounters,
}

/// Parse one outlet's archive directory, appending new records to the store.
///
/// Input files live in `data_dir/<outlet identifier>/` and are processed in
/// directory-listing order (not guaranteed sorted). When `store_path` is
/// `None` the files are still parsed and the missing-field counters reported,
/// but nothing is persisted.
///
/// # Errors
///
/// Fails fast if the outlet's input directory cannot be listed, and aborts if
/// the store cannot be read, opened, or appended to. Rows already appended
/// before a store failure remain in the file; re-running after a fix is safe
/// because deduplication skips them.
#[instrument(level = "info", skip_all, fields(%outlet))]
pub fn run(
    outlet: Outlet,
    data_dir: &Path,
    store_path: Option<&Path>,
) -> Result<RunSummary, Box<dyn Error>> {
    let mut counters = MissingFieldCounters::default();
    counters.reset();

    let files_path = data_dir.join(outlet.label());
    let mut html_files = Vec::new();
    for entry in fs::read_dir(&files_path)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(".html") {
            html_files.push(name);
        }
    }
    info!(count = html_files.len(), "Found archived articles");

    // The index and the append handle exist only when a store was requested.
    let mut sink = match store_path {
        Some(path) => {
            let index = read_headline_index(path, outlet)?;
            let store = ArchiveStore::open_append(path)?;
            Some((index, store))
        }
        None => None,
    };

    let mut summary = RunSummary {
        html_files: html_files.len(),
        ..RunSummary::default()
    };

    for file_name in &html_files {
        let raw = match fs::read(files_path.join(file_name)) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(file = %file_name, error = %e, "Unreadable input file; skipping");
                summary.skipped_files += 1;
                continue;
            }
        };
        let mut document = Html::parse_document(&String::from_utf8_lossy(&raw));

        let fields = match outlet.extract(&mut document, file_name, &mut counters) {
            Ok(fields) => fields,
            Err(e) => {
                warn!(file = %file_name, error = %e, "Unexpected page structure; skipping");
                summary.skipped_files += 1;
                continue;
            }
        };
        let publish_time = parse_publish_date(file_name);

        if let Some((index, store)) = sink.as_mut() {
            // Exact headline match only; near-duplicates with whitespace or
            // case differences count as new records.
            if index.get(&publish_time).map(String::as_str) == Some(fields.headline.as_str()) {
                debug!(file = %file_name, date = %publish_time, "Already stored; skipping duplicate");
                summary.duplicates += 1;
                continue;
            }
            store.append(&ArticleRecord {
                headline: fields.headline,
                author: fields.author,
                genre: fields.genre,
                content: fields.content,
                media: outlet.label().to_string(),
                datetime: publish_time,
            })?;
            summary.written += 1;
        }
    }

    if let Some((_, store)) = sink {
        store.close()?;
    }

    summary.counters = counters;
    info!(count = counters.title, "Articles with no title information");
    info!(count = counters.author, "Articles with no author information");
    info!(count = counters.genre, "Articles with no genre information");
    info!(count = counters.article, "Articles with no content");
    info!(
        written = summary.written,
        duplicates = summary.duplicates,
        skipped_files = summary.skipped_files,
        "Run complete"
    );

    Ok(summary)
}
