//! The durable CSV store for extracted article records.
//!
//! The store is an append-only, UTF-8, comma-delimited file with a fixed
//! header row (`headline,author,genre,content,media,datetime`). The header
//! names and order are a compatibility contract for downstream consumers.
//!
//! # Append vs Replace
//!
//! The store is opened in append mode so repeated runs accumulate history;
//! the header row is written exactly once, when the file is first created.
//! Deduplication against prior runs uses the existing-headline index loaded
//! by [`read_headline_index`].

use crate::models::{ArticleRecord, Outlet};
use std::collections::HashMap;
use std::error::Error;
use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, instrument};

/// The store's header row, in contract order.
pub const FIELD_NAMES: [&str; 6] = [
    "headline", "author", "genre", "content", "media", "datetime",
];

/// Load the existing-headline index for one outlet from the store.
///
/// Maps `datetime` → `headline` for every stored row whose `media` field
/// equals the outlet's identifier. When several rows share a date, the last
/// row read wins. A store file that does not exist yet simply yields an
/// empty index; any other read error is fatal.
#[instrument(level = "info", skip_all, fields(path = %path.display(), %outlet))]
pub fn read_headline_index(
    path: &Path,
    outlet: Outlet,
) -> Result<HashMap<String, String>, Box<dyn Error>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("Store file not created yet; starting with an empty index");
            return Ok(HashMap::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut reader = csv::Reader::from_reader(file);
    let mut index = HashMap::new();
    for row in reader.deserialize::<ArticleRecord>() {
        let record = row?;
        if record.media == outlet.label() {
            index.insert(record.datetime, record.headline);
        }
    }
    info!(entries = index.len(), "Loaded existing-headline index");
    Ok(index)
}

/// An open, append-mode handle on the store file.
///
/// Held for the duration of one pipeline run. Dropping the handle flushes
/// buffered rows as well, so rows written before an error path are not lost;
/// [`close`](ArchiveStore::close) flushes explicitly so write errors surface.
pub struct ArchiveStore {
    writer: csv::Writer<File>,
}

impl ArchiveStore {
    /// Open the store for appending, writing the header row first if the
    /// file did not previously exist.
    #[instrument(level = "info", skip_all, fields(path = %path.display()))]
    pub fn open_append(path: &Path) -> Result<Self, Box<dyn Error>> {
        let existed = path.exists();
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if !existed {
            writer.write_record(FIELD_NAMES)?;
            info!("Created store file and wrote header row");
        }
        Ok(ArchiveStore { writer })
    }

    /// Append one record as a single data row.
    pub fn append(&mut self, record: &ArticleRecord) -> Result<(), Box<dyn Error>> {
        self.writer.serialize(record)?;
        Ok(())
    }

    /// Flush and release the store handle.
    pub fn close(mut self) -> Result<(), Box<dyn Error>> {
        self.writer.flush()?;
        Ok(())
    }
}
