//! Data models for archived news articles and per-run bookkeeping.
//!
//! This module defines the core data structures used throughout the application:
//! - [`ArticleRecord`]: One extracted article, shaped exactly like a store row
//! - [`Outlet`]: The closed set of supported media outlets
//! - [`MissingFieldCounters`]: Per-run tallies of fields the extractors could
//!   not locate
//!
//! The field order of [`ArticleRecord`] is a compatibility contract with
//! downstream consumers of the CSV store and must not be reordered.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single extracted article, ready to be appended to the store.
///
/// Field declaration order matches the store's header row
/// (`headline,author,genre,content,media,datetime`) — the `csv` serializer
/// emits fields in declaration order, so reordering these fields would break
/// every existing store file.
///
/// Records are constructed once per input file and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// The article title.
    pub headline: String,
    /// The article author, lowercased where parsed from a byline. Possibly empty.
    pub author: String,
    /// The article category/section. Possibly empty.
    pub genre: String,
    /// The concatenated article body text. Possibly empty.
    pub content: String,
    /// The outlet identifier, e.g. `"InfoWars"`.
    pub media: String,
    /// Publication date derived from the file name, normalized as `YYYY-MM-DD`.
    pub datetime: String,
}

/// The closed set of media outlets with bespoke extraction rules.
///
/// The outlet's [`label`](Outlet::label) doubles as the name of its input
/// subdirectory under the data directory and as the persisted `media` field.
/// Unknown identifiers are rejected up front by [`FromStr`] — an unknown
/// outlet is a configuration error, never a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outlet {
    NewYorkTimes,
    NewYorkPost,
    InfoWars,
    TimeMagazine,
}

impl Outlet {
    /// Every supported outlet, in no particular order.
    pub const ALL: [Outlet; 4] = [
        Outlet::NewYorkTimes,
        Outlet::NewYorkPost,
        Outlet::InfoWars,
        Outlet::TimeMagazine,
    ];

    /// The canonical outlet identifier, used as directory name and `media` value.
    pub fn label(&self) -> &'static str {
        match self {
            Outlet::NewYorkTimes => "New York Times",
            Outlet::NewYorkPost => "New York Post",
            Outlet::InfoWars => "InfoWars",
            Outlet::TimeMagazine => "Time Magazine",
        }
    }
}

impl fmt::Display for Outlet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Outlet {
    type Err = UnknownOutlet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Outlet::ALL
            .into_iter()
            .find(|outlet| outlet.label() == s)
            .ok_or_else(|| UnknownOutlet(s.to_string()))
    }
}

/// Error returned when an outlet identifier is not in the supported set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOutlet(pub String);

impl fmt::Display for UnknownOutlet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known = Outlet::ALL.map(|o| o.label()).join(", ");
        write!(f, "unknown outlet `{}` (known outlets: {})", self.0, known)
    }
}

impl std::error::Error for UnknownOutlet {}

/// Per-run tallies of how many files lacked each optional field.
///
/// One instance is owned by each pipeline invocation, reset at run start,
/// incremented by the extractors, and reported in the end-of-run summary.
/// Never persisted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MissingFieldCounters {
    /// Files where no title could be located.
    pub title: u32,
    /// Files where no author could be located.
    pub author: u32,
    /// Files where no genre/category could be located.
    pub genre: u32,
    /// Files where no body paragraphs could be located.
    pub article: u32,
}

impl MissingFieldCounters {
    /// Zero all counters. Called at the start of every run.
    pub fn reset(&mut self) {
        *self = MissingFieldCounters::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outlet_from_label_roundtrip() {
        for outlet in Outlet::ALL {
            assert_eq!(outlet.label().parse::<Outlet>().unwrap(), outlet);
        }
    }

    #[test]
    fn test_unknown_outlet_rejected() {
        let err = "Daily Planet".parse::<Outlet>().unwrap_err();
        assert_eq!(err.0, "Daily Planet");
        let msg = err.to_string();
        assert!(msg.contains("Daily Planet"));
        assert!(msg.contains("InfoWars"));
    }

    #[test]
    fn test_outlet_display_matches_label() {
        assert_eq!(Outlet::TimeMagazine.to_string(), "Time Magazine");
    }

    #[test]
    fn test_counters_reset() {
        let mut counters = MissingFieldCounters {
            title: 1,
            author: 2,
            genre: 3,
            article: 4,
        };
        counters.reset();
        assert_eq!(counters, MissingFieldCounters::default());
    }

    #[test]
    fn test_record_serializes_in_store_field_order() {
        let record = ArticleRecord {
            headline: "Headline".to_string(),
            author: "jane doe".to_string(),
            genre: "Metro".to_string(),
            content: "Body.".to_string(),
            media: "New York Post".to_string(),
            datetime: "2007-03-14".to_string(),
        };

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(&record).unwrap();
        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        let mut lines = out.lines();
        assert_eq!(
            lines.next().unwrap(),
            "headline,author,genre,content,media,datetime"
        );
        assert_eq!(
            lines.next().unwrap(),
            "Headline,jane doe,Metro,Body.,New York Post,2007-03-14"
        );
    }
}
