//! Outlet-specific article extractors.
//!
//! Each archived outlet marks up its pages differently, so every outlet gets
//! its own submodule encoding its structural heuristics. All extractors share
//! one contract: given a parsed document, return the four semantic fields
//! ([`ExtractedFields`]), substituting an empty string and bumping the matching
//! [`MissingFieldCounters`] counter for any *optional* field that cannot be
//! located. Only an entirely absent required container is an error.
//!
//! # Supported Outlets
//!
//! | Outlet | Module | Title source | Known gaps |
//! |--------|--------|--------------|------------|
//! | Time Magazine | [`time_magazine`] | class-candidate container, id fallback | no genre |
//! | InfoWars | [`infowars`] | `<title>` element | no author, no genre |
//! | New York Post | [`nypost`] | `<h1>`, `<title>` fallback | no author |
//! | New York Times | [`nytimes`] | `<title>`, outlet suffix stripped | — |
//!
//! Dispatch is a closed match over [`Outlet`]; unknown identifiers never get
//! this far (they are rejected when the identifier string is parsed).

use crate::models::{MissingFieldCounters, Outlet};
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

pub mod infowars;
pub mod nypost;
pub mod nytimes;
pub mod time_magazine;

/// The four semantic fields pulled out of one article file.
///
/// `author`, `genre` and `content` may be empty; `headline` is non-empty for
/// every extractor except New York Post, which degrades to an empty title
/// rather than failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFields {
    pub headline: String,
    pub author: String,
    pub genre: String,
    pub content: String,
}

/// Structural failures an extractor cannot recover from.
///
/// These cover markup the heuristics were never written for — a missing
/// article wrapper, a byline that doesn't follow the outlet's convention.
/// The pipeline catches them per file, logs, and moves on; they never abort
/// a whole run.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A required container or element is entirely absent from the document.
    #[error("required element `{element}` not found")]
    MissingElement {
        /// Description of the element the heuristic looked for.
        element: &'static str,
    },
    /// A byline was found but does not contain a `by`/`By` author marker.
    #[error("byline {byline:?} has no author signal token")]
    MalformedByline {
        /// The offending byline text.
        byline: String,
    },
}

impl Outlet {
    /// Run this outlet's extraction heuristics over a parsed document.
    ///
    /// `file_name` participates in extraction for outlets carrying per-file
    /// structural exceptions (currently only InfoWars).
    pub fn extract(
        &self,
        document: &mut Html,
        file_name: &str,
        counters: &mut MissingFieldCounters,
    ) -> Result<ExtractedFields, ExtractError> {
        match self {
            Outlet::NewYorkTimes => nytimes::extract(document, counters),
            Outlet::NewYorkPost => nypost::extract(document, counters),
            Outlet::InfoWars => infowars::extract(document, file_name, counters),
            Outlet::TimeMagazine => time_magazine::extract(document, counters),
        }
    }
}

/// Concatenated text of every text node under `element`, in document order.
///
/// Equivalent to the DOM's `textContent` — no separators are inserted between
/// adjacent text nodes.
pub(crate) fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect()
}

/// Whether `element` has at least one descendant matching `selector`.
pub(crate) fn has_descendant(element: &ElementRef<'_>, selector: &Selector) -> bool {
    element.select(selector).next().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;

    static SPAN: Lazy<Selector> = Lazy::new(|| Selector::parse("span").unwrap());

    #[test]
    fn test_element_text_concatenates_without_separator() {
        let document = Html::parse_fragment("<p>Hello <b>bold</b> world</p>");
        let p = document
            .select(&Selector::parse("p").unwrap())
            .next()
            .unwrap();
        assert_eq!(element_text(&p), "Hello bold world");
    }

    #[test]
    fn test_has_descendant() {
        let document = Html::parse_fragment("<div><p><span>x</span></p></div>");
        let div = document
            .select(&Selector::parse("div").unwrap())
            .next()
            .unwrap();
        let p = document
            .select(&Selector::parse("p").unwrap())
            .next()
            .unwrap();
        assert!(has_descendant(&div, &SPAN));
        assert!(has_descendant(&p, &SPAN));
    }

    #[test]
    fn test_dispatch_uses_outlet_specific_rules() {
        // A document only the New York Times extractor understands.
        let html = r#"<html><head><title>Big News - The New York Times</title></head>
            <body><p class="story-body-text story-content">Text.</p></body></html>"#;
        let mut document = Html::parse_document(html);
        let mut counters = MissingFieldCounters::default();
        let fields = Outlet::NewYorkTimes
            .extract(&mut document, "2010_01_02_nyt.html", &mut counters)
            .unwrap();
        assert_eq!(fields.headline, "Big News ");
        assert_eq!(fields.content, "Text.");
    }
}
