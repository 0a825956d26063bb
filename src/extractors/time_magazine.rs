//! Time Magazine article extractor.
//!
//! The archive spans several site redesigns, so containers are located by a
//! list of class candidates with an element-id fallback for the oldest pages.
//! Newer layouts put the title in an `h1` alongside a `.byline` element, which
//! is the only place this outlet exposes an author. Genre is never available.

use super::{element_text, ExtractError, ExtractedFields};
use crate::models::MissingFieldCounters;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

static TITLE_CONTAINER: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".artHd, .entry_title, .entryTitle, .entry-title").unwrap());
static ARTICLE_CONTAINER: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(".artTxt, .entry_wrapper, .entryBody, .articleContent, .entry-content").unwrap()
});
static TITLE_FALLBACK: Lazy<Selector> = Lazy::new(|| Selector::parse("#articleWrap").unwrap());
static ARTICLE_FALLBACK: Lazy<Selector> = Lazy::new(|| Selector::parse("#articleCopy").unwrap());
static H1: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").unwrap());
static BYLINE: Lazy<Selector> = Lazy::new(|| Selector::parse(".byline").unwrap());
static PARAGRAPH: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());

static BYLINE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\n\t]").unwrap());

/// Extract headline, author, genre, and body text from a Time Magazine page.
pub fn extract(
    document: &Html,
    counters: &mut MissingFieldCounters,
) -> Result<ExtractedFields, ExtractError> {
    // Class candidates first; the oldest layout only tags containers by id.
    let (title_container, article_container) = match document.select(&TITLE_CONTAINER).next() {
        Some(title) => (title, document.select(&ARTICLE_CONTAINER).next()),
        None => (
            document
                .select(&TITLE_FALLBACK)
                .next()
                .ok_or(ExtractError::MissingElement {
                    element: "title container",
                })?,
            document.select(&ARTICLE_FALLBACK).next(),
        ),
    };
    let article_container = article_container.ok_or(ExtractError::MissingElement {
        element: "article container",
    })?;

    // When the title sits in an h1, the container also carries a byline.
    let (headline, byline) = match title_container.select(&H1).next() {
        Some(h1) => {
            let byline_element =
                title_container
                    .select(&BYLINE)
                    .next()
                    .ok_or(ExtractError::MissingElement {
                        element: "byline in title container",
                    })?;
            let byline = BYLINE_WHITESPACE
                .replace_all(&element_text(&byline_element), "")
                .into_owned();
            (element_text(&h1), Some(byline))
        }
        None => (element_text(&title_container), None),
    };

    let author = match byline {
        Some(byline) => author_from_byline(&byline)?,
        None => {
            counters.author += 1;
            String::new()
        }
    };

    // Time Magazine pages carry no genre marker at all.
    counters.genre += 1;

    let content = article_container
        .select(&PARAGRAPH)
        .map(|p| element_text(&p).trim().to_string())
        .collect::<Vec<_>>()
        .join(" ");

    Ok(ExtractedFields {
        headline,
        author,
        genre: String::new(),
        content,
    })
}

/// Pull the author name out of a byline like `"By John Doe | Tuesday ..."`.
///
/// Finds the `by`/`By` signal token, skips any empty tokens caused by
/// irregular spacing, and takes the next one or two tokens as the name,
/// lowercased. A byline without a signal token is outside this outlet's
/// convention and rejected as malformed.
fn author_from_byline(byline: &str) -> Result<String, ExtractError> {
    let words: Vec<&str> = byline.split(' ').collect();
    let mut pos = words
        .iter()
        .position(|word| *word == "by" || *word == "By")
        .ok_or_else(|| ExtractError::MalformedByline {
            byline: byline.to_string(),
        })?;

    // Irregular spacing leaves empty tokens between the signal word and the name.
    while words.get(pos + 1).is_some_and(|word| word.is_empty()) {
        pos += 1;
    }
    if pos + 1 >= words.len() {
        return Err(ExtractError::MalformedByline {
            byline: byline.to_string(),
        });
    }

    let end = (pos + 3).min(words.len());
    Ok(words[pos + 1..end].join(" ").to_lowercase())
}
