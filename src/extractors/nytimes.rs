//! New York Times article extractor.
//!
//! The most regular markup of the four outlets: the headline lives in the
//! document `<title>` (suffixed with the outlet name), the author in a
//! `.byline-author` element, the section in the first link of `.story-meta`,
//! and the body in paragraphs tagged `story-body-text story-content`. This is
//! the only outlet where an article with zero body paragraphs is common enough
//! to tally.

use super::{element_text, ExtractError, ExtractedFields};
use crate::models::MissingFieldCounters;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());
static BYLINE_AUTHOR: Lazy<Selector> = Lazy::new(|| Selector::parse(".byline-author").unwrap());
static STORY_META_LINK: Lazy<Selector> = Lazy::new(|| Selector::parse(".story-meta a").unwrap());
static STORY_PARAGRAPH: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p.story-body-text.story-content").unwrap());

/// Extract headline, author, genre, and body text from a New York Times page.
pub fn extract(
    document: &Html,
    counters: &mut MissingFieldCounters,
) -> Result<ExtractedFields, ExtractError> {
    let title = element_text(&document.select(&TITLE).next().ok_or(
        ExtractError::MissingElement {
            element: "title element",
        },
    )?);
    // Keep only the part before the " - The New York Times" suffix.
    let headline = title.split('-').next().unwrap_or_default().to_string();

    let author = match document.select(&BYLINE_AUTHOR).next() {
        Some(byline) => element_text(&byline),
        None => {
            counters.author += 1;
            String::new()
        }
    };

    let genre = match document.select(&STORY_META_LINK).next() {
        Some(link) => element_text(&link),
        None => {
            counters.genre += 1;
            String::new()
        }
    };

    let paragraphs: Vec<String> = document
        .select(&STORY_PARAGRAPH)
        .map(|p| element_text(&p).trim().to_string())
        .collect();
    if paragraphs.is_empty() {
        counters.article += 1;
    }
    let content = paragraphs.join(" ");

    Ok(ExtractedFields {
        headline,
        author,
        genre,
        content,
    })
}
