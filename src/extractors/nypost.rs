//! New York Post article extractor.
//!
//! Titles come from the first `h1` when it has text, falling back to the
//! document `<title>` with the outlet-name suffix stripped; either path can
//! fail and degrades to an empty title. No page in the archive exposes an
//! author. Body paragraphs are heavily filtered for navigation and legal
//! boilerplate.

use super::{element_text, has_descendant, ExtractError, ExtractedFields};
use crate::models::MissingFieldCounters;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static H1: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").unwrap());
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());
static CURRENT_CRUMB: Lazy<Selector> = Lazy::new(|| Selector::parse("li.current").unwrap());
static PARAGRAPH: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());
static LINK_OR_SPAN: Lazy<Selector> = Lazy::new(|| Selector::parse("a, span").unwrap());

/// Paragraph id used for the masthead's "site updated" timestamp.
const SITE_UPDATED_ID: &str = "site_updated";

/// Extract headline, author, genre, and body text from a New York Post page.
pub fn extract(
    document: &Html,
    counters: &mut MissingFieldCounters,
) -> Result<ExtractedFields, ExtractError> {
    // The <title> text didn't always match the on-page headline in this
    // archive, so the h1 wins whenever it has text.
    let headline = match headline_for(document) {
        Some(headline) => headline,
        None => {
            counters.title += 1;
            String::new()
        }
    };

    // No New York Post page in the archive carries author information.
    counters.author += 1;

    let genre = match document.select(&CURRENT_CRUMB).next() {
        Some(crumb) => element_text(&crumb),
        None => {
            counters.genre += 1;
            String::new()
        }
    };

    // Unclassed paragraphs only, minus the masthead timestamp, anything
    // wrapping links or spans (navigation), and legal/byline boilerplate.
    let content = document
        .select(&PARAGRAPH)
        .filter(|p| p.value().attr("class").is_none())
        .filter(|p| p.value().attr("id") != Some(SITE_UPDATED_ID))
        .filter(|p| !has_descendant(p, &LINK_OR_SPAN))
        .map(|p| element_text(&p))
        .filter(|text| !text.contains("NEW YORK POST") && !text.contains("Copyright"))
        .map(|text| text.trim().to_string())
        .collect::<Vec<_>>()
        .join(" ");

    Ok(ExtractedFields {
        headline,
        author: String::new(),
        genre,
        content,
    })
}

fn headline_for(document: &Html) -> Option<String> {
    let h1 = document.select(&H1).next()?;
    let text = element_text(&h1);
    if !text.is_empty() {
        return Some(text);
    }
    // Empty h1: take the document title up to the outlet-name suffix.
    let title = element_text(&document.select(&TITLE).next()?);
    Some(title.split('-').next().unwrap_or_default().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract_from(html: &str) -> (ExtractedFields, MissingFieldCounters) {
        let document = Html::parse_document(html);
        let mut counters = MissingFieldCounters::default();
        let fields = extract(&document, &mut counters).unwrap();
        (fields, counters)
    }

    #[test]
    fn test_h1_headline_and_breadcrumb_genre() {
        let html = r#"<html><head><title>Other Title - New York Post</title></head><body>
            <ul><li>Home</li><li class="current">Metro</li></ul>
            <h1>Subway Fares Rise</h1>
            <p>The fare went up.</p>
        </body></html>"#;
        let (fields, counters) = extract_from(html);

        assert_eq!(fields.headline, "Subway Fares Rise");
        assert_eq!(fields.genre, "Metro");
        assert_eq!(fields.content, "The fare went up.");
        assert_eq!(fields.author, "");
        assert_eq!(counters.title, 0);
        assert_eq!(counters.genre, 0);
        assert_eq!(counters.author, 1);
    }

    #[test]
    fn test_empty_h1_falls_back_to_title_prefix() {
        let html = r#"<html><head><title>Big Story - New York Post</title></head><body>
            <h1></h1><p>Body.</p>
        </body></html>"#;
        let (fields, counters) = extract_from(html);
        assert_eq!(fields.headline, "Big Story ");
        assert_eq!(counters.title, 0);
    }

    #[test]
    fn test_missing_h1_counts_missing_title() {
        let html = r#"<html><head><title>Big Story - New York Post</title></head><body>
            <p>Body.</p>
        </body></html>"#;
        let (fields, counters) = extract_from(html);
        assert_eq!(fields.headline, "");
        assert_eq!(counters.title, 1);
    }

    #[test]
    fn test_missing_breadcrumb_counts_missing_genre() {
        let html = "<html><body><h1>T</h1><p>Body.</p></body></html>";
        let (fields, counters) = extract_from(html);
        assert_eq!(fields.genre, "");
        assert_eq!(counters.genre, 1);
    }

    #[test]
    fn test_boilerplate_and_navigation_paragraphs_excluded() {
        let html = r#"<html><body><h1>T</h1>
            <p id="site_updated">Updated 9:41 AM</p>
            <p class="promo">Subscribe!</p>
            <p>Read <a href="/more">more</a> here</p>
            <p>Weather: <span>72F</span></p>
            <p>Copyright 2007 NYP Holdings, with real words too</p>
            <p>ALL RIGHTS RESERVED NEW YORK POST</p>
            <p>Actual story text.</p>
            <p>More story.</p>
        </body></html>"#;
        let (fields, _) = extract_from(html);
        assert_eq!(fields.content, "Actual story text. More story.");
    }
}
