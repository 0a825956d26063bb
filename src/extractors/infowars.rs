//! InfoWars article extractor.
//!
//! These pages embed reader comments directly in the document, so a
//! destructive pre-pass detaches the known comment substructures before any
//! text is collected. The body container moved between layouts; one historical
//! file predates the convention change entirely and is located through an
//! explicit per-file exception rather than the general rule.

use super::{element_text, has_descendant, ExtractError, ExtractedFields};
use crate::models::MissingFieldCounters;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

/// Files whose markup predates the body-container convention change.
///
/// Technical debt: these are located by a structural predicate (a container
/// whose second child is a `span`) instead of the class-candidate rule. Keyed
/// by exact file name so the exception can never generalize silently.
const LEGACY_SPAN_LAYOUT_FILES: [&str; 1] = ["2007_03_14_IW.html"];

static COMMENT_CRUFT: Lazy<Selector> =
    Lazy::new(|| Selector::parse("ol.commentlist, form#commentform, div#respond").unwrap());
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());
static BODY_CANDIDATES: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(
        "td.subheadline_body, div.subheadline_body, td.text, div.text, td.subarticle, div.subarticle",
    )
    .unwrap()
});
static ARTICLE: Lazy<Selector> = Lazy::new(|| Selector::parse("article").unwrap());
static PARAGRAPH: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());
static INPUT_OR_SCRIPT: Lazy<Selector> = Lazy::new(|| Selector::parse("input, script").unwrap());

/// Extract headline, author, genre, and body text from an InfoWars page.
///
/// `file_name` is consulted against the legacy-layout exception table.
pub fn extract(
    document: &mut Html,
    file_name: &str,
    counters: &mut MissingFieldCounters,
) -> Result<ExtractedFields, ExtractError> {
    strip_comment_cruft(document);

    let headline = element_text(&document.select(&TITLE).next().ok_or(
        ExtractError::MissingElement {
            element: "title element",
        },
    )?);

    let container = if LEGACY_SPAN_LAYOUT_FILES.contains(&file_name) {
        document
            .select(&BODY_CANDIDATES)
            .find(has_span_second_child)
    } else {
        document.select(&BODY_CANDIDATES).next()
    }
    .ok_or(ExtractError::MissingElement {
        element: "article container",
    })?;

    // The `text` container is an outer wrapper; the copy lives in a nested
    // article element.
    let first_class = container
        .value()
        .attr("class")
        .and_then(|classes| classes.split_whitespace().next());
    let container = if first_class == Some("text") {
        container
            .select(&ARTICLE)
            .next()
            .ok_or(ExtractError::MissingElement {
                element: "article element inside text container",
            })?
    } else {
        container
    };

    // TODO: recover the author from the byline embedded in the article body text.
    counters.author += 1;
    counters.genre += 1;

    // Keep only paragraphs that carry actual copy: unclassed, free of form or
    // script machinery, and starting with plain text rather than a wrapper.
    let content = container
        .select(&PARAGRAPH)
        .filter(|p| p.value().attr("class").is_none())
        .filter(|p| !has_descendant(p, &INPUT_OR_SCRIPT))
        .filter(|p| {
            p.children()
                .next()
                .is_some_and(|node| node.value().is_text())
        })
        .map(|p| element_text(&p).trim().to_string())
        .collect::<Vec<_>>()
        .concat();

    Ok(ExtractedFields {
        headline,
        author: String::new(),
        genre: String::new(),
        content,
    })
}

/// Detach comment lists, comment forms, and the reply widget so their text
/// can never leak into the article body.
fn strip_comment_cruft(document: &mut Html) {
    let cruft: Vec<_> = document.select(&COMMENT_CRUFT).map(|el| el.id()).collect();
    for id in cruft {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
}

/// Locator predicate for the legacy layout: the body container is the
/// candidate whose second child node is a `span` element.
fn has_span_second_child(element: &ElementRef<'_>) -> bool {
    element
        .children()
        .nth(1)
        .and_then(|node| node.value().as_element())
        .is_some_and(|element| element.name() == "span")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract_from(html: &str, file_name: &str) -> (ExtractedFields, MissingFieldCounters) {
        let mut document = Html::parse_document(html);
        let mut counters = MissingFieldCounters::default();
        let fields = extract(&mut document, file_name, &mut counters).unwrap();
        (fields, counters)
    }

    #[test]
    fn test_standard_layout() {
        let html = r#"<html><head><title>Alert Headline</title></head><body>
            <div class="subarticle"><p>First.</p><p>Second.</p></div>
        </body></html>"#;
        let (fields, counters) = extract_from(html, "2008_01_01_IW.html");

        assert_eq!(fields.headline, "Alert Headline");
        assert_eq!(fields.content, "First.Second.");
        assert_eq!(fields.author, "");
        assert_eq!(fields.genre, "");
        assert_eq!(counters.author, 1);
        assert_eq!(counters.genre, 1);
    }

    #[test]
    fn test_comment_cruft_never_reaches_the_body() {
        let html = r#"<html><head><title>T</title></head><body>
            <div class="subarticle">
                <p>Story.</p>
                <ol class="commentlist"><li><p>first post!!</p></li></ol>
                <div id="respond"><p>Leave a reply</p></div>
                <form id="commentform"><p>Name:</p></form>
            </div>
        </body></html>"#;
        let (fields, _) = extract_from(html, "2008_01_01_IW.html");
        assert_eq!(fields.content, "Story.");
    }

    #[test]
    fn test_text_container_narrows_to_nested_article() {
        let html = r#"<html><head><title>T</title></head><body>
            <div class="text"><p>chrome around the copy</p>
                <article><p>Real copy.</p></article>
            </div>
        </body></html>"#;
        let (fields, _) = extract_from(html, "2008_01_01_IW.html");
        assert_eq!(fields.content, "Real copy.");
    }

    #[test]
    fn test_structural_paragraphs_are_excluded() {
        let html = r#"<html><head><title>T</title></head><body>
            <div class="subarticle">
                <p class="meta">dateline</p>
                <p><input type="text"></p>
                <p><script>var x;</script>trailing</p>
                <p><b>Wrapper</b> first</p>
                <p>Kept.</p>
            </div>
        </body></html>"#;
        let (fields, _) = extract_from(html, "2008_01_01_IW.html");
        assert_eq!(fields.content, "Kept.");
    }

    #[test]
    fn test_legacy_file_uses_span_second_child_locator() {
        // The general rule would pick the first candidate in document order;
        // the legacy file instead wants the container whose second child is a
        // span.
        let html = r#"<html><head><title>T</title></head><body>
            <div class="text"><article><p>wrong container</p></article></div>
            <div class="subarticle">lede<span>kicker</span><p>Legacy copy.</p></div>
        </body></html>"#;
        let (fields, _) = extract_from(html, "2007_03_14_IW.html");
        assert_eq!(fields.content, "Legacy copy.");

        let (fields, _) = extract_from(html, "2007_03_15_IW.html");
        assert_eq!(fields.content, "wrong container");
    }

    #[test]
    fn test_missing_container_is_an_error() {
        let html = "<html><head><title>T</title></head><body><p>stray</p></body></html>";
        let mut document = Html::parse_document(html);
        let err = extract(&mut document, "2008_01_01_IW.html", &mut MissingFieldCounters::default())
            .unwrap_err();
        assert!(matches!(err, ExtractError::MissingElement { .. }));
    }
}
