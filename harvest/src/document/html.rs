//! HTML field extraction backed by the `scraper` crate.

use scraper::{Html, Selector};

use super::protocols::{ElementQuery, FieldExtractor, RawDocument};
use crate::errors::ParseError;

/// Extracts fields from HTML documents using CSS selectors.
///
/// Handles returned by [`FieldExtractor::select_all`] carry the outer HTML of
/// the matched element, so they can be queried again.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScraperExtractor;

impl ScraperExtractor {
    /// Creates a new extractor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn selector(query: &ElementQuery) -> Result<Selector, ParseError> {
        Selector::parse(&query.css()).map_err(|e| {
            ParseError::new(query.css(), format!("invalid selector: {e}"))
        })
    }
}

impl FieldExtractor for ScraperExtractor {
    fn select_all(
        &self,
        doc: &RawDocument,
        query: &ElementQuery,
    ) -> Result<Vec<RawDocument>, ParseError> {
        let selector = Self::selector(query)?;
        let html = Html::parse_document(&doc.body);
        Ok(html
            .select(&selector)
            .map(|element| doc.fragment(element.html()))
            .collect())
    }

    fn text(&self, handle: &RawDocument) -> String {
        let html = Html::parse_fragment(&handle.body);
        html.root_element().text().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><head><title>Catalog</title></head><body>
          <div class="standard approved"><h3>Baker</h3></div>
          <div class="standard inDevelopment"><h3>Youth Worker</h3></div>
          <div class="standard approved"><h3>Welder</h3></div>
          <span class="counter">Page 1 of 12</span>
        </body></html>
    "#;

    #[test]
    fn test_select_all_matches_every_class() {
        let doc = RawDocument::new("https://example.com", PAGE);
        let query = ElementQuery::tag("div").with_class("standard approved");

        let matches = ScraperExtractor.select_all(&doc, &query).unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].url, "https://example.com");
        assert!(matches[0].body.contains("Baker"));
        assert!(matches[1].body.contains("Welder"));
    }

    #[test]
    fn test_handles_can_be_queried_again() {
        let doc = RawDocument::new("u", PAGE);
        let entries = ScraperExtractor
            .select_all(&doc, &ElementQuery::tag("div").with_class("standard"))
            .unwrap();
        let titles: Vec<String> = entries
            .iter()
            .map(|entry| {
                ScraperExtractor
                    .first_text(entry, &ElementQuery::tag("h3"), "title")
                    .unwrap()
            })
            .collect();
        assert_eq!(titles, vec!["Baker", "Youth Worker", "Welder"]);
    }

    #[test]
    fn test_text_of_nested_markup() {
        let handle = RawDocument::new("u", "<dd> 3 <abbr>(A level)</abbr> </dd>");
        assert_eq!(ScraperExtractor.text(&handle), " 3 (A level) ");
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let doc = RawDocument::new("u", "<p>nothing</p>");
        let matches = ScraperExtractor
            .select_all(&doc, &ElementQuery::tag("article"))
            .unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_invalid_selector_is_parse_error() {
        let doc = RawDocument::new("u", "<p/>");
        let err = ScraperExtractor
            .select_all(&doc, &ElementQuery::tag("div").with_class("9bad"))
            .unwrap_err();
        assert!(err.reason.contains("invalid selector"));
    }
}
