//! Protocol traits for the document capabilities the pipeline consumes.
//!
//! The core never speaks HTTP or HTML directly. It asks a [`DocumentFetcher`]
//! for a [`RawDocument`] and asks a [`FieldExtractor`] to pick structured
//! fields out of it.

use async_trait::async_trait;
use std::fmt;

use crate::errors::{FetchError, ParseError};

/// A retrieved document, or a sub-document handle inside one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    /// URL the document was retrieved from.
    pub url: String,
    /// Raw markup.
    pub body: String,
}

impl RawDocument {
    /// Creates a new document.
    #[must_use]
    pub fn new(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            body: body.into(),
        }
    }

    /// Creates a handle for a fragment of this document.
    #[must_use]
    pub fn fragment(&self, body: impl Into<String>) -> Self {
        Self::new(self.url.clone(), body)
    }
}

/// A structural query: "all elements of kind `tag` carrying every class in `classes`".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementQuery {
    /// Element name, e.g. `div`.
    pub tag: String,
    /// Required classes.
    pub classes: Vec<String>,
}

impl ElementQuery {
    /// Creates a query matching every element with the given tag.
    #[must_use]
    pub fn tag(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
        }
    }

    /// Requires the given class attribute value.
    ///
    /// A value with several whitespace-separated classes requires all of them,
    /// so `with_class("standard approved")` matches `class="standard approved"`.
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes
            .extend(class.split_whitespace().map(str::to_string));
        self
    }

    /// Renders the query as a CSS selector.
    #[must_use]
    pub fn css(&self) -> String {
        let mut css = self.tag.clone();
        for class in &self.classes {
            css.push('.');
            css.push_str(class);
        }
        css
    }
}

impl fmt::Display for ElementQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

/// Protocol for document retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// Fetches the document at `url`.
    async fn fetch(&self, url: &str) -> Result<RawDocument, FetchError>;
}

/// Protocol for structured field extraction.
pub trait FieldExtractor: Send + Sync {
    /// Returns every element of `doc` matching `query`, in document order.
    fn select_all(&self, doc: &RawDocument, query: &ElementQuery)
        -> Result<Vec<RawDocument>, ParseError>;

    /// Returns the text content of a handle.
    fn text(&self, handle: &RawDocument) -> String;

    /// Returns the `index`-th match, failing when there are fewer matches.
    fn select_nth(
        &self,
        doc: &RawDocument,
        query: &ElementQuery,
        index: usize,
        field: &str,
    ) -> Result<RawDocument, ParseError> {
        self.select_all(doc, query)?
            .into_iter()
            .nth(index)
            .ok_or_else(|| {
                if index == 0 {
                    ParseError::missing(field, query)
                } else {
                    ParseError::new(field, format!("fewer than {} elements match '{query}'", index + 1))
                }
            })
    }

    /// Returns the first match, failing when nothing matches.
    fn select_first(
        &self,
        doc: &RawDocument,
        query: &ElementQuery,
        field: &str,
    ) -> Result<RawDocument, ParseError> {
        self.select_nth(doc, query, 0, field)
    }

    /// Returns the text of the `index`-th match.
    fn nth_text(
        &self,
        doc: &RawDocument,
        query: &ElementQuery,
        index: usize,
        field: &str,
    ) -> Result<String, ParseError> {
        self.select_nth(doc, query, index, field)
            .map(|handle| self.text(&handle))
    }

    /// Returns the text of the first match.
    fn first_text(
        &self,
        doc: &RawDocument,
        query: &ElementQuery,
        field: &str,
    ) -> Result<String, ParseError> {
        self.nth_text(doc, query, 0, field)
    }
}
