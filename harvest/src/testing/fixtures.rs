//! HTML fixtures shaped like the two public catalogs.

use std::fmt::Write;

/// One entry on the standards catalog page.
#[derive(Debug, Clone)]
pub struct StandardEntry {
    /// Display title.
    pub title: String,
    /// Status class, e.g. `approved` or `inDevelopment`.
    pub status: String,
    /// Text of the level span.
    pub level: String,
    /// Text of the duration span.
    pub duration: String,
    /// Text of the funding span.
    pub funding: String,
}

impl StandardEntry {
    /// An approved standard with well-formed fields.
    #[must_use]
    pub fn approved(title: &str, level: u32, duration_months: u32, max_funding: u64) -> Self {
        Self {
            title: title.to_string(),
            status: "approved".to_string(),
            level: format!("Level: {level}"),
            duration: format!("{duration_months} months"),
            funding: format!("Maximum funding: £{max_funding}"),
        }
    }

    /// Changes the status class.
    #[must_use]
    pub fn with_status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    /// Replaces the raw level text.
    #[must_use]
    pub fn with_level_text(mut self, text: &str) -> Self {
        self.level = text.to_string();
        self
    }

    /// Replaces the raw funding text.
    #[must_use]
    pub fn with_funding_text(mut self, text: &str) -> Self {
        self.funding = text.to_string();
        self
    }
}

/// One posting on a listing page.
#[derive(Debug, Clone)]
pub struct ListingEntry {
    /// Display title.
    pub title: String,
    /// Text of the level `dd`, e.g. `2 (GCSE)`.
    pub level: String,
    /// Text of the duration `dd`, e.g. `12 months`.
    pub duration: String,
}

impl ListingEntry {
    /// A posting with well-formed fields.
    #[must_use]
    pub fn new(title: &str, level: u32, detail: &str, duration_months: u32) -> Self {
        Self {
            title: title.to_string(),
            level: format!("{level} {detail}"),
            duration: format!("{duration_months} months"),
        }
    }

    /// Replaces the raw duration text.
    #[must_use]
    pub fn with_duration_text(mut self, text: &str) -> Self {
        self.duration = text.to_string();
        self
    }
}

/// Renders the standards catalog page.
#[must_use]
pub fn standards_page(entries: &[StandardEntry]) -> String {
    let mut html = String::from("<html><body><div class=\"standards\">");
    for entry in entries {
        let _ = write!(
            html,
            "<div class=\"standard {}\"><h3> {} </h3>\
             <span class=\"level\">{}</span>\
             <span class=\"duration\">{}</span>\
             <span class=\"funding\">{}</span></div>",
            entry.status, entry.title, entry.level, entry.duration, entry.funding
        );
    }
    html.push_str("</div></body></html>");
    html
}

/// Renders one page of the apprenticeship listing.
#[must_use]
pub fn listing_page(page: u32, total_pages: u32, entries: &[ListingEntry]) -> String {
    let mut html = format!(
        "<html><body><span class=\"counter\">Page {page} of {total_pages}</span><main>"
    );
    for entry in entries {
        let _ = write!(
            html,
            "<article><h2><a href=\"#\">{}</a></h2><dl>\
             <dt>Level</dt><dd>\n  {}\n</dd>\
             <dt>Typical length</dt><dd>{}</dd></dl></article>",
            entry.title, entry.level, entry.duration
        );
    }
    html.push_str("</main></body></html>");
    html
}
