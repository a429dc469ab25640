//! Where each field lives in the catalog pages.

use crate::document::ElementQuery;

/// Approved entries on the standards page. Other statuses
/// (`inDevelopment`, `decommissioned`) are deliberately left out.
pub fn approved_standard() -> ElementQuery {
    ElementQuery::tag("div").with_class("standard approved")
}

/// Title heading inside a standard.
pub fn standard_title() -> ElementQuery {
    ElementQuery::tag("h3")
}

/// Level description inside a standard, e.g. `Level: 3`.
pub fn standard_level() -> ElementQuery {
    ElementQuery::tag("span").with_class("level")
}

/// Duration inside a standard, e.g. `24 months`.
pub fn standard_duration() -> ElementQuery {
    ElementQuery::tag("span").with_class("duration")
}

/// Funding cap inside a standard, e.g. `Maximum funding: £9000`.
pub fn standard_funding() -> ElementQuery {
    ElementQuery::tag("span").with_class("funding")
}

/// Page counter on a listing page, e.g. `Page 1 of 45`.
pub fn page_counter() -> ElementQuery {
    ElementQuery::tag("span").with_class("counter")
}

/// One posting on a listing page.
pub fn listing_entry() -> ElementQuery {
    ElementQuery::tag("article")
}

/// Title link inside a posting.
pub fn listing_title() -> ElementQuery {
    ElementQuery::tag("a")
}

/// Detail values inside a posting: level first, duration second.
pub fn listing_details() -> ElementQuery {
    ElementQuery::tag("dd")
}
