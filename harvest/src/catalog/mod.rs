//! Catalog records and the rules for reading them.
//!
//! This module provides:
//! - Title normalization into join keys
//! - Parsing contracts for the free-text fields
//! - The immutable record types produced by both collectors
//! - The element queries locating each field in a catalog page

mod fields;
pub mod layout;
mod normalize;
mod records;

pub use fields::{labelled_level, leading_digit_and_detail, leading_integer, trailing_amount};
pub use normalize::{normalize_title, NormalizedKey};
pub use records::{ApprenticeshipRecord, JoinKey, StandardRecord};
