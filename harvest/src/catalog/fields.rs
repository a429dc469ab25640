//! Parsing contracts for the free-text fields of both catalogs.
//!
//! Each function accepts one shape of text and fails with a [`ParseError`]
//! naming the field for anything else.

use regex::Regex;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::errors::ParseError;

#[allow(clippy::expect_used)]
fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("static pattern compiles"))
}

fn leading_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"^\s*(\d+)(?:\s|$)")
}

fn labelled_level_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"(?i)\blevel\b\s*:?\s*(\d+)(?:\s|$)")
}

fn trailing_amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"(?:^|\s)\p{Sc}?(\d+)\s*$")
}

fn parse_number<T: FromStr>(digits: &str, field: &str, raw: &str) -> Result<T, ParseError> {
    digits
        .parse()
        .map_err(|_| ParseError::malformed(field, "a number in range", raw))
}

/// Parses the leading integer token, e.g. `12` from `"12 months"`.
pub fn leading_integer(text: &str, field: &str) -> Result<u32, ParseError> {
    let caps = leading_token_re()
        .captures(text)
        .ok_or_else(|| ParseError::malformed(field, "a leading integer token", text))?;
    parse_number(&caps[1], field, text)
}

/// Parses the integer following the `Level` label, e.g. `3` from `"Level: 3"`.
pub fn labelled_level(text: &str, field: &str) -> Result<u32, ParseError> {
    let caps = labelled_level_re()
        .captures(text)
        .ok_or_else(|| ParseError::malformed(field, "'Level' followed by an integer", text))?;
    parse_number(&caps[1], field, text)
}

/// Parses the trailing amount with at most one leading currency symbol,
/// e.g. `15000` from `"Maximum funding: £15000"`.
pub fn trailing_amount(text: &str, field: &str) -> Result<u64, ParseError> {
    let caps = trailing_amount_re()
        .captures(text)
        .ok_or_else(|| ParseError::malformed(field, "a trailing amount", text))?;
    parse_number(&caps[1], field, text)
}

/// Splits a level description into its leading digit and the trimmed remainder,
/// e.g. `(2, "(GCSE)")` from `" 2 (GCSE) "`.
pub fn leading_digit_and_detail(text: &str, field: &str) -> Result<(u32, String), ParseError> {
    let trimmed = text.trim();
    let mut chars = trimmed.chars();
    let level = chars
        .next()
        .and_then(|c| c.to_digit(10))
        .ok_or_else(|| ParseError::malformed(field, "a leading digit", text))?;
    Ok((level, chars.as_str().trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("12 months", "d").unwrap(), 12);
        assert_eq!(leading_integer("  18", "d").unwrap(), 18);
        assert!(leading_integer("months 12", "d").is_err());
        assert!(leading_integer("12months", "d").is_err());
        assert!(leading_integer("", "d").is_err());
    }

    #[test]
    fn test_leading_integer_overflow_is_parse_error() {
        let err = leading_integer("99999999999 months", "duration").unwrap_err();
        assert_eq!(err.field, "duration");
    }

    #[test]
    fn test_labelled_level() {
        assert_eq!(labelled_level("Level: 3", "l").unwrap(), 3);
        assert_eq!(labelled_level("Level 7", "l").unwrap(), 7);
        assert_eq!(labelled_level("level:4 (degree)", "l").unwrap(), 4);
        assert!(labelled_level("Level: tbc", "l").is_err());
        assert!(labelled_level("3", "l").is_err());
    }

    #[test]
    fn test_trailing_amount() {
        assert_eq!(trailing_amount("Maximum funding: £15000", "f").unwrap(), 15000);
        assert_eq!(trailing_amount("Funding band $9000 ", "f").unwrap(), 9000);
        assert_eq!(trailing_amount("27000", "f").unwrap(), 27000);
        assert!(trailing_amount("Maximum funding: £15,000", "f").is_err());
        assert!(trailing_amount("Maximum funding: ££15000", "f").is_err());
        assert!(trailing_amount("Funding: tbc", "f").is_err());
    }

    #[test]
    fn test_leading_digit_and_detail() {
        assert_eq!(
            leading_digit_and_detail("\n 2 (GCSE) \n", "l").unwrap(),
            (2, "(GCSE)".to_string())
        );
        assert_eq!(
            leading_digit_and_detail("3", "l").unwrap(),
            (3, String::new())
        );
        let err = leading_digit_and_detail("Advanced", "listing.level").unwrap_err();
        assert_eq!(err.value.as_deref(), Some("Advanced"));
    }
}
