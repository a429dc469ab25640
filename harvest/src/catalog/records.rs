//! Records produced by the two collectors.
//!
//! Records are immutable once built. Constructors check the numeric
//! invariants and reject violations with a [`ParseError`].

use serde::Serialize;

use super::normalize::NormalizedKey;
use crate::errors::ParseError;

/// Composite key the reconciler joins on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JoinKey {
    /// Normalized title.
    pub title: NormalizedKey,
    /// Qualification level.
    pub level: u32,
    /// Typical duration in months.
    pub duration_months: u32,
}

fn require_positive(value: u32, field: &str) -> Result<u32, ParseError> {
    if value == 0 {
        Err(ParseError::malformed(field, "a value of at least 1", "0"))
    } else {
        Ok(value)
    }
}

/// An approved apprenticeship standard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandardRecord {
    title: NormalizedKey,
    level: u32,
    #[serde(rename = "duration")]
    duration_months: u32,
    max_funding: u64,
}

impl StandardRecord {
    /// Creates a standard, normalizing `title`.
    pub fn new(
        title: &str,
        level: u32,
        duration_months: u32,
        max_funding: u64,
    ) -> Result<Self, ParseError> {
        Ok(Self {
            title: NormalizedKey::new(title),
            level: require_positive(level, "standard.level")?,
            duration_months: require_positive(duration_months, "standard.duration")?,
            max_funding,
        })
    }

    /// Normalized title.
    #[must_use]
    pub fn title(&self) -> &NormalizedKey {
        &self.title
    }

    /// Qualification level.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Typical duration in months.
    #[must_use]
    pub fn duration_months(&self) -> u32 {
        self.duration_months
    }

    /// Maximum funding cap.
    #[must_use]
    pub fn max_funding(&self) -> u64 {
        self.max_funding
    }

    /// The key this record joins on.
    #[must_use]
    pub fn join_key(&self) -> JoinKey {
        JoinKey {
            title: self.title.clone(),
            level: self.level,
            duration_months: self.duration_months,
        }
    }
}

/// An advertised apprenticeship from the paginated listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApprenticeshipRecord {
    title: NormalizedKey,
    level: u32,
    #[serde(rename = "level-detail")]
    level_detail: String,
    #[serde(rename = "duration")]
    duration_months: u32,
}

impl ApprenticeshipRecord {
    /// Creates an apprenticeship, normalizing `title`.
    pub fn new(
        title: &str,
        level: u32,
        level_detail: impl Into<String>,
        duration_months: u32,
    ) -> Result<Self, ParseError> {
        Ok(Self {
            title: NormalizedKey::new(title),
            level: require_positive(level, "apprenticeship.level")?,
            level_detail: level_detail.into(),
            duration_months: require_positive(duration_months, "apprenticeship.duration")?,
        })
    }

    /// Normalized title.
    #[must_use]
    pub fn title(&self) -> &NormalizedKey {
        &self.title
    }

    /// Qualification level.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Free text following the level digit, e.g. `(GCSE)`.
    #[must_use]
    pub fn level_detail(&self) -> &str {
        &self.level_detail
    }

    /// Typical duration in months.
    #[must_use]
    pub fn duration_months(&self) -> u32 {
        self.duration_months
    }

    /// The key this record joins on.
    #[must_use]
    pub fn join_key(&self) -> JoinKey {
        JoinKey {
            title: self.title.clone(),
            level: self.level,
            duration_months: self.duration_months,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_normalizes_title() {
        let record = StandardRecord::new(" Baker ", 2, 12, 15000).unwrap();
        assert_eq!(record.title().as_str(), "baker");
        assert_eq!(record.max_funding(), 15000);
    }

    #[test]
    fn test_invariants_rejected() {
        assert!(StandardRecord::new("baker", 0, 12, 1).is_err());
        assert!(StandardRecord::new("baker", 2, 0, 1).is_err());
        assert!(StandardRecord::new("baker", 2, 12, 0).is_ok());

        let err = ApprenticeshipRecord::new("welder", 0, "", 12).unwrap_err();
        assert_eq!(err.field, "apprenticeship.level");
        assert!(ApprenticeshipRecord::new("welder", 2, "", 0).is_err());
    }

    #[test]
    fn test_join_keys_match_across_sources() {
        let standard = StandardRecord::new("Youth Work", 3, 18, 5000).unwrap();
        let posting = ApprenticeshipRecord::new("youth work", 3, "(A level)", 18).unwrap();
        assert_eq!(standard.join_key(), posting.join_key());
    }

    #[test]
    fn test_serialized_field_names() {
        let posting = ApprenticeshipRecord::new("Welder", 2, "(GCSE)", 12).unwrap();
        let json = serde_json::to_value(&posting).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "welder",
                "level": 2,
                "level-detail": "(GCSE)",
                "duration": 12,
            })
        );

        let standard = StandardRecord::new("Baker", 2, 12, 15000).unwrap();
        let json = serde_json::to_value(&standard).unwrap();
        assert_eq!(json["duration"], 12);
        assert_eq!(json["max_funding"], 15000);
    }
}
