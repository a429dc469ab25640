//! Outer join of standards and apprenticeships on their [`JoinKey`].

use serde::Serialize;
use std::collections::HashMap;

use crate::catalog::{ApprenticeshipRecord, JoinKey, NormalizedKey, StandardRecord};

/// One row of the reconciled dataset.
///
/// Fields from a side that had no record for the key are `None` and
/// serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergedRecord {
    /// Normalized title shared by both sides.
    pub title: NormalizedKey,
    /// Qualification level.
    pub level: u32,
    /// Typical duration in months.
    #[serde(rename = "duration")]
    pub duration_months: u32,
    /// Funding cap, from the standard side.
    pub max_funding: Option<u64>,
    /// Qualification detail, from the apprenticeship side.
    #[serde(rename = "level-detail")]
    pub level_detail: Option<String>,
}

impl MergedRecord {
    fn from_key(key: &JoinKey, max_funding: Option<u64>, level_detail: Option<String>) -> Self {
        Self {
            title: key.title.clone(),
            level: key.level,
            duration_months: key.duration_months,
            max_funding,
            level_detail,
        }
    }

    /// Row carrying both sides.
    #[must_use]
    pub fn matched(standard: &StandardRecord, apprenticeship: &ApprenticeshipRecord) -> Self {
        Self::from_key(
            &standard.join_key(),
            Some(standard.max_funding()),
            Some(apprenticeship.level_detail().to_string()),
        )
    }

    /// Row for a standard without a matching apprenticeship.
    #[must_use]
    pub fn standard_only(standard: &StandardRecord) -> Self {
        Self::from_key(&standard.join_key(), Some(standard.max_funding()), None)
    }

    /// Row for an apprenticeship without a matching standard.
    #[must_use]
    pub fn apprenticeship_only(apprenticeship: &ApprenticeshipRecord) -> Self {
        Self::from_key(
            &apprenticeship.join_key(),
            None,
            Some(apprenticeship.level_detail().to_string()),
        )
    }

    /// Whether both sides contributed to this row.
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.max_funding.is_some() && self.level_detail.is_some()
    }

    /// Apprenticeship side present, standard side missing.
    #[must_use]
    pub fn is_unmatched_apprenticeship(&self) -> bool {
        self.max_funding.is_none() && self.level_detail.is_some()
    }

    /// Standard side present, apprenticeship side missing.
    #[must_use]
    pub fn is_unmatched_standard(&self) -> bool {
        self.max_funding.is_some() && self.level_detail.is_none()
    }
}

#[derive(Default)]
struct KeyGroup<'a> {
    standards: Vec<&'a StandardRecord>,
    apprenticeships: Vec<&'a ApprenticeshipRecord>,
}

/// Full outer join on `(title, level, duration_months)`.
///
/// A key present on both sides yields one row per (standard, apprenticeship)
/// pair, standard-major; a key present on one side yields one-sided rows.
/// Groups are emitted in the order their key is first seen, scanning
/// standards before apprenticeships.
#[must_use]
pub fn outer_join(
    standards: &[StandardRecord],
    apprenticeships: &[ApprenticeshipRecord],
) -> Vec<MergedRecord> {
    let mut order: Vec<JoinKey> = Vec::new();
    let mut groups: HashMap<JoinKey, KeyGroup<'_>> = HashMap::new();

    for standard in standards {
        let key = standard.join_key();
        groups
            .entry(key.clone())
            .or_insert_with(|| {
                order.push(key);
                KeyGroup::default()
            })
            .standards
            .push(standard);
    }
    for apprenticeship in apprenticeships {
        let key = apprenticeship.join_key();
        groups
            .entry(key.clone())
            .or_insert_with(|| {
                order.push(key);
                KeyGroup::default()
            })
            .apprenticeships
            .push(apprenticeship);
    }

    let mut merged = Vec::with_capacity(standards.len() + apprenticeships.len());
    for key in &order {
        let Some(group) = groups.get(key) else {
            continue;
        };
        if group.standards.is_empty() {
            merged.extend(
                group
                    .apprenticeships
                    .iter()
                    .map(|a| MergedRecord::apprenticeship_only(a)),
            );
        } else if group.apprenticeships.is_empty() {
            merged.extend(group.standards.iter().map(|s| MergedRecord::standard_only(s)));
        } else {
            for standard in &group.standards {
                merged.extend(
                    group
                        .apprenticeships
                        .iter()
                        .map(|a| MergedRecord::matched(standard, a)),
                );
            }
        }
    }
    merged
}
