//! Coverage and data-quality counts over a merged dataset.

use serde::Serialize;
use std::collections::HashSet;

use super::join::MergedRecord;

/// Summary of one reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Stats {
    /// Rows in the merged dataset.
    pub total_rows: usize,
    /// Rows carrying both a standard and an apprenticeship.
    pub matched_rows: usize,
    /// `min(|standards|, |apprenticeships|)`. Exceeded by `matched_rows` only
    /// when a key repeats on both sides.
    pub theoretical_max_matches: usize,
    /// Rows with only an apprenticeship side.
    pub unmatched_apprenticeships: usize,
    /// Number of apprenticeships reconciled.
    pub apprenticeship_total: usize,
    /// Rows with only a standard side.
    pub unmatched_standards: usize,
    /// Number of standards reconciled.
    pub standard_total: usize,
    /// Unmatched-apprenticeship rows whose title repeats an earlier one.
    pub duplicate_titles: usize,
}

#[allow(clippy::cast_precision_loss)]
fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

impl Stats {
    /// Computes the counts for `merged`, built from the given input sizes.
    #[must_use]
    pub fn compute(merged: &[MergedRecord], standard_total: usize, apprenticeship_total: usize) -> Self {
        let unmatched_apprenticeships: Vec<&MergedRecord> = merged
            .iter()
            .filter(|r| r.is_unmatched_apprenticeship())
            .collect();
        let distinct_titles: HashSet<&str> = unmatched_apprenticeships
            .iter()
            .map(|r| r.title.as_str())
            .collect();

        Self {
            total_rows: merged.len(),
            matched_rows: merged.iter().filter(|r| r.is_matched()).count(),
            theoretical_max_matches: standard_total.min(apprenticeship_total),
            unmatched_apprenticeships: unmatched_apprenticeships.len(),
            apprenticeship_total,
            unmatched_standards: merged.iter().filter(|r| r.is_unmatched_standard()).count(),
            standard_total,
            duplicate_titles: unmatched_apprenticeships.len() - distinct_titles.len(),
        }
    }

    /// Share of apprenticeships without a standard; `0.0` when there are none.
    #[must_use]
    pub fn unmatched_apprenticeship_ratio(&self) -> f64 {
        ratio(self.unmatched_apprenticeships, self.apprenticeship_total)
    }

    /// Share of standards without an apprenticeship; `0.0` when there are none.
    #[must_use]
    pub fn unmatched_standard_ratio(&self) -> f64 {
        ratio(self.unmatched_standards, self.standard_total)
    }

    /// Input records absorbed by merging: `|S| + |A| - |merged|`, floored at 0
    /// when repeated keys multiply rows.
    #[must_use]
    pub fn merged_data_points(&self) -> usize {
        (self.standard_total + self.apprenticeship_total).saturating_sub(self.total_rows)
    }
}
