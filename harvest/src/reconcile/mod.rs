//! Reconciliation of the two catalogs.
//!
//! This module provides:
//! - [`MergedRecord`], one row of the outer-joined dataset
//! - [`outer_join`] on title, level and duration
//! - [`Stats`] with matched, unmatched and duplicate counts
//! - [`reconcile`], which produces both in one call

mod join;
mod stats;

pub use join::{outer_join, MergedRecord};
pub use stats::Stats;

use tracing::info;

use crate::catalog::{ApprenticeshipRecord, StandardRecord};

/// Outer-joins `standards` with `apprenticeships` and summarizes the result.
#[must_use]
pub fn reconcile(
    standards: &[StandardRecord],
    apprenticeships: &[ApprenticeshipRecord],
) -> (Vec<MergedRecord>, Stats) {
    let merged = outer_join(standards, apprenticeships);
    let stats = Stats::compute(&merged, standards.len(), apprenticeships.len());
    info!(
        rows = stats.total_rows,
        matched = stats.matched_rows,
        unmatched_apprenticeships = stats.unmatched_apprenticeships,
        unmatched_standards = stats.unmatched_standards,
        duplicate_titles = stats.duplicate_titles,
        "Reconciled catalogs"
    );
    (merged, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn standard(title: &str, level: u32, duration: u32) -> StandardRecord {
        StandardRecord::new(title, level, duration, 1000).unwrap()
    }

    fn apprenticeship(title: &str, level: u32, duration: u32) -> ApprenticeshipRecord {
        ApprenticeshipRecord::new(title, level, "(detail)", duration).unwrap()
    }

    fn assert_bounds(s: usize, a: usize, merged: &[MergedRecord], stats: &Stats) {
        assert!(stats.unmatched_standards.max(stats.unmatched_apprenticeships) <= merged.len());
        assert!(merged.len() <= s + a);
        assert!(s.min(a) >= merged.len() - stats.unmatched_standards - stats.unmatched_apprenticeships);
        assert!(stats.matched_rows <= stats.theoretical_max_matches);
    }

    #[test]
    fn test_disjoint_inputs_keep_every_row_unmatched() {
        let standards = vec![standard("Baker", 2, 12), standard("Chef", 3, 18)];
        let apprenticeships = vec![apprenticeship("Florist", 2, 12)];

        let (merged, stats) = reconcile(&standards, &apprenticeships);

        assert_eq!(merged.len(), 3);
        assert_eq!(stats.matched_rows, 0);
        assert_eq!(stats.unmatched_standards, 2);
        assert_eq!(stats.unmatched_apprenticeships, 1);
        assert_eq!(stats.merged_data_points(), 0);
    }

    #[test]
    fn test_matching_baker() {
        let (merged, stats) = reconcile(&[standard("Baker", 2, 12)], &[apprenticeship("baker", 2, 12)]);

        assert_eq!(merged.len(), 1);
        assert_eq!(stats.matched_rows, 1);
        assert_eq!(stats.unmatched_standards, 0);
        assert_eq!(stats.unmatched_apprenticeships, 0);
        assert_eq!(stats.merged_data_points(), 1);
    }

    #[test]
    fn test_repeated_unmatched_title_counts_as_duplicate() {
        let apprenticeships = vec![apprenticeship("Welder", 2, 12), apprenticeship("Welder", 3, 24)];

        let (_, stats) = reconcile(&[], &apprenticeships);

        assert_eq!(stats.unmatched_apprenticeships, 2);
        assert_eq!(stats.duplicate_titles, 1);
        assert_eq!(stats.unmatched_apprenticeship_ratio(), 1.0);
        assert_eq!(stats.unmatched_standard_ratio(), 0.0);
    }

    #[test]
    fn test_size_bounds_hold_for_unique_keys() {
        let cases: Vec<(Vec<StandardRecord>, Vec<ApprenticeshipRecord>)> = vec![
            (vec![], vec![]),
            (vec![standard("A", 1, 1)], vec![]),
            (vec![], vec![apprenticeship("A", 1, 1)]),
            (
                vec![standard("A", 1, 1), standard("B", 2, 2)],
                vec![apprenticeship("A", 1, 1)],
            ),
            (
                vec![standard("A", 1, 1)],
                vec![
                    apprenticeship("A", 1, 1),
                    apprenticeship("A", 2, 1),
                    apprenticeship("C", 1, 1),
                ],
            ),
            (
                vec![standard("A", 1, 1), standard("B", 1, 1)],
                vec![apprenticeship("A", 1, 1), apprenticeship("B", 1, 1)],
            ),
        ];

        for (standards, apprenticeships) in cases {
            let (merged, stats) = reconcile(&standards, &apprenticeships);
            assert_bounds(standards.len(), apprenticeships.len(), &merged, &stats);
            assert_eq!(stats.total_rows, merged.len());
        }
    }

    #[test]
    fn test_repeated_keys_multiply_matched_rows() {
        let standards = vec![standard("Chef", 2, 12), standard("Chef", 2, 12)];
        let apprenticeships = vec![apprenticeship("Chef", 2, 12), apprenticeship("Chef", 2, 12)];

        let (merged, stats) = reconcile(&standards, &apprenticeships);

        assert_eq!(merged.len(), 4);
        assert_eq!(stats.matched_rows, 4);
        assert_eq!(stats.theoretical_max_matches, 2);
        assert_eq!(stats.unmatched_standards, 0);
        assert_eq!(stats.unmatched_apprenticeships, 0);
        assert_eq!(stats.merged_data_points(), 0);
    }
}
