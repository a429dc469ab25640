//! Plain-text coverage report.

use harvest::reconcile::Stats;

/// Renders the coverage summary printed at the end of a run.
pub fn render(stats: &Stats) -> String {
    format!(
        "Number of merged data points: {merged}\n\
         Theoretical max merged data points without losing data: {max}\n\
         Unmatched apprenticeships: {ua} out of {at} ({ua_pct:.1}%)\n\
         Unmatched apprenticeship standards: {us} out of {st} ({us_pct:.1}%)\n\
         {dup} apprenticeships are duplicates (same title but different level and/or duration)\n",
        merged = stats.merged_data_points(),
        max = stats.theoretical_max_matches,
        ua = stats.unmatched_apprenticeships,
        at = stats.apprenticeship_total,
        ua_pct = stats.unmatched_apprenticeship_ratio() * 100.0,
        us = stats.unmatched_standards,
        st = stats.standard_total,
        us_pct = stats.unmatched_standard_ratio() * 100.0,
        dup = stats.duplicate_titles,
    )
}
