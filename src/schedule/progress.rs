//! Bottom-up progress aggregation across the schedule hierarchy.
//!
//! All functions here are pure and total: empty inputs yield 0 and the
//! result is always within 0-100. There is no incremental update path;
//! callers re-run the rollup whenever a contributing child changes.
//!
//! Percentages round half away from zero, which for these non-negative
//! values is round-half-up.

use crate::core::stage::SubStage;
use crate::core::task::Task;

/// Completion percentage of a sub-stage from its tasks: the share of
/// tasks that have completed, as a whole percent.
pub fn substage_progress(tasks: &[Task]) -> u8 {
    if tasks.is_empty() {
        return 0;
    }
    let completed = tasks.iter().filter(|t| t.is_completed()).count();
    (completed as f64 / tasks.len() as f64 * 100.0).round() as u8
}

/// Completion percentage of a stage as the equal-weight mean of its
/// sub-stage percentages.
pub fn stage_progress(substages: &[SubStage]) -> u8 {
    if substages.is_empty() {
        return 0;
    }
    let sum: f64 = substages
        .iter()
        .map(|s| s.progress_percentage as f64)
        .sum();
    (sum / substages.len() as f64).round() as u8
}

/// Completion percentage of a stage weighted by sub-stage budgets.
///
/// Each sub-stage contributes in proportion to its budget; absent or
/// non-positive budgets contribute weight zero. When no sub-stage has a
/// positive budget the computation falls back to the equal-weight mean,
/// so a stage with unbudgeted children never divides by zero or
/// silently drops them.
pub fn stage_progress_weighted(substages: &[SubStage]) -> u8 {
    let total: f64 = substages.iter().map(|s| s.effective_budget()).sum();
    if total <= 0.0 {
        return stage_progress(substages);
    }

    let weighted: f64 = substages
        .iter()
        .map(|s| s.effective_budget() / total * s.progress_percentage as f64)
        .sum();
    weighted.round() as u8
}
