//! Blocking resolution: which declared dependencies are still active,
//! and which blocked tasks have become eligible.
//!
//! A dependency is active while its referent exists and has not
//! completed. Referents missing from the snapshot are excluded rather
//! than treated as blocking: validation prevents creating dangling
//! references, but ones introduced out of band (e.g. a deleted task)
//! must not jam the schedule forever.
//!
//! The resolver only reports; the caller performs the actual
//! Blocked -> Pending status writes.

use crate::core::task::{Task, TaskId, TaskStatus};
use crate::splog_debug;
use std::collections::HashMap;

/// For every task in the snapshot, the subset of its `blocked_by` list
/// that is still unsatisfied. An empty entry means no active blockers.
pub fn compute_blocking_map(all_tasks: &[Task]) -> HashMap<TaskId, Vec<TaskId>> {
    let completed: HashMap<TaskId, bool> = all_tasks
        .iter()
        .map(|t| (t.id, t.is_completed()))
        .collect();

    all_tasks
        .iter()
        .map(|task| {
            let active: Vec<TaskId> = task
                .blocked_by
                .iter()
                .filter(|dep| matches!(completed.get(dep), Some(false)))
                .copied()
                .collect();
            (task.id, active)
        })
        .collect()
}

/// Check whether a task has no active blockers in the snapshot.
pub fn can_start(task: &Task, all_tasks: &[Task]) -> bool {
    compute_blocking_map(all_tasks)
        .get(&task.id)
        .map(|active| active.is_empty())
        .unwrap_or(true)
}

/// Ids of tasks currently `Blocked` whose active-blocker list is now
/// empty. These are the candidates the caller should transition to
/// `Pending` after a dependency completes elsewhere.
pub fn compute_newly_unblocked(all_tasks: &[Task]) -> Vec<TaskId> {
    let blocking = compute_blocking_map(all_tasks);

    let unblocked: Vec<TaskId> = all_tasks
        .iter()
        .filter(|task| task.status == TaskStatus::Blocked)
        .filter(|task| blocking.get(&task.id).map_or(true, |a| a.is_empty()))
        .map(|task| task.id)
        .collect();

    if !unblocked.is_empty() {
        splog_debug!("blocking: {} tasks newly unblocked", unblocked.len());
    }
    unblocked
}
