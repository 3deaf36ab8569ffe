//! Status suggestion for the grouping levels.
//!
//! Derives a recommended lifecycle status for a sub-stage from its
//! tasks, or for a stage from its sub-stages, using the same rules at
//! both levels. The suggestion is advisory: the caller decides whether
//! and when to persist it.

use crate::core::stage::{StageStatus, SubStage};
use crate::core::task::{Task, TaskStatus};
use serde::{Deserialize, Serialize};

/// The statuses the suggester can recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestedStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl std::fmt::Display for SuggestedStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuggestedStatus::NotStarted => write!(f, "not_started"),
            SuggestedStatus::InProgress => write!(f, "in_progress"),
            SuggestedStatus::Completed => write!(f, "completed"),
        }
    }
}

/// What the suggester needs to know about a child, implemented by both
/// `Task` and `SubStage` so one set of rules serves both levels.
pub trait ChildProgress {
    /// The child has finished successfully.
    fn is_completed(&self) -> bool;

    /// Work on the child has begun (in progress or already completed).
    fn is_started(&self) -> bool;
}

impl ChildProgress for Task {
    fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    fn is_started(&self) -> bool {
        matches!(self.status, TaskStatus::InProgress | TaskStatus::Completed)
    }
}

impl ChildProgress for SubStage {
    fn is_completed(&self) -> bool {
        self.status == StageStatus::Completed
    }

    fn is_started(&self) -> bool {
        matches!(
            self.status,
            StageStatus::InProgress | StageStatus::Completed
        )
    }
}

/// Suggest a status for a parent from its children:
///
/// - no children: not started,
/// - all children completed: completed,
/// - any child started: in progress,
/// - otherwise: not started.
pub fn suggest_status<C: ChildProgress>(children: &[C]) -> SuggestedStatus {
    if children.is_empty() {
        return SuggestedStatus::NotStarted;
    }
    if children.iter().all(|c| c.is_completed()) {
        return SuggestedStatus::Completed;
    }
    if children.iter().any(|c| c.is_started()) {
        return SuggestedStatus::InProgress;
    }
    SuggestedStatus::NotStarted
}
