//! Task data model for the work schedule.
//!
//! Tasks are the smallest schedulable unit. Each task belongs to one
//! sub-stage, tracks its lifecycle status, and may declare "blocked-by"
//! dependencies on other tasks. The directed graph formed by all
//! `blocked_by` edges must stay acyclic; `blocked_by` is only ever
//! mutated after the dependency validator accepts the change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a task.
///
/// Uses UUID v4 for generation and provides a short form display
/// for human-readable output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub Uuid);

impl TaskId {
    /// Create a new unique task identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Return first 8 characters of the UUID for display.
    pub fn short(&self) -> String {
        self.0.to_string()[..8].to_string()
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TaskId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Task status in its lifecycle.
///
/// Pending/Blocked transitions are driven by the blocking resolver;
/// InProgress, Completed and Cancelled are explicit caller actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task created and eligible to start.
    Pending,
    /// Task is currently being worked.
    InProgress,
    /// Task finished successfully.
    Completed,
    /// Task cannot start until its dependencies complete.
    Blocked,
    /// Task abandoned; it will never complete.
    Cancelled,
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::Pending => write!(f, "pending"),
            TaskStatus::InProgress => write!(f, "in_progress"),
            TaskStatus::Completed => write!(f, "completed"),
            TaskStatus::Blocked => write!(f, "blocked"),
            TaskStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A single task in the work schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for this task.
    pub id: TaskId,
    /// Human-readable name for the task.
    pub name: String,
    /// Current lifecycle status.
    pub status: TaskStatus,
    /// Tasks this task depends on. Ordered, unique, never contains
    /// the task's own id.
    pub blocked_by: Vec<TaskId>,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
    /// When work on the task started.
    pub started_at: Option<DateTime<Utc>>,
    /// When the task completed or was cancelled.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a new pending task with no dependencies.
    pub fn new(name: &str) -> Self {
        Self {
            id: TaskId::new(),
            name: name.to_string(),
            status: TaskStatus::Pending,
            blocked_by: Vec::new(),
            created_at: Utc::now(),
            started_at: None,
            completed_at: None,
        }
    }

    /// Start work on the task.
    pub fn start(&mut self) {
        self.status = TaskStatus::InProgress;
        self.started_at = Some(Utc::now());
    }

    /// Mark the task as successfully completed.
    pub fn complete(&mut self) {
        self.status = TaskStatus::Completed;
        self.completed_at = Some(Utc::now());
    }

    /// Cancel the task. Cancelled tasks never complete, so anything
    /// depending on them stays blocked until the edge is removed.
    pub fn cancel(&mut self) {
        self.status = TaskStatus::Cancelled;
        self.completed_at = Some(Utc::now());
    }

    /// Mark the task as blocked on unfinished dependencies.
    pub fn block(&mut self) {
        self.status = TaskStatus::Blocked;
    }

    /// Return the task to pending once its blockers are satisfied.
    pub fn unblock(&mut self) {
        self.status = TaskStatus::Pending;
    }

    /// Check if the task has completed successfully.
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Check if the task is in a terminal state (Completed or Cancelled).
    pub fn is_finished(&self) -> bool {
        matches!(self.status, TaskStatus::Completed | TaskStatus::Cancelled)
    }
}
