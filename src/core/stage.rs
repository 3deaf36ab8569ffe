//! Stage and sub-stage models, the grouping levels above tasks.
//!
//! A stage is the top level of the work breakdown; it contains
//! sub-stages, which contain tasks. Both levels persist a
//! `progress_percentage` for read efficiency, but the value is always
//! derivable from the children and is recomputed by the progress
//! aggregator whenever a child changes.

use crate::core::task::Task;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a sub-stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubStageId(pub Uuid);

impl SubStageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubStageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SubStageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StageId(pub Uuid);

impl StageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for StageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status shared by stages and sub-stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    NotStarted,
    InProgress,
    Completed,
    Paused,
    Cancelled,
}

impl Default for StageStatus {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl std::fmt::Display for StageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StageStatus::NotStarted => write!(f, "not_started"),
            StageStatus::InProgress => write!(f, "in_progress"),
            StageStatus::Completed => write!(f, "completed"),
            StageStatus::Paused => write!(f, "paused"),
            StageStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A grouping of tasks within a stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubStage {
    /// Unique identifier for this sub-stage.
    pub id: SubStageId,
    /// Human-readable name.
    pub name: String,
    /// Current lifecycle status.
    pub status: StageStatus,
    /// Completion percentage, 0-100. Derivable from `tasks`; persisted
    /// for read efficiency only.
    pub progress_percentage: u8,
    /// Budget allocated to this sub-stage, if any. Non-negative.
    pub budget: Option<f64>,
    /// The tasks belonging to this sub-stage.
    pub tasks: Vec<Task>,
}

impl SubStage {
    /// Create a new empty sub-stage.
    pub fn new(name: &str) -> Self {
        Self {
            id: SubStageId::new(),
            name: name.to_string(),
            status: StageStatus::NotStarted,
            progress_percentage: 0,
            budget: None,
            tasks: Vec::new(),
        }
    }

    /// Budget treated as a weight: absent or non-positive budgets
    /// contribute nothing to a weighted rollup.
    pub fn effective_budget(&self) -> f64 {
        self.budget.filter(|b| *b > 0.0).unwrap_or(0.0)
    }
}

/// A top-level phase of the work breakdown structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    /// Unique identifier for this stage.
    pub id: StageId,
    /// Human-readable name.
    pub name: String,
    /// Current lifecycle status.
    pub status: StageStatus,
    /// Completion percentage, 0-100, derivable from sub-stages.
    pub progress_percentage: u8,
    /// The sub-stages belonging to this stage.
    pub substages: Vec<SubStage>,
}

impl Stage {
    /// Create a new empty stage.
    pub fn new(name: &str) -> Self {
        Self {
            id: StageId::new(),
            name: name.to_string(),
            status: StageStatus::NotStarted,
            progress_percentage: 0,
            substages: Vec::new(),
        }
    }
}
