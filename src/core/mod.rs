//! Core domain models for the work schedule.
//!
//! This module contains the entities the engine operates over: tasks
//! with their dependency lists, and the two grouping levels above them.

pub mod stage;
pub mod task;

pub use stage::{Stage, StageId, StageStatus, SubStage, SubStageId};
pub use task::{Task, TaskId, TaskStatus};
