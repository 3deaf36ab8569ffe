//! Dependency and progress engine for a construction work schedule.
//!
//! The schedule is a three-level hierarchy: stages contain sub-stages,
//! sub-stages contain tasks, and tasks may declare "blocked-by"
//! dependencies on other tasks. This crate is the pure core of that
//! system: it validates dependency links so the schedule never contains
//! a cycle, derives which tasks are blocked or newly eligible, rolls up
//! completion percentages bottom-up (optionally budget-weighted), and
//! suggests lifecycle statuses for the grouping levels.
//!
//! The engine owns no entities and performs no I/O over them: callers
//! hand in immutable snapshots and persist whatever comes back. Two
//! callers racing on stale snapshots can each observe "no cycle" before
//! a combined write introduces one; serializing writes to a task's
//! `blocked_by` field is the caller's obligation.

pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod schedule;

pub use crate::core::stage::{Stage, StageId, StageStatus, SubStage, SubStageId};
pub use crate::core::task::{Task, TaskId, TaskStatus};
pub use error::{Error, Result};
pub use schedule::validate::{RejectionReason, Verdict};
