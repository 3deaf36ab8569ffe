//! Dependency validation for proposed `blocked_by` edits.
//!
//! The single entry point callers must go through before persisting a
//! change to a task's dependency list. Checks run in a fixed order and
//! short-circuit on the first failure: self-reference, existence, then
//! cycle. The validator mutates nothing; on acceptance the caller is
//! responsible for writing the new `blocked_by` list.

use crate::core::task::{Task, TaskId};
use crate::schedule::graph::has_cycle;
use crate::splog_debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Why a proposed dependency change was rejected.
///
/// These are informational verdict values, not faults: every path
/// through the validator ends in acceptance or one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum RejectionReason {
    /// The task was proposed to depend on itself.
    #[error("a task cannot depend on itself")]
    SelfDependency,
    /// A proposed dependency id matches no task in the snapshot.
    #[error("dependency {id} does not match any known task")]
    UnknownDependency {
        /// The id that could not be resolved.
        id: TaskId,
    },
    /// The proposed dependencies would create a circular wait.
    #[error("the proposed dependencies would create a cycle")]
    CycleDetected,
}

/// Validation verdict in the shape the persistence collaborator
/// stores: `{"ok":true}` or `{"ok":false,"reason":{...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<RejectionReason>,
}

impl From<std::result::Result<(), RejectionReason>> for Verdict {
    fn from(result: std::result::Result<(), RejectionReason>) -> Self {
        match result {
            Ok(()) => Self {
                ok: true,
                reason: None,
            },
            Err(reason) => Self {
                ok: false,
                reason: Some(reason),
            },
        }
    }
}

/// Validate a proposed set of dependencies for `subject`.
///
/// `proposed` is the full list of dependency ids to be added to the
/// subject's existing `blocked_by` list. Checks, in order:
///
/// 1. the subject must not appear in `proposed`,
/// 2. every proposed id must exist in `all_tasks`,
/// 3. the combined edges must not create a cycle.
pub fn validate_dependencies(
    subject: TaskId,
    proposed: &[TaskId],
    all_tasks: &[Task],
) -> std::result::Result<(), RejectionReason> {
    if proposed.contains(&subject) {
        splog_debug!("validate: {} rejected, self-dependency", subject.short());
        return Err(RejectionReason::SelfDependency);
    }

    let known: HashSet<TaskId> = all_tasks.iter().map(|t| t.id).collect();
    if let Some(&id) = proposed.iter().find(|id| !known.contains(id)) {
        splog_debug!(
            "validate: {} rejected, unknown dependency {}",
            subject.short(),
            id.short()
        );
        return Err(RejectionReason::UnknownDependency { id });
    }

    if has_cycle(all_tasks, subject, proposed) {
        splog_debug!("validate: {} rejected, cycle detected", subject.short());
        return Err(RejectionReason::CycleDetected);
    }

    splog_debug!(
        "validate: {} accepted {} new dependencies",
        subject.short(),
        proposed.len()
    );
    Ok(())
}
