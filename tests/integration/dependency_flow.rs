//! End-to-end dependency flow: validate, persist, resolve, unblock.
//!
//! Exercises the validator and blocking resolver the way the portal
//! does: re-fetch the snapshot, validate a proposed edit, write the new
//! `blocked_by` list only on acceptance, then ask the resolver which
//! blocked tasks became eligible.

use crate::fixtures::{chain, find_mut};
use siteplan::core::task::{Task, TaskId};
use siteplan::schedule::blocking::{can_start, compute_blocking_map, compute_newly_unblocked};
use siteplan::schedule::graph::DependencyGraph;
use siteplan::schedule::validate::{validate_dependencies, RejectionReason, Verdict};

/// Apply a proposed edit through the validator, persisting the edge
/// list only when the verdict accepts. Mirrors the portal's
/// read-validate-write sequence.
fn try_add_dependencies(
    tasks: &mut Vec<Task>,
    subject: TaskId,
    proposed: &[TaskId],
) -> Result<(), RejectionReason> {
    validate_dependencies(subject, proposed, tasks)?;
    find_mut(tasks, subject).blocked_by.extend_from_slice(proposed);
    Ok(())
}

#[test]
fn accepted_edits_never_produce_a_cycle() {
    // Grow a dependency graph through repeated validated edits; after
    // every accepted write the whole snapshot must still be acyclic.
    let mut tasks: Vec<Task> = (0..8).map(|i| Task::new(&format!("t{}", i))).collect();
    let ids: Vec<TaskId> = tasks.iter().map(|t| t.id).collect();

    let edits: Vec<(usize, usize)> = vec![
        (1, 0),
        (2, 1),
        (3, 1),
        (4, 2),
        (4, 3),
        (5, 4),
        (6, 0),
        (7, 6),
        (0, 7), // would close a loop through 6 -> 0
        (5, 1), // redundant but legal transitive edge
    ];

    for (subject, dep) in edits {
        let _ = try_add_dependencies(&mut tasks, ids[subject], &[ids[dep]]);
        let graph = DependencyGraph::from_snapshot(&tasks);
        assert!(graph.is_acyclic(), "snapshot became cyclic");
    }
}

#[test]
fn cycle_rejection_is_symmetric() {
    // Whichever direction is written first, the reverse is rejected.
    let mut forward = chain(&["a", "b"]);
    let (a, b) = (forward[0].id, forward[1].id);
    assert_eq!(
        try_add_dependencies(&mut forward, a, &[b]),
        Err(RejectionReason::CycleDetected)
    );

    let mut tasks: Vec<Task> = vec![Task::new("a"), Task::new("b")];
    let (a, b) = (tasks[0].id, tasks[1].id);
    try_add_dependencies(&mut tasks, a, &[b]).unwrap();
    assert_eq!(
        try_add_dependencies(&mut tasks, b, &[a]),
        Err(RejectionReason::CycleDetected)
    );
}

#[test]
fn self_and_unknown_rejections() {
    let mut tasks = vec![Task::new("a")];
    let a = tasks[0].id;
    let ghost = TaskId::new();

    assert_eq!(
        try_add_dependencies(&mut tasks, a, &[a]),
        Err(RejectionReason::SelfDependency)
    );
    assert_eq!(
        try_add_dependencies(&mut tasks, a, &[ghost]),
        Err(RejectionReason::UnknownDependency { id: ghost })
    );
    // Nothing was persisted by the rejected edits.
    assert!(tasks[0].blocked_by.is_empty());
}

#[test]
fn verdict_shape_for_the_portal() {
    let tasks = vec![Task::new("a")];
    let a = tasks[0].id;

    let accepted = Verdict::from(validate_dependencies(a, &[], &tasks));
    assert_eq!(serde_json::to_string(&accepted).unwrap(), "{\"ok\":true}");

    let rejected = Verdict::from(validate_dependencies(a, &[a], &tasks));
    let json = serde_json::to_string(&rejected).unwrap();
    assert!(json.contains("\"ok\":false"));
    assert!(json.contains("self_dependency"));
}

#[test]
fn blocked_task_becomes_eligible_when_dependency_completes() {
    // Scenario: X is blocked on Y; Y completes; the resolver reports X.
    let mut tasks = chain(&["y", "x"]);
    let (y, x) = (tasks[0].id, tasks[1].id);
    find_mut(&mut tasks, x).block();

    assert!(compute_newly_unblocked(&tasks).is_empty());
    assert!(!can_start(&tasks[1], &tasks));

    find_mut(&mut tasks, y).complete();
    assert_eq!(compute_newly_unblocked(&tasks), vec![x]);

    // The portal writes the transition; a re-run reports nothing.
    find_mut(&mut tasks, x).unblock();
    assert!(compute_newly_unblocked(&tasks).is_empty());
    assert!(can_start(&tasks[1], &tasks));
}

#[test]
fn multi_blocker_task_waits_for_all() {
    let a = Task::new("a");
    let b = Task::new("b");
    let mut c = Task::new("c");
    c.blocked_by.push(a.id);
    c.blocked_by.push(b.id);
    c.block();
    let c_id = c.id;
    let mut tasks = vec![a, b, c];

    tasks[0].complete();
    let map = compute_blocking_map(&tasks);
    assert_eq!(map[&c_id], vec![tasks[1].id]);
    assert!(compute_newly_unblocked(&tasks).is_empty());

    tasks[1].complete();
    assert_eq!(compute_newly_unblocked(&tasks), vec![c_id]);
}

#[test]
fn out_of_band_deletion_does_not_jam_the_schedule() {
    // A dependency was deleted after the edge was created. The
    // validator would refuse to create such an edge today, but the
    // resolver tolerates the existing one.
    let mut tasks = chain(&["doomed", "survivor"]);
    let survivor = tasks[1].id;
    find_mut(&mut tasks, survivor).block();
    tasks.remove(0);

    let ghost = tasks[0].blocked_by[0];
    assert_eq!(
        validate_dependencies(survivor, &[ghost], &tasks),
        Err(RejectionReason::UnknownDependency { id: ghost })
    );
    assert_eq!(compute_newly_unblocked(&tasks), vec![survivor]);
}

#[test]
fn cross_substage_edges_are_validated_like_any_other() {
    // The engine places no scope restriction: a dependency on a task
    // from another sub-stage validates over the combined snapshot.
    let here = chain(&["local-a", "local-b"]);
    let there = Task::new("remote");
    let mut all: Vec<Task> = here.clone();
    all.push(there.clone());

    assert!(validate_dependencies(here[1].id, &[there.id], &all).is_ok());
}
