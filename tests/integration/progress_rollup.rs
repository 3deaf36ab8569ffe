//! Progress rollup and status suggestion across the hierarchy.
//!
//! Drives the aggregator the way the portal does after a task status
//! change: recompute the sub-stage percentage, write it onto the
//! sub-stage record, recompute the stage percentage from those, and
//! take the suggested status for both levels.

use crate::fixtures::{substage_with_progress, task_with_status};
use siteplan::config::Config;
use siteplan::core::stage::{Stage, StageStatus, SubStage};
use siteplan::core::task::TaskStatus;
use siteplan::schedule::progress::{stage_progress, stage_progress_weighted, substage_progress};
use siteplan::schedule::status::{suggest_status, SuggestedStatus};

#[test]
fn substage_percentage_from_task_statuses() {
    let tasks = vec![
        task_with_status("a", TaskStatus::Completed),
        task_with_status("b", TaskStatus::InProgress),
        task_with_status("c", TaskStatus::Pending),
    ];
    assert_eq!(substage_progress(&tasks), 33);
}

#[test]
fn weighted_stage_rollup() {
    let substages = vec![
        substage_with_progress("groundwork", 40, Some(100.0)),
        substage_with_progress("framing", 80, Some(300.0)),
    ];
    assert_eq!(stage_progress_weighted(&substages), 70);
}

#[test]
fn weighted_rollup_falls_back_without_budgets() {
    let substages = vec![
        substage_with_progress("groundwork", 40, Some(0.0)),
        substage_with_progress("framing", 80, Some(0.0)),
    ];
    assert_eq!(stage_progress_weighted(&substages), 60);
    assert_eq!(stage_progress(&substages), 60);
}

#[test]
fn empty_inputs_are_deterministic() {
    assert_eq!(substage_progress(&[]), 0);
    assert_eq!(stage_progress(&[]), 0);
    assert_eq!(stage_progress_weighted(&[]), 0);
    let no_tasks: Vec<siteplan::core::task::Task> = Vec::new();
    assert_eq!(suggest_status(&no_tasks), SuggestedStatus::NotStarted);
}

#[test]
fn rollup_after_each_status_change() {
    // A sub-stage moves from 0 to 100 as its tasks complete; the stage
    // percentage and both suggested statuses follow.
    let mut substage = SubStage::new("groundwork");
    substage.tasks = vec![
        task_with_status("excavate", TaskStatus::Pending),
        task_with_status("pour", TaskStatus::Pending),
    ];

    let mut stage = Stage::new("structural-works");

    substage.progress_percentage = substage_progress(&substage.tasks);
    assert_eq!(substage.progress_percentage, 0);
    assert_eq!(suggest_status(&substage.tasks), SuggestedStatus::NotStarted);

    substage.tasks[0].start();
    assert_eq!(suggest_status(&substage.tasks), SuggestedStatus::InProgress);

    substage.tasks[0].complete();
    substage.progress_percentage = substage_progress(&substage.tasks);
    assert_eq!(substage.progress_percentage, 50);

    substage.tasks[1].complete();
    substage.progress_percentage = substage_progress(&substage.tasks);
    substage.status = StageStatus::Completed;
    assert_eq!(substage.progress_percentage, 100);
    assert_eq!(suggest_status(&substage.tasks), SuggestedStatus::Completed);

    stage.substages.push(substage);
    stage.progress_percentage = stage_progress(&stage.substages);
    assert_eq!(stage.progress_percentage, 100);
    assert_eq!(suggest_status(&stage.substages), SuggestedStatus::Completed);
}

#[test]
fn stage_suggestion_from_mixed_substages() {
    let mut started = substage_with_progress("framing", 30, None);
    started.status = StageStatus::InProgress;
    let untouched = substage_with_progress("roofing", 0, None);

    let substages = vec![started, untouched];
    assert_eq!(suggest_status(&substages), SuggestedStatus::InProgress);
    assert_eq!(stage_progress(&substages), 15);
}

#[test]
fn config_selects_the_persisted_rollup() {
    let substages = vec![
        substage_with_progress("groundwork", 40, Some(100.0)),
        substage_with_progress("framing", 80, Some(300.0)),
    ];

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("siteplan.toml");
    std::fs::write(&path, "weighted_rollup = false\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.stage_rollup(&substages), 60);

    let default = Config::default();
    assert_eq!(default.stage_rollup(&substages), 70);
}

#[test]
fn progress_stays_within_bounds() {
    for total in 0..12usize {
        for completed in 0..=total {
            let mut tasks: Vec<_> = (0..completed)
                .map(|i| task_with_status(&format!("c{}", i), TaskStatus::Completed))
                .collect();
            tasks.extend(
                (0..total - completed)
                    .map(|i| task_with_status(&format!("p{}", i), TaskStatus::Pending)),
            );
            let p = substage_progress(&tasks);
            assert!(p <= 100);
        }
    }
}
