//! In-memory dependency graph over a task snapshot.
//!
//! The graph is rebuilt from a caller-supplied snapshot on every call;
//! there is no persistent graph state. Cycle checking for a proposed
//! edit runs a depth-first search from the edited task only, with an
//! explicit frame stack so traversal depth stays bounded on large
//! schedules. Whole-graph audits and ordering go through petgraph.

use crate::core::task::{Task, TaskId};
use crate::error::{Error, Result};
use petgraph::algo::{is_cyclic_directed, toposort};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet};

/// Adjacency view of a task snapshot: task id -> dependency ids.
///
/// Edges point from a task to the tasks it is blocked by.
pub struct DependencyGraph {
    adjacency: HashMap<TaskId, Vec<TaskId>>,
}

/// DFS frame for the explicit-stack traversal.
enum Frame {
    Enter(TaskId),
    Exit(TaskId),
}

impl DependencyGraph {
    /// Build the graph from a snapshot of tasks and their existing
    /// `blocked_by` edges.
    pub fn from_snapshot(tasks: &[Task]) -> Self {
        let adjacency = tasks
            .iter()
            .map(|task| (task.id, task.blocked_by.clone()))
            .collect();
        Self { adjacency }
    }

    /// Overlay proposed dependencies onto one task's entry. Additive:
    /// the task's existing edges are preserved, proposed ones appended.
    pub fn overlay(&mut self, subject: TaskId, proposed: &[TaskId]) {
        self.adjacency
            .entry(subject)
            .or_default()
            .extend_from_slice(proposed);
    }

    /// Check whether a cycle is reachable from `subject`.
    ///
    /// Depth-first search with a visited set and an on-stack set;
    /// reaching a node already on the traversal stack means a back-edge
    /// and therefore a cycle. Tasks unreachable from `subject` are not
    /// visited, so this is a single-start check, not a whole-graph one.
    pub fn has_cycle_from(&self, subject: TaskId) -> bool {
        let mut visited: HashSet<TaskId> = HashSet::new();
        let mut on_stack: HashSet<TaskId> = HashSet::new();
        let mut stack = vec![Frame::Enter(subject)];

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Enter(id) => {
                    if !visited.insert(id) {
                        continue;
                    }
                    on_stack.insert(id);
                    stack.push(Frame::Exit(id));

                    if let Some(deps) = self.adjacency.get(&id) {
                        for &dep in deps {
                            if on_stack.contains(&dep) {
                                return true;
                            }
                            if !visited.contains(&dep) {
                                stack.push(Frame::Enter(dep));
                            }
                        }
                    }
                }
                Frame::Exit(id) => {
                    on_stack.remove(&id);
                }
            }
        }

        false
    }

    /// Audit the whole snapshot for acyclicity.
    ///
    /// Validation keeps accepted graphs acyclic; this checks a
    /// persisted snapshot that may have been corrupted out of band.
    pub fn is_acyclic(&self) -> bool {
        !is_cyclic_directed(&self.to_digraph().0)
    }

    /// Task ids in dependency-respecting order: every task comes after
    /// all of its dependencies. Useful for schedule views.
    ///
    /// # Errors
    /// Returns a validation error if the snapshot contains a cycle.
    pub fn topological_order(&self) -> Result<Vec<TaskId>> {
        let (graph, _) = self.to_digraph();
        let sorted = toposort(&graph, None).map_err(|cycle| {
            let id = graph[cycle.node_id()];
            Error::Validation(format!("Cycle detected at task {}", id.short()))
        })?;

        // Toposort orders along edge direction; edges here point at
        // dependencies, so reverse to put dependencies first.
        Ok(sorted.into_iter().rev().map(|index| graph[index]).collect())
    }

    fn to_digraph(&self) -> (DiGraph<TaskId, ()>, HashMap<TaskId, NodeIndex>) {
        let mut graph = DiGraph::new();
        let mut index: HashMap<TaskId, NodeIndex> = HashMap::new();

        for &id in self.adjacency.keys() {
            index.entry(id).or_insert_with(|| graph.add_node(id));
        }
        for (&id, deps) in &self.adjacency {
            for &dep in deps {
                let from = index[&id];
                let to = *index.entry(dep).or_insert_with(|| graph.add_node(dep));
                graph.add_edge(from, to, ());
            }
        }

        (graph, index)
    }
}

/// Check whether adding `proposed` dependencies to `subject` would
/// create a cycle, given the snapshot's existing edges.
pub fn has_cycle(all_tasks: &[Task], subject: TaskId, proposed: &[TaskId]) -> bool {
    let mut graph = DependencyGraph::from_snapshot(all_tasks);
    graph.overlay(subject, proposed);
    graph.has_cycle_from(subject)
}
