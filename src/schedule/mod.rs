//! The schedule engine: dependency validation, blocking resolution,
//! progress aggregation and status suggestion.
//!
//! Every operation here is pure: it takes an immutable snapshot of
//! tasks or sub-stages supplied by the persistence collaborator and
//! returns a derived value. Nothing in this module reads or writes
//! the canonical records.

pub mod blocking;
pub mod graph;
pub mod progress;
pub mod status;
pub mod validate;

pub use blocking::{can_start, compute_blocking_map, compute_newly_unblocked};
pub use graph::DependencyGraph;
pub use progress::{stage_progress, stage_progress_weighted, substage_progress};
pub use status::{suggest_status, ChildProgress, SuggestedStatus};
pub use validate::{validate_dependencies, RejectionReason, Verdict};
