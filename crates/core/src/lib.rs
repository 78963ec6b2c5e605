//! TaskRank core data models.
//!
//! This crate defines the task batch types consumed and produced by the
//! priority analysis engine.

#![warn(missing_docs)]

// Core identities
mod id;

// Task batch model
mod task;

// Re-exports
pub use id::TaskId;
pub use task::{
    PriorityLevel, ScoredTask, Task, DEFAULT_ESTIMATED_HOURS, DEFAULT_IMPORTANCE,
};
