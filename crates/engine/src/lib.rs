//! Priority analysis engine - factor scoring, strategy weighting, and
//! dependency-graph analysis over one task batch.
//!
//! The engine is a pure function of (batch, strategy, reference time):
//! no I/O, no shared state, nothing retained between calls.

#![warn(missing_docs)]

pub mod compose;
pub mod engine;
pub mod explain;
pub mod graph;
pub mod score;
pub mod strategy;
pub mod suggest;

pub use engine::{Analysis, PriorityEngine};
pub use graph::{CycleReport, DependencyGraph};
pub use score::{
    dependency_score, effort_score, importance_score, urgency_score, FactorScore, FactorScores,
};
pub use strategy::{Strategy, Weights};
pub use suggest::Suggestion;
