//! Batch input parsing and normalization.
//!
//! Accepts either a bare JSON array of tasks or an object wrapping the
//! array with an optional strategy name. Tasks submitted without an id
//! get sequential ids (1..=N) in input order.

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use taskrank_core::{Task, TaskId, DEFAULT_ESTIMATED_HOURS, DEFAULT_IMPORTANCE};
use thiserror::Error;

/// Errors from reading or normalizing an input batch.
#[derive(Debug, Error)]
pub enum InputError {
    /// Two tasks ended up with the same id
    #[error("duplicate task id {0}")]
    DuplicateId(TaskId),

    /// The batch file could not be read
    #[error("failed to read {path}")]
    Io {
        /// Path that failed to open
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid task JSON
    #[error("invalid task JSON")]
    Parse(#[from] serde_json::Error),
}

/// A task as submitted, before ids are assigned.
#[derive(Debug, Deserialize)]
pub struct RawTask {
    /// Caller-assigned id, if any
    #[serde(default)]
    pub id: Option<TaskId>,

    /// Display title
    pub title: String,

    /// Optional due date
    #[serde(default)]
    pub due_date: Option<NaiveDate>,

    /// Effort estimate in hours
    #[serde(default = "default_estimated_hours")]
    pub estimated_hours: f64,

    /// Importance rating on a 1-10 scale
    #[serde(default = "default_importance")]
    pub importance: i64,

    /// Ids of prerequisite tasks
    #[serde(default)]
    pub dependencies: Vec<TaskId>,
}

fn default_importance() -> i64 {
    DEFAULT_IMPORTANCE
}

fn default_estimated_hours() -> f64 {
    DEFAULT_ESTIMATED_HOURS
}

/// The two accepted request shapes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BatchRequest {
    /// Bare array of tasks
    Tasks(Vec<RawTask>),
    /// Object wrapping the array, optionally naming a strategy
    Wrapped {
        tasks: Vec<RawTask>,
        #[serde(default)]
        strategy: Option<String>,
    },
}

/// A normalized input batch.
#[derive(Debug)]
pub struct Batch {
    /// Tasks with ids assigned
    pub tasks: Vec<Task>,

    /// Strategy named inside the file, if any
    pub strategy: Option<String>,
}

/// Read and normalize a batch file.
pub fn load_batch(path: &Path) -> Result<Batch, InputError> {
    let text = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_batch(&text)
}

/// Parse and normalize batch JSON.
pub fn parse_batch(text: &str) -> Result<Batch, InputError> {
    let request: BatchRequest = serde_json::from_str(text)?;
    let (raw, strategy) = match request {
        BatchRequest::Tasks(raw) => (raw, None),
        BatchRequest::Wrapped { tasks, strategy } => (tasks, strategy),
    };

    Ok(Batch {
        tasks: normalize(raw)?,
        strategy,
    })
}

/// Assign missing ids sequentially and reject duplicates.
pub fn normalize(raw: Vec<RawTask>) -> Result<Vec<Task>, InputError> {
    let mut seen = HashSet::new();

    raw.into_iter()
        .enumerate()
        .map(|(index, raw)| {
            let id = raw.id.unwrap_or_else(|| TaskId::new(index as u64 + 1));
            if !seen.insert(id) {
                return Err(InputError::DuplicateId(id));
            }
            Ok(Task {
                id,
                title: raw.title,
                due_date: raw.due_date,
                estimated_hours: raw.estimated_hours,
                importance: raw.importance,
                dependencies: raw.dependencies,
            })
        })
        .collect()
}
