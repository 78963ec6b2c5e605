//! Task model - the unit of work being ranked.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::id::TaskId;

/// Default importance rating when the caller supplies none.
pub const DEFAULT_IMPORTANCE: i64 = 5;

/// Default effort estimate (hours) when the caller supplies none.
pub const DEFAULT_ESTIMATED_HOURS: f64 = 4.0;

/// A task submitted for priority analysis.
///
/// Tasks are transient: they exist only for the duration of one analysis
/// call and carry no completion state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier within the batch
    pub id: TaskId,

    /// Display title, opaque to scoring
    pub title: String,

    /// Optional due date; absence means neutral urgency
    #[serde(default)]
    pub due_date: Option<NaiveDate>,

    /// Effort estimate in hours
    #[serde(default = "default_estimated_hours")]
    pub estimated_hours: f64,

    /// Importance rating on a 1-10 scale
    #[serde(default = "default_importance")]
    pub importance: i64,

    /// Ids of tasks that must complete before this one; may reference
    /// ids outside the batch
    #[serde(default)]
    pub dependencies: Vec<TaskId>,
}

fn default_importance() -> i64 {
    DEFAULT_IMPORTANCE
}

fn default_estimated_hours() -> f64 {
    DEFAULT_ESTIMATED_HOURS
}

impl Task {
    /// Create a task with default importance and effort.
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            due_date: None,
            estimated_hours: DEFAULT_ESTIMATED_HOURS,
            importance: DEFAULT_IMPORTANCE,
            dependencies: Vec::new(),
        }
    }

    /// Set the due date.
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Set the effort estimate in hours.
    pub fn with_estimated_hours(mut self, hours: f64) -> Self {
        self.estimated_hours = hours;
        self
    }

    /// Set the importance rating.
    pub fn with_importance(mut self, importance: i64) -> Self {
        self.importance = importance;
        self
    }

    /// Set the dependency list.
    pub fn with_dependencies(mut self, dependencies: Vec<TaskId>) -> Self {
        self.dependencies = dependencies;
        self
    }
}

/// A task plus its computed priority.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredTask {
    /// The input task
    #[serde(flatten)]
    pub task: Task,

    /// Composite priority score in [0, 100]
    pub priority_score: f64,

    /// Categorical level derived from the score
    pub priority_level: PriorityLevel,

    /// Per-factor breakdown of the score
    pub explanation: String,
}

/// Categorical priority derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityLevel {
    /// Score >= 70
    High,
    /// Score >= 40
    Medium,
    /// Everything below
    Low,
}

impl PriorityLevel {
    /// Map a composite score to its level.
    pub fn for_score(score: f64) -> Self {
        if score >= 70.0 {
            Self::High
        } else if score >= 40.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
