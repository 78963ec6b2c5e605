//! Task identifiers.

use serde::{Deserialize, Serialize};

/// Unique identifier for a Task within one batch.
///
/// Ids are plain integers: either supplied by the caller or assigned
/// sequentially (1..=N) by the input layer before analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Create a TaskId from a raw integer.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw integer value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for TaskId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for TaskId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}
