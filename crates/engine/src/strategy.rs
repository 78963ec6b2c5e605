//! Scoring strategies - named, immutable weight tables.

use serde::Serialize;
use tracing::warn;

/// Weights applied to the four factor scores. Each strategy's weights sum
/// to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    /// Weight on the urgency score
    pub urgency: f64,
    /// Weight on the importance score
    pub importance: f64,
    /// Weight on the effort score
    pub effort: f64,
    /// Weight on the dependency score
    pub dependency: f64,
}

impl Weights {
    /// Sum of the four weights.
    pub fn sum(&self) -> f64 {
        self.urgency + self.importance + self.effort + self.dependency
    }
}

/// A named weighting strategy for composing the final score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Balanced weighting of all factors
    #[default]
    SmartBalance,
    /// Prioritize low-effort tasks for quick completion
    QuickWins,
    /// Prioritize importance above all else
    HighImpact,
    /// Prioritize approaching deadlines
    DeadlineDriven,
}

impl Strategy {
    /// Every available strategy.
    pub const ALL: [Strategy; 4] = [
        Strategy::SmartBalance,
        Strategy::QuickWins,
        Strategy::HighImpact,
        Strategy::DeadlineDriven,
    ];

    /// Resolve a strategy name, falling back to `SmartBalance` for
    /// anything unrecognized.
    pub fn parse(name: &str) -> Self {
        match name {
            "smart_balance" => Self::SmartBalance,
            "quick_wins" => Self::QuickWins,
            "high_impact" => Self::HighImpact,
            "deadline_driven" => Self::DeadlineDriven,
            other => {
                warn!("unknown strategy '{}', falling back to smart_balance", other);
                Self::SmartBalance
            }
        }
    }

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SmartBalance => "smart_balance",
            Self::QuickWins => "quick_wins",
            Self::HighImpact => "high_impact",
            Self::DeadlineDriven => "deadline_driven",
        }
    }

    /// The weight table for this strategy.
    pub fn weights(&self) -> Weights {
        match self {
            Self::SmartBalance => Weights {
                urgency: 0.35,
                importance: 0.30,
                effort: 0.15,
                dependency: 0.20,
            },
            Self::QuickWins => Weights {
                urgency: 0.15,
                importance: 0.15,
                effort: 0.55,
                dependency: 0.15,
            },
            Self::HighImpact => Weights {
                urgency: 0.15,
                importance: 0.60,
                effort: 0.10,
                dependency: 0.15,
            },
            Self::DeadlineDriven => Weights {
                urgency: 0.60,
                importance: 0.15,
                effort: 0.10,
                dependency: 0.15,
            },
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
