//! Top-N task suggestions with human-friendly reasons.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use taskrank_core::{ScoredTask, Task};

use crate::engine::PriorityEngine;
use crate::graph::DependencyGraph;

/// A ranked recommendation for what to work on next.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    /// 1-based rank among the suggestions
    pub rank: usize,

    /// The scored task being recommended
    pub task: ScoredTask,

    /// Why this task made the cut
    pub reason: String,
}

impl PriorityEngine {
    /// Rank the batch and return the top `count` tasks with a short
    /// narrative reason each.
    pub fn suggest(&self, tasks: &[Task], now: DateTime<Utc>, count: usize) -> Vec<Suggestion> {
        let today = now.date_naive();
        let graph = DependencyGraph::build(tasks);
        let analysis = self.analyze(tasks, now);

        analysis
            .tasks
            .into_iter()
            .take(count)
            .enumerate()
            .map(|(index, scored)| {
                let rank = index + 1;
                let blocks = graph.blocks_count(scored.task.id);
                let reason = suggestion_reason(&scored, blocks, today, rank);
                Suggestion {
                    rank,
                    task: scored,
                    reason,
                }
            })
            .collect()
    }
}

fn suggestion_reason(scored: &ScoredTask, blocks: usize, today: NaiveDate, rank: usize) -> String {
    let mut reasons = Vec::new();

    if let Some(due) = scored.task.due_date {
        let days = (due - today).num_days();
        if days < 0 {
            reasons.push(format!("overdue by {} day(s)", -days));
        } else if days == 0 {
            reasons.push("due today".to_string());
        } else if days <= 3 {
            reasons.push(format!("due in {days} day(s)"));
        }
    }

    if scored.task.importance >= 8 {
        reasons.push("marked as highly important".to_string());
    }

    if scored.task.estimated_hours > 0.0 && scored.task.estimated_hours <= 2.0 {
        reasons.push("a quick win you can complete fast".to_string());
    }

    if blocks > 0 {
        reasons.push("blocking other tasks from starting".to_string());
    }

    let score = scored.priority_score;
    if reasons.is_empty() {
        format!("#{rank} Priority (Score: {score}): Good balance of urgency, importance, and effort.")
    } else {
        format!("#{rank} Priority (Score: {score}): {}.", capitalize(&reasons.join(", ")))
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
