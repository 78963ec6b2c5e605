//! The analysis engine - scores one batch and reports dependency cycles.

use chrono::{DateTime, Utc};
use serde::Serialize;
use taskrank_core::{PriorityLevel, ScoredTask, Task};
use tracing::{debug, warn};

use crate::compose::compose;
use crate::explain::build_explanation;
use crate::graph::{CycleReport, DependencyGraph};
use crate::score::{
    dependency_score, effort_score, importance_score, urgency_score, FactorScores,
};
use crate::strategy::Strategy;

/// Result of analyzing one task batch.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Scored tasks, highest priority first
    pub tasks: Vec<ScoredTask>,

    /// Dependency cycles found in the batch; reported, never fatal
    pub circular_dependencies: CycleReport,

    /// Strategy the scores were composed with
    pub strategy_used: Strategy,

    /// Number of tasks analyzed
    pub total_tasks: usize,
}

/// Scores task batches with a fixed strategy.
///
/// The engine keeps no state between calls: every analysis builds its own
/// dependency graph from the batch and produces output purely as a
/// function of (batch, strategy, now).
#[derive(Debug, Clone, Copy)]
pub struct PriorityEngine {
    strategy: Strategy,
}

impl PriorityEngine {
    /// Create an engine using the given strategy.
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    /// The strategy this engine composes scores with.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Score every task in the batch and rank the result.
    ///
    /// `now` anchors the urgency calculation; passing the same timestamp
    /// makes repeated calls byte-identical.
    pub fn analyze(&self, tasks: &[Task], now: DateTime<Utc>) -> Analysis {
        let today = now.date_naive();
        let graph = DependencyGraph::build(tasks);

        let cycles = graph.detect_cycles();
        if !cycles.is_empty() {
            warn!("{} circular dependency chain(s) detected", cycles.len());
        }

        let weights = self.strategy.weights();
        let mut scored: Vec<ScoredTask> = tasks
            .iter()
            .map(|task| {
                let scores = FactorScores {
                    urgency: urgency_score(task.due_date, today),
                    importance: importance_score(task.importance),
                    effort: effort_score(task.estimated_hours),
                    dependency: dependency_score(
                        graph.blocks_count(task.id),
                        graph.declared_dependencies(task.id),
                    ),
                };
                let priority_score = compose(&scores, &weights);
                let explanation = build_explanation(&scores, &weights);

                ScoredTask {
                    task: task.clone(),
                    priority_score,
                    priority_level: PriorityLevel::for_score(priority_score),
                    explanation,
                }
            })
            .collect();

        // Stable sort: ties keep input order.
        scored.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score));

        debug!(
            "scored {} task(s) with strategy {}",
            tasks.len(),
            self.strategy
        );

        Analysis {
            tasks: scored,
            circular_dependencies: cycles,
            strategy_used: self.strategy,
            total_tasks: tasks.len(),
        }
    }
}

impl Default for PriorityEngine {
    fn default() -> Self {
        Self::new(Strategy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use taskrank_core::TaskId;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 4, 9, 30, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_fix_bug_example_under_smart_balance() {
        let tasks = vec![Task::new(1u64, "Fix bug")
            .with_due_date(date(2026, 8, 5))
            .with_estimated_hours(3.0)
            .with_importance(8)];

        let analysis = PriorityEngine::new(Strategy::SmartBalance).analyze(&tasks, now());
        let scored = &analysis.tasks[0];

        // urgency 94, importance 80, effort 80, dependency 40
        assert_eq!(scored.priority_score, 76.9);
        assert_eq!(scored.priority_level, PriorityLevel::High);
    }

    #[test]
    fn test_scores_bounded_for_extreme_input() {
        let tasks = vec![
            Task::new(1u64, "ancient").with_due_date(date(1990, 1, 1)),
            Task::new(2u64, "distant").with_due_date(date(2099, 1, 1)),
            Task::new(3u64, "huge").with_estimated_hours(1e9),
            Task::new(4u64, "rated out of range").with_importance(i64::MAX),
            Task::new(5u64, "negative hours").with_estimated_hours(-50.0),
        ];

        for strategy in Strategy::ALL {
            let analysis = PriorityEngine::new(strategy).analyze(&tasks, now());
            for scored in &analysis.tasks {
                assert!(
                    (0.0..=100.0).contains(&scored.priority_score),
                    "score {} out of range",
                    scored.priority_score
                );
            }
        }
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let tasks = vec![
            Task::new(1u64, "a").with_importance(7),
            Task::new(2u64, "b")
                .with_dependencies(vec![TaskId::new(1), TaskId::new(9)])
                .with_due_date(date(2026, 8, 10)),
            Task::new(3u64, "c").with_dependencies(vec![TaskId::new(3)]),
        ];

        let engine = PriorityEngine::new(Strategy::DeadlineDriven);
        let first = serde_json::to_string(&engine.analyze(&tasks, now())).unwrap();
        let second = serde_json::to_string(&engine.analyze(&tasks, now())).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_ties_keep_input_order() {
        // Identical tasks score identically; input order must survive.
        let tasks = vec![
            Task::new(10u64, "same"),
            Task::new(7u64, "same"),
            Task::new(12u64, "same"),
        ];

        let analysis = PriorityEngine::default().analyze(&tasks, now());
        let order: Vec<TaskId> = analysis.tasks.iter().map(|t| t.task.id).collect();
        assert_eq!(order, vec![TaskId::new(10), TaskId::new(7), TaskId::new(12)]);
    }

    #[test]
    fn test_sorted_by_descending_score() {
        let tasks = vec![
            Task::new(1u64, "low").with_importance(1).with_estimated_hours(24.0),
            Task::new(2u64, "high")
                .with_importance(10)
                .with_due_date(date(2026, 8, 4)),
        ];

        let analysis = PriorityEngine::default().analyze(&tasks, now());
        assert_eq!(analysis.tasks[0].task.id, TaskId::new(2));
        assert!(analysis.tasks[0].priority_score >= analysis.tasks[1].priority_score);
    }

    #[test]
    fn test_strategy_changes_composition_not_factors() {
        let tasks = vec![Task::new(1u64, "quick")
            .with_estimated_hours(1.0)
            .with_importance(9)];

        let balanced = PriorityEngine::new(Strategy::SmartBalance).analyze(&tasks, now());
        let quick = PriorityEngine::new(Strategy::QuickWins).analyze(&tasks, now());

        assert_ne!(
            balanced.tasks[0].priority_score,
            quick.tasks[0].priority_score
        );
        // Raw factor labels are strategy-independent.
        assert!(balanced.tasks[0].explanation.contains("Quick task (1h estimated)"));
        assert!(quick.tasks[0].explanation.contains("Quick task (1h estimated)"));
    }

    #[test]
    fn test_cycles_reported_without_failing_scoring() {
        let tasks = vec![
            Task::new(1u64, "a").with_dependencies(vec![TaskId::new(2)]),
            Task::new(2u64, "b").with_dependencies(vec![TaskId::new(3)]),
            Task::new(3u64, "c").with_dependencies(vec![TaskId::new(1)]),
        ];

        let analysis = PriorityEngine::default().analyze(&tasks, now());
        assert_eq!(analysis.circular_dependencies.len(), 1);
        assert_eq!(analysis.tasks.len(), 3);
        assert_eq!(analysis.total_tasks, 3);
    }

    #[test]
    fn test_unblocker_outranks_blocked_peer() {
        // Task 1 blocks three others; task 5 only waits on task 1.
        let tasks = vec![
            Task::new(1u64, "unblocker").with_dependencies(vec![TaskId::new(5)]),
            Task::new(2u64, "x").with_dependencies(vec![TaskId::new(1)]),
            Task::new(3u64, "y").with_dependencies(vec![TaskId::new(1)]),
            Task::new(4u64, "z").with_dependencies(vec![TaskId::new(1)]),
            Task::new(5u64, "waiting"),
        ];

        let analysis = PriorityEngine::default().analyze(&tasks, now());
        let unblocker = analysis
            .tasks
            .iter()
            .find(|t| t.task.id == TaskId::new(1))
            .unwrap();
        assert!(unblocker.explanation.contains("Critical path!"));
    }
}
