//! Factor scorers - pure mappings from task attributes to 0-100 scores.

use chrono::NaiveDate;
use taskrank_core::DEFAULT_ESTIMATED_HOURS;

/// Urgency curve: whole days until due -> score, interpolated linearly.
const URGENCY_CURVE: &[(f64, f64)] = &[
    (0.0, 95.0),
    (1.0, 94.0),
    (3.0, 80.0),
    (7.0, 50.0),
    (14.0, 30.0),
    (60.0, 10.0),
];

/// Effort curve: estimated hours -> score. Lower effort scores higher.
const EFFORT_CURVE: &[(f64, f64)] = &[
    (1.0, 100.0),
    (2.0, 90.0),
    (4.0, 70.0),
    (8.0, 40.0),
    (16.0, 20.0),
    (24.0, 10.0),
];

/// One factor's numeric score plus the qualitative label shown in
/// explanations. The label never feeds back into the numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorScore {
    /// Score in [0, 100]
    pub value: f64,
    /// Qualitative label for the explanation line
    pub detail: String,
}

impl FactorScore {
    fn new(value: f64, detail: impl Into<String>) -> Self {
        Self {
            value,
            detail: detail.into(),
        }
    }
}

/// All four factor scores for one task.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorScores {
    /// Due-date proximity score
    pub urgency: FactorScore,
    /// User-rated importance score
    pub importance: FactorScore,
    /// Inverted effort score (quick wins rank high)
    pub effort: FactorScore,
    /// Dependency-position score
    pub dependency: FactorScore,
}

/// Linear interpolation over a breakpoint table, clamped at both ends.
fn piecewise(curve: &[(f64, f64)], x: f64) -> f64 {
    let (first_x, first_y) = curve[0];
    if x <= first_x {
        return first_y;
    }
    for pair in curve.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if x <= x1 {
            return y0 + (y1 - y0) * (x - x0) / (x1 - x0);
        }
    }
    curve[curve.len() - 1].1
}

/// Score due-date proximity against a reference date.
///
/// Overdue tasks peg at 100, tasks without a due date sit at a neutral 50,
/// and everything else falls on the urgency curve down to a floor of 10.
pub fn urgency_score(due_date: Option<NaiveDate>, today: NaiveDate) -> FactorScore {
    let Some(due) = due_date else {
        return FactorScore::new(50.0, "No due date set (neutral urgency)");
    };

    let days = (due - today).num_days();
    if days < 0 {
        return FactorScore::new(100.0, format!("OVERDUE by {} day(s)!", -days));
    }
    if days == 0 {
        return FactorScore::new(95.0, "Due TODAY!");
    }

    let value = piecewise(URGENCY_CURVE, days as f64);
    let detail = if days <= 3 {
        format!("Due in {days} day(s) - High urgency")
    } else if days <= 7 {
        format!("Due in {days} day(s) - Medium urgency")
    } else if days <= 14 {
        format!("Due in {days} day(s) - Low urgency")
    } else {
        format!("Due in {days} day(s) - Not urgent")
    };

    FactorScore::new(value, detail)
}

/// Score the 1-10 importance rating, clamping out-of-range input.
pub fn importance_score(importance: i64) -> FactorScore {
    let rating = importance.clamp(1, 10);
    let label = if rating >= 8 {
        "Critical"
    } else if rating >= 6 {
        "High"
    } else if rating >= 4 {
        "Medium"
    } else {
        "Low"
    };

    FactorScore::new(
        (rating * 10) as f64,
        format!("Importance: {label} ({rating}/10)"),
    )
}

/// Score the effort estimate. Non-positive hours fall back to the default
/// estimate; anything at or under an hour is a maximal quick win.
pub fn effort_score(estimated_hours: f64) -> FactorScore {
    let hours = if estimated_hours > 0.0 {
        estimated_hours
    } else {
        DEFAULT_ESTIMATED_HOURS
    };
    let hours = hours.max(0.1);

    let value = piecewise(EFFORT_CURVE, hours);
    let category = if hours <= 1.0 {
        "Quick task"
    } else if hours <= 2.0 {
        "Quick win"
    } else if hours <= 4.0 {
        "Half-day task"
    } else if hours <= 8.0 {
        "Full-day task"
    } else if hours <= 16.0 {
        "Multi-day task"
    } else {
        "Major effort"
    };

    FactorScore::new(value, format!("{category} ({hours}h estimated)"))
}

/// Score a task's position in the dependency graph.
///
/// Unblocking other tasks dominates: a task on the critical path scores
/// high even when its own prerequisites are outstanding.
pub fn dependency_score(blocks_count: usize, declared_dependencies: usize) -> FactorScore {
    if blocks_count >= 3 {
        FactorScore::new(100.0, format!("Blocks {blocks_count} tasks - Critical path!"))
    } else if blocks_count == 2 {
        FactorScore::new(80.0, "Blocks 2 tasks")
    } else if blocks_count == 1 {
        FactorScore::new(60.0, "Blocks 1 task")
    } else if declared_dependencies > 0 {
        FactorScore::new(
            20.0,
            format!("Blocked by {declared_dependencies} other task(s)"),
        )
    } else {
        FactorScore::new(40.0, "Independent task")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_urgency_breakpoints() {
        let today = date(2026, 8, 4);

        let at = |days: i64| urgency_score(Some(today + chrono::Days::new(days as u64)), today);
        assert_eq!(at(0).value, 95.0);
        assert_eq!(at(1).value, 94.0);
        assert_eq!(at(3).value, 80.0);
        assert_eq!(at(7).value, 50.0);
        assert_eq!(at(14).value, 30.0);
        assert_eq!(at(60).value, 10.0);
        assert_eq!(at(365).value, 10.0);
    }

    #[test]
    fn test_urgency_interpolates_between_breakpoints() {
        let today = date(2026, 8, 4);
        let two_days = urgency_score(Some(date(2026, 8, 6)), today);
        // Midway between (1, 94) and (3, 80).
        assert_eq!(two_days.value, 87.0);

        let five_days = urgency_score(Some(date(2026, 8, 9)), today);
        assert_eq!(five_days.value, 65.0);
    }

    #[test]
    fn test_urgency_overdue_beats_neutral() {
        let today = date(2026, 8, 4);
        let overdue = urgency_score(Some(date(2026, 8, 1)), today);
        let neutral = urgency_score(None, today);

        assert_eq!(overdue.value, 100.0);
        assert_eq!(overdue.detail, "OVERDUE by 3 day(s)!");
        assert_eq!(neutral.value, 50.0);
        assert!(overdue.value > neutral.value);
    }

    #[test]
    fn test_urgency_non_increasing_in_days() {
        let today = date(2026, 8, 4);
        let mut last = f64::INFINITY;
        for days in 0..90 {
            let score = urgency_score(Some(today + chrono::Days::new(days)), today).value;
            assert!(
                score <= last,
                "urgency increased at day {days}: {score} > {last}"
            );
            last = score;
        }
    }

    #[test]
    fn test_importance_scale_and_clamp() {
        assert_eq!(importance_score(10).value, 100.0);
        assert_eq!(importance_score(5).value, 50.0);
        assert_eq!(importance_score(1).value, 10.0);
        // Out-of-range ratings clamp instead of failing.
        assert_eq!(importance_score(0).value, 10.0);
        assert_eq!(importance_score(-3).value, 10.0);
        assert_eq!(importance_score(99).value, 100.0);
    }

    #[test]
    fn test_importance_strictly_increasing() {
        for rating in 1..10 {
            assert!(importance_score(rating + 1).value > importance_score(rating).value);
        }
    }

    #[test]
    fn test_importance_labels() {
        assert_eq!(importance_score(8).detail, "Importance: Critical (8/10)");
        assert_eq!(importance_score(6).detail, "Importance: High (6/10)");
        assert_eq!(importance_score(4).detail, "Importance: Medium (4/10)");
        assert_eq!(importance_score(2).detail, "Importance: Low (2/10)");
    }

    #[test]
    fn test_effort_breakpoints() {
        assert_eq!(effort_score(0.5).value, 100.0);
        assert_eq!(effort_score(1.0).value, 100.0);
        assert_eq!(effort_score(2.0).value, 90.0);
        assert_eq!(effort_score(3.0).value, 80.0);
        assert_eq!(effort_score(4.0).value, 70.0);
        assert_eq!(effort_score(8.0).value, 40.0);
        assert_eq!(effort_score(16.0).value, 20.0);
        assert_eq!(effort_score(24.0).value, 10.0);
        assert_eq!(effort_score(100.0).value, 10.0);
    }

    #[test]
    fn test_effort_non_increasing_in_hours() {
        let mut last = f64::INFINITY;
        for tenths in 1..300 {
            let score = effort_score(tenths as f64 / 10.0).value;
            assert!(score <= last);
            last = score;
        }
    }

    #[test]
    fn test_effort_non_positive_hours_use_default() {
        assert_eq!(effort_score(0.0).value, effort_score(4.0).value);
        assert_eq!(effort_score(-2.0).value, effort_score(4.0).value);
    }

    #[test]
    fn test_dependency_precedence() {
        // Unblocking dominates the unmet-dependency penalty.
        assert_eq!(dependency_score(3, 5).value, 100.0);
        assert_eq!(dependency_score(4, 0).value, 100.0);
        assert_eq!(dependency_score(2, 1).value, 80.0);
        assert_eq!(dependency_score(1, 0).value, 60.0);
        assert_eq!(dependency_score(0, 2).value, 20.0);
        assert_eq!(dependency_score(0, 0).value, 40.0);
    }

    #[test]
    fn test_dependency_labels() {
        assert_eq!(
            dependency_score(3, 0).detail,
            "Blocks 3 tasks - Critical path!"
        );
        assert_eq!(dependency_score(0, 2).detail, "Blocked by 2 other task(s)");
        assert_eq!(dependency_score(0, 0).detail, "Independent task");
    }
}
