// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::NaiveDate;
use step_goal_planner::models::{GoalOutcome, GoalProjection, PaceAdvisory};

/// Fixed "today" so tests never depend on the wall clock.
#[allow(dead_code)]
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 16).unwrap()
}

/// `today()` shifted by `days`.
#[allow(dead_code)]
pub fn days_from_today(days: i64) -> NaiveDate {
    today() + chrono::Duration::days(days)
}

/// Unwrap a pace outcome, failing the test on `AlreadyAchieved`.
#[allow(dead_code)]
pub fn expect_pace(outcome: GoalOutcome) -> (GoalProjection, PaceAdvisory) {
    match outcome {
        GoalOutcome::PaceRequired {
            projection,
            advisory,
        } => (projection, advisory),
        GoalOutcome::AlreadyAchieved => panic!("Expected a pace, goal was already achieved"),
    }
}

#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
