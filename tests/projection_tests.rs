// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Goal projection behaviour tests.
//!
//! These pin the arithmetic the results panel depends on: day counting,
//! unit normalization and the achievable threshold.

use step_goal_planner::error::PlanError;
use step_goal_planner::models::{DistanceUnit, GoalInput, GoalOutcome, GoalType};
use step_goal_planner::services::project_goal;
use step_goal_planner::units::KM_PER_MILE;

mod common;
use common::{assert_close, days_from_today, expect_pace, today};

#[test]
fn test_goal_already_met() {
    for days in [0, 1, 30, 365] {
        let input = GoalInput::steps(100_000.0, 100_000.0, days_from_today(days));
        assert_eq!(
            project_goal(&input, today()).unwrap(),
            GoalOutcome::AlreadyAchieved
        );
    }
}

#[test]
fn test_steps_goal_ten_days() {
    let input = GoalInput::steps(200_000.0, 50_000.0, days_from_today(9));
    let (projection, _) = expect_pace(project_goal(&input, today()).unwrap());

    assert_eq!(projection.days_remaining, 10);
    assert_eq!(projection.daily_steps_needed, 15_000.0);
}

#[test]
fn test_miles_goal_converts_through_stride() {
    let input = GoalInput::distance(10.0, 0.0, DistanceUnit::Miles, days_from_today(4));
    assert_eq!(input.steps_per_km, 1400.0);

    let (projection, _) = expect_pace(project_goal(&input, today()).unwrap());

    assert_eq!(projection.days_remaining, 5);
    assert_close(projection.steps_remaining, 22_530.76);
    assert_close(projection.daily_steps_needed, 4_506.152);
    assert_close(projection.daily_km_needed, 10.0 * KM_PER_MILE / 5.0);
    assert_close(projection.daily_miles_needed, 2.0);
}

#[test]
fn test_km_goal_with_custom_stride_and_speed() {
    let input = GoalInput {
        steps_per_km: 1250.0,
        walking_speed_kmh: 4.0,
        ..GoalInput::distance(100.0, 40.0, DistanceUnit::Km, days_from_today(29))
    };
    assert_eq!(input.goal_type, GoalType::Distance);

    let (projection, _) = expect_pace(project_goal(&input, today()).unwrap());

    assert_eq!(projection.days_remaining, 30);
    assert_eq!(projection.steps_remaining, 75_000.0);
    assert_eq!(projection.daily_steps_needed, 2_500.0);
    assert_eq!(projection.daily_km_needed, 2.0);
    assert_eq!(projection.daily_time_hours, 0.5);
}

#[test]
fn test_distance_unit_ignored_for_steps_goal() {
    let mut input = GoalInput::steps(30_000.0, 0.0, days_from_today(2));
    input.distance_unit = DistanceUnit::Miles;

    let (projection, _) = expect_pace(project_goal(&input, today()).unwrap());
    assert_eq!(projection.daily_steps_needed, 10_000.0);
}

#[test]
fn test_inclusive_day_convention() {
    let input = GoalInput::steps(9_000.0, 0.0, today());
    let (projection, _) = expect_pace(project_goal(&input, today()).unwrap());
    assert_eq!(projection.days_remaining, 1);

    let input = GoalInput::steps(9_000.0, 0.0, days_from_today(-1));
    let err = project_goal(&input, today()).unwrap_err();
    assert_eq!(err, PlanError::InvalidDate);
    assert_eq!(err.to_string(), "Target date must be in the future!");
}

#[test]
fn test_miles_round_trip_to_km() {
    let cases = [
        GoalInput::steps(1_000_000.0, 12_345.0, days_from_today(100)),
        GoalInput::steps(7.0, 0.0, days_from_today(3)),
        GoalInput::distance(42.195, 3.3, DistanceUnit::Km, days_from_today(11)),
        GoalInput::distance(500.0, 499.5, DistanceUnit::Miles, days_from_today(0)),
    ];

    for input in &cases {
        let (projection, _) = expect_pace(project_goal(input, today()).unwrap());
        let km = projection.daily_miles_needed * KM_PER_MILE;
        assert!(
            (km - projection.daily_km_needed).abs() <= 1e-9 * projection.daily_km_needed.max(1.0),
            "miles {} does not round-trip to km {}",
            projection.daily_miles_needed,
            projection.daily_km_needed
        );
    }
}

#[test]
fn test_achievable_threshold_is_inclusive() {
    let exactly = GoalInput::steps(75_000.0, 0.0, days_from_today(2));
    let (projection, _) = expect_pace(project_goal(&exactly, today()).unwrap());
    assert_eq!(projection.daily_steps_needed, 25_000.0);
    assert!(projection.achievable);

    let above = GoalInput::steps(75_003.0, 0.0, days_from_today(2));
    let (projection, _) = expect_pace(project_goal(&above, today()).unwrap());
    assert!(projection.daily_steps_needed > 25_000.0);
    assert!(!projection.achievable);
}

#[test]
fn test_zero_progress_always_exceeds_average() {
    let input = GoalInput::steps(1_000.0, 0.0, days_from_today(10));
    let (_, advisory) = expect_pace(project_goal(&input, today()).unwrap());

    assert_eq!(advisory.current_daily_average, 0.0);
    assert!(advisory.exceeds_double_average);
}

#[test]
fn test_average_uses_days_elapsed_this_month() {
    // today() is July 16th: 15 days elapsed
    let input = GoalInput::steps(200_000.0, 150_000.0, days_from_today(4));
    let (projection, advisory) = expect_pace(project_goal(&input, today()).unwrap());

    assert_eq!(advisory.current_daily_average, 10_000.0);
    assert_eq!(projection.daily_steps_needed, 10_000.0);
    assert!(!advisory.exceeds_double_average);
}
