// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Goal projection: the daily pace needed to reach a goal by a date.

use chrono::NaiveDate;

use crate::error::{PlanError, Result};
use crate::models::{GoalInput, GoalOutcome, GoalProjection, PaceAdvisory};
use crate::time_utils::{days_elapsed_in_month, days_remaining_inclusive};
use crate::units::{ACHIEVABLE_DAILY_STEPS, AVERAGE_PACE_MULTIPLIER, KM_PER_MILE};

/// Project the daily pace required to meet `input` by its target date.
///
/// `today` is supplied by the caller; see [`crate::time_utils::local_today`].
/// Fails only when the target date is before today.
pub fn project_goal(input: &GoalInput, today: NaiveDate) -> Result<GoalOutcome> {
    let days_remaining = days_remaining_inclusive(today, input.target_date);
    if days_remaining <= 0 {
        tracing::warn!(
            target_date = %input.target_date,
            today = %today,
            "Target date is in the past"
        );
        return Err(PlanError::InvalidDate);
    }

    let goal_steps = input.to_steps(input.goal_amount);
    let current_steps = input.to_steps(input.current_progress);
    let steps_remaining = goal_steps - current_steps;

    if steps_remaining <= 0.0 {
        tracing::debug!(goal_steps, current_steps, "Goal already achieved");
        return Ok(GoalOutcome::AlreadyAchieved);
    }

    let daily_steps_needed = steps_remaining / days_remaining as f64;
    let daily_km_needed = daily_steps_needed / input.steps_per_km;
    let projection = GoalProjection {
        days_remaining,
        steps_remaining,
        daily_steps_needed,
        daily_km_needed,
        daily_miles_needed: daily_km_needed / KM_PER_MILE,
        daily_time_hours: daily_km_needed / input.walking_speed_kmh,
        achievable: daily_steps_needed <= ACHIEVABLE_DAILY_STEPS,
    };

    let current_daily_average = current_steps / days_elapsed_in_month(today).max(1) as f64;
    let advisory = PaceAdvisory {
        current_daily_average,
        exceeds_double_average: daily_steps_needed
            > current_daily_average * AVERAGE_PACE_MULTIPLIER,
    };

    tracing::debug!(
        days_remaining,
        steps_remaining,
        daily_steps_needed,
        achievable = projection.achievable,
        "Projected goal pace"
    );

    Ok(GoalOutcome::PaceRequired {
        projection,
        advisory,
    })
}
