// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Projection results.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Daily pace required to meet a goal on schedule.
///
/// Distance and time figures are all derived from `daily_steps_needed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GoalProjection {
    /// Days left including today (always >= 1)
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub days_remaining: i64,
    pub steps_remaining: f64,
    pub daily_steps_needed: f64,
    pub daily_km_needed: f64,
    pub daily_miles_needed: f64,
    pub daily_time_hours: f64,
    /// Daily steps within the achievable threshold
    pub achievable: bool,
}

/// Comparison of the required pace against the user's recent average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PaceAdvisory {
    /// Progress so far spread over the days elapsed this month
    pub current_daily_average: f64,
    /// Required pace is more than double the current average
    pub exceeds_double_average: bool,
}

/// Result of a goal projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum GoalOutcome {
    /// Progress already meets or exceeds the goal.
    AlreadyAchieved,
    /// Walking is still needed.
    PaceRequired {
        projection: GoalProjection,
        advisory: PaceAdvisory,
    },
}

impl GoalOutcome {
    pub fn is_achieved(&self) -> bool {
        matches!(self, GoalOutcome::AlreadyAchieved)
    }

    /// The projection, unless the goal is already met.
    pub fn projection(&self) -> Option<&GoalProjection> {
        match self {
            GoalOutcome::AlreadyAchieved => None,
            GoalOutcome::PaceRequired { projection, .. } => Some(projection),
        }
    }
}
