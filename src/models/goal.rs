// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Goal input model and form parsing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::config::Config;
use crate::error::{PlanError, Result};
use crate::units::{DEFAULT_STEPS_PER_KM, DEFAULT_WALKING_SPEED_KMH, KM_PER_MILE};

/// What the goal is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum GoalType {
    #[default]
    Steps,
    Distance,
}

impl GoalType {
    /// Whether the view should show the distance unit selector.
    pub fn shows_distance_unit(self) -> bool {
        self == GoalType::Distance
    }
}

impl FromStr for GoalType {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "steps" => Ok(GoalType::Steps),
            "distance" => Ok(GoalType::Distance),
            other => Err(PlanError::invalid_field("goalType", other)),
        }
    }
}

/// Unit for distance goals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum DistanceUnit {
    #[default]
    Km,
    Miles,
}

impl DistanceUnit {
    /// Multiplier converting an amount in this unit to kilometres.
    pub fn km_factor(self) -> f64 {
        match self {
            DistanceUnit::Km => 1.0,
            DistanceUnit::Miles => KM_PER_MILE,
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "" | "km" => Ok(DistanceUnit::Km),
            "miles" => Ok(DistanceUnit::Miles),
            other => Err(PlanError::invalid_field("distanceUnit", other)),
        }
    }
}

/// Parameters for one goal projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GoalInput {
    pub goal_type: GoalType,
    /// Goal size, in steps or in `distance_unit`
    pub goal_amount: f64,
    /// Progress so far, same unit as `goal_amount`
    pub current_progress: f64,
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub target_date: NaiveDate,
    #[serde(default = "default_steps_per_km")]
    pub steps_per_km: f64,
    #[serde(default = "default_walking_speed_kmh")]
    pub walking_speed_kmh: f64,
    /// Only meaningful for distance goals
    #[serde(default)]
    pub distance_unit: DistanceUnit,
}

fn default_steps_per_km() -> f64 {
    DEFAULT_STEPS_PER_KM
}

fn default_walking_speed_kmh() -> f64 {
    DEFAULT_WALKING_SPEED_KMH
}

impl GoalInput {
    /// A step-count goal with default stride and speed.
    pub fn steps(goal_amount: f64, current_progress: f64, target_date: NaiveDate) -> Self {
        Self {
            goal_type: GoalType::Steps,
            goal_amount,
            current_progress,
            target_date,
            steps_per_km: DEFAULT_STEPS_PER_KM,
            walking_speed_kmh: DEFAULT_WALKING_SPEED_KMH,
            distance_unit: DistanceUnit::Km,
        }
    }

    /// A distance goal with default stride and speed.
    pub fn distance(
        goal_amount: f64,
        current_progress: f64,
        unit: DistanceUnit,
        target_date: NaiveDate,
    ) -> Self {
        Self {
            goal_type: GoalType::Distance,
            distance_unit: unit,
            ..Self::steps(goal_amount, current_progress, target_date)
        }
    }

    /// Convert an amount in the goal's unit to steps.
    pub fn to_steps(&self, amount: f64) -> f64 {
        match self.goal_type {
            GoalType::Steps => amount,
            GoalType::Distance => amount * self.distance_unit.km_factor() * self.steps_per_km,
        }
    }
}

/// Raw form values as typed by the user.
///
/// Field names follow the form element ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GoalForm {
    pub goal_type: String,
    pub goal_amount: String,
    pub current_progress: String,
    /// `YYYY-MM-DD`, as produced by a date input
    pub target_date: String,
    pub steps_per_km: String,
    pub walking_speed: String,
    pub distance_unit: String,
}

impl GoalForm {
    /// Parse the form, filling blank stride/speed from `config`.
    ///
    /// Blank progress counts as zero. No range checks are applied.
    pub fn parse_with(&self, config: &Config) -> Result<GoalInput> {
        Ok(GoalInput {
            goal_type: self.goal_type.parse()?,
            goal_amount: parse_number("goalAmount", &self.goal_amount)?
                .ok_or_else(|| PlanError::invalid_field("goalAmount", &self.goal_amount))?,
            current_progress: parse_number("currentProgress", &self.current_progress)?
                .unwrap_or(0.0),
            target_date: NaiveDate::parse_from_str(self.target_date.trim(), "%Y-%m-%d")
                .map_err(|_| PlanError::invalid_field("targetDate", &self.target_date))?,
            steps_per_km: parse_number("stepsPerKm", &self.steps_per_km)?
                .unwrap_or(config.default_steps_per_km),
            walking_speed_kmh: parse_number("walkingSpeed", &self.walking_speed)?
                .unwrap_or(config.default_walking_speed_kmh),
            distance_unit: self.distance_unit.parse()?,
        })
    }
}

impl TryFrom<&GoalForm> for GoalInput {
    type Error = PlanError;

    fn try_from(form: &GoalForm) -> Result<Self> {
        form.parse_with(&Config::default())
    }
}

/// Parse a numeric field; blank is `None`.
fn parse_number(field: &'static str, raw: &str) -> Result<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(PlanError::invalid_field(field, raw)),
    }
}
