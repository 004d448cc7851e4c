// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for goal planning.

pub mod goal;
pub mod projection;

pub use goal::{DistanceUnit, GoalForm, GoalInput, GoalType};
pub use projection::{GoalOutcome, GoalProjection, PaceAdvisory};
