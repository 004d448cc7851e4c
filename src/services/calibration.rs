// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Stride and speed estimation from simple field measurements.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::units::{METRES_PER_KM, MINUTES_PER_HOUR};

/// Height below which the "shorter" stride range applies (cm).
const SHORT_HEIGHT_CM: f64 = 163.0;
/// Height above which the "taller" stride range applies (cm).
const TALL_HEIGHT_CM: f64 = 178.0;

/// Steps per kilometre from a counted walk over a known distance.
///
/// Returns `None` unless `metres_walked` is positive.
pub fn steps_per_km_from_walk(steps_counted: f64, metres_walked: f64) -> Option<f64> {
    (metres_walked > 0.0).then(|| steps_counted * METRES_PER_KM / metres_walked)
}

/// Walking speed from the time taken to cover `km`.
///
/// Returns `None` unless `minutes` is positive.
pub fn speed_kmh_from_timed_walk(minutes: f64, km: f64) -> Option<f64> {
    (minutes > 0.0).then(|| km * MINUTES_PER_HOUR / minutes)
}

/// Typical steps-per-km range for a walker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct StrideRange {
    pub min_steps_per_km: f64,
    pub max_steps_per_km: f64,
}

impl StrideRange {
    pub fn midpoint(&self) -> f64 {
        (self.min_steps_per_km + self.max_steps_per_km) / 2.0
    }
}

/// Typical stride range by height.
pub fn stride_range_for_height(height_cm: f64) -> StrideRange {
    let (min, max) = if height_cm < SHORT_HEIGHT_CM {
        (1500.0, 1600.0)
    } else if height_cm <= TALL_HEIGHT_CM {
        (1300.0, 1500.0)
    } else {
        (1200.0, 1400.0)
    };
    StrideRange {
        min_steps_per_km: min,
        max_steps_per_km: max,
    }
}

/// Named walking paces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum WalkingPace {
    Leisurely,
    Comfortable,
    Brisk,
    Fast,
}

impl WalkingPace {
    /// Speed range in km/h, lower bound inclusive.
    pub fn range_kmh(self) -> (f64, f64) {
        match self {
            WalkingPace::Leisurely => (3.0, 4.0),
            WalkingPace::Comfortable => (4.0, 5.0),
            WalkingPace::Brisk => (5.0, 6.0),
            WalkingPace::Fast => (6.0, 7.0),
        }
    }

    /// Classify a speed. Below 4 km/h is leisurely, 6 km/h and up is fast.
    pub fn classify(speed_kmh: f64) -> Self {
        if speed_kmh < 4.0 {
            WalkingPace::Leisurely
        } else if speed_kmh < 5.0 {
            WalkingPace::Comfortable
        } else if speed_kmh < 6.0 {
            WalkingPace::Brisk
        } else {
            WalkingPace::Fast
        }
    }
}
