// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Conversion factors and pace policy constants.

/// Kilometres per statute mile.
pub const KM_PER_MILE: f64 = 1.60934;

/// Default stride factor (steps per kilometre) when the user has not
/// calibrated their own.
pub const DEFAULT_STEPS_PER_KM: f64 = 1400.0;

/// Default walking speed in km/h.
pub const DEFAULT_WALKING_SPEED_KMH: f64 = 5.0;

/// Daily step count above which a plan is reported as challenging
/// rather than achievable.
pub const ACHIEVABLE_DAILY_STEPS: f64 = 25_000.0;

/// Required pace is flagged when it exceeds the current daily average
/// by this factor.
pub const AVERAGE_PACE_MULTIPLIER: f64 = 2.0;

/// Minutes per hour
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Metres per kilometre
pub const METRES_PER_KM: f64 = 1000.0;
