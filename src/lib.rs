// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Step Goal Planner: daily walking pace needed to hit a step or distance goal
//!
//! The projection itself is a pure function of the goal and today's date
//! ([`services::project_goal`]). Around it sit a presentation adapter that
//! formats results for a view layer, static help content, stride/speed
//! calibration helpers and a debounced recalculation worker.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;
pub mod units;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured JSON logging.
///
/// `RUST_LOG` overrides the default filter. Safe to call more than once;
/// only the first call installs a subscriber.
pub fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,step_goal_planner=debug"));

    if tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .try_init()
        .is_err()
    {
        tracing::debug!("Logging already initialized");
    }
}
