// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - calculation and presentation logic.

pub mod calculator;
pub mod calibration;
pub mod help;
pub mod recalc;
pub mod report;

pub use calculator::project_goal;
pub use calibration::{StrideRange, WalkingPace};
pub use help::{help_page, HelpPage, HelpTopic};
pub use recalc::{spawn_recalc_worker, RecalcHandle, Recalculation};
pub use report::{render, render_error, render_outcome, Report, ReportVariant};
