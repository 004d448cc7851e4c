// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Presentation adapter: turns projection outcomes into display-ready text.
//!
//! The view layer only lays out what is produced here; all rounding and
//! number formatting happens in this module.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::PlanError;
use crate::models::{GoalOutcome, GoalProjection, PaceAdvisory};
use crate::units::MINUTES_PER_HOUR;

/// Visual treatment of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ReportVariant {
    Success,
    Warning,
}

/// One labelled result value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ReportFigure {
    pub label: String,
    pub value: String,
}

/// Everything the results panel shows for one calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Report {
    pub variant: ReportVariant,
    pub headline: String,
    pub message: String,
    pub note: Option<String>,
    pub figures: Vec<ReportFigure>,
}

/// Render a projection outcome.
pub fn render_outcome(outcome: &GoalOutcome) -> Report {
    match outcome {
        GoalOutcome::AlreadyAchieved => Report {
            variant: ReportVariant::Success,
            headline: "Congratulations!".to_string(),
            message: "You've already achieved your goal!".to_string(),
            note: None,
            figures: Vec::new(),
        },
        GoalOutcome::PaceRequired {
            projection,
            advisory,
        } => render_pace(projection, advisory),
    }
}

/// Render a planning error.
pub fn render_error(err: &PlanError) -> Report {
    Report {
        variant: ReportVariant::Warning,
        headline: "Error".to_string(),
        message: err.to_string(),
        note: None,
        figures: Vec::new(),
    }
}

/// Render either result of [`crate::services::project_goal`].
pub fn render(result: &Result<GoalOutcome, PlanError>) -> Report {
    match result {
        Ok(outcome) => render_outcome(outcome),
        Err(err) => render_error(err),
    }
}

fn render_pace(projection: &GoalProjection, advisory: &PaceAdvisory) -> Report {
    let (variant, headline, message) = if projection.achievable {
        (
            ReportVariant::Success,
            "Achievable!",
            "This target looks achievable with consistent effort.",
        )
    } else {
        (
            ReportVariant::Warning,
            "Challenging!",
            "This target is quite ambitious - you may want to consider if it's realistic for your lifestyle.",
        )
    };

    let note = advisory.exceeds_double_average.then(|| {
        format!(
            "This requires more than doubling your current average of {} steps/day.",
            format_thousands(advisory.current_daily_average.round())
        )
    });

    let figures = vec![
        figure(
            "Steps Remaining",
            format!("{} steps", format_thousands(projection.steps_remaining.ceil())),
        ),
        figure(
            "Days Remaining",
            format!("{} days", projection.days_remaining),
        ),
        figure(
            "Daily Steps Needed",
            format!(
                "{} steps/day",
                format_thousands(projection.daily_steps_needed.ceil())
            ),
        ),
        figure(
            "Daily Distance Needed",
            format!(
                "{:.1} km ({:.1} miles)",
                projection.daily_km_needed, projection.daily_miles_needed
            ),
        ),
        figure(
            "Daily Walking Time Needed",
            format_hours_minutes(projection.daily_time_hours),
        ),
    ];

    Report {
        variant,
        headline: headline.to_string(),
        message: message.to_string(),
        note,
        figures,
    }
}

fn figure(label: &str, value: String) -> ReportFigure {
    ReportFigure {
        label: label.to_string(),
        value,
    }
}

/// Format a whole number with comma thousands separators.
pub fn format_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0.0 && digits != "0" {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format fractional hours as `"{h}h {m}min"`.
pub fn format_hours_minutes(hours: f64) -> String {
    let mut whole = hours.floor();
    let mut minutes = ((hours - whole) * MINUTES_PER_HOUR).round();
    if minutes >= MINUTES_PER_HOUR {
        whole += 1.0;
        minutes = 0.0;
    }
    format!("{whole:.0}h {minutes:.0}min")
}
