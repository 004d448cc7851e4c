// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for calendar-day arithmetic.

use chrono::{Datelike, Local, NaiveDate};

/// Today's date in the local time zone, with the time of day dropped.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Days left until `target`, counting today as day 1.
///
/// Zero or negative when `target` is already in the past.
pub fn days_remaining_inclusive(today: NaiveDate, target: NaiveDate) -> i64 {
    (target - today).num_days() + 1
}

/// Whole days between the first of `today`'s month and `today`.
///
/// The 1st of the month yields 0.
pub fn days_elapsed_in_month(today: NaiveDate) -> i64 {
    i64::from(today.day0())
}
