// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Static help content for the stride and speed help buttons.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Which help overlay to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum HelpTopic {
    Stride,
    Speed,
}

/// A headed bullet list. `items` are `(label, text)`; label may be empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HelpSection {
    pub heading: &'static str,
    pub items: Vec<(&'static str, &'static str)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HelpPage {
    pub title: &'static str,
    pub sections: Vec<HelpSection>,
    /// Which default the calculator uses, and why
    pub default_note: &'static str,
}

/// Help content for `topic`.
pub fn help_page(topic: HelpTopic) -> HelpPage {
    match topic {
        HelpTopic::Stride => stride_help(),
        HelpTopic::Speed => speed_help(),
    }
}

fn stride_help() -> HelpPage {
    HelpPage {
        title: "How to Estimate Steps per Kilometre",
        sections: vec![
            HelpSection {
                heading: "Quick Averages by Height:",
                items: vec![
                    ("Shorter (under 5'4\"/163cm):", "~1,500-1,600 steps/km"),
                    ("Average (5'4\"-5'10\"/163-178cm):", "~1,300-1,500 steps/km"),
                    ("Taller (over 5'10\"/178cm):", "~1,200-1,400 steps/km"),
                ],
            },
            HelpSection {
                heading: "More Accurate Methods:",
                items: vec![
                    (
                        "Walk a known distance:",
                        "Find a 1km route (track, measured path) and count your steps",
                    ),
                    (
                        "Use a football pitch:",
                        "About 100m long - walk 10 lengths and count steps, then multiply by 10",
                    ),
                    (
                        "Smartphone step counter:",
                        "Many phones have built-in step counters you can test against known distances",
                    ),
                ],
            },
        ],
        default_note: "1,400 steps/km (a good average for most people)",
    }
}

fn speed_help() -> HelpPage {
    HelpPage {
        title: "How to Estimate Walking Speed",
        sections: vec![
            HelpSection {
                heading: "Typical Walking Speeds:",
                items: vec![
                    ("Leisurely stroll:", "3-4 km/h (1.9-2.5 mph)"),
                    ("Comfortable pace:", "4-5 km/h (2.5-3.1 mph)"),
                    ("Brisk walk:", "5-6 km/h (3.1-3.7 mph)"),
                    ("Fast walk/power walk:", "6-7 km/h (3.7-4.3 mph)"),
                ],
            },
            HelpSection {
                heading: "Quick Test:",
                items: vec![
                    ("", "Time yourself walking 1km (or 0.6 miles)"),
                    ("", "If it takes 12 minutes = 5 km/h"),
                    ("", "If it takes 15 minutes = 4 km/h"),
                    ("", "If it takes 10 minutes = 6 km/h"),
                ],
            },
            HelpSection {
                heading: "Factors that affect speed:",
                items: vec![
                    ("", "Terrain (hills, paths vs roads)"),
                    ("", "Weather conditions"),
                    ("", "Whether you're walking the dog (usually slower!)"),
                    ("", "Your fitness level"),
                ],
            },
        ],
        default_note: "5 km/h (a comfortable brisk pace for most people)",
    }
}
