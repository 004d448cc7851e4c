// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for goal planning.

/// Errors surfaced to the user when a plan cannot be computed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// The target date leaves no days to walk.
    #[error("Target date must be in the future!")]
    InvalidDate,

    /// A form field could not be read as the expected kind of value.
    #[error("Invalid value for {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },
}

impl PlanError {
    pub(crate) fn invalid_field(field: &'static str, value: &str) -> Self {
        PlanError::InvalidField {
            field,
            value: value.to_string(),
        }
    }
}

/// Result type alias for planning operations
pub type Result<T> = std::result::Result<T, PlanError>;
