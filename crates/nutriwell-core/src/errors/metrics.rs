// ABOUTME: Validation errors raised by the nutrition metrics calculations
// ABOUTME: Typed variants let callers show a placeholder instead of NaN or Infinity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Metrics Error Types
//!
//! - `MetricsError` - local validation failures of the Metrics Engine
//! - Conversion to `AppError` for callers that only need a code and message

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Errors produced while validating metrics inputs.
///
/// None of these are retryable: every failure is caused by the values the
/// caller passed in and is visible immediately.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricsError {
    /// Activity level string did not match any known level
    #[error("Unknown activity level '{0}'")]
    InvalidActivityLevel(String),

    /// Progress requested against a goal that is zero, negative, or not finite
    #[error("Cannot compute progress against goal {goal}")]
    NoGoal {
        /// The rejected goal value
        goal: f64,
    },

    /// Profile is missing a required numeric field or carries an impossible value
    #[error("Malformed profile: {0}")]
    MalformedProfile(String),

    /// Meal is missing a required numeric field or carries an impossible value
    #[error("Malformed meal: {0}")]
    MalformedMeal(String),
}

impl MetricsError {
    /// Create a malformed-profile error
    pub fn malformed_profile(reason: impl Into<String>) -> Self {
        Self::MalformedProfile(reason.into())
    }

    /// Create a malformed-meal error
    pub fn malformed_meal(reason: impl Into<String>) -> Self {
        Self::MalformedMeal(reason.into())
    }

    /// Error code this variant maps to
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidActivityLevel(_) | Self::MalformedProfile(_) | Self::MalformedMeal(_) => {
                ErrorCode::InvalidInput
            }
            Self::NoGoal { .. } => ErrorCode::ValueOutOfRange,
        }
    }
}

impl From<MetricsError> for AppError {
    fn from(error: MetricsError) -> Self {
        Self::new(error.error_code(), error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_goal_maps_to_out_of_range() {
        let error: AppError = MetricsError::NoGoal { goal: 0.0 }.into();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert!(error.message.contains("goal 0"));
    }

    #[test]
    fn test_invalid_activity_level_message() {
        let error = MetricsError::InvalidActivityLevel("couch".to_owned());
        assert_eq!(error.to_string(), "Unknown activity level 'couch'");
        assert_eq!(error.error_code(), ErrorCode::InvalidInput);
    }
}
