// ABOUTME: Unified error handling for the Atlas intelligence crate
// ABOUTME: Defines standard error codes and the AppError type used by all calculators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! # Unified Error Handling
//!
//! The decision engine's error taxonomy is deliberately small: every failure
//! is "insufficient or malformed input". Analyzers over logged histories never
//! error - they degrade to neutral, low-confidence results - so `AppError` only
//! appears on calculators that accept free-form numeric profile input.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Input value is malformed or out of its documented range
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// Numeric value is outside the validated range for a formula
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange,
}

impl ErrorCode {
    /// Human-readable description of the error code
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is out of range",
        }
    }
}

/// Unified error type for the crate
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Value out of range error
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_code_description() {
        let err = AppError::invalid_input("weight must be positive");
        assert_eq!(
            err.to_string(),
            "The provided input is invalid: weight must be positive"
        );
    }
}
