// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Validation errors raised by the shape model.
//!
//! None of these are fatal. The session turns them into user-facing
//! [`Notice`](crate::notice::Notice)s and leaves its state untouched.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// A dimension field did not parse as a finite number
    #[error("invalid dimension {0:?}")]
    InvalidNumber(String),

    /// Width or height was zero or negative
    #[error("dimensions must be positive (got {width} x {height})")]
    NonPositive { width: f64, height: f64 },

    /// The plot area or its viewbox would not be a finite number
    #[error("dimensions too large ({width} x {height})")]
    TooLarge { width: f64, height: f64 },

    /// A shape with this id is already committed
    #[error("shape id {0:?} is already in use")]
    DuplicateId(String),

    /// The id is reserved for the plot boundary rectangle
    #[error("shape id {0:?} is reserved")]
    ReservedId(String),

    /// Export DPI field did not parse as a positive integer
    #[error("invalid export DPI {0:?}")]
    InvalidDpi(String),
}

impl PlanError {
    /// Message shown to the user for this error
    pub fn user_message(&self) -> String {
        match self {
            PlanError::InvalidNumber(_) => "Invalid dimensions. Please enter numbers.".to_string(),
            PlanError::NonPositive { .. } => "Dimensions must be positive.".to_string(),
            PlanError::TooLarge { .. } => "Dimensions are too large.".to_string(),
            PlanError::DuplicateId(id) => format!("A shape named {id} already exists."),
            PlanError::ReservedId(id) => format!("The name {id} is reserved."),
            PlanError::InvalidDpi(_) => "Invalid DPI. Please choose a number.".to_string(),
        }
    }
}

/// Parse a user-typed dimension, rejecting anything that is not a finite
/// number.
pub fn parse_dimension(text: &str) -> Result<f64, PlanError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| PlanError::InvalidNumber(text.to_string()))
}
