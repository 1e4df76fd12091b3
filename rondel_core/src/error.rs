// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported at the chart's operation boundaries.
//!
//! Every check runs before any state is touched, so a returned error always
//! means the chart is unchanged.

use thiserror::Error;

/// Errors returned by [`crate::PieChart`] operations.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ChartError {
    /// An item magnitude was zero, negative, not finite, or would overflow the chart total.
    #[error("item value must be a finite positive number, got {value}")]
    InvalidValue {
        /// The rejected magnitude.
        value: f64,
    },
    /// A selection index did not refer to an existing item.
    #[error("item index {index} is out of range for a chart with {len} items")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of items at the time of the call.
        len: usize,
    },
    /// A configuration value was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors returned when validating chart configuration.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Highlight strength must be finite and non-negative.
    #[error("highlight strength cannot be negative, got {strength}")]
    NegativeHighlightStrength {
        /// The rejected strength.
        strength: f64,
    },
    /// Label positions are encoded as `0` (left) or `1` (right).
    #[error("label position must be LEFT (0) or RIGHT (1), got {raw}")]
    InvalidLabelPosition {
        /// The rejected raw value.
        raw: i32,
    },
    /// A size-like setting was negative or not finite.
    #[error("{name} must be a finite non-negative number, got {value}")]
    NegativeDimension {
        /// Name of the setting.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}
