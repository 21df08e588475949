//! Error handling for BoxNet
//!
//! Provides the error types raised at the input boundary:
//! - Dimension errors (invalid width/height/depth)
//! - Unit errors (unparseable human-entered lengths)
//!
//! Higher layers wrap these in their own `thiserror` enums.

use thiserror::Error;

/// Dimension error type
///
/// Raised when a box dimension is not a strictly positive, finite number.
/// The layout fails fast on these rather than clamping, since a negative
/// extent would silently produce overlapping panels.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DimensionError {
    /// A dimension is zero, negative, NaN or infinite
    #[error("Invalid {name}: {value} ({reason})")]
    InvalidDimension {
        /// The dimension name (`width`, `height` or `depth`).
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

impl DimensionError {
    /// Name of the offending dimension
    pub fn name(&self) -> &'static str {
        match self {
            DimensionError::InvalidDimension { name, .. } => name,
        }
    }
}

/// Unit error type
///
/// Represents failures while parsing a human-entered length.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    /// Unknown unit name
    #[error("Unknown length unit: {unit}")]
    UnknownUnit {
        /// The unrecognized unit string.
        unit: String,
    },

    /// The length text is not a number or fraction
    #[error("Invalid length '{input}': {reason}")]
    InvalidLength {
        /// The text that failed to parse.
        input: String,
        /// The reason parsing failed.
        reason: String,
    },
}
