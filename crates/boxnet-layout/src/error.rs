//! Error and warning types for the layout crate.
//!
//! Errors abort a layout; warnings are attached to the affected tab and the
//! layout still completes with a usable pattern.

use boxnet_core::DimensionError;
use serde::Serialize;
use thiserror::Error;

use crate::tab_layout::TabRole;

/// Errors that can occur while laying out a pattern.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A box dimension was rejected.
    #[error(transparent)]
    Dimension(#[from] DimensionError),

    /// A tab setting is outside its valid range.
    #[error("Invalid tab setting '{name}': {value} ({reason})")]
    InvalidTabSettings {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Two pattern entries share a name.
    #[error("Duplicate pattern entry: {0}")]
    DuplicateEntry(String),
}

/// Advisory conditions that do not prevent a layout.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutWarning {
    /// The tab's base is no longer than twice its flank inset, so the tip was
    /// clamped to a point and the tab is a triangle.
    #[error("Tab '{role}' is degenerate: base {base_length} <= 2 x inset {inset}")]
    DegenerateTab {
        role: TabRole,
        base_length: f64,
        inset: f64,
    },
}

/// Result type alias for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;
