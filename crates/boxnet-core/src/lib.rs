//! # BoxNet Core
//!
//! Core types and utilities shared by every BoxNet crate.
//! Provides the length units and scaling used at the input boundary,
//! validated box dimensions, the input errors, and the shared-state
//! aliases used by the designer.

pub mod constants;
pub mod dimensions;
pub mod error;
pub mod types;
pub mod units;

pub use dimensions::Dimensions;

pub use error::{DimensionError, UnitError};

pub use types::{thread_safe_rw, ThreadSafeRw};

pub use units::LengthUnit;
