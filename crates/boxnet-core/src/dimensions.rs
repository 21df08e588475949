//! Validated box dimensions in internal units.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::MAX_LENGTH;
use crate::error::DimensionError;
use crate::units::LengthUnit;

/// Width, height and depth of the box in internal units.
///
/// Every value is strictly positive and at most [`MAX_LENGTH`]; the only way to obtain a
/// `Dimensions` is through [`Dimensions::new`] or [`Dimensions::from_units`],
/// both of which reject anything else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimensions {
    width: f64,
    height: f64,
    depth: f64,
}

impl Dimensions {
    /// Validates and wraps three lengths that are already in internal units.
    pub fn new(width: f64, height: f64, depth: f64) -> Result<Self, DimensionError> {
        Ok(Self {
            width: check("width", width)?,
            height: check("height", height)?,
            depth: check("depth", depth)?,
        })
    }

    /// Scales three human lengths into internal units, then validates them.
    pub fn from_units(
        width: f64,
        height: f64,
        depth: f64,
        unit: LengthUnit,
    ) -> Result<Self, DimensionError> {
        let dims = Self::new(
            unit.to_internal(width),
            unit.to_internal(height),
            unit.to_internal(depth),
        )?;
        debug!(
            "Scaled {}x{}x{} {} to {}x{}x{} units",
            width,
            height,
            depth,
            unit.label(),
            dims.width,
            dims.height,
            dims.depth
        );
        Ok(dims)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Outer surface area of the closed box: `2(wh + wd + hd)`.
    pub fn surface_area(&self) -> f64 {
        2.0 * (self.width * self.height + self.width * self.depth + self.height * self.depth)
    }
}

impl<'de> Deserialize<'de> for Dimensions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            width: f64,
            height: f64,
            depth: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Dimensions::new(raw.width, raw.height, raw.depth).map_err(serde::de::Error::custom)
    }
}

fn check(name: &'static str, value: f64) -> Result<f64, DimensionError> {
    let reason = if value.is_nan() {
        "not a number"
    } else if value.is_infinite() {
        "must be finite"
    } else if value <= 0.0 {
        "must be greater than zero"
    } else if value > MAX_LENGTH {
        "exceeds the largest supported length"
    } else {
        return Ok(value);
    };
    Err(DimensionError::InvalidDimension {
        name,
        value,
        reason,
    })
}
