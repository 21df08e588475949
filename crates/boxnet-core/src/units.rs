//! Unit conversion utilities
//!
//! Handles conversion between human length units (inches, millimetres,
//! points) and the internal drawing unit (1/72 inch). The scale is applied
//! exactly once at the input boundary; everything downstream is unit-agnostic.
//! Supports decimal and fractional inch parsing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{MM_PER_INCH, UNITS_PER_INCH};
use crate::error::UnitError;

/// Human length unit accepted at the input boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Inches (72 internal units each)
    #[serde(alias = "in", alias = "inches")]
    Inch,
    /// Millimetres
    #[serde(alias = "mm", alias = "millimetre")]
    Millimeter,
    /// PostScript points, identical to internal units
    #[serde(alias = "pt", alias = "points")]
    Point,
}

impl Default for LengthUnit {
    fn default() -> Self {
        Self::Inch
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inch => write!(f, "Inch"),
            Self::Millimeter => write!(f, "Millimeter"),
            Self::Point => write!(f, "Point"),
        }
    }
}

impl FromStr for LengthUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inch" | "inches" | "in" => Ok(Self::Inch),
            "millimeter" | "millimetre" | "mm" => Ok(Self::Millimeter),
            "point" | "points" | "pt" => Ok(Self::Point),
            _ => Err(UnitError::UnknownUnit {
                unit: s.to_string(),
            }),
        }
    }
}

impl LengthUnit {
    /// Internal units per one of this unit
    pub fn scale(self) -> f64 {
        match self {
            Self::Inch => UNITS_PER_INCH,
            Self::Millimeter => UNITS_PER_INCH / MM_PER_INCH,
            Self::Point => 1.0,
        }
    }

    /// Convert a value in this unit to internal units
    pub fn to_internal(self, value: f64) -> f64 {
        value * self.scale()
    }

    /// Convert a value in internal units back to this unit
    pub fn from_internal(self, value: f64) -> f64 {
        value / self.scale()
    }

    /// Short label ("in", "mm" or "pt")
    pub fn label(self) -> &'static str {
        match self {
            Self::Inch => "in",
            Self::Millimeter => "mm",
            Self::Point => "pt",
        }
    }
}

/// Parse a length string to internal units
///
/// * `input` - String to parse
/// * `unit` - Unit the string is written in
///
/// Inch input may be a fraction or mixed number such as `"3 1/2"`.
pub fn parse_length(input: &str, unit: LengthUnit) -> Result<f64, UnitError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(invalid(input, "empty input"));
    }

    let value = match unit {
        LengthUnit::Inch if trimmed.contains('/') => parse_mixed_number(trimmed)
            .map_err(|reason| invalid(input, reason))?,
        _ => trimmed
            .parse::<f64>()
            .map_err(|e| invalid(input, &e.to_string()))?,
    };

    Ok(unit.to_internal(value))
}

fn parse_mixed_number(input: &str) -> Result<f64, &'static str> {
    let mut total = 0.0;
    let mut negative = false;

    for (i, part) in input.split_whitespace().enumerate() {
        let part = if i == 0 {
            match part.strip_prefix('-') {
                Some(rest) => {
                    negative = true;
                    rest
                }
                None => part,
            }
        } else {
            part
        };

        if part.contains('/') {
            let frac_parts: Vec<&str> = part.split('/').collect();
            if frac_parts.len() != 2 {
                return Err("invalid fraction format");
            }
            let num = frac_parts[0]
                .parse::<f64>()
                .map_err(|_| "invalid numerator")?;
            let den = frac_parts[1]
                .parse::<f64>()
                .map_err(|_| "invalid denominator")?;
            if den == 0.0 {
                return Err("division by zero");
            }
            total += num / den;
        } else {
            total += part.parse::<f64>().map_err(|_| "invalid number part")?;
        }
    }

    Ok(if negative { -total } else { total })
}

fn invalid(input: &str, reason: &str) -> UnitError {
    UnitError::InvalidLength {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inch_scale() {
        assert_eq!(LengthUnit::Inch.to_internal(6.0), 432.0);
        assert_eq!(LengthUnit::Inch.from_internal(216.0), 3.0);
        assert_eq!(parse_length("4", LengthUnit::Inch).unwrap(), 288.0);
    }

    #[test]
    fn test_millimeter_scale() {
        let value = parse_length("25.4", LengthUnit::Millimeter).unwrap();
        assert!((value - 72.0).abs() < 1e-9);
        assert!((LengthUnit::Millimeter.from_internal(72.0) - 25.4).abs() < 1e-9);
    }

    #[test]
    fn test_point_is_identity() {
        assert_eq!(parse_length("144", LengthUnit::Point).unwrap(), 144.0);
        assert_eq!(LengthUnit::Point.from_internal(144.0), 144.0);
    }

    #[test]
    fn test_inch_fraction() {
        // 1 1/2 inch = 108 units
        assert_eq!(parse_length("1 1/2", LengthUnit::Inch).unwrap(), 108.0);
        // 1/4 inch = 18 units
        assert_eq!(parse_length("1/4", LengthUnit::Inch).unwrap(), 18.0);
        assert_eq!(parse_length("-1/2", LengthUnit::Inch).unwrap(), -36.0);
        assert_eq!(parse_length("  3  1/2  ", LengthUnit::Inch).unwrap(), 252.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(parse_length("abc", LengthUnit::Inch).is_err());
        assert!(parse_length("", LengthUnit::Inch).is_err());
        assert!(parse_length("1/0", LengthUnit::Inch).is_err());
        assert!(parse_length("1/2/3", LengthUnit::Inch).is_err());
        assert!(parse_length("1/2", LengthUnit::Millimeter).is_err());
    }

    #[test]
    fn test_unit_from_str() {
        assert_eq!("in".parse::<LengthUnit>().unwrap(), LengthUnit::Inch);
        assert_eq!("MM".parse::<LengthUnit>().unwrap(), LengthUnit::Millimeter);
        assert_eq!("pt".parse::<LengthUnit>().unwrap(), LengthUnit::Point);
        assert!("cubit".parse::<LengthUnit>().is_err());
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(LengthUnit::Inch.label(), "in");
        assert_eq!(LengthUnit::Millimeter.label(), "mm");
        assert_eq!(LengthUnit::default(), LengthUnit::Inch);
    }
}
