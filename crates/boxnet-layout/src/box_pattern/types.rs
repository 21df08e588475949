//! Type definitions for the Box Pattern Maker

use boxnet_core::constants::{DEFAULT_TAB_WIDTH_INCHES, DEFAULT_TAPER};
use boxnet_core::LengthUnit;
use serde::{Deserialize, Serialize};

/// Box request in human units.
///
/// `tab_width` is given in the same unit as the dimensions; `taper` is a
/// plain fraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxParameters {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    #[serde(default)]
    pub unit: LengthUnit,
    #[serde(default = "default_tab_width")]
    pub tab_width: f64,
    #[serde(default = "default_taper")]
    pub taper: f64,
}

fn default_tab_width() -> f64 {
    DEFAULT_TAB_WIDTH_INCHES
}

fn default_taper() -> f64 {
    DEFAULT_TAPER
}

impl Default for BoxParameters {
    fn default() -> Self {
        Self {
            width: 6.0,
            height: 4.0,
            depth: 3.0,
            unit: LengthUnit::Inch,
            tab_width: DEFAULT_TAB_WIDTH_INCHES,
            taper: DEFAULT_TAPER,
        }
    }
}
