//! Box Pattern Maker
//!
//! One-shot generator: human-unit parameters in, finished pattern out.
//! Scaling into internal units happens exactly once, in [`BoxPatternMaker::new`].

pub mod types;

pub use types::BoxParameters;

use boxnet_core::Dimensions;
use tracing::debug;

use crate::error::LayoutResult;
use crate::pattern::Pattern;
use crate::tab_layout::TabSettings;

pub struct BoxPatternMaker {
    params: BoxParameters,
    dimensions: Dimensions,
    settings: TabSettings,
}

impl BoxPatternMaker {
    pub fn new(params: BoxParameters) -> LayoutResult<Self> {
        let dimensions =
            Dimensions::from_units(params.width, params.height, params.depth, params.unit)?;
        let settings = TabSettings::new(params.unit.to_internal(params.tab_width), params.taper)?;

        debug!(
            "Box pattern maker ready: {}x{}x{} {}",
            params.width,
            params.height,
            params.depth,
            params.unit.label()
        );

        Ok(Self {
            params,
            dimensions,
            settings,
        })
    }

    pub fn params(&self) -> &BoxParameters {
        &self.params
    }

    /// Dimensions in internal units.
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Tab settings in internal units.
    pub fn tab_settings(&self) -> &TabSettings {
        &self.settings
    }

    pub fn generate(&self) -> LayoutResult<Pattern> {
        Pattern::generate(&self.dimensions, &self.settings)
    }
}
