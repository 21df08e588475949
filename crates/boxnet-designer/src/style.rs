//! Paint settings for the die-line and its overlays.
//!
//! Colors are SVG paint strings and are written to the document unchanged.

use boxnet_layout::{PanelRole, PatternEntry};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Stroke and fill of the pattern shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub stroke: String,
    pub stroke_width: f64,
    /// Default fill of every shape; `None` leaves shapes unfilled.
    pub fill: Option<String>,
    /// Fill of tabs when it differs from `fill`.
    pub tab_fill: Option<String>,
    /// Per-panel fill overrides.
    #[serde(default)]
    pub panel_fills: HashMap<PanelRole, String>,
}

impl RenderStyle {
    /// Thin black cut lines without fill.
    pub fn outline() -> Self {
        Self {
            stroke: "black".to_string(),
            stroke_width: 0.5,
            fill: None,
            tab_fill: None,
            panel_fills: HashMap::new(),
        }
    }

    /// White lines on dark green.
    pub fn framed() -> Self {
        Self {
            stroke: "white".to_string(),
            stroke_width: 1.0,
            fill: Some("rgb(7, 62, 32)".to_string()),
            tab_fill: None,
            panel_fills: HashMap::new(),
        }
    }

    /// White lines on light green.
    pub fn solid() -> Self {
        Self {
            fill: Some("#7ea258".to_string()),
            ..Self::framed()
        }
    }

    pub fn with_panel_fill(mut self, role: PanelRole, fill: impl Into<String>) -> Self {
        self.panel_fills.insert(role, fill.into());
        self
    }

    /// Fill used for one entry, or `None` for no fill.
    pub fn fill_for(&self, entry: &PatternEntry) -> Option<&str> {
        let specific = match entry {
            PatternEntry::Panel(panel) => self.panel_fills.get(&panel.role).map(String::as_str),
            PatternEntry::Tab(_) => self.tab_fill.as_deref(),
        };
        specific.or(self.fill.as_deref())
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::outline()
    }
}

/// Type style of text overlays. Sizes are in internal units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_family: String,
    pub font_weight: u16,
    pub font_size: f64,
    pub fill: String,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "Libre Baskerville".to_string(),
            font_weight: 400,
            font_size: 36.0,
            fill: "black".to_string(),
        }
    }
}
