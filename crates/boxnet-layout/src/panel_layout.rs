//! Panel Layout
//!
//! Places the six faces of the box as a cross-shaped net. The front, bottom,
//! back and top panels form a vertical spine of width `width`; the left and
//! right panels sit beside the bottom panel.

use boxnet_core::{DimensionError, Dimensions};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::geometry::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelRole {
    Front,
    Bottom,
    Back,
    Top,
    Left,
    Right,
}

impl PanelRole {
    /// Every role, in pattern order.
    pub const ALL: [PanelRole; 6] = [
        PanelRole::Front,
        PanelRole::Bottom,
        PanelRole::Back,
        PanelRole::Top,
        PanelRole::Left,
        PanelRole::Right,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PanelRole::Front => "front",
            PanelRole::Bottom => "bottom",
            PanelRole::Back => "back",
            PanelRole::Top => "top",
            PanelRole::Left => "left",
            PanelRole::Right => "right",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PanelRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One rectangular face of the net.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub role: PanelRole,
    pub rect: Rect,
}

/// The six panels for one set of dimensions, indexed by role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelSet {
    dimensions: Dimensions,
    panels: [Panel; 6],
}

impl PanelSet {
    pub fn for_dimensions(dims: &Dimensions) -> Self {
        let (w, h, d) = (dims.width(), dims.height(), dims.depth());

        let rect_for = |role: PanelRole| match role {
            PanelRole::Front => Rect::new(h, 0.0, w, h),
            PanelRole::Bottom => Rect::new(h, h, w, d),
            PanelRole::Back => Rect::new(h, h + d, w, h),
            PanelRole::Top => Rect::new(h, h + d + h, w, d),
            PanelRole::Left => Rect::new(0.0, h, h, d),
            PanelRole::Right => Rect::new(h + w, h, h, d),
        };

        let panels = PanelRole::ALL.map(|role| Panel {
            role,
            rect: rect_for(role),
        });

        debug!("Laid out {} panels for {}x{}x{}", panels.len(), w, h, d);

        Self {
            dimensions: *dims,
            panels,
        }
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    pub fn get(&self, role: PanelRole) -> &Panel {
        &self.panels[role.index()]
    }

    pub fn rect(&self, role: PanelRole) -> Rect {
        self.get(role).rect
    }

    pub fn iter(&self) -> impl Iterator<Item = &Panel> {
        self.panels.iter()
    }

    pub fn total_area(&self) -> f64 {
        self.panels.iter().map(|p| p.rect.area()).sum()
    }

    pub fn bounds(&self) -> Rect {
        let first = self.panels[0].rect;
        self.panels[1..]
            .iter()
            .fold(first, |acc, p| acc.union(&p.rect))
    }
}

/// Lays out the six panels, rejecting any dimension that is not strictly
/// positive and finite.
pub fn layout_panels(width: f64, height: f64, depth: f64) -> Result<PanelSet, DimensionError> {
    let dims = Dimensions::new(width, height, depth)?;
    Ok(PanelSet::for_dimensions(&dims))
}
