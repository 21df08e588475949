//! Render context: the overlays decorators draw on top of a pattern.
//!
//! Decorators never touch pattern geometry; everything they add lives here
//! and is handed to the exporter next to the pattern.

use boxnet_layout::{PanelRole, Point, QuarterTurn, Rect};

use crate::style::TextStyle;

/// One item drawn over a panel.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    /// Unfilled rectangle.
    Frame { panel: PanelRole, rect: Rect },
    /// Single line of text; `anchor` is the start of its baseline.
    Text {
        panel: PanelRole,
        anchor: Point,
        content: String,
        style: TextStyle,
    },
    /// External image stretched over `rect`, turned about its centre.
    Image {
        panel: PanelRole,
        href: String,
        rect: Rect,
        rotation: QuarterTurn,
    },
}

impl Overlay {
    pub fn panel(&self) -> PanelRole {
        match self {
            Overlay::Frame { panel, .. }
            | Overlay::Text { panel, .. }
            | Overlay::Image { panel, .. } => *panel,
        }
    }

    /// Extent of the overlay. Text has no known extent.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Overlay::Frame { rect, .. } | Overlay::Image { rect, .. } => Some(*rect),
            Overlay::Text { .. } => None,
        }
    }
}

/// Drawing target passed to decorators.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderContext {
    overlays: Vec<Overlay>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, overlay: Overlay) {
        self.overlays.push(overlay);
    }

    pub fn add_frame(&mut self, panel: PanelRole, rect: Rect) {
        self.push(Overlay::Frame { panel, rect });
    }

    pub fn add_text(
        &mut self,
        panel: PanelRole,
        anchor: Point,
        content: impl Into<String>,
        style: TextStyle,
    ) {
        self.push(Overlay::Text {
            panel,
            anchor,
            content: content.into(),
            style,
        });
    }

    pub fn add_image(
        &mut self,
        panel: PanelRole,
        href: impl Into<String>,
        rect: Rect,
        rotation: QuarterTurn,
    ) {
        self.push(Overlay::Image {
            panel,
            href: href.into(),
            rect,
            rotation,
        });
    }

    pub fn overlays(&self) -> &[Overlay] {
        &self.overlays
    }

    /// Overlays attached to one panel, in drawing order.
    pub fn overlays_for(&self, panel: PanelRole) -> impl Iterator<Item = &Overlay> {
        self.overlays.iter().filter(move |o| o.panel() == panel)
    }

    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    pub fn clear(&mut self) {
        self.overlays.clear();
    }

    /// Union of every overlay with a known extent.
    pub fn bounds(&self) -> Option<Rect> {
        self.overlays
            .iter()
            .filter_map(Overlay::bounds)
            .reduce(|acc, r| acc.union(&r))
    }
}
