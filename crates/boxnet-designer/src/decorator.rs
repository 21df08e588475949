//! Decoration strategies.
//!
//! A decorator reads a finished pattern and adds overlays to a
//! [`RenderContext`]. Strategies compose through [`Decorations`].

use boxnet_layout::{PanelRole, Pattern, Point, QuarterTurn};
use tracing::debug;

use crate::context::RenderContext;
use crate::style::TextStyle;

pub trait Decorator: Send + Sync {
    fn decorate(&self, pattern: &Pattern, ctx: &mut RenderContext);
}

/// Adds nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Undecorated;

impl Decorator for Undecorated {
    fn decorate(&self, _pattern: &Pattern, _ctx: &mut RenderContext) {}
}

/// Frames every panel at its bounds, plus one frame per inset.
///
/// Insets too large for a panel leave that frame out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FramedPanels {
    pub insets: Vec<f64>,
}

impl FramedPanels {
    pub fn new(insets: Vec<f64>) -> Self {
        Self { insets }
    }
}

impl Decorator for FramedPanels {
    fn decorate(&self, pattern: &Pattern, ctx: &mut RenderContext) {
        for panel in pattern.panels() {
            ctx.add_frame(panel.role, panel.rect);
            for &inset in &self.insets {
                let inner = panel.rect.expanded(-inset);
                if inner.width() > 0.0 && inner.height() > 0.0 {
                    ctx.add_frame(panel.role, inner);
                } else {
                    debug!("Inset {} does not fit panel {}", inset, panel.role);
                }
            }
        }
    }
}

/// Writes a line of text near the lower-left corner of panels.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLabels {
    pub text_style: TextStyle,
    /// Distance of the baseline start from the panel's left and bottom edges.
    pub offset: f64,
    pub labels: Vec<(PanelRole, String)>,
}

impl PanelLabels {
    /// Labels every panel with its role name.
    pub fn role_names(text_style: TextStyle, offset: f64) -> Self {
        Self {
            text_style,
            offset,
            labels: PanelRole::ALL
                .iter()
                .map(|role| (*role, role.name().to_string()))
                .collect(),
        }
    }
}

impl Decorator for PanelLabels {
    fn decorate(&self, pattern: &Pattern, ctx: &mut RenderContext) {
        for (role, content) in &self.labels {
            let Some(panel) = pattern.panel(*role) else {
                continue;
            };
            let anchor = Point::new(
                panel.rect.left() + self.offset,
                panel.rect.bottom() - self.offset,
            );
            ctx.add_text(*role, anchor, content.clone(), self.text_style.clone());
        }
    }
}

/// An external image covering one panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtworkPlacement {
    pub panel: PanelRole,
    pub href: String,
    pub rotate_half: bool,
}

/// Stretches artwork over panel bounds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelArtwork {
    pub placements: Vec<ArtworkPlacement>,
}

impl Decorator for PanelArtwork {
    fn decorate(&self, pattern: &Pattern, ctx: &mut RenderContext) {
        for placement in &self.placements {
            let Some(panel) = pattern.panel(placement.panel) else {
                continue;
            };
            let rotation = if placement.rotate_half {
                QuarterTurn::Half
            } else {
                QuarterTurn::None
            };
            ctx.add_image(panel.role, placement.href.clone(), panel.rect, rotation);
        }
    }
}

/// Runs several decorators in order.
#[derive(Default)]
pub struct Decorations {
    layers: Vec<Box<dyn Decorator>>,
}

impl Decorations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, decorator: impl Decorator + 'static) -> Self {
        self.layers.push(Box::new(decorator));
        self
    }

    pub fn push(&mut self, decorator: Box<dyn Decorator>) {
        self.layers.push(decorator);
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl Decorator for Decorations {
    fn decorate(&self, pattern: &Pattern, ctx: &mut RenderContext) {
        for layer in &self.layers {
            layer.decorate(pattern, ctx);
        }
    }
}
