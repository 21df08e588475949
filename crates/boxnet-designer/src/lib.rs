//! # BoxNet Designer
//!
//! Everything downstream of the layout: decoration strategies that add
//! frames, labels and artwork over a finished pattern, the render style, SVG
//! export, the preview viewport, and the shared "current pattern" slot.
//!
//! ## Architecture
//!
//! ```text
//! Pattern (from boxnet-layout, immutable)
//!   ├── Decorator ──> RenderContext (overlays)
//!   └── SvgExporter (RenderStyle + ExportBounds) ──> SVG document
//!
//! DesignerState
//!   ├── current pattern slot (Arc<RwLock<Option<Arc<Pattern>>>>)
//!   └── Viewport (zoom / pan, fit to bounds)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use boxnet_designer::{Decorator, FramedPanels, RenderContext, RenderStyle, SvgExporter};
//!
//! let mut ctx = RenderContext::new();
//! FramedPanels::new(vec![36.0, 72.0]).decorate(&pattern, &mut ctx);
//! let svg = SvgExporter::new(RenderStyle::framed()).render(&pattern, &ctx)?;
//! ```

pub mod context;
pub mod decorator;
pub mod designer_state;
pub mod error;
pub mod style;
pub mod svg_renderer;
pub mod viewport;

pub use context::{Overlay, RenderContext};
pub use decorator::{
    ArtworkPlacement, Decorations, Decorator, FramedPanels, PanelArtwork, PanelLabels,
    Undecorated,
};
pub use designer_state::DesignerState;
pub use error::{ExportError, ExportResult};
pub use style::{RenderStyle, TextStyle};
pub use svg_renderer::{ExportBounds, SvgExporter};
pub use viewport::Viewport;
