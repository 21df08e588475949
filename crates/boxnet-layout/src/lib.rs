//! # BoxNet Layout
//!
//! This crate computes the flat die-line of a six-panel rectangular box:
//! the panel rectangles of the unfolded net, the tapered glue tabs along the
//! edges that meet when the net is folded, and the assembled pattern that
//! downstream decorators and exporters consume.
//!
//! ## Layout Steps
//!
//! - **Panel Layout**: Cross-shaped net with a front/bottom/back/top spine and
//!   left/right flaps beside the bottom panel
//! - **Tab Layout**: Seven trapezoidal tabs, tapered then rotated by a quarter
//!   turn and snapped onto their panel edge
//! - **Pattern Assembly**: One ordered, named collection of all 13 shapes
//! - **Box Pattern Maker**: Human-unit parameters in, finished pattern out
//!
//! All steps are pure functions over immutable values. Coordinates are in
//! internal units (1/72 inch) with the origin at the top-left and y growing
//! downward.

pub mod box_pattern;
pub mod error;
pub mod geometry;
pub mod panel_layout;
pub mod pattern;
pub mod tab_layout;

// Re-export commonly used items
pub use box_pattern::{BoxParameters, BoxPatternMaker};
pub use error::{LayoutError, LayoutResult, LayoutWarning};
pub use geometry::{Edge, Point, QuarterTurn, Quad, Rect, Segment};
pub use panel_layout::{layout_panels, Panel, PanelRole, PanelSet};
pub use pattern::{assemble, Pattern, PatternEntry};
pub use tab_layout::{layout_tabs, make_tab, Tab, TabRole, TabSet, TabSettings, TaperedOutline};
