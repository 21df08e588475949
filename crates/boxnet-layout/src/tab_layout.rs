//! Tab Layout
//!
//! Builds the seven glue tabs. Each tab starts as an axis-aligned base
//! rectangle whose bottom edge is the base, is tapered into a trapezoid,
//! rotated a quarter turn about the centre of its bounds, and finally
//! translated so its base midpoint lands on the midpoint of the panel edge
//! it is glued to.

use boxnet_core::constants::{
    DEFAULT_TAB_WIDTH_INCHES, DEFAULT_TAPER, MAX_LENGTH, UNITS_PER_INCH,
};
use boxnet_core::Dimensions;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use crate::error::{LayoutError, LayoutResult, LayoutWarning};
use crate::geometry::{Edge, Point, Quad, QuarterTurn, Rect, Segment};
use crate::panel_layout::{PanelRole, PanelSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TabRole {
    #[serde(rename = "top_tab_1")]
    TopTab1,
    #[serde(rename = "left_tab_1")]
    LeftTab1,
    #[serde(rename = "left_tab_2")]
    LeftTab2,
    #[serde(rename = "left_tab_3")]
    LeftTab3,
    #[serde(rename = "right_tab_1")]
    RightTab1,
    #[serde(rename = "right_tab_2")]
    RightTab2,
    #[serde(rename = "right_tab_3")]
    RightTab3,
}

impl TabRole {
    /// Every role, in pattern order.
    pub const ALL: [TabRole; 7] = [
        TabRole::TopTab1,
        TabRole::LeftTab1,
        TabRole::LeftTab2,
        TabRole::LeftTab3,
        TabRole::RightTab1,
        TabRole::RightTab2,
        TabRole::RightTab3,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TabRole::TopTab1 => "top_tab_1",
            TabRole::LeftTab1 => "left_tab_1",
            TabRole::LeftTab2 => "left_tab_2",
            TabRole::LeftTab3 => "left_tab_3",
            TabRole::RightTab1 => "right_tab_1",
            TabRole::RightTab2 => "right_tab_2",
            TabRole::RightTab3 => "right_tab_3",
        }
    }

    /// Panel and edge the tab's base is glued along.
    pub fn attachment(self) -> (PanelRole, Edge) {
        match self {
            TabRole::TopTab1 => (PanelRole::Top, Edge::Bottom),
            TabRole::LeftTab1 => (PanelRole::Left, Edge::Top),
            TabRole::LeftTab2 => (PanelRole::Left, Edge::Bottom),
            TabRole::LeftTab3 => (PanelRole::Left, Edge::Left),
            TabRole::RightTab1 => (PanelRole::Right, Edge::Top),
            TabRole::RightTab2 => (PanelRole::Right, Edge::Bottom),
            TabRole::RightTab3 => (PanelRole::Right, Edge::Right),
        }
    }

    pub fn rotation(self) -> QuarterTurn {
        match self {
            TabRole::LeftTab1 | TabRole::RightTab1 => QuarterTurn::None,
            TabRole::TopTab1 | TabRole::LeftTab2 | TabRole::RightTab2 => QuarterTurn::Half,
            TabRole::LeftTab3 => QuarterTurn::CounterClockwise,
            TabRole::RightTab3 => QuarterTurn::Clockwise,
        }
    }

    /// Rectangle the tab is tapered from, before rotation and snapping.
    fn base_rect(self, dims: &Dimensions, reach: f64) -> Rect {
        let (w, h, d) = (dims.width(), dims.height(), dims.depth());
        match self {
            TabRole::TopTab1 => Rect::new(h, 2.0 * h + 2.0 * d, w, reach),
            TabRole::LeftTab1 => Rect::new(0.0, h - reach, h, reach),
            TabRole::LeftTab2 => Rect::new(0.0, h + d, h, reach),
            TabRole::RightTab1 => Rect::new(h + w, h - reach, h, reach),
            TabRole::RightTab2 => Rect::new(h + w, h + d, h, reach),
            TabRole::LeftTab3 | TabRole::RightTab3 => Rect::new(0.0, 0.0, d, reach),
        }
    }
}

impl fmt::Display for TabRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tab reach and flank taper, in internal units.
///
/// Always valid: both constructors and deserialization go through
/// [`TabSettings::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTabSettings")]
pub struct TabSettings {
    tab_width: f64,
    taper: f64,
}

#[derive(Deserialize)]
struct RawTabSettings {
    tab_width: f64,
    taper: f64,
}

impl TryFrom<RawTabSettings> for TabSettings {
    type Error = LayoutError;

    fn try_from(raw: RawTabSettings) -> LayoutResult<Self> {
        Self::new(raw.tab_width, raw.taper)
    }
}

impl Default for TabSettings {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH_INCHES * UNITS_PER_INCH,
            taper: DEFAULT_TAPER,
        }
    }
}

impl TabSettings {
    /// `tab_width` must be positive and at most [`MAX_LENGTH`]; `taper` must
    /// be in `(0, 1]`.
    pub fn new(tab_width: f64, taper: f64) -> LayoutResult<Self> {
        let invalid = |name, value, reason| LayoutError::InvalidTabSettings {
            name,
            value,
            reason,
        };

        if !tab_width.is_finite() {
            return Err(invalid("tab_width", tab_width, "must be finite"));
        }
        if tab_width <= 0.0 {
            return Err(invalid("tab_width", tab_width, "must be greater than zero"));
        }
        if tab_width > MAX_LENGTH {
            return Err(invalid(
                "tab_width",
                tab_width,
                "exceeds the largest supported length",
            ));
        }
        if !taper.is_finite() {
            return Err(invalid("taper", taper, "must be finite"));
        }
        if taper <= 0.0 || taper > 1.0 {
            return Err(invalid("taper", taper, "must be in (0, 1]"));
        }
        Ok(Self { tab_width, taper })
    }

    /// Perpendicular depth of every tab.
    pub fn tab_width(&self) -> f64 {
        self.tab_width
    }

    /// Flank inset as a fraction of `tab_width`.
    pub fn taper(&self) -> f64 {
        self.taper
    }

    /// Distance the tip is pulled in from each end of the base.
    pub fn inset(&self) -> f64 {
        self.tab_width * self.taper
    }
}

/// Result of tapering a rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaperedOutline {
    pub outline: Quad,
    pub tip_length: f64,
    /// The tip collapsed to a single point.
    pub degenerate: bool,
}

/// Tapers `bounds` into a trapezoid.
///
/// The bottom edge is the base and keeps its full length; the top edge is
/// pulled in by `inset` from both sides. When the base is no longer than
/// `2 * inset` the tip collapses onto the base midpoint and the outline is a
/// triangle.
pub fn make_tab(bounds: Rect, inset: f64) -> TaperedOutline {
    let base_length = bounds.width();
    let raw_tip = base_length - 2.0 * inset;
    let degenerate = raw_tip <= 0.0;
    let tip_length = raw_tip.max(0.0);
    let tip_start = if degenerate {
        bounds.left() + base_length / 2.0
    } else {
        bounds.left() + inset
    };

    let outline = Quad::new([
        Point::new(bounds.left(), bounds.bottom()),
        Point::new(tip_start, bounds.top()),
        Point::new(tip_start + tip_length, bounds.top()),
        Point::new(bounds.right(), bounds.bottom()),
    ]);

    TaperedOutline {
        outline,
        tip_length,
        degenerate,
    }
}

/// A placed glue tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tab {
    role: TabRole,
    panel: PanelRole,
    edge: Edge,
    base_rect: Rect,
    rotation: QuarterTurn,
    outline: Quad,
    reach: f64,
    tip_length: f64,
    warning: Option<LayoutWarning>,
}

impl Tab {
    pub fn role(&self) -> TabRole {
        self.role
    }

    pub fn attachment(&self) -> (PanelRole, Edge) {
        (self.panel, self.edge)
    }

    /// Rectangle the tab was tapered from, before rotation and snapping.
    pub fn base_rect(&self) -> Rect {
        self.base_rect
    }

    pub fn rotation(&self) -> QuarterTurn {
        self.rotation
    }

    pub fn outline(&self) -> &Quad {
        &self.outline
    }

    /// Edge shared with the attachment panel.
    pub fn base(&self) -> Segment {
        self.outline.base()
    }

    pub fn base_length(&self) -> f64 {
        self.outline.base().length()
    }

    pub fn reach(&self) -> f64 {
        self.reach
    }

    pub fn tip_length(&self) -> f64 {
        self.tip_length
    }

    pub fn is_degenerate(&self) -> bool {
        self.warning.is_some()
    }

    pub fn warning(&self) -> Option<&LayoutWarning> {
        self.warning.as_ref()
    }

    pub fn bounds(&self) -> Rect {
        self.outline.bounds()
    }
}

/// The seven tabs of a pattern, in fixed order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabSet {
    tabs: Vec<Tab>,
}

impl TabSet {
    pub fn iter(&self) -> impl Iterator<Item = &Tab> {
        self.tabs.iter()
    }

    pub fn get(&self, role: TabRole) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.role == role)
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &LayoutWarning> {
        self.tabs.iter().filter_map(|t| t.warning.as_ref())
    }
}

impl IntoIterator for TabSet {
    type Item = Tab;
    type IntoIter = std::vec::IntoIter<Tab>;

    fn into_iter(self) -> Self::IntoIter {
        self.tabs.into_iter()
    }
}

/// Lays out the seven tabs against `panels`.
///
/// Never fails: `TabSettings` and `PanelSet` are valid by construction, and
/// a tab whose base is too short for its inset becomes a triangle with a
/// warning.
pub fn layout_tabs(panels: &PanelSet, settings: &TabSettings) -> TabSet {
    let dims = panels.dimensions();
    let reach = settings.tab_width;
    let inset = settings.inset();

    let tabs = TabRole::ALL
        .iter()
        .map(|&role| place_tab(role, dims, panels, reach, inset))
        .collect::<Vec<_>>();

    debug!(
        "Laid out {} tabs (reach {}, inset {})",
        tabs.len(),
        reach,
        inset
    );

    TabSet { tabs }
}

fn place_tab(role: TabRole, dims: &Dimensions, panels: &PanelSet, reach: f64, inset: f64) -> Tab {
    let base_rect = role.base_rect(dims, reach);
    let tapered = make_tab(base_rect, inset);
    let rotation = role.rotation();
    let rotated = tapered
        .outline
        .rotated_about(&base_rect.center(), rotation);

    let (panel, edge) = role.attachment();
    let target = panels.rect(panel).edge(edge).midpoint();
    let outline = rotated.translated(&(target - rotated.base().midpoint()));

    let warning = tapered.degenerate.then(|| {
        let warning = LayoutWarning::DegenerateTab {
            role,
            base_length: base_rect.width(),
            inset,
        };
        warn!("{}", warning);
        warning
    });

    Tab {
        role,
        panel,
        edge,
        base_rect,
        rotation,
        outline,
        reach,
        tip_length: tapered.tip_length,
        warning,
    }
}
