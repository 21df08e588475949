//! Pattern Assembler
//!
//! Gathers panels and tabs into one ordered, named collection. Panels come
//! first in role order, then tabs. The assembler adds no geometry of its own.

use boxnet_core::Dimensions;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::error::{LayoutError, LayoutResult, LayoutWarning};
use crate::geometry::{Point, Rect};
use crate::panel_layout::{Panel, PanelRole, PanelSet};
use crate::tab_layout::{layout_tabs, Tab, TabRole, TabSet, TabSettings};

/// One named shape of the pattern.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PatternEntry {
    Panel(Panel),
    Tab(Tab),
}

impl PatternEntry {
    pub fn name(&self) -> &'static str {
        match self {
            PatternEntry::Panel(panel) => panel.role.name(),
            PatternEntry::Tab(tab) => tab.role().name(),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            PatternEntry::Panel(panel) => panel.rect,
            PatternEntry::Tab(tab) => tab.bounds(),
        }
    }

    /// Closed outline, clockwise for panels and base-first for tabs.
    pub fn outline(&self) -> Vec<Point> {
        match self {
            PatternEntry::Panel(panel) => panel.rect.corners().to_vec(),
            PatternEntry::Tab(tab) => tab.outline().points().to_vec(),
        }
    }

    pub fn as_panel(&self) -> Option<&Panel> {
        match self {
            PatternEntry::Panel(panel) => Some(panel),
            PatternEntry::Tab(_) => None,
        }
    }

    pub fn as_tab(&self) -> Option<&Tab> {
        match self {
            PatternEntry::Tab(tab) => Some(tab),
            PatternEntry::Panel(_) => None,
        }
    }
}

/// The complete die-line for one set of dimensions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pattern {
    dimensions: Dimensions,
    entries: IndexMap<&'static str, PatternEntry>,
}

impl Pattern {
    /// Runs panel layout, tab layout and assembly for `dims`.
    pub fn generate(dims: &Dimensions, settings: &TabSettings) -> LayoutResult<Self> {
        let panels = PanelSet::for_dimensions(dims);
        let tabs = layout_tabs(&panels, settings);
        assemble(panels, tabs)
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    pub fn get(&self, name: &str) -> Option<&PatternEntry> {
        self.entries.get(name)
    }

    pub fn panel(&self, role: PanelRole) -> Option<&Panel> {
        self.get(role.name()).and_then(PatternEntry::as_panel)
    }

    pub fn tab(&self, role: TabRole) -> Option<&Tab> {
        self.get(role.name()).and_then(PatternEntry::as_tab)
    }

    /// Entries in pattern order.
    pub fn entries(&self) -> impl Iterator<Item = &PatternEntry> {
        self.entries.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.entries().filter_map(PatternEntry::as_panel)
    }

    pub fn tabs(&self) -> impl Iterator<Item = &Tab> {
        self.entries().filter_map(PatternEntry::as_tab)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Union of every entry's bounding box.
    pub fn bounds(&self) -> Option<Rect> {
        self.entries()
            .map(PatternEntry::bounds)
            .reduce(|acc, r| acc.union(&r))
    }

    pub fn total_panel_area(&self) -> f64 {
        self.panels().map(|p| p.rect.area()).sum()
    }

    pub fn warnings(&self) -> Vec<&LayoutWarning> {
        self.tabs().filter_map(Tab::warning).collect()
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Collects panels then tabs under their role names.
pub fn assemble(panels: PanelSet, tabs: TabSet) -> LayoutResult<Pattern> {
    let dimensions = *panels.dimensions();
    let mut entries = IndexMap::with_capacity(PanelRole::ALL.len() + tabs.len());

    let shapes = panels
        .iter()
        .copied()
        .map(PatternEntry::Panel)
        .chain(tabs.into_iter().map(PatternEntry::Tab));

    for entry in shapes {
        let name = entry.name();
        if entries.insert(name, entry).is_some() {
            return Err(LayoutError::DuplicateEntry(name.to_string()));
        }
    }

    debug!("Assembled pattern with {} entries", entries.len());

    Ok(Pattern {
        dimensions,
        entries,
    })
}
