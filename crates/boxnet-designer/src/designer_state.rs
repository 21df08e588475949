//! Designer state: the current pattern slot and its preview viewport.
//!
//! Every regeneration builds a complete pattern before touching the slot and
//! then replaces it in a single write, so readers always see either the old
//! or the new pattern. A failed regeneration leaves the slot unchanged.

use std::sync::Arc;

use boxnet_core::{thread_safe_rw, Dimensions, LengthUnit, ThreadSafeRw};
use boxnet_layout::{LayoutResult, Pattern, TabSettings};
use tracing::{debug, info, warn};

use crate::viewport::Viewport;

/// What the preview shows. Kept under one lock so the pattern, its
/// generation number and the fitted viewport always change together.
#[derive(Debug, Clone, Default)]
struct Preview {
    pattern: Option<Arc<Pattern>>,
    generation: u64,
    viewport: Viewport,
}

/// Shared designer state. All methods take `&self`; wrap in an `Arc` to
/// share between threads.
pub struct DesignerState {
    preview: ThreadSafeRw<Preview>,
    tab_settings: ThreadSafeRw<TabSettings>,
}

impl DesignerState {
    pub fn new(tab_settings: TabSettings) -> Self {
        Self {
            preview: thread_safe_rw(Preview::default()),
            tab_settings: thread_safe_rw(tab_settings),
        }
    }

    /// Pattern currently on display, if any.
    pub fn current(&self) -> Option<Arc<Pattern>> {
        self.preview.read().pattern.clone()
    }

    /// Current pattern together with its generation number.
    pub fn snapshot(&self) -> (Option<Arc<Pattern>>, u64) {
        let preview = self.preview.read();
        (preview.pattern.clone(), preview.generation)
    }

    /// Number of successful regenerations so far.
    pub fn generation(&self) -> u64 {
        self.preview.read().generation
    }

    pub fn tab_settings(&self) -> TabSettings {
        *self.tab_settings.read()
    }

    /// Replaces the tab settings used by later regenerations.
    pub fn set_tab_settings(&self, settings: TabSettings) {
        *self.tab_settings.write() = settings;
        debug!("Tab settings set to {:?}", settings);
    }

    /// Computes a new pattern for `dims` and swaps it into the slot.
    pub fn regenerate(&self, dims: &Dimensions) -> LayoutResult<Arc<Pattern>> {
        let settings = self.tab_settings();
        let pattern = match Pattern::generate(dims, &settings) {
            Ok(pattern) => Arc::new(pattern),
            Err(e) => {
                warn!("Regeneration failed, keeping previous pattern: {}", e);
                return Err(e);
            }
        };

        let generation = {
            let mut preview = self.preview.write();
            preview.pattern = Some(Arc::clone(&pattern));
            preview.generation += 1;
            if let Some(bounds) = pattern.bounds() {
                preview.viewport.fit_to_view(&bounds);
            }
            preview.generation
        };

        info!(
            "Generated pattern #{} for {}x{}x{} ({} warnings)",
            generation,
            dims.width(),
            dims.height(),
            dims.depth(),
            pattern.warnings().len()
        );
        Ok(pattern)
    }

    /// Scales human lengths once and regenerates.
    pub fn regenerate_from_units(
        &self,
        width: f64,
        height: f64,
        depth: f64,
        unit: LengthUnit,
    ) -> LayoutResult<Arc<Pattern>> {
        let dims = Dimensions::from_units(width, height, depth, unit).inspect_err(|e| {
            warn!("Rejected input, keeping previous pattern: {}", e);
        })?;
        self.regenerate(&dims)
    }

    /// Snapshot of the preview viewport.
    pub fn viewport(&self) -> Viewport {
        self.preview.read().viewport.clone()
    }

    /// Resizes the preview and refits the current pattern.
    pub fn set_canvas_size(&self, width: f64, height: f64) {
        let mut preview = self.preview.write();
        preview.viewport.set_canvas_size(width, height);
        if let Some(bounds) = preview.pattern.as_ref().and_then(|p| p.bounds()) {
            preview.viewport.fit_to_view(&bounds);
        }
    }

    /// Drops the current pattern.
    pub fn clear(&self) {
        self.preview.write().pattern = None;
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new(TabSettings::default())
    }
}
