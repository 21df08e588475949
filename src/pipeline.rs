//! Maps a [`Config`] onto the layout, decoration and export stages.
//!
//! Configuration lengths are in `layout.unit`; everything built here is in
//! internal units.

use std::path::Path;

use boxnet_core::Dimensions;
use boxnet_designer::{
    ArtworkPlacement, Decorations, Decorator, ExportBounds, ExportResult, FramedPanels,
    PanelArtwork, PanelLabels, RenderContext, RenderStyle, SvgExporter, TextStyle,
};
use boxnet_layout::{LayoutResult, Pattern, TabSettings};
use boxnet_settings::Config;
use tracing::debug;

pub fn tab_settings_from_config(config: &Config) -> LayoutResult<TabSettings> {
    TabSettings::new(config.tab_width_internal(), config.layout.taper)
}

pub fn render_style_from_config(config: &Config) -> RenderStyle {
    let style = &config.style;
    RenderStyle {
        stroke: style.stroke.clone(),
        stroke_width: config.stroke_width_internal(),
        fill: style.fill.clone(),
        tab_fill: style.tab_fill.clone(),
        ..RenderStyle::outline()
    }
}

/// Decorator stack for the configured frames, labels and artwork.
pub fn decorations_from_config(config: &Config) -> Decorations {
    let decoration = &config.decoration;
    let mut decorations = Decorations::new();

    if decoration.frames {
        let insets = decoration
            .frame_insets
            .iter()
            .map(|inset| config.to_internal(*inset))
            .collect();
        decorations.push(Box::new(FramedPanels::new(insets)));
    }

    if decoration.labels {
        let text = &decoration.text;
        let text_style = TextStyle {
            font_family: text.font_family.clone(),
            font_weight: text.font_weight,
            font_size: config.to_internal(text.font_size),
            fill: text.color.clone(),
        };
        decorations.push(Box::new(PanelLabels::role_names(
            text_style,
            config.to_internal(decoration.label_offset),
        )));
    }

    if !decoration.artwork.is_empty() {
        decorations.push(Box::new(PanelArtwork {
            placements: decoration
                .artwork
                .iter()
                .map(|art| ArtworkPlacement {
                    panel: art.panel,
                    href: art.href.clone(),
                    rotate_half: art.rotate_half,
                })
                .collect(),
        }));
    }

    debug!("Built {} decoration layers", decorations.len());
    decorations
}

pub fn exporter_from_config(config: &Config) -> SvgExporter {
    let bounds = match config.export.page {
        Some(page) => ExportBounds::Page {
            width: config.to_internal(page.width),
            height: config.to_internal(page.height),
        },
        None => ExportBounds::Content,
    };
    SvgExporter::new(render_style_from_config(config))
        .with_bounds(bounds)
        .with_padding(config.to_internal(config.export.padding))
}

/// A generated pattern together with its decorations and exporter.
pub struct BoxDocument {
    pub pattern: Pattern,
    pub overlays: RenderContext,
    exporter: SvgExporter,
}

impl BoxDocument {
    /// Runs layout and decoration for `dims` under `config`.
    pub fn build(config: &Config, dims: &Dimensions) -> LayoutResult<Self> {
        let settings = tab_settings_from_config(config)?;
        let pattern = Pattern::generate(dims, &settings)?;

        let mut overlays = RenderContext::new();
        decorations_from_config(config).decorate(&pattern, &mut overlays);

        Ok(Self {
            pattern,
            overlays,
            exporter: exporter_from_config(config),
        })
    }

    pub fn exporter(&self) -> &SvgExporter {
        &self.exporter
    }

    pub fn to_svg(&self) -> ExportResult<String> {
        self.exporter.render(&self.pattern, &self.overlays)
    }

    pub fn export_to_file(&self, path: &Path) -> ExportResult<()> {
        self.exporter
            .export_to_file(&self.pattern, &self.overlays, path)
    }
}
