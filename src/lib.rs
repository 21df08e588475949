//! # BoxNet
//!
//! Generates the flat die-line of a six-panel rectangular box with glue tabs
//! and exports it as SVG.
//!
//! ## Architecture
//!
//! BoxNet is organized as a workspace with multiple crates:
//!
//! 1. **boxnet-core** - Units, validated dimensions, errors, shared-state aliases
//! 2. **boxnet-layout** - Panel layout, tab layout, pattern assembly
//! 3. **boxnet-settings** - Presets and JSON/TOML configuration
//! 4. **boxnet-designer** - Decorations, render style, SVG export, viewport
//! 5. **boxnet** - Command-line binary that wires the crates together
//!
//! ## Features
//!
//! - **Deterministic Layout**: Same dimensions, same pattern, every time
//! - **Tapered Tabs**: Configurable reach and taper, triangular fallback on short edges
//! - **Presets**: Outline, double-frame and single-frame variants
//! - **Unit Aware Input**: Inches (including fractions), millimetres, points
//! - **SVG Export**: Cropped to content or on a fixed page

pub mod pipeline;

pub use boxnet_core::{Dimensions, DimensionError, LengthUnit};
pub use boxnet_designer::{
    Decorations, Decorator, DesignerState, ExportBounds, ExportError, RenderContext, RenderStyle,
    SvgExporter, Viewport,
};
pub use boxnet_layout::{
    BoxParameters, BoxPatternMaker, LayoutError, LayoutWarning, Pattern, PatternEntry,
    TabSettings,
};
pub use boxnet_settings::{Config, Preset, SettingsError};

pub use pipeline::{
    decorations_from_config, exporter_from_config, render_style_from_config,
    tab_settings_from_config, BoxDocument,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging with:
/// - Pretty formatted output on stderr, keeping stdout free for documents
/// - RUST_LOG environment variable support
/// - `default_level` applied to everything RUST_LOG does not mention
pub fn init_logging(default_level: tracing::Level) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
