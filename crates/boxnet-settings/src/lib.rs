//! BoxNet Settings Crate
//!
//! Handles application configuration: the three deployment presets, layout
//! and style defaults, decoration choices, and JSON/TOML persistence.

pub mod config;
pub mod error;

pub use config::{
    ArtworkSettings, Config, DecorationSettings, ExportSettings, LayoutSettings, PageSize,
    Preset, StyleSettings, TextSettings,
};
pub use error::{SettingsError, SettingsResult};
