//! Configuration and settings management for BoxNet
//!
//! Provides configuration file handling, presets, and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Layout settings (input unit, tab reach, taper)
//! - Style settings (stroke and fill of the die-line)
//! - Decoration settings (panel frames, labels, artwork)
//! - Export settings (output file, cropping)
//!
//! Lengths in every section, stroke width included, are given in
//! `layout.unit`.
//!
//! A file names a `preset` and overrides parts of it: the preset's values
//! are converted to the file's `layout.unit`, then every key present in the
//! file replaces the matching preset value.

use boxnet_core::constants::{
    DEFAULT_TAB_WIDTH_INCHES, DEFAULT_TAPER, UNITS_PER_INCH, WIDE_TAB_WIDTH_INCHES,
};
use boxnet_core::LengthUnit;
use boxnet_layout::PanelRole;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

use crate::error::{SettingsError, SettingsResult};

/// One of the three deployment variants of the box generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Thin black cut lines, narrow tabs, no decoration
    Outline,
    /// Dark green fill with a triple frame on every panel
    DoubleFrame,
    /// Light green fill with a single frame on every panel
    SingleFrame,
}

impl Default for Preset {
    fn default() -> Self {
        Self::Outline
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Outline => write!(f, "outline"),
            Self::DoubleFrame => write!(f, "double-frame"),
            Self::SingleFrame => write!(f, "single-frame"),
        }
    }
}

impl FromStr for Preset {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "outline" => Ok(Self::Outline),
            "double-frame" | "double_frame" => Ok(Self::DoubleFrame),
            "single-frame" | "single_frame" => Ok(Self::SingleFrame),
            other => Err(SettingsError::invalid(
                "preset",
                format!("unknown preset '{}'", other),
            )),
        }
    }
}

/// Layout settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSettings {
    /// Unit of every length in the configuration
    #[serde(default)]
    pub unit: LengthUnit,
    /// Tab reach
    pub tab_width: f64,
    /// Flank inset as a fraction of the reach
    #[serde(default = "default_taper")]
    pub taper: f64,
}

fn default_taper() -> f64 {
    DEFAULT_TAPER
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            unit: LengthUnit::Inch,
            tab_width: DEFAULT_TAB_WIDTH_INCHES,
            taper: DEFAULT_TAPER,
        }
    }
}

/// Stroke and fill of the die-line shapes
///
/// Colors are any SVG paint value (`"black"`, `"#7ea258"`, `"rgb(7, 62, 32)"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSettings {
    pub stroke: String,
    pub stroke_width: f64,
    /// Panel fill; no fill when absent
    pub fill: Option<String>,
    /// Tab fill; falls back to `fill` when absent
    pub tab_fill: Option<String>,
}

impl StyleSettings {
    pub fn outline() -> Self {
        Self {
            stroke: "black".to_string(),
            stroke_width: points(0.5),
            fill: None,
            tab_fill: None,
        }
    }

    pub fn framed() -> Self {
        Self {
            stroke: "white".to_string(),
            stroke_width: points(1.0),
            fill: Some("rgb(7, 62, 32)".to_string()),
            tab_fill: None,
        }
    }

    pub fn solid() -> Self {
        Self {
            stroke: "white".to_string(),
            stroke_width: points(1.0),
            fill: Some("#7ea258".to_string()),
            tab_fill: None,
        }
    }
}

/// Inches for a length given in points.
fn points(value: f64) -> f64 {
    value / UNITS_PER_INCH
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self::outline()
    }
}

/// Type style of panel labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSettings {
    pub font_family: String,
    pub font_weight: u16,
    pub font_size: f64,
    pub color: String,
}

impl Default for TextSettings {
    fn default() -> Self {
        Self {
            font_family: "Libre Baskerville".to_string(),
            font_weight: 400,
            font_size: 0.5,
            color: "black".to_string(),
        }
    }
}

/// External artwork placed over one panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworkSettings {
    pub panel: PanelRole,
    /// Path or URL of the image, written as-is into the SVG
    pub href: String,
    /// Turn the artwork upside down (used for the back panel)
    #[serde(default)]
    pub rotate_half: bool,
}

/// Decoration settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecorationSettings {
    /// Draw a frame at every panel's bounds
    #[serde(default)]
    pub frames: bool,
    /// Additional frames, each inset this far from the panel bounds
    #[serde(default)]
    pub frame_insets: Vec<f64>,
    /// Write the panel name near its lower-left corner
    #[serde(default)]
    pub labels: bool,
    /// Distance of the label anchor from the panel's left and bottom edges
    #[serde(default = "default_label_offset")]
    pub label_offset: f64,
    #[serde(default)]
    pub text: TextSettings,
    #[serde(default)]
    pub artwork: Vec<ArtworkSettings>,
}

fn default_label_offset() -> f64 {
    0.5
}

impl Default for DecorationSettings {
    fn default() -> Self {
        Self {
            frames: false,
            frame_insets: Vec::new(),
            labels: false,
            label_offset: default_label_offset(),
            text: TextSettings::default(),
            artwork: Vec::new(),
        }
    }
}

/// Fixed page size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

/// Export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Default output file
    pub file_name: PathBuf,
    /// Margin added around the content when cropping to it
    #[serde(default)]
    pub padding: f64,
    /// Export onto a fixed page instead of cropping to the content
    #[serde(default)]
    pub page: Option<PageSize>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            file_name: PathBuf::from("box.svg"),
            padding: 0.0,
            page: None,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ConfigFile")]
pub struct Config {
    /// Preset the remaining sections were derived from
    pub preset: Preset,
    pub layout: LayoutSettings,
    pub style: StyleSettings,
    pub decoration: DecorationSettings,
    pub export: ExportSettings,
}

/// A config as written: a preset plus partial sections overriding it.
#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    preset: Preset,
    layout: Option<Value>,
    style: Option<Value>,
    decoration: Option<Value>,
    export: Option<Value>,
}

impl TryFrom<ConfigFile> for Config {
    type Error = SettingsError;

    fn try_from(file: ConfigFile) -> SettingsResult<Self> {
        let unit = match file.layout.as_ref().and_then(|layout| layout.get("unit")) {
            Some(unit) => LengthUnit::deserialize(unit)?,
            None => LengthUnit::default(),
        };
        let base = Config::for_preset(file.preset).converted_to(unit);

        Ok(Self {
            preset: file.preset,
            layout: overlay(&base.layout, file.layout)?,
            style: overlay(&base.style, file.style)?,
            decoration: overlay(&base.decoration, file.decoration)?,
            export: overlay(&base.export, file.export)?,
        })
    }
}

/// `base` with every key of `patch` written over it.
fn overlay<T: Serialize + DeserializeOwned>(base: &T, patch: Option<Value>) -> SettingsResult<T> {
    let mut value = serde_json::to_value(base)?;
    if let Some(patch) = patch {
        merge(&mut value, patch);
    }
    Ok(serde_json::from_value(value)?)
}

fn merge(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(base), Value::Object(patch)) => {
            for (key, value) in patch {
                match base.get_mut(&key) {
                    Some(slot) => merge(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, patch) => *slot = patch,
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::for_preset(Preset::Outline)
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration reproducing one of the deployment variants
    pub fn for_preset(preset: Preset) -> Self {
        let (tab_width, style, decoration) = match preset {
            Preset::Outline => (
                DEFAULT_TAB_WIDTH_INCHES,
                StyleSettings::outline(),
                DecorationSettings::default(),
            ),
            Preset::DoubleFrame => (
                WIDE_TAB_WIDTH_INCHES,
                StyleSettings::framed(),
                DecorationSettings {
                    frames: true,
                    frame_insets: vec![0.5, 1.0],
                    ..Default::default()
                },
            ),
            Preset::SingleFrame => (
                WIDE_TAB_WIDTH_INCHES,
                StyleSettings::solid(),
                DecorationSettings {
                    frames: true,
                    ..Default::default()
                },
            ),
        };

        Self {
            preset,
            layout: LayoutSettings {
                tab_width,
                ..Default::default()
            },
            style,
            decoration,
            export: ExportSettings::default(),
        }
    }

    /// The same configuration with every length expressed in `unit`
    pub fn converted_to(mut self, unit: LengthUnit) -> Self {
        let from = self.layout.unit;
        if from == unit {
            return self;
        }
        let convert = |value: f64| unit.from_internal(from.to_internal(value));

        self.layout.unit = unit;
        self.layout.tab_width = convert(self.layout.tab_width);
        self.style.stroke_width = convert(self.style.stroke_width);
        for inset in &mut self.decoration.frame_insets {
            *inset = convert(*inset);
        }
        self.decoration.label_offset = convert(self.decoration.label_offset);
        self.decoration.text.font_size = convert(self.decoration.text.font_size);
        self.export.padding = convert(self.export.padding);
        if let Some(page) = &mut self.export.page {
            page.width = convert(page.width);
            page.height = convert(page.height);
        }
        self
    }

    /// Default config file location (`<config dir>/boxnet/config.toml`)
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no configuration directory on this platform".into())
        })?;
        Ok(dir.join("boxnet").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::from_path(path)?;
        let content =
            std::fs::read_to_string(path).map_err(|source| SettingsError::LoadError {
                path: path.to_path_buf(),
                source,
            })?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load the file at `path` when it exists, otherwise the defaults
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|source| SettingsError::SaveError {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        // Validate layout settings
        positive("layout.tab_width", self.layout.tab_width)?;
        let taper = self.layout.taper;
        if !taper.is_finite() || taper <= 0.0 || taper > 1.0 {
            return Err(SettingsError::invalid("layout.taper", "must be in (0, 1]"));
        }

        // Validate style settings
        if self.style.stroke.trim().is_empty() {
            return Err(SettingsError::invalid("style.stroke", "must not be empty"));
        }
        non_negative("style.stroke_width", self.style.stroke_width)?;

        // Validate decoration settings
        for inset in &self.decoration.frame_insets {
            non_negative("decoration.frame_insets", *inset)?;
        }
        non_negative("decoration.label_offset", self.decoration.label_offset)?;
        positive("decoration.text.font_size", self.decoration.text.font_size)?;
        for art in &self.decoration.artwork {
            if art.href.trim().is_empty() {
                return Err(SettingsError::invalid(
                    "decoration.artwork.href",
                    format!("missing image for panel '{}'", art.panel),
                ));
            }
        }

        // Validate export settings
        non_negative("export.padding", self.export.padding)?;
        if let Some(page) = self.export.page {
            positive("export.page.width", page.width)?;
            positive("export.page.height", page.height)?;
        }

        Ok(())
    }

    /// Tab reach in internal units
    pub fn tab_width_internal(&self) -> f64 {
        self.layout.unit.to_internal(self.layout.tab_width)
    }

    /// Stroke width in internal units
    pub fn stroke_width_internal(&self) -> f64 {
        self.layout.unit.to_internal(self.style.stroke_width)
    }

    /// Convert a configured length to internal units
    pub fn to_internal(&self, value: f64) -> f64 {
        self.layout.unit.to_internal(value)
    }
}

#[derive(Debug, Clone, Copy)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

fn positive(key: &str, value: f64) -> SettingsResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::invalid(
            key,
            format!("{} must be a finite value greater than zero", value),
        ))
    }
}

fn non_negative(key: &str, value: f64) -> SettingsResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SettingsError::invalid(
            key,
            format!("{} must be a finite, non-negative value", value),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_outline() {
        let config = Config::default();
        assert_eq!(config.preset, Preset::Outline);
        assert_eq!(config.layout.tab_width, 0.5);
        assert_eq!(config.tab_width_internal(), 36.0);
        assert_eq!(config.style.stroke, "black");
        assert!(config.style.fill.is_none());
        assert!(!config.decoration.frames);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_framed_presets() {
        let double = Config::for_preset(Preset::DoubleFrame);
        assert_eq!(double.tab_width_internal(), 144.0);
        assert_eq!(double.style.fill.as_deref(), Some("rgb(7, 62, 32)"));
        assert_eq!(double.decoration.frame_insets, vec![0.5, 1.0]);

        let single = Config::for_preset(Preset::SingleFrame);
        assert_eq!(single.style.fill.as_deref(), Some("#7ea258"));
        assert!(single.decoration.frames);
        assert!(single.decoration.frame_insets.is_empty());
    }

    #[test]
    fn test_preset_parsing() {
        assert_eq!("outline".parse::<Preset>().unwrap(), Preset::Outline);
        assert_eq!("Double-Frame".parse::<Preset>().unwrap(), Preset::DoubleFrame);
        assert_eq!("single_frame".parse::<Preset>().unwrap(), Preset::SingleFrame);
        assert!("triple".parse::<Preset>().is_err());
        assert_eq!(Preset::DoubleFrame.to_string(), "double-frame");
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = Config::default();
        config.layout.tab_width = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.layout.taper = 1.5;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.decoration.frame_insets = vec![-0.5];
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.export.page = Some(PageSize {
            width: 0.0,
            height: 10.0,
        });
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.style.stroke_width = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"layout": {"unit": "mm", "tab_width": 12.7}}"#).unwrap();
        assert_eq!(config.layout.unit, LengthUnit::Millimeter);
        assert_eq!(config.layout.taper, 1.0);
        assert!((config.tab_width_internal() - 36.0).abs() < 1e-9);
        assert_eq!(config.export.file_name, PathBuf::from("box.svg"));
    }

    #[test]
    fn test_preset_key_selects_preset() {
        let config: Config = toml::from_str(r#"preset = "double-frame""#).unwrap();
        assert_eq!(config, Config::for_preset(Preset::DoubleFrame));

        let config: Config = serde_json::from_str(r#"{"preset": "single-frame"}"#).unwrap();
        assert_eq!(config, Config::for_preset(Preset::SingleFrame));
    }

    #[test]
    fn test_sections_override_preset_values() {
        let config: Config = toml::from_str(
            r#"
preset = "double-frame"

[layout]
tab_width = 1.0

[style]
stroke = "gold"
"#,
        )
        .unwrap();

        assert_eq!(config.layout.tab_width, 1.0);
        assert_eq!(config.style.stroke, "gold");
        assert_eq!(config.style.fill.as_deref(), Some("rgb(7, 62, 32)"));
        assert!(config.decoration.frames);
        assert_eq!(config.decoration.frame_insets, vec![0.5, 1.0]);
    }

    #[test]
    fn test_preset_lengths_follow_file_unit() {
        let config: Config =
            serde_json::from_str(r#"{"preset": "double-frame", "layout": {"unit": "mm"}}"#)
                .unwrap();
        let inches = Config::for_preset(Preset::DoubleFrame);

        assert_eq!(config.layout.unit, LengthUnit::Millimeter);
        assert!((config.tab_width_internal() - inches.tab_width_internal()).abs() < 1e-9);
        assert!((config.layout.tab_width - 50.8).abs() < 1e-9);
        assert!((config.decoration.frame_insets[1] - 25.4).abs() < 1e-9);
        assert!((config.stroke_width_internal() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_stroke_width_uses_layout_unit() {
        let config = Config::default();
        assert!((config.stroke_width_internal() - 0.5).abs() < 1e-12);

        let mut config = config.converted_to(LengthUnit::Millimeter);
        config.style.stroke_width = 0.5;
        let expected = LengthUnit::Millimeter.to_internal(0.5);
        assert!((config.stroke_width_internal() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_unsupported_extension() {
        let err = Config::default()
            .save_to_file(Path::new("config.yaml"))
            .unwrap_err();
        assert!(matches!(err, SettingsError::UnsupportedFormat(ext) if ext == "yaml"));
    }
}
