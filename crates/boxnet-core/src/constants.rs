//! Fixed numeric constants.

/// Internal drawing units per inch (PostScript points).
pub const UNITS_PER_INCH: f64 = 72.0;

/// Millimetres per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Tab reach of the outline variant, in inches.
pub const DEFAULT_TAB_WIDTH_INCHES: f64 = 0.5;

/// Tab reach of the framed and solid variants, in inches.
pub const WIDE_TAB_WIDTH_INCHES: f64 = 2.0;

/// Flank inset as a fraction of the tab reach (1.0 gives 45 degree flanks).
pub const DEFAULT_TAPER: f64 = 1.0;

/// Fraction of the view kept free on each side when fitting content.
pub const VIEW_PADDING: f64 = 0.05;

/// Largest accepted box dimension or tab reach, in internal units.
///
/// Sums and products of lengths up to this size stay finite throughout the
/// layout.
pub const MAX_LENGTH: f64 = 1e150;
