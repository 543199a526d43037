//! Numeric thresholds and formatting settings shared across the crate.

/// Magnitudes below this count as zero for pivot, rank and determinant decisions.
pub const EPSILON: f64 = 1e-10;

/// Element count at which construction fails.
pub const MAX_ELEMENTS: usize = 10_000_000;

/// Element count at which construction logs a performance warning.
pub const WARN_ELEMENTS: usize = 1_000_000;

/// Decimal places used by `Display`.
pub const DISPLAY_PRECISION: usize = 3;

/// Field width of each value rendered by `Display`.
pub const DISPLAY_WIDTH: usize = 7;
