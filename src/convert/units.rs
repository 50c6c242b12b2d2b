// src/convert/units.rs

//! Pixel to rem formatting
//!
//! Output must be stable: whole ratios print without a fractional part,
//! everything else is fixed to 4 decimals with trailing zeros and a bare
//! trailing point removed.

/// Decimal digits kept for non-integral ratios
pub const REM_PRECISION: usize = 4;

/// Convert a pixel magnitude to a rem literal
///
/// `base_unit_size` is the pixel count equal to `1rem` and must be non-zero;
/// [`crate::ConversionPolicy`] guarantees that before any conversion runs.
///
/// ```
/// assert_eq!(pxrem::to_rem(16, 16), "1rem");
/// assert_eq!(pxrem::to_rem(10, 16), "0.625rem");
/// ```
pub fn to_rem(magnitude: u64, base_unit_size: u32) -> String {
    let base = u64::from(base_unit_size);

    if magnitude % base == 0 {
        return format!("{}rem", magnitude / base);
    }

    let ratio = magnitude as f64 / base as f64;
    let fixed = format!("{:.*}", REM_PRECISION, ratio);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{}rem", trimmed)
}
