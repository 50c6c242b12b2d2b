// src/convert/threshold.rs

//! Value thresholds applied after a property has been found eligible

use crate::error::{Error, Result};

/// Values at or below this stay in pixels (hairlines, 1-2px nudges)
pub const MIN_PIXEL_VALUE: u64 = 2;

/// Width/height values at or below this stay in pixels (icons, borders)
pub const MIN_DIMENSION_PIXELS: u64 = 20;

/// Pixel magnitude thresholds for conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdPolicy {
    /// Reject any magnitude `<=` this
    pub min_pixel_value: u64,
    /// Reject width/height magnitudes `<=` this
    pub min_dimension_pixels: u64,
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self {
            min_pixel_value: MIN_PIXEL_VALUE,
            min_dimension_pixels: MIN_DIMENSION_PIXELS,
        }
    }
}

impl ThresholdPolicy {
    /// Create a threshold policy, rejecting a dimension floor below the pixel floor
    pub fn new(min_pixel_value: u64, min_dimension_pixels: u64) -> Result<Self> {
        if min_dimension_pixels < min_pixel_value {
            return Err(Error::InvalidThresholds {
                min_pixel_value,
                min_dimension_pixels,
            });
        }
        Ok(Self {
            min_pixel_value,
            min_dimension_pixels,
        })
    }

    /// Check if a pixel magnitude on the given property should be converted
    pub fn should_convert(&self, property: &str, magnitude: u64) -> bool {
        if magnitude <= self.min_pixel_value {
            return false;
        }

        !(is_dimension(property) && magnitude <= self.min_dimension_pixels)
    }
}

fn is_dimension(property: &str) -> bool {
    let lower = property.to_lowercase();
    lower.contains("width") || lower.contains("height")
}
