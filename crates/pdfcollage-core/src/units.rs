//! Conversion between physical millimeters and PDF user space units.

use crate::geometry::PageSize;

// 1 mm = 5/127 inch, 1 user space unit = 1/72 inch,
// so 1 mm = (5/127) / (1/72) = 360/127 = 2.834645669 units.
const UNITS_PER_MM: f64 = 2.834645669;

/// Convert a physical page size in millimeters to user space units,
/// rounded to 3 decimal places per axis.
pub fn to_user_space(width_mm: f64, height_mm: f64) -> PageSize {
    PageSize::new(round3(width_mm * UNITS_PER_MM), round3(height_mm * UNITS_PER_MM))
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
