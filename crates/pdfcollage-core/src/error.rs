//! Error types for layout arithmetic.
//!
//! Provides [`LayoutError`] for configuration problems detected before any
//! page is rendered: output sheets too small for a single tile, malformed
//! output-size strings, and margins that consume the whole sheet.

use std::fmt;

/// Horizontal or vertical axis of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => write!(f, "horizontally"),
            Axis::Vertical => write!(f, "vertically"),
        }
    }
}

/// Configuration errors in the requested collage or output layout.
///
/// All variants are detectable from the CLI input plus the measured tile
/// size, before any collage is assembled or any crop rectangle emitted.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The output page is smaller than one pattern tile along an axis,
    /// so zero whole tiles fit there.
    ZeroFactor(Axis),
    /// The output-size string is not `a0`, `us`, or `<width>x<height>`.
    UnknownSizeSpec(String),
    /// The print margin leaves no printable area on the output page.
    MarginTooLarge { margin_mm: u32 },
    /// A layout declares zero columns or zero rows.
    EmptyLayout { columns: u32, rows: u32 },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::ZeroFactor(axis) => write!(
                f,
                "output page is smaller than one pattern page {axis}; choose a larger output size"
            ),
            LayoutError::UnknownSizeSpec(spec) => write!(
                f,
                "output size '{spec}' does not exist: choose a0, us, or a custom size such as 920x1187"
            ),
            LayoutError::MarginTooLarge { margin_mm } => write!(
                f,
                "print margin of {margin_mm} mm leaves no printable area on the output page"
            ),
            LayoutError::EmptyLayout { columns, rows } => write!(
                f,
                "layout with {columns} columns and {rows} rows contains no pages"
            ),
        }
    }
}

impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_factor_horizontal_message() {
        let err = LayoutError::ZeroFactor(Axis::Horizontal);
        assert_eq!(
            err.to_string(),
            "output page is smaller than one pattern page horizontally; choose a larger output size"
        );
    }

    #[test]
    fn zero_factor_vertical_message() {
        let err = LayoutError::ZeroFactor(Axis::Vertical);
        assert!(err.to_string().contains("vertically"));
    }

    #[test]
    fn unknown_size_spec_message() {
        let err = LayoutError::UnknownSizeSpec("a9".to_string());
        assert_eq!(
            err.to_string(),
            "output size 'a9' does not exist: choose a0, us, or a custom size such as 920x1187"
        );
    }

    #[test]
    fn margin_too_large_message() {
        let err = LayoutError::MarginTooLarge { margin_mm: 500 };
        assert!(err.to_string().contains("500 mm"));
    }

    #[test]
    fn empty_layout_message() {
        let err = LayoutError::EmptyLayout {
            columns: 0,
            rows: 4,
        };
        assert!(err.to_string().contains("0 columns"));
        assert!(err.to_string().contains("4 rows"));
    }

    #[test]
    fn layout_error_implements_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(LayoutError::ZeroFactor(Axis::Horizontal));
        assert!(err.to_string().contains("output page"));
    }

    #[test]
    fn layout_error_clone_and_eq() {
        let err1 = LayoutError::UnknownSizeSpec("bogus".to_string());
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
