//! Parsing of output-size strings.
//!
//! An output size is given on the command line as `a0`, `us` (ARCH E,
//! 914x1220 mm), or a custom `<width>x<height>` in millimeters. An optional
//! print margin shrinks the sheet by twice the margin per axis before the
//! millimeter values are converted to user space units.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::LayoutError;
use crate::geometry::PageSize;
use crate::units::to_user_space;

static CUSTOM_SPEC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)x(\d+)").expect("static pattern"));

/// Parse an output-size string into millimeter dimensions.
pub fn parse_size_spec(spec: &str) -> Result<(u32, u32), LayoutError> {
    match spec {
        "a0" => Ok((841, 1189)),
        "us" => Ok((914, 1220)),
        _ => parse_custom_spec(spec),
    }
}

fn parse_custom_spec(spec: &str) -> Result<(u32, u32), LayoutError> {
    let caps = CUSTOM_SPEC
        .captures(spec)
        .ok_or_else(|| LayoutError::UnknownSizeSpec(spec.to_string()))?;
    // The pattern only matches digits, so the captures parse unless the
    // value overflows u32; treat overflow as an unusable spec too.
    let width = caps[1]
        .parse::<u32>()
        .map_err(|_| LayoutError::UnknownSizeSpec(spec.to_string()))?;
    let height = caps[2]
        .parse::<u32>()
        .map_err(|_| LayoutError::UnknownSizeSpec(spec.to_string()))?;
    // a sheet with a zero dimension is no sheet at all
    if width == 0 || height == 0 {
        return Err(LayoutError::UnknownSizeSpec(spec.to_string()));
    }
    Ok((width, height))
}

/// Printable area of the requested output sheet in user space units.
///
/// `margin_mm` is subtracted from both ends of both axes (the sheet
/// shrinks by `2 * margin_mm` per axis). A margin that consumes an entire
/// axis is rejected here rather than flowing into the factor computation.
pub fn printable_size(spec: &str, margin_mm: u32) -> Result<PageSize, LayoutError> {
    let (width_mm, height_mm) = parse_size_spec(spec)?;
    // doubling in u64: the margin comes straight from the command line
    let trim = 2 * u64::from(margin_mm);
    if trim >= u64::from(width_mm) || trim >= u64::from(height_mm) {
        return Err(LayoutError::MarginTooLarge { margin_mm });
    }
    Ok(to_user_space(
        (u64::from(width_mm) - trim) as f64,
        (u64::from(height_mm) - trim) as f64,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_a0() {
        assert_eq!(parse_size_spec("a0"), Ok((841, 1189)));
    }

    #[test]
    fn parse_us_arch_e() {
        assert_eq!(parse_size_spec("us"), Ok((914, 1220)));
    }

    #[test]
    fn parse_custom() {
        assert_eq!(parse_size_spec("123x456"), Ok((123, 456)));
        assert_eq!(parse_size_spec("920x1187"), Ok((920, 1187)));
    }

    #[test]
    fn parse_custom_with_trailing_garbage() {
        // the numeric core is extracted even with stray characters appended
        assert_eq!(parse_size_spec("123x456s"), Ok((123, 456)));
    }

    #[test]
    fn parse_rejects_zero_dimensions() {
        assert_eq!(
            parse_size_spec("0x100"),
            Err(LayoutError::UnknownSizeSpec("0x100".to_string()))
        );
        assert!(parse_size_spec("100x0").is_err());
        assert!(parse_size_spec("0x0").is_err());
    }

    #[test]
    fn parse_rejects_unknown_spec() {
        assert_eq!(
            parse_size_spec("a9"),
            Err(LayoutError::UnknownSizeSpec("a9".to_string()))
        );
        assert!(parse_size_spec("wide").is_err());
        assert!(parse_size_spec("").is_err());
    }

    #[test]
    fn printable_size_without_margin() {
        let size = printable_size("a0", 0).unwrap();
        assert_eq!(size, PageSize::new(2383.937, 3370.394));
    }

    #[test]
    fn printable_size_with_margin() {
        // a0 with a 20 mm margin prints on an 801x1149 mm area
        let size = printable_size("a0", 20).unwrap();
        let expected = to_user_space(801.0, 1149.0);
        assert_eq!(size, expected);
    }

    #[test]
    fn printable_size_rejects_consuming_margin() {
        assert_eq!(
            printable_size("a0", 421).unwrap_err(),
            LayoutError::MarginTooLarge { margin_mm: 421 }
        );
        // exactly consuming one axis is rejected too
        assert!(printable_size("100x200", 50).is_err());
    }

    #[test]
    fn printable_size_propagates_spec_errors() {
        assert!(matches!(
            printable_size("nonsense", 0),
            Err(LayoutError::UnknownSizeSpec(_))
        ));
    }

    #[test]
    fn printable_size_zero_dimension_blames_the_spec_not_the_margin() {
        // no margin was given; the error must name the spec
        assert_eq!(
            printable_size("0x100", 0).unwrap_err(),
            LayoutError::UnknownSizeSpec("0x100".to_string())
        );
    }

    #[test]
    fn printable_size_survives_an_extreme_margin() {
        // doubling u32::MAX must reject, not wrap
        assert_eq!(
            printable_size("a0", u32::MAX).unwrap_err(),
            LayoutError::MarginTooLarge { margin_mm: u32::MAX }
        );
    }
}
