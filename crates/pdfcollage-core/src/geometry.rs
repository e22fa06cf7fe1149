/// Width and height of a PDF page in user space units (1 unit = 1/72 inch).
///
/// Used both for a single pattern tile (measured from the input document)
/// and for the printable area of an output sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A point on a PDF page in user space units.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A crop rectangle given by its lower-left and upper-right corners,
/// in user space units with the origin at the bottom-left of the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CropRect {
    pub lower_left: Point,
    pub upper_right: Point,
}

impl CropRect {
    pub fn new(lower_left: Point, upper_right: Point) -> Self {
        Self {
            lower_left,
            upper_right,
        }
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f64 {
        self.upper_right.x - self.lower_left.x
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f64 {
        self.upper_right.y - self.lower_left.y
    }
}
