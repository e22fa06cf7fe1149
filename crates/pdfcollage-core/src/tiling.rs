//! Crop-rectangle computation for re-tiling a collage onto output pages.
//!
//! The collage canvas is exactly `columns x rows` input tiles large. Each
//! output page holds `factor.x * factor.y` whole tiles; the rectangles
//! emitted here walk the canvas in row-major order, clipping the last
//! column and last row to the true pattern extent instead of overshooting
//! into padding.

use crate::error::LayoutError;
use crate::geometry::{CropRect, PageSize, Point};
use crate::layout::{Factor, Layout, pages_needed};

/// Cursor position on the output-page grid, in whole output pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GridPoint {
    x: u32,
    y: u32,
}

/// Cursor over the output-page grid, advanced one emitted page at a time.
///
/// `lower_left` scaled by `(factor.x * tile.width, factor.y * tile.height)`
/// is the lower-left corner of the current output page's crop rectangle;
/// `upper_right` scaled the same way is the candidate upper-right corner
/// before boundary clamping. [`step()`](TileCursor::step) consumes the
/// cursor and returns the advanced one, so no state is mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileCursor {
    lower_left: GridPoint,
    upper_right: GridPoint,
}

impl TileCursor {
    /// Cursor for the first output page, at the canvas origin.
    pub fn start() -> Self {
        Self {
            lower_left: GridPoint { x: 0, y: 0 },
            upper_right: GridPoint { x: 1, y: 1 },
        }
    }

    /// Computes the crop rectangle for the current output page and the
    /// cursor for the next one.
    ///
    /// The candidate upper-right corner may overshoot the canvas when the
    /// grid is not an exact factor multiple; the overshooting axis is
    /// clamped to the pattern's true extent. An exact factor multiple
    /// lands on the boundary unclamped but still ends the row.
    pub fn step(self, layout: &Layout, factor: &Factor, tile: &PageSize) -> (CropRect, TileCursor) {
        let lower_left = Point::new(
            f64::from(self.lower_left.x) * f64::from(factor.x) * tile.width,
            f64::from(self.lower_left.y) * f64::from(factor.y) * tile.height,
        );

        let rows_remaining =
            i64::from(layout.rows) - i64::from(self.upper_right.y) * i64::from(factor.y);
        let upper_y = if rows_remaining < 0 {
            f64::from(layout.rows) * tile.height
        } else {
            f64::from(self.upper_right.y) * f64::from(factor.y) * tile.height
        };

        let cols_remaining =
            i64::from(layout.columns) - i64::from(self.upper_right.x) * i64::from(factor.x);
        let upper_x = if cols_remaining < 0 {
            f64::from(layout.columns) * tile.width
        } else {
            f64::from(self.upper_right.x) * f64::from(factor.x) * tile.width
        };

        let rect = CropRect::new(lower_left, Point::new(upper_x, upper_y));
        let next = if cols_remaining > 0 {
            self.advance_horizontally()
        } else {
            self.advance_vertically()
        };
        (rect, next)
    }

    fn advance_horizontally(mut self) -> Self {
        self.lower_left.x += 1;
        self.upper_right.x += 1;
        self
    }

    fn advance_vertically(mut self) -> Self {
        self.lower_left.x = 0;
        self.lower_left.y += 1;
        self.upper_right.x = 1;
        self.upper_right.y += 1;
        self
    }
}

/// Iterator over the crop rectangles of one layout, yielding each output
/// page's rectangle on demand.
///
/// Created by [`CropRects::new()`], which rejects a factor with a zero
/// component before any rectangle is computed. Rectangles come out in
/// row-major order (left to right, then top to bottom) and cover the
/// canvas exactly once.
pub struct CropRects {
    layout: Layout,
    factor: Factor,
    tile: PageSize,
    cursor: TileCursor,
    remaining: u64,
}

impl CropRects {
    pub fn new(layout: Layout, factor: Factor, tile: PageSize) -> Result<Self, LayoutError> {
        layout.validate()?;
        factor.validate()?;
        let remaining = pages_needed(&layout, &factor);
        Ok(Self {
            layout,
            factor,
            tile,
            cursor: TileCursor::start(),
            remaining,
        })
    }
}

impl Iterator for CropRects {
    type Item = CropRect;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let (rect, next) = self.cursor.step(&self.layout, &self.factor, &self.tile);
        self.cursor = next;
        self.remaining -= 1;
        Some(rect)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CropRects {}
