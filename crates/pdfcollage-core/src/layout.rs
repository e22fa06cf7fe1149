//! Pattern layouts and n-up factors.
//!
//! A [`Layout`] describes one rectangular grid of tiles inside the input
//! document. A [`Factor`] says how many whole tiles fit along each axis of
//! one output sheet; it is recomputed per layout and output size and never
//! mutated afterwards (the advancing counters of the tiling cursor live in
//! [`crate::tiling`], not here).

use crate::error::{Axis, LayoutError};
use crate::geometry::PageSize;

/// One rectangular section of the input document.
///
/// `first_page` is the 1-based number of the first pattern page covered by
/// the grid; the page before it, if any, is an overview sheet and is
/// skipped. The section spans `columns * rows` consecutive pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub first_page: u32,
    pub columns: u32,
    pub rows: u32,
}

impl Layout {
    /// Create a layout. A `first_page` of 0 means the document has no
    /// overview sheet and is normalized to 1.
    pub fn new(first_page: u32, columns: u32, rows: u32) -> Self {
        Self {
            first_page: first_page.max(1),
            columns,
            rows,
        }
    }

    /// Number of pattern pages covered by this layout.
    ///
    /// Widened to u64: a nonsense grid from the command line may cover more
    /// pages than fit in u32, and the count must stay exact so the
    /// comparison against the document's page count rejects it.
    pub fn page_count(&self) -> u64 {
        u64::from(self.columns) * u64::from(self.rows)
    }

    /// 1-based number of the last page covered by this layout.
    pub fn last_page(&self) -> u64 {
        u64::from(self.first_page) + self.page_count() - 1
    }

    /// Reject layouts with zero columns or zero rows.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(LayoutError::EmptyLayout {
                columns: self.columns,
                rows: self.rows,
            });
        }
        Ok(())
    }
}

/// Whole tiles per output-sheet axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Factor {
    pub x: u32,
    pub y: u32,
}

impl Factor {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Reject factors with a zero component. A zero means the output page
    /// cannot hold even one tile along that axis, which must surface as a
    /// configuration error rather than a degenerate page sequence.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.x == 0 {
            return Err(LayoutError::ZeroFactor(Axis::Horizontal));
        }
        if self.y == 0 {
            return Err(LayoutError::ZeroFactor(Axis::Vertical));
        }
        Ok(())
    }
}

/// How many whole input tiles fit on one output page, per axis.
///
/// Flooring division: a tile that only partially fits does not count.
/// Either component may come out 0; callers check with [`Factor::validate`].
pub fn nup_factor(tile: &PageSize, output: &PageSize) -> Factor {
    Factor {
        x: (output.width / tile.width).floor() as u32,
        y: (output.height / tile.height).floor() as u32,
    }
}

/// Exact number of output pages the disassembly of `layout` emits.
///
/// `factor` must have been validated; both components are nonzero here.
/// Computed in u64 like [`Layout::page_count`].
pub fn pages_needed(layout: &Layout, factor: &Factor) -> u64 {
    u64::from(layout.columns.div_ceil(factor.x)) * u64::from(layout.rows.div_ceil(factor.y))
}
