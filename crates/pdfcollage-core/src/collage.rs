//! Canvas geometry and page-range selection for collage assembly.
//!
//! The collage for one layout is a single oversized page of exactly
//! `columns * rows` tiles. The input pages that land on it form one
//! contiguous range in the source document; in reverse mode that range is
//! re-emitted as row-groups in reversed order so the renderer places the
//! last source row at the bottom of the canvas.

use std::fmt;

use crate::geometry::PageSize;
use crate::layout::Layout;

/// An inclusive range of 1-based page numbers in the input document.
///
/// Page numbers are u64 to match [`Layout::last_page`]; any range that
/// reaches an actual document fits in u32, since layouts are validated
/// against the document's page count first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRange {
    pub first: u64,
    pub last: u64,
}

impl PageRange {
    pub fn new(first: u64, last: u64) -> Self {
        Self { first, last }
    }
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.last)
    }
}

/// Size of the assembled canvas: tiles placed edge to edge, no scaling.
pub fn canvas_size(layout: &Layout, tile: &PageSize) -> PageSize {
    PageSize::new(
        tile.width * f64::from(layout.columns),
        tile.height * f64::from(layout.rows),
    )
}

/// The page ranges of `layout`, in the order the renderer must place them.
///
/// Forward assembly reads the section as one contiguous range. Reverse
/// assembly partitions it into `rows` groups of `columns` pages and emits
/// the groups last-to-first, keeping left-to-right order within each group,
/// so the collage builds from the bottom-left instead of the top-left.
pub fn page_ranges(layout: &Layout, reverse: bool) -> Vec<PageRange> {
    if !reverse {
        return vec![PageRange::new(
            u64::from(layout.first_page),
            layout.last_page(),
        )];
    }
    (0..layout.rows)
        .rev()
        .map(|row| {
            let first =
                u64::from(layout.first_page) + u64::from(row) * u64::from(layout.columns);
            PageRange::new(first, first + u64::from(layout.columns) - 1)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_size_multiplies_tile_grid() {
        let layout = Layout::new(2, 8, 4);
        let tile = PageSize::new(483.307, 729.917);
        let canvas = canvas_size(&layout, &tile);
        assert_eq!(canvas.width, 483.307 * 8.0);
        assert_eq!(canvas.height, 729.917 * 4.0);
    }

    #[test]
    fn forward_range_is_contiguous() {
        let layout = Layout::new(2, 8, 4);
        assert_eq!(page_ranges(&layout, false), vec![PageRange::new(2, 33)]);
    }

    #[test]
    fn forward_range_without_overview() {
        let layout = Layout::new(1, 4, 5);
        assert_eq!(page_ranges(&layout, false), vec![PageRange::new(1, 20)]);
    }

    #[test]
    fn reverse_ranges_flip_row_groups() {
        // pages 2..=33 in four row-groups of eight, last group first
        let layout = Layout::new(2, 8, 4);
        assert_eq!(
            page_ranges(&layout, true),
            vec![
                PageRange::new(26, 33),
                PageRange::new(18, 25),
                PageRange::new(10, 17),
                PageRange::new(2, 9),
            ]
        );
    }

    #[test]
    fn reverse_ranges_keep_intra_group_order() {
        let layout = Layout::new(1, 3, 2);
        assert_eq!(
            page_ranges(&layout, true),
            vec![PageRange::new(4, 6), PageRange::new(1, 3)]
        );
    }

    #[test]
    fn reverse_ranges_single_column() {
        // every group is one page wide; all rows must still appear
        let layout = Layout::new(1, 1, 3);
        assert_eq!(
            page_ranges(&layout, true),
            vec![
                PageRange::new(3, 3),
                PageRange::new(2, 2),
                PageRange::new(1, 1),
            ]
        );
    }

    #[test]
    fn reverse_single_row_matches_forward_span() {
        let layout = Layout::new(5, 6, 1);
        assert_eq!(page_ranges(&layout, true), vec![PageRange::new(5, 10)]);
    }

    #[test]
    fn page_range_display() {
        assert_eq!(PageRange::new(26, 33).to_string(), "26-33");
        assert_eq!(PageRange::new(3, 3).to_string(), "3-3");
    }
}
