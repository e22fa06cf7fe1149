//! pdfcollage-core: Layout arithmetic for pdfcollage-rs.
//!
//! This crate provides the value types (PageSize, Layout, Factor, CropRect)
//! and the pure computations behind collage assembly and disassembly:
//! millimeter conversion, n-up factors, page ranges, and the crop-rectangle
//! cursor. It knows nothing about PDF files or external tools.

pub mod collage;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod pagespec;
pub mod tiling;
pub mod units;

pub use collage::{PageRange, canvas_size, page_ranges};
pub use error::{Axis, LayoutError};
pub use geometry::{CropRect, PageSize, Point};
pub use layout::{Factor, Layout, nup_factor, pages_needed};
pub use pagespec::{parse_size_spec, printable_size};
pub use tiling::{CropRects, TileCursor};
pub use units::to_user_space;
