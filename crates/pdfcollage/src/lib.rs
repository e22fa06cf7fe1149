//! pdfcollage: assemble sewing-pattern PDFs into one collage and chop it
//! up for large-format printing.
//!
//! A digital sewing pattern ships as dozens of A4 tiles plus an overview
//! sheet. One run merges the tiles of each declared layout onto a single
//! oversized page (the collage) and then either re-tiles that page for a
//! large-format printer or writes it out as is.
//!
//! # Architecture
//!
//! - **pdfcollage-core**: layout arithmetic (factors, page ranges, crop
//!   rectangles), independent of any PDF library
//! - **pdfcollage** (this crate): input probing and output writing over
//!   [`lopdf`], plus the pdflatex renderer that does the page merging
//!
//! The pipeline per run: [`InputProperties::probe`] measures the input,
//! [`run`] assembles one collage per layout through a [`RenderCollage`]
//! implementation and chops each one to the requested output size.

pub mod assembly;
pub mod disassembly;
pub mod error;
pub mod input;
pub mod output;
pub mod render;
mod run;

pub use pdfcollage_core;
pub use pdfcollage_core::{Factor, Layout, PageRange, PageSize, parse_size_spec};

pub use assembly::assemble_collages;
pub use error::CollageError;
pub use input::InputProperties;
pub use output::OutputProperties;
pub use render::{PdflatexRenderer, RenderCollage, RenderJob};
pub use run::run;
