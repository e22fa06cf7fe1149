//! Collage assembly: one staged collage per layout.

use std::path::{Path, PathBuf};

use pdfcollage_core::{canvas_size, page_ranges};

use crate::error::CollageError;
use crate::input::InputProperties;
use crate::render::{RenderCollage, RenderJob};

/// Render one collage per layout and return their paths in declaration
/// order.
///
/// Each collage is a single oversized page holding that layout's tiles edge
/// to edge, staged in `staging_dir`. The first renderer failure aborts the
/// run; collages staged so far disappear with the staging directory.
pub fn assemble_collages(
    input: &InputProperties,
    renderer: &dyn RenderCollage,
    staging_dir: &Path,
) -> Result<Vec<PathBuf>, CollageError> {
    let mut collages = Vec::with_capacity(input.layouts.len());
    for (index, layout) in input.layouts.iter().enumerate() {
        println!("Assembling overview {} of {}", index + 1, input.layouts.len());
        println!("Creating collage...");
        if input.reverse {
            log::debug!("reverse assembly for overview {}", index + 1);
        }
        let job = RenderJob {
            input: &input.path,
            canvas: canvas_size(layout, &input.tile),
            columns: layout.columns,
            rows: layout.rows,
            ranges: page_ranges(layout, input.reverse),
        };
        collages.push(renderer.render(&job, staging_dir)?);
    }
    Ok(collages)
}
