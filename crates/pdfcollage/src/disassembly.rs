//! Chopping a collage into printable pages.
//!
//! Every output page is the collage page with different box entries; the
//! page content objects are shared, so the output grows by one page
//! dictionary per sheet, not by one copy of the pattern. Collage-only runs
//! skip the chop and re-save each staged collage unchanged.

use std::path::{Path, PathBuf};

use pdfcollage_core::{CropRects, PageSize, nup_factor};

use crate::error::CollageError;
use crate::input::{InputProperties, load_document};
use crate::output::OutputProperties;

/// Chop every staged collage to the printable size and write the numbered
/// output files.
pub fn chop_collages(
    input: &InputProperties,
    collages: &[PathBuf],
    output: &OutputProperties,
    printable: &PageSize,
) -> Result<(), CollageError> {
    let factor = nup_factor(&input.tile, printable);
    log::debug!("n-up factor {} x {}", factor.x, factor.y);
    for (index, (collage_path, layout)) in collages.iter().zip(&input.layouts).enumerate() {
        println!("\nChopping up the collage...");
        let collage = load_document(collage_path)?;
        let rects = CropRects::new(*layout, factor, input.tile)?;
        let mut chopped = chop(collage, rects)?;
        println!("Successfully chopped up the collage.\n");

        let target = output.numbered_path(index);
        println!("Writing file...");
        write_document(&mut chopped, &target)?;
        println!("Final pdf written to {}. Enjoy your sewing :)", target.display());
    }
    Ok(())
}

/// Write each staged collage unchanged to its numbered output path.
pub fn write_collages(
    collages: &[PathBuf],
    output: &OutputProperties,
) -> Result<(), CollageError> {
    for (index, collage_path) in collages.iter().enumerate() {
        let mut collage = load_document(collage_path)?;
        let target = output.numbered_path(index);
        write_document(&mut collage, &target)?;
        println!("Collage written to {}. Enjoy your sewing :)", target.display());
    }
    Ok(())
}

/// Turn the single collage page into one page per crop rectangle.
///
/// Each output page is a clone of the collage page dictionary with its own
/// /MediaBox and /CropBox; the page tree is rebuilt with the clones as its
/// only kids and the template page is dropped.
fn chop(
    mut collage: lopdf::Document,
    rects: CropRects,
) -> Result<lopdf::Document, CollageError> {
    let page_id = collage
        .get_pages()
        .into_values()
        .next()
        .ok_or_else(|| CollageError::Pdf("collage has no pages".to_string()))?;
    let pages_id = collage
        .catalog()
        .and_then(|catalog| catalog.get(b"Pages"))
        .and_then(|pages| pages.as_reference())
        .map_err(|e| CollageError::Pdf(format!("failed to resolve the page tree: {e}")))?;
    let template = collage
        .get_object(page_id)
        .and_then(|o| o.as_dict())
        .map_err(|e| CollageError::Pdf(format!("failed to get the collage page: {e}")))?
        .clone();

    let mut kids: Vec<lopdf::Object> = Vec::with_capacity(rects.len());
    for rect in rects {
        let corners: Vec<lopdf::Object> = vec![
            rect.lower_left.x.into(),
            rect.lower_left.y.into(),
            rect.upper_right.x.into(),
            rect.upper_right.y.into(),
        ];
        let mut page = template.clone();
        page.set("MediaBox", corners.clone());
        page.set("CropBox", corners);
        page.set("Parent", pages_id);
        kids.push(collage.add_object(page).into());
    }

    let count = kids.len() as i64;
    let pages = collage
        .get_object_mut(pages_id)
        .and_then(|o| o.as_dict_mut())
        .map_err(|e| CollageError::Pdf(format!("failed to get the page tree: {e}")))?;
    pages.set("Kids", kids);
    pages.set("Count", count);
    collage.objects.remove(&page_id);
    Ok(collage)
}

/// Serialize `doc` and write it to `path`.
fn write_document(doc: &mut lopdf::Document, path: &Path) -> Result<(), CollageError> {
    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| CollageError::Pdf(format!("failed to serialize the output: {e}")))?;
    std::fs::write(path, &bytes).map_err(|source| CollageError::Io {
        path: path.to_path_buf(),
        source,
    })
}
