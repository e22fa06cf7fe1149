//! Input-document probing.
//!
//! Opens the pattern PDF once, counts its pages and measures the size of
//! one tile. The tile is measured from the page after the first, since the
//! first page is usually an overview sheet; a single-page document measures
//! its only page. A page-level crop box wins over the media box, and the
//! media box may be inherited from a /Pages ancestor.

use std::path::{Path, PathBuf};

use pdfcollage_core::{Layout, PageSize};

use crate::error::CollageError;

/// Everything a run needs to know about the input document.
#[derive(Debug)]
pub struct InputProperties {
    /// Path of the pattern PDF, handed on to the renderer.
    pub path: PathBuf,
    /// Total number of pages in the document.
    pub page_count: u32,
    /// Size of one pattern tile in user space units, rounded to 2 decimals.
    pub tile: PageSize,
    /// The declared layouts, in declaration order.
    pub layouts: Vec<Layout>,
    /// Assemble each collage from the bottom left instead of the top left.
    pub reverse: bool,
}

impl InputProperties {
    /// Open `path`, count its pages, measure the tile size, and check that
    /// every layout fits within the document.
    pub fn probe(path: &Path, layouts: Vec<Layout>, reverse: bool) -> Result<Self, CollageError> {
        let doc = load_document(path)?;
        let page_ids: Vec<lopdf::ObjectId> = doc.get_pages().into_values().collect();
        if page_ids.is_empty() {
            return Err(CollageError::Usage(format!(
                "'{}' contains no pages",
                path.display()
            )));
        }

        // Page 1 is usually an overview sheet, so the tile is measured from
        // page 2; a single-page document has nothing to skip.
        let measured = if page_ids.len() > 1 {
            page_ids[1]
        } else {
            page_ids[0]
        };
        let tile = tile_size(&doc, measured)?;
        log::debug!(
            "input '{}': {} pages, tile {} x {} pt",
            path.display(),
            page_ids.len(),
            tile.width,
            tile.height
        );

        let input = Self {
            path: path.to_path_buf(),
            page_count: page_ids.len() as u32,
            tile,
            layouts,
            reverse,
        };
        input.validate_layouts()?;
        Ok(input)
    }

    fn validate_layouts(&self) -> Result<(), CollageError> {
        for layout in &self.layouts {
            layout.validate()?;
            if layout.last_page() > u64::from(self.page_count) {
                return Err(CollageError::Usage(format!(
                    "layout {} {} {} covers pages {}-{}, but '{}' only has {} pages",
                    layout.first_page,
                    layout.columns,
                    layout.rows,
                    layout.first_page,
                    layout.last_page(),
                    self.path.display(),
                    self.page_count
                )));
            }
        }
        Ok(())
    }
}

/// Read and parse a PDF document from disk.
pub(crate) fn load_document(path: &Path) -> Result<lopdf::Document, CollageError> {
    let bytes = std::fs::read(path).map_err(|source| CollageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    lopdf::Document::load_mem(&bytes)
        .map_err(|e| CollageError::Pdf(format!("failed to parse '{}': {e}", path.display())))
}

/// Width and height of one pattern page, rounded to 2 decimal places.
fn tile_size(doc: &lopdf::Document, page_id: lopdf::ObjectId) -> Result<PageSize, CollageError> {
    let rect = match page_crop_box(doc, page_id)? {
        Some(rect) => rect,
        None => page_media_box(doc, page_id)?,
    };
    Ok(PageSize::new(
        round2(rect[2] - rect[0]),
        round2(rect[3] - rect[1]),
    ))
}

/// The page's own crop box, if it declares one. Not inherited.
fn page_crop_box(
    doc: &lopdf::Document,
    page_id: lopdf::ObjectId,
) -> Result<Option<[f64; 4]>, CollageError> {
    let dict = doc
        .get_object(page_id)
        .and_then(|o| o.as_dict())
        .map_err(|e| CollageError::Pdf(format!("failed to get page dictionary: {e}")))?;

    match dict.get(b"CropBox") {
        Ok(obj) => {
            let array = obj
                .as_array()
                .map_err(|e| CollageError::Pdf(format!("CropBox is not an array: {e}")))?;
            Ok(Some(extract_rect(array)?))
        }
        Err(_) => Ok(None),
    }
}

/// The page's media box, which every page must carry or inherit.
fn page_media_box(
    doc: &lopdf::Document,
    page_id: lopdf::ObjectId,
) -> Result<[f64; 4], CollageError> {
    let obj = resolve_inherited(doc, page_id, b"MediaBox")?.ok_or_else(|| {
        CollageError::Pdf("MediaBox not found on page or ancestors".to_string())
    })?;
    let array = obj
        .as_array()
        .map_err(|e| CollageError::Pdf(format!("MediaBox is not an array: {e}")))?;
    extract_rect(array)
}

/// Look up a key in the page dictionary, walking up the page tree
/// (via /Parent) if the key is not found on the page itself.
///
/// Returns `None` if the key is not found anywhere in the tree.
fn resolve_inherited<'a>(
    doc: &'a lopdf::Document,
    page_id: lopdf::ObjectId,
    key: &[u8],
) -> Result<Option<&'a lopdf::Object>, CollageError> {
    let mut current_id = page_id;
    loop {
        let dict = doc
            .get_object(current_id)
            .and_then(|o| o.as_dict())
            .map_err(|e| CollageError::Pdf(format!("failed to get page dictionary: {e}")))?;

        if let Ok(value) = dict.get(key) {
            return Ok(Some(value));
        }

        match dict.get(b"Parent") {
            Ok(parent_obj) => {
                current_id = parent_obj.as_reference().map_err(|e| {
                    CollageError::Pdf(format!("invalid /Parent reference: {e}"))
                })?;
            }
            Err(_) => return Ok(None),
        }
    }
}

/// Extract `[x0, y0, x1, y1]` from a lopdf array of 4 numbers.
fn extract_rect(array: &[lopdf::Object]) -> Result<[f64; 4], CollageError> {
    if array.len() != 4 {
        return Err(CollageError::Pdf(format!(
            "expected 4-element array for box, got {}",
            array.len()
        )));
    }
    Ok([
        object_to_f64(&array[0])?,
        object_to_f64(&array[1])?,
        object_to_f64(&array[2])?,
        object_to_f64(&array[3])?,
    ])
}

/// Convert a lopdf numeric object (Integer or Real) to f64.
fn object_to_f64(obj: &lopdf::Object) -> Result<f64, CollageError> {
    match obj {
        lopdf::Object::Integer(i) => Ok(*i as f64),
        lopdf::Object::Real(f) => Ok(f64::from(*f)),
        _ => Err(CollageError::Pdf(format!("expected number, got {obj:?}"))),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
