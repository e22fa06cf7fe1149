//! Output destination and file naming.

use std::path::PathBuf;

use pdfcollage_core::{PageSize, printable_size};

use crate::error::CollageError;

/// Where a run writes its results.
///
/// `page_size` is the printable area of one output sheet in user space
/// units. `None` selects collage passthrough mode: each layout's collage is
/// written out as a single oversized page instead of being chopped up.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputProperties {
    pub path: PathBuf,
    pub page_size: Option<PageSize>,
}

impl OutputProperties {
    pub fn new(path: PathBuf, page_size: Option<PageSize>) -> Self {
        Self { path, page_size }
    }

    /// Build output properties from the CLI's size and margin options.
    ///
    /// `spec` is `a0`, `us`, or `<width>x<height>` in millimeters; `None`
    /// selects passthrough mode and ignores the margin. The margin is
    /// subtracted from all four edges before the conversion to user space
    /// units.
    pub fn from_spec(
        path: PathBuf,
        spec: Option<&str>,
        margin_mm: u32,
    ) -> Result<Self, CollageError> {
        let page_size = match spec {
            Some(spec) => Some(printable_size(spec, margin_mm)?),
            None => None,
        };
        Ok(Self { path, page_size })
    }

    /// Output path for the layout at `index` (0-based): `pattern.pdf`
    /// becomes `pattern_1.pdf`, `pattern_2.pdf`, and so on. The number is
    /// appended even when only one layout was declared.
    pub fn numbered_path(&self, index: usize) -> PathBuf {
        let mut name = self
            .path
            .file_stem()
            .unwrap_or_default()
            .to_os_string();
        name.push(format!("_{}", index + 1));
        if let Some(extension) = self.path.extension() {
            name.push(".");
            name.push(extension);
        }
        self.path.with_file_name(name)
    }
}
