//! Collage rendering through an external page-merge tool.
//!
//! A [`RenderJob`] describes one collage: which pages of the input document
//! go onto the canvas, in what grid, at what canvas size. [`RenderCollage`]
//! is the seam between the assembly logic and the tool that does the actual
//! page merging; the production implementation, [`PdflatexRenderer`], writes
//! a small LaTeX file around the `pdfpages` package and runs pdflatex on it.

use std::path::{Path, PathBuf};
use std::process::Command;

use pdfcollage_core::{PageRange, PageSize};

use crate::error::CollageError;

/// One collage to render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderJob<'a> {
    /// The input pattern document.
    pub input: &'a Path,
    /// Canvas size in user space units: tiles edge to edge, no scaling.
    pub canvas: PageSize,
    /// Tiles per canvas row.
    pub columns: u32,
    /// Rows of tiles on the canvas.
    pub rows: u32,
    /// Input page ranges in placement order. Forward assembly has one
    /// contiguous range; reverse assembly one range per row.
    pub ranges: Vec<PageRange>,
}

/// Merges the pages of one [`RenderJob`] onto a single oversized page.
pub trait RenderCollage {
    /// Render the collage, staging intermediate files in `staging_dir`,
    /// and return the path of the rendered single-page PDF.
    fn render(&self, job: &RenderJob<'_>, staging_dir: &Path) -> Result<PathBuf, CollageError>;
}

/// Renders collages by driving pdflatex over a generated LaTeX file.
///
/// Requires a LaTeX installation with the `pdfpages` and `geometry`
/// packages on the PATH.
pub struct PdflatexRenderer;

impl RenderCollage for PdflatexRenderer {
    fn render(&self, job: &RenderJob<'_>, staging_dir: &Path) -> Result<PathBuf, CollageError> {
        let texfile = staging_dir.join("texfile.tex");
        std::fs::write(&texfile, latex_source(job)).map_err(|source| CollageError::Io {
            path: texfile.clone(),
            source,
        })?;

        let jobname = format!("output_{}", random_suffix());
        let mut command = Command::new("pdflatex");
        command
            .arg("-interaction=nonstopmode")
            .arg(format!("-jobname={jobname}"))
            .arg(format!("-output-directory={}", staging_dir.display()))
            .arg(&texfile);
        log::debug!("running {command:?}");

        let output = command.output().map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                CollageError::RendererNotFound
            } else {
                CollageError::Render {
                    output: source.to_string(),
                }
            }
        })?;
        if !output.status.success() {
            let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
            combined.push_str(&String::from_utf8_lossy(&output.stderr));
            return Err(CollageError::Render { output: combined });
        }

        Ok(staging_dir.join(jobname).with_extension("pdf"))
    }
}

/// The LaTeX document that merges the job's page ranges onto one page.
///
/// `pdfpages`' `\includepdfmerge` places the listed pages on an `n`-up grid,
/// left to right then top to bottom, unscaled; the `geometry` paper size is
/// the exact canvas size, so the grid fills the page without margins.
fn latex_source(job: &RenderJob<'_>) -> String {
    let range = job
        .ranges
        .iter()
        .map(PageRange::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "\\batchmode\n\
         \\documentclass[a4paper,]{{article}}\n\
         \\usepackage[papersize={{{width}pt,{height}pt}}]{{geometry}}\n\
         \\usepackage[utf8]{{inputenc}}\n\
         \\usepackage{{pdfpages}}\n\
         \\begin{{document}}\n\
         \\includepdfmerge[nup={columns}x{rows}, noautoscale=true, scale=1.0]{{{input},{range} }}\n\
         \\end{{document}}\n",
        width = job.canvas.width,
        height = job.canvas.height,
        columns = job.columns,
        rows = job.rows,
        input = job.input.display(),
    )
}

/// Seven random lowercase alphanumerics, so collages staged for different
/// layouts never collide on the jobname.
fn random_suffix() -> String {
    use rand::Rng;

    const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::thread_rng();
    (0..7)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}
