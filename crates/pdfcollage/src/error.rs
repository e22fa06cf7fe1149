//! Error types for the assembly and disassembly layers.
//!
//! Uses [`thiserror`] for ergonomic error derivation. [`CollageError`] is the
//! run-level taxonomy: everything a run can fail with is one of its variants,
//! caught once at the CLI boundary and printed.

use std::path::PathBuf;

use pdfcollage_core::LayoutError;
use thiserror::Error;

/// Error type for one pdfcollage run.
#[derive(Debug, Error)]
pub enum CollageError {
    /// The request cannot be carried out as given (bad layout for the
    /// document, empty input, and similar).
    #[error("{0}")]
    Usage(String),

    /// Error reading or writing a file.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error in the structure of a PDF document.
    #[error("PDF error: {0}")]
    Pdf(String),

    /// pdflatex ran but exited non-zero; `output` is its captured
    /// stdout and stderr.
    #[error("pdflatex encountered a problem while assembling the collage and had to abort:\n{output}")]
    Render { output: String },

    /// The pdflatex binary could not be found on this system.
    #[error("pdflatex was not found; install a LaTeX distribution with the pdfpages package")]
    RendererNotFound,

    /// A layout arithmetic error.
    #[error(transparent)]
    Layout(#[from] LayoutError),
}
