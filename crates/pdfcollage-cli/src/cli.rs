//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;
use pdfcollage::{Layout, parse_size_spec};

/// Assemble digital sewing-pattern pages into one collage and chop it up
/// into a printable output layout.
///
/// The collage is assembled according to one or several overview sheets;
/// these are usually provided along with the pattern pages in the same pdf
/// or in the instructions pdf. Without an output size the collage itself is
/// written, one oversized page per layout.
#[derive(Debug, Parser)]
#[command(name = "pdfcollage", about, version)]
pub struct Cli {
    /// Input layout of the pdf: the page number of the first pattern page
    /// (0 if the pdf has no overview sheet), columns, rows. Can be given
    /// multiple times for documents with several overview sheets.
    #[arg(
        short = 'l',
        long = "layout",
        value_names = ["FIRSTPAGE", "COLUMNS", "ROWS"],
        num_args = 3,
        required = true
    )]
    layout: Vec<u32>,

    /// Output size: a0, us, or a custom <width>x<height> in millimeters
    #[arg(long, value_name = "SIZE", value_parser = parse_output_size)]
    pub output_size: Option<String>,

    /// Print margin in millimeters, applied to all four edges
    #[arg(long, value_name = "MM", default_value_t = 0)]
    pub margin: u32,

    /// Assemble the collage from bottom left to top right instead of from
    /// top left to bottom right
    #[arg(long)]
    pub reverse: bool,

    /// Path to the pdf pattern
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path where the output files are written, numbered per layout
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
}

impl Cli {
    /// The declared layouts, in declaration order.
    pub fn layouts(&self) -> Vec<Layout> {
        self.layout
            .chunks_exact(3)
            .map(|triple| Layout::new(triple[0], triple[1], triple[2]))
            .collect()
    }
}

/// Reject unknown output sizes while parsing, before the input is opened.
fn parse_output_size(value: &str) -> Result<String, String> {
    parse_size_spec(value)
        .map(|_| value.to_string())
        .map_err(|e| e.to_string())
}
