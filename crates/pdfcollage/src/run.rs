//! One end-to-end run: assemble every layout's collage, then chop or
//! pass each one through.

use pdfcollage_core::nup_factor;

use crate::assembly::assemble_collages;
use crate::disassembly::{chop_collages, write_collages};
use crate::error::CollageError;
use crate::input::InputProperties;
use crate::output::OutputProperties;
use crate::render::RenderCollage;

/// Assemble the collages and write the output files.
///
/// When an output size is set, the n-up factor is checked before anything
/// is rendered, so an output sheet too small for one tile fails without
/// invoking the renderer. Staged collages live in a temporary directory
/// that is removed when the run ends, successful or not. Output files
/// written for earlier layouts stay on disk if a later layout fails.
pub fn run(
    input: &InputProperties,
    output: &OutputProperties,
    renderer: &dyn RenderCollage,
) -> Result<(), CollageError> {
    if let Some(printable) = &output.page_size {
        nup_factor(&input.tile, printable).validate()?;
    }

    let staging = tempfile::tempdir().map_err(|source| CollageError::Io {
        path: std::env::temp_dir(),
        source,
    })?;
    log::debug!("staging collages in {}", staging.path().display());

    let collages = assemble_collages(input, renderer, staging.path())?;
    println!("Successfully assembled collage from {}.", input.path.display());

    match &output.page_size {
        Some(printable) => chop_collages(input, &collages, output, printable),
        None => write_collages(&collages, output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderJob;
    use lopdf::{Document, Object, ObjectId, Stream, dictionary};
    use pdfcollage_core::{Layout, PageSize};
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};

    /// Writes a real single-page PDF of the job's canvas size into the
    /// staging directory, standing in for pdflatex.
    struct StubRenderer {
        calls: RefCell<u32>,
    }

    impl StubRenderer {
        fn new() -> Self {
            Self {
                calls: RefCell::new(0),
            }
        }
    }

    impl RenderCollage for StubRenderer {
        fn render(
            &self,
            job: &RenderJob<'_>,
            staging_dir: &Path,
        ) -> Result<PathBuf, CollageError> {
            *self.calls.borrow_mut() += 1;
            let path = staging_dir.join(format!("collage_{}.pdf", self.calls.borrow()));
            let bytes = collage_bytes(job.canvas.width, job.canvas.height);
            std::fs::write(&path, &bytes).map_err(|source| CollageError::Io {
                path: path.clone(),
                source,
            })?;
            Ok(path)
        }
    }

    fn collage_bytes(width: f64, height: f64) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id: ObjectId = doc.new_object_id();

        let content_id = doc.add_object(Object::Stream(Stream::new(
            dictionary! {},
            b"q Q".to_vec(),
        )));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), width.into(), height.into()],
            "Contents" => content_id,
        });

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![Object::from(page_id)],
                "Count" => 1i64,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).expect("failed to save test PDF");
        buf
    }

    fn sample_input(layouts: Vec<Layout>) -> InputProperties {
        InputProperties {
            path: PathBuf::from("pattern.pdf"),
            page_count: 40,
            tile: PageSize::new(600.0, 400.0),
            layouts,
            reverse: false,
        }
    }

    fn page_count(path: &Path) -> usize {
        let bytes = std::fs::read(path).expect("output missing");
        Document::load_mem(&bytes)
            .expect("output unreadable")
            .get_pages()
            .len()
    }

    #[test]
    fn run_chops_into_numbered_outputs() {
        let out_dir = tempfile::tempdir().expect("tempdir");
        let input = sample_input(vec![Layout::new(1, 2, 2)]);
        // one tile per sheet: 2x2 collage becomes 4 output pages
        let output = OutputProperties::new(
            out_dir.path().join("out.pdf"),
            Some(PageSize::new(600.0, 400.0)),
        );
        let renderer = StubRenderer::new();

        run(&input, &output, &renderer).expect("run failed");

        assert_eq!(page_count(&out_dir.path().join("out_1.pdf")), 4);
    }

    #[test]
    fn run_writes_one_output_per_layout() {
        let out_dir = tempfile::tempdir().expect("tempdir");
        let input = sample_input(vec![Layout::new(1, 2, 2), Layout::new(5, 2, 1)]);
        let output = OutputProperties::new(
            out_dir.path().join("out.pdf"),
            Some(PageSize::new(1200.0, 400.0)),
        );
        let renderer = StubRenderer::new();

        run(&input, &output, &renderer).expect("run failed");

        // factor (2, 1): the 2x2 layout needs two sheets, the 2x1 one
        assert_eq!(page_count(&out_dir.path().join("out_1.pdf")), 2);
        assert_eq!(page_count(&out_dir.path().join("out_2.pdf")), 1);
        assert_eq!(*renderer.calls.borrow(), 2);
    }

    #[test]
    fn run_without_output_size_passes_collages_through() {
        let out_dir = tempfile::tempdir().expect("tempdir");
        let input = sample_input(vec![Layout::new(1, 2, 2)]);
        let output = OutputProperties::new(out_dir.path().join("collage.pdf"), None);
        let renderer = StubRenderer::new();

        run(&input, &output, &renderer).expect("run failed");

        assert_eq!(page_count(&out_dir.path().join("collage_1.pdf")), 1);
    }

    #[test]
    fn zero_factor_fails_before_rendering() {
        let input = sample_input(vec![Layout::new(1, 2, 2)]);
        // narrower than one tile
        let output = OutputProperties::new(
            PathBuf::from("out.pdf"),
            Some(PageSize::new(599.0, 400.0)),
        );
        let renderer = StubRenderer::new();

        let err = run(&input, &output, &renderer).unwrap_err();
        assert!(matches!(err, CollageError::Layout(_)));
        assert_eq!(*renderer.calls.borrow(), 0);
    }

    #[test]
    fn renderer_errors_surface_from_run() {
        struct BrokenRenderer;
        impl RenderCollage for BrokenRenderer {
            fn render(
                &self,
                _job: &RenderJob<'_>,
                _staging_dir: &Path,
            ) -> Result<PathBuf, CollageError> {
                Err(CollageError::RendererNotFound)
            }
        }

        let input = sample_input(vec![Layout::new(1, 2, 2)]);
        let output = OutputProperties::new(PathBuf::from("out.pdf"), None);
        let err = run(&input, &output, &BrokenRenderer).unwrap_err();
        assert!(matches!(err, CollageError::RendererNotFound));
    }
}
