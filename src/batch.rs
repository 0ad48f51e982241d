//! Converting documents on disk: read, transform, write HTML, render PDF.

use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Engine;
use crate::error::ConvertError;
use crate::renderer::PdfRenderer;

/// Per-run conversion switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    pub engine: Engine,
    /// Keep the intermediate HTML after a successful render.
    pub keep_html: bool,
    /// Stop after writing HTML; the renderer is never invoked.
    pub html_only: bool,
}

/// Hooks called as a batch makes progress.
///
/// All methods default to no-ops so callers only override what they
/// display.
pub trait BatchProgress {
    fn on_document_start(&self, source: &Path) {
        let _ = source;
    }

    fn on_html_written(&self, html: &Path) {
        let _ = html;
    }

    fn on_pdf_created(&self, pdf: &Path) {
        let _ = pdf;
    }

    fn on_document_failed(&self, source: &Path, error: &ConvertError) {
        let _ = (source, error);
    }

    /// `source` writes to the same output name as an earlier document in
    /// this batch, replacing its files.
    fn on_output_reused(&self, source: &Path, stem: &OsStr) {
        let _ = (source, stem);
    }
}

/// Progress sink that ignores every event.
pub struct NoProgress;

impl BatchProgress for NoProgress {}

/// Outcome of [`run_batch`].
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failures: Vec<(PathBuf, ConvertError)>,
}

impl BatchSummary {
    pub fn is_success(&self) -> bool {
        self.succeeded == self.total
    }
}

/// Convert one Markdown file.
///
/// Returns the PDF path, or the HTML path when `html_only` is set. When the
/// renderer fails the HTML is left in `output_dir` for inspection.
pub fn convert_file(
    source: &Path,
    output_dir: &Path,
    options: &ConvertOptions,
    renderer: &dyn PdfRenderer,
    progress: &dyn BatchProgress,
) -> Result<PathBuf, ConvertError> {
    if !source.exists() {
        return Err(ConvertError::NotFound {
            path: source.to_path_buf(),
        });
    }

    let markdown = fs::read_to_string(source).map_err(|e| ConvertError::Read {
        path: source.to_path_buf(),
        source: e,
    })?;

    let html = crate::markdown_to_html_with_engine(&markdown, options.engine);

    let stem = output_stem(source);
    let html_path = output_dir.join(with_suffix(stem, ".html"));
    fs::write(&html_path, html).map_err(|e| ConvertError::WriteHtml {
        path: html_path.clone(),
        source: e,
    })?;
    tracing::info!(path = %html_path.display(), "Created HTML");
    progress.on_html_written(&html_path);

    if options.html_only {
        return Ok(html_path);
    }

    let pdf_path = output_dir.join(with_suffix(stem, ".pdf"));
    renderer
        .render(&html_path, &pdf_path)
        .map_err(|e| ConvertError::Render {
            path: source.to_path_buf(),
            html: html_path.clone(),
            source: e,
        })?;
    tracing::info!(path = %pdf_path.display(), "Created PDF");
    progress.on_pdf_created(&pdf_path);

    if !options.keep_html {
        if let Err(e) = fs::remove_file(&html_path) {
            tracing::warn!(path = %html_path.display(), error = %e, "Failed to remove intermediate HTML");
        }
    }

    Ok(pdf_path)
}

/// Convert every document into `output_dir`, in order.
///
/// A failing document is recorded in the summary and the batch continues.
/// Only an uncreatable output directory aborts the run.
pub fn run_batch(
    documents: &[PathBuf],
    output_dir: &Path,
    options: &ConvertOptions,
    renderer: &dyn PdfRenderer,
    progress: &dyn BatchProgress,
) -> Result<BatchSummary, ConvertError> {
    fs::create_dir_all(output_dir).map_err(|source| ConvertError::OutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut summary = BatchSummary {
        total: documents.len(),
        ..BatchSummary::default()
    };

    let mut stems: HashSet<&OsStr> = HashSet::new();
    for source in documents {
        progress.on_document_start(source);
        if !stems.insert(output_stem(source)) {
            tracing::debug!(path = %source.display(), "Output name already used in this batch");
            progress.on_output_reused(source, output_stem(source));
        }
        match convert_file(source, output_dir, options, renderer, progress) {
            Ok(_) => summary.succeeded += 1,
            Err(error) => {
                tracing::debug!(path = %source.display(), error = %error, "Conversion failed");
                progress.on_document_failed(source, &error);
                summary.failures.push((source.clone(), error));
            }
        }
    }

    tracing::debug!(
        succeeded = summary.succeeded,
        total = summary.total,
        "Batch finished"
    );
    Ok(summary)
}

/// File name, without extension, shared by a document's HTML and PDF.
fn output_stem(source: &Path) -> &OsStr {
    source.file_stem().unwrap_or(OsStr::new("document"))
}

/// `stem` + `suffix`, keeping any dots already in the stem.
fn with_suffix(stem: &OsStr, suffix: &str) -> OsString {
    let mut name = stem.to_os_string();
    name.push(suffix);
    name
}
