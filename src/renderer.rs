//! External HTML-to-PDF rendering.
//!
//! The converter only needs a pass/fail answer from the renderer, so the
//! seam is a single-method trait. [`CommandRenderer`] shells out to a
//! program such as `wkhtmltopdf`; tests substitute their own implementation.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::config::RendererConfig;
use crate::error::RenderError;

/// Turns an HTML file into a PDF file.
pub trait PdfRenderer {
    /// Render `html` into `pdf`, blocking until done.
    fn render(&self, html: &Path, pdf: &Path) -> Result<(), RenderError>;
}

/// Runs `program [args..] <html> <pdf>` and checks its exit status.
///
/// The program's stderr is discarded.
#[derive(Debug, Clone)]
pub struct CommandRenderer {
    program: String,
    args: Vec<String>,
}

impl CommandRenderer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_config(config: &RendererConfig) -> Self {
        Self::new(config.program.clone(), config.args.clone())
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for CommandRenderer {
    fn default() -> Self {
        Self::from_config(&RendererConfig::default())
    }
}

impl PdfRenderer for CommandRenderer {
    fn render(&self, html: &Path, pdf: &Path) -> Result<(), RenderError> {
        tracing::debug!(
            program = %self.program,
            html = %html.display(),
            pdf = %pdf.display(),
            "Running PDF renderer"
        );

        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(html)
            .arg(pdf)
            .stderr(Stdio::null())
            .status()
            .map_err(|source| RenderError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(RenderError::Failed {
                program: self.program.clone(),
                status,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_wkhtmltopdf() {
        assert_eq!(CommandRenderer::default().program(), "wkhtmltopdf");
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let renderer = CommandRenderer::new("md2pdf-no-such-renderer", Vec::new());
        let err = renderer
            .render(Path::new("in.html"), Path::new("out.pdf"))
            .unwrap_err();
        assert!(matches!(err, RenderError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn zero_exit_is_success() {
        let renderer = CommandRenderer::new("true", Vec::new());
        assert!(renderer
            .render(Path::new("in.html"), Path::new("out.pdf"))
            .is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_failure() {
        let renderer = CommandRenderer::new("false", Vec::new());
        let err = renderer
            .render(Path::new("in.html"), Path::new("out.pdf"))
            .unwrap_err();
        assert!(matches!(err, RenderError::Failed { .. }));
        assert!(err.to_string().starts_with("false exited with"));
    }

    #[cfg(unix)]
    #[test]
    fn arguments_precede_paths() {
        let dir = tempfile::tempdir().unwrap();
        let html = dir.path().join("doc.html");
        let pdf = dir.path().join("doc.pdf");
        std::fs::write(&html, "<p>hi</p>").unwrap();

        // `sh -c 'cp "$0" "$1"' <html> <pdf>`
        let renderer = CommandRenderer::new(
            "sh",
            vec!["-c".to_string(), r#"cp "$0" "$1""#.to_string()],
        );
        renderer.render(&html, &pdf).unwrap();
        assert_eq!(std::fs::read_to_string(&pdf).unwrap(), "<p>hi</p>");
    }
}
