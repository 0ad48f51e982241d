//! Batch progress printed to stderr.

use std::ffi::OsStr;
use std::path::Path;

use console::{Style, Term};
use md2pdf::{BatchProgress, ConvertError};

#[derive(Clone, Copy)]
pub(crate) enum Tone {
    Plain,
    Title,
    Done,
    Warn,
    Fail,
}

pub(crate) struct Console {
    term: Term,
}

impl Console {
    pub(crate) fn stderr() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    pub(crate) fn say(&self, tone: Tone, msg: &str) {
        let style = match tone {
            Tone::Plain => Style::new(),
            Tone::Title => Style::new().cyan().bold(),
            Tone::Done => Style::new().green(),
            Tone::Warn => Style::new().yellow(),
            Tone::Fail => Style::new().red(),
        };
        // Progress output is best effort
        let _ = self.term.write_line(&style.apply_to(msg).to_string());
    }

    pub(crate) fn blank(&self) {
        let _ = self.term.write_line("");
    }
}

impl BatchProgress for Console {
    fn on_document_start(&self, source: &Path) {
        self.blank();
        self.say(Tone::Plain, &format!("Converting {}", source.display()));
    }

    fn on_html_written(&self, html: &Path) {
        self.say(Tone::Done, &format!("Created HTML: {}", html.display()));
    }

    fn on_pdf_created(&self, pdf: &Path) {
        self.say(Tone::Done, &format!("Created PDF: {}", pdf.display()));
    }

    fn on_document_failed(&self, _source: &Path, error: &ConvertError) {
        let tone = match error {
            ConvertError::NotFound { .. } => Tone::Warn,
            _ => Tone::Fail,
        };
        self.say(tone, &error.to_string());
        if let ConvertError::Render { html, .. } = error {
            self.say(Tone::Plain, &format!("HTML kept at {}", html.display()));
        }
    }

    fn on_output_reused(&self, source: &Path, stem: &OsStr) {
        self.say(
            Tone::Warn,
            &format!(
                "{} overwrites earlier output named {}",
                source.display(),
                stem.to_string_lossy()
            ),
        );
    }
}
