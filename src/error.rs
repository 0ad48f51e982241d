//! Error types for configuration, rendering and per-document conversion.
//!
//! A [`ConvertError`] describes one document that failed; the batch driver
//! records it and moves on to the next document. Only
//! [`ConvertError::OutputDir`] stops a batch before it starts.

use std::path::PathBuf;
use std::process::ExitStatus;

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// The external PDF renderer could not produce a file.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
    #[error("{program} exited with {status}")]
    Failed { program: String, status: ExitStatus },
}

/// A single document could not be converted.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Error reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error writing HTML {}: {source}", path.display())]
    WriteHtml {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The intermediate HTML at `html` is left in place.
    #[error("Failed to create PDF for {}: {source}", path.display())]
    Render {
        path: PathBuf,
        html: PathBuf,
        source: RenderError,
    },

    #[error("Cannot create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
}
