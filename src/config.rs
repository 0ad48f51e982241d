use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::ConfigError;

/// Configuration compiled into the binary, validated by `build.rs`.
const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub batch: BatchConfig,
    pub renderer: RendererConfig,
    pub render: RenderConfig,
}

/// Which documents to convert and where the results go.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Base for relative `output_dir` and `documents` entries.
    pub base_dir: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub documents: Vec<PathBuf>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            base_dir: None,
            output_dir: PathBuf::from("pdfs"),
            documents: Vec::new(),
        }
    }
}

/// External HTML-to-PDF program.
///
/// It is invoked as `program [args..] <html> <pdf>`.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    pub program: String,
    pub args: Vec<String>,
    /// Keep the intermediate HTML after a successful render.
    pub keep_html: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            program: "wkhtmltopdf".to_string(),
            args: vec!["--enable-local-file-access".to_string()],
            keep_html: false,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RenderConfig {
    pub engine: Engine,
}

/// Markdown engine used for the document body.
#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// Line-oriented converter with a fixed set of rules.
    #[default]
    Basic,
    /// Full CommonMark via pulldown-cmark.
    CommonMark,
}

impl FromStr for Engine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "commonmark" => Ok(Self::CommonMark),
            other => Err(format!(
                "unknown engine '{other}' (expected 'basic' or 'commonmark')"
            )),
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => f.write_str("basic"),
            Self::CommonMark => f.write_str("commonmark"),
        }
    }
}

impl Config {
    /// The configuration compiled into the binary.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.renderer.program.trim().is_empty() {
            return Err(ConfigError::Validation(
                "renderer.program cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Documents to convert, resolved against `batch.base_dir`.
    pub fn documents(&self) -> Vec<PathBuf> {
        self.batch
            .documents
            .iter()
            .map(|doc| self.resolve(doc))
            .collect()
    }

    /// Output directory, resolved against `batch.base_dir`.
    pub fn output_dir(&self) -> PathBuf {
        self.resolve(&self.batch.output_dir)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.batch.base_dir {
            // `join` keeps absolute paths as they are
            Some(base) => base.join(path),
            None => path.to_path_buf(),
        }
    }
}
