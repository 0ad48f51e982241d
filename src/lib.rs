mod batch;
mod block;
mod commonmark;
mod config;
mod error;
mod html;
mod inline;
mod parser;
mod renderer;

pub use batch::{BatchProgress, BatchSummary, ConvertOptions, NoProgress, convert_file, run_batch};
pub use block::{Block, ListKind};
pub use config::{BatchConfig, Config, Engine, RenderConfig, RendererConfig};
pub use error::{ConfigError, ConvertError, RenderError};
pub use renderer::{CommandRenderer, PdfRenderer};

/// Parse markdown text into a vector of blocks, line by line.
pub fn parse(markdown: &str) -> Vec<Block> {
    parser::parse(markdown)
}

/// Convert markdown to a complete, styled HTML document.
///
/// Never fails: every line of input maps to some output fragment.
pub fn markdown_to_html(markdown: &str) -> String {
    markdown_to_html_with_engine(markdown, Engine::Basic)
}

/// Convert markdown to a complete HTML document using the given engine.
pub fn markdown_to_html_with_engine(markdown: &str, engine: Engine) -> String {
    let body = match engine {
        Engine::Basic => html::blocks_to_html(&parse(markdown)),
        Engine::CommonMark => commonmark::to_html_body(markdown),
    };
    html::wrap_document(&body)
}
