mod output;

use std::path::PathBuf;

use clap::Parser;
use md2pdf::{
    BatchSummary, CommandRenderer, Config, ConfigError, ConvertError, ConvertOptions, Engine,
};
use tracing_subscriber::EnvFilter;

use output::{Console, Tone};

#[derive(Parser)]
#[command(name = "md2pdf", version)]
#[command(about = "Convert Markdown files to styled PDF via HTML")]
struct Cli {
    /// Markdown files to convert (defaults to the configured document list)
    inputs: Vec<PathBuf>,

    /// Output directory (defaults to the configured one, or the current
    /// directory when input files are given without a config)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// TOML config file (defaults to the compiled-in config)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown engine: basic or commonmark
    #[arg(long)]
    engine: Option<Engine>,

    /// Write HTML only, without running the PDF renderer
    #[arg(long)]
    html_only: bool,

    /// Keep the intermediate HTML after a successful render
    #[arg(long)]
    keep_html: bool,

    /// Log progress details
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Convert(#[from] ConvertError),
}

fn main() {
    let cli = Cli::parse();
    let output = Console::stderr();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli, &output) {
        Ok(summary) if summary.is_success() => {}
        Ok(_) => std::process::exit(1),
        Err(err) => {
            output.say(Tone::Fail, &format!("Error: {err}"));
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli, output: &Console) -> Result<BatchSummary, CliError> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::compiled_default(),
    };

    let documents = if cli.inputs.is_empty() {
        config.documents()
    } else {
        cli.inputs.clone()
    };

    let output_dir = match &cli.output_dir {
        Some(dir) => dir.clone(),
        None if !cli.inputs.is_empty() && cli.config.is_none() => PathBuf::from("."),
        None => config.output_dir(),
    };

    let options = ConvertOptions {
        engine: cli.engine.unwrap_or(config.render.engine),
        keep_html: cli.keep_html || config.renderer.keep_html,
        html_only: cli.html_only,
    };
    let renderer = CommandRenderer::from_config(&config.renderer);

    output.say(Tone::Title, "Starting PDF conversion...");
    output.say(Tone::Plain, &format!("Output directory: {}", output_dir.display()));

    let summary = md2pdf::run_batch(&documents, &output_dir, &options, &renderer, output)?;

    output.blank();
    let line = format!(
        "Conversion complete! {}/{} files converted",
        summary.succeeded, summary.total
    );
    if summary.is_success() {
        output.say(Tone::Done, &line);
    } else {
        output.say(Tone::Warn, &line);
    }
    output.say(Tone::Plain, &format!("Files saved to: {}", output_dir.display()));

    Ok(summary)
}
