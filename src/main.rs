//! Resume Renderer CLI
//!
//! Usage:
//!   resume-renderer [OPTIONS] <JSON_FILE> <CSS_FILE> <OUTPUT_FILE>
//!
//! Options:
//!   -c, --config <FILE>  Render configuration (TOML format)
//!   -v, --verbose        Log pipeline steps to stderr
//!   -h, --help           Print help

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_renderer::{generate, HtmlConfig};

#[derive(Parser)]
#[command(name = "resume-renderer")]
#[command(about = "Generate a resume HTML file directly from JSON data")]
struct Cli {
    /// Resume data (JSON)
    json_file: PathBuf,

    /// Stylesheet embedded verbatim into the document
    css_file: PathBuf,

    /// Destination HTML file (overwritten)
    output_file: PathBuf,

    /// Render configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log pipeline steps (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Load render configuration
    let config = match &cli.config {
        Some(path) => match HtmlConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => HtmlConfig::default(),
    };

    match generate(&cli.json_file, &cli.css_file, &cli.output_file, &config) {
        Ok(()) => {
            println!(
                "Resume HTML generated successfully at {}",
                cli.output_file.display()
            );
        }
        Err(e) => {
            eprintln!("{}", e.report());
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .init();
}
