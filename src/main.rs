use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod commands;
mod core;
mod error;
mod models;

use commands::{generate_tests, GenerateOptions};

/// JUnitGen - Generate JUnit tests from Java source code using an LLM
#[derive(Parser)]
#[command(name = "junitgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the Java source file
    input_file: PathBuf,

    /// Output directory for generated tests
    #[arg(short, long, default_value = "outputs")]
    output: PathBuf,

    /// Enable debug output (full error details, verbose logging)
    #[arg(long)]
    debug: bool,

    /// Override the model to use
    #[arg(long)]
    model: Option<String>,

    /// Override the LLM API URL
    #[arg(long)]
    url: Option<String>,

    /// Override the timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Disable streaming output
    #[arg(long)]
    no_stream: bool,

    /// Skip the LLM and emit placeholder test bodies
    #[arg(long)]
    offline: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Set up logging
    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .init();

    let options = GenerateOptions {
        model: cli.model,
        url: cli.url,
        timeout: cli.timeout,
        no_stream: cli.no_stream,
        offline: cli.offline,
    };

    match generate_tests(&cli.input_file, &cli.output, options).await {
        Ok(output_path) => {
            println!("Successfully generated test file: {}", output_path.display());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if cli.debug {
                eprintln!("{:#?}", e);
            }
            std::process::exit(1);
        }
    }
}
