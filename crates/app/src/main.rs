use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use nightcore_core::{NightcorePipeline, PipelineController, RunConfig};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let config = RunConfig::new(cli.input, cli.output);

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: RunConfig) -> nightcore_core::Result<()> {
    tracing::info!(input = %config.input_path.display(), "building nightcore pipeline");

    nightcore_core::init()?;
    let graph = NightcorePipeline::build(&config)?;
    PipelineController::new(graph.into_pipeline()).run()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Speed up and repitch an audio file", long_about = None)]
struct Cli {
    /// Audio file to process.
    input: PathBuf,

    /// Encode the result as MP3 to this path instead of playing it back.
    output: Option<PathBuf>,
}
