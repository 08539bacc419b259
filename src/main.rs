use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tcv::cli::{self, Args, CliConfig, CliUtils};
use tcv::{ConversionEngine, InputSource};

fn main() -> ExitCode {
    let args = Args::parse();

    init_logging(args.verbose);
    CliUtils::configure_colors();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            cli::handle_error(&error);
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` takes precedence; otherwise `--verbose` turns on debug output for this crate.
fn init_logging(verbose: bool) {
    let default_directive = if verbose { "tcv=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<()> {
    let config = CliConfig::from_args(args)?;
    let operation = config.args.command.operation()?;
    let io = config.args.command.io();

    let source = InputSource::from_arg(io.input.as_deref());
    debug!(
        input = %source.description(),
        output = %config.output_description(),
        "resolved {}",
        operation
    );

    let engine = ConversionEngine::new(config.conversion_config.clone());
    let output = engine.convert_source(operation, &source)?;

    cli::write_output(&output.content, io.output.as_deref(), config.is_quiet())?;

    if config.want_stats() {
        CliUtils::show_statistics(&output.metadata, config.is_quiet());
    }

    Ok(())
}
