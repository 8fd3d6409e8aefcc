//! CLI entry point for the gridspan network planner.
//!
//! Parses command-line arguments with clap, executes the planning pipeline,
//! renders the cable-saving report to stdout, and maps errors to appropriate
//! exit codes. Logging is initialized eagerly so subsequent operations can
//! emit structured diagnostics via `tracing`.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use gridspan_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Parse CLI arguments, execute the command, render the report, and flush the
/// output stream.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_summary(&summary, &mut writer).context("failed to render report")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let (code, registry_code) = err
            .downcast_ref::<CliError>()
            .map(|cli_error| {
                let registry_code = match cli_error {
                    CliError::Ingest(ingest) => ingest.registry_code(),
                    _ => None,
                };
                (cli_error.code(), registry_code)
            })
            .unwrap_or((None, None));

        let code_field = code.map(field::display);
        let registry_code_field = registry_code.map(|code| field::display(code.as_str()));

        error!(
            error = %err,
            code = code_field,
            registry_code = registry_code_field,
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
