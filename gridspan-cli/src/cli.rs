//! Command-line interface orchestration for the gridspan planner.
//!
//! The CLI offers a `plan` command that loads a candidate-link plan from a
//! line-based UTF-8 file, computes the minimum spanning network, and renders
//! the cable-saving report.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use gridspan_core::{
    EdgeRegistry, IngestError, LinkSource, MstError, MstReport, minimum_spanning_forest,
};
use gridspan_providers_links::{LinkPlan, LinkPlanError};
use thiserror::Error;
use tracing::{info, warn};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "gridspan", about = "Plan minimum-cost substation cabling.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute the cheapest spanning network for a candidate-link plan.
    Plan(PlanCommand),
}

/// Options accepted by the `plan` command.
#[derive(Debug, Args, Clone)]
pub struct PlanCommand {
    /// Path to a UTF-8 link plan, one `left;right;length` candidate per line.
    pub path: PathBuf,

    /// Override name for the plan (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while opening the plan.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Plan parsing failed.
    #[error(transparent)]
    Plan(#[from] LinkPlanError),
    /// Registry ingestion failed.
    #[error(transparent)]
    Ingest(#[from] IngestError),
    /// Spanning-forest computation failed.
    #[error(transparent)]
    Mst(#[from] MstError),
}

impl CliError {
    /// Returns the stable machine-readable code of the underlying failure,
    /// when the failing layer defines one.
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::Io { .. } | Self::Plan(_) => None,
            Self::Ingest(error) => Some(error.code().as_str()),
            Self::Mst(error) => Some(error.code().as_str()),
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the plan that was executed.
    pub plan_name: String,
    /// Number of candidate links registered.
    pub candidate_count: usize,
    /// Number of distinct substations referenced by the candidates.
    pub substation_count: usize,
    /// Number of plan entries skipped as duplicates.
    pub skipped_duplicates: usize,
    /// The spanning-forest report.
    pub report: MstReport,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when parsing, ingestion, or computation fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use gridspan_cli::cli::{Cli, Command, PlanCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "A;B;5\nB;C;3\nA;C;10\n")?;
/// let cli = Cli {
///     command: Command::Plan(PlanCommand {
///         path: file.path().to_path_buf(),
///         name: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.report.selected().len(), 2);
/// # Ok(())
/// # }
/// ```
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Plan(plan) => run_plan(plan),
    }
}

fn run_plan(command: PlanCommand) -> Result<ExecutionSummary, CliError> {
    let PlanCommand { path, name } = command;
    let chosen_name = derive_plan_name(&path, name.as_deref());
    let reader = open_plan_reader(&path)?;
    let plan = LinkPlan::try_from_reader(chosen_name, reader)?;

    let mut registry = EdgeRegistry::new();
    let ingest = registry.extend_from_source(&plan)?;
    if ingest.skipped_duplicates() > 0 {
        warn!(
            plan = plan.name(),
            skipped = ingest.skipped_duplicates(),
            "plan listed duplicate candidate links"
        );
    }

    let report = minimum_spanning_forest(&registry)?;
    info!(
        plan = plan.name(),
        selected = report.selected().len(),
        components = report.component_count(),
        "spanning network computed"
    );

    Ok(ExecutionSummary {
        plan_name: plan.name().to_owned(),
        candidate_count: registry.len(),
        substation_count: registry.node_count(),
        skipped_duplicates: ingest.skipped_duplicates(),
        report,
    })
}

fn open_plan_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

fn derive_plan_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "link_plan".to_owned())
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "plan: {}", summary.plan_name)?;
    writeln!(writer, "substations: {}", summary.substation_count)?;
    writeln!(writer, "candidate links: {}", summary.candidate_count)?;
    if summary.skipped_duplicates > 0 {
        writeln!(writer, "duplicates skipped: {}", summary.skipped_duplicates)?;
    }
    let report = &summary.report;
    writeln!(writer, "candidate length: {:.2} m", report.total_all())?;
    writeln!(writer, "selected length: {:.2} m", report.total_mst())?;
    writeln!(writer, "saving: {:.2}%", report.efficiency())?;
    if !report.is_tree() {
        writeln!(writer, "components: {}", report.component_count())?;
    }
    writeln!(writer, "route:")?;
    for link in report.selected() {
        writeln!(
            writer,
            "{} -- {} ({:.2} m)",
            link.left(),
            link.right(),
            link.length()
        )?;
    }
    Ok(())
}
