//! Command implementations and argument parsing for the spanswap CLI.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use spanswap_core::{
    Edge, Graph, Reconnection, SpanError, SpanningForest, build_mst, reconnect,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::edge_list::load_edge_list;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "spanswap",
    about = "Build a minimum spanning tree, remove one edge and repair the cut."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Build the MST, remove one of its edges and find the replacement.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Seed for choosing the removed edge; drawn from entropy when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Position of the MST edge to remove, overriding random selection.
    #[arg(long = "remove-index", value_parser = clap::value_parser!(usize))]
    pub remove_index: Option<usize>,

    /// Graph to operate on.
    #[command(subcommand)]
    pub source: RunSource,
}

/// Graph sources understood by the `run` command.
#[derive(Debug, Subcommand, Clone)]
pub enum RunSource {
    /// Use the built-in seven-vertex sample graph.
    Sample,
    /// Load a whitespace-separated edge list.
    File(FileArgs),
}

/// Edge-list file arguments.
#[derive(Debug, Args, Clone)]
pub struct FileArgs {
    /// Path to the edge list: a vertex count line, then `u v w` lines.
    pub path: PathBuf,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while loading the graph.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The edge list was malformed.
    #[error("{path}:{line}: {reason}")]
    Parse {
        /// Path of the edge-list file.
        path: PathBuf,
        /// One-based line number of the offending line.
        line: usize,
        /// Description of the problem.
        reason: String,
    },
    /// The graph has no MST edge that could be removed.
    #[error("the minimum spanning tree has no edges to remove")]
    EmptyMst,
    /// `--remove-index` pointed past the end of the MST.
    #[error("remove index {index} is out of range for an MST with {len} edges")]
    RemoveIndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of MST edges.
        len: usize,
    },
    /// A core operation failed.
    #[error(transparent)]
    Core(#[from] SpanError),
}

/// Everything the report needs about one run.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the graph source (`sample` or the file stem).
    pub graph_name: String,
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Number of edges in the graph.
    pub edge_count: usize,
    /// The minimum spanning forest before removal.
    pub forest: SpanningForest,
    /// Position of the removed edge within `forest`.
    pub removed_index: usize,
    /// Outcome of removing that edge and repairing the cut.
    pub reconnection: Reconnection,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading the graph, choosing the edge or any core
/// operation fails.
///
/// # Examples
/// ```
/// use spanswap_cli::cli::{Cli, Command, RunCommand, RunSource, run_cli};
///
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         seed: Some(7),
///         remove_index: Some(0),
///         source: RunSource::Sample,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.forest.total_weight(), 39.0);
/// assert!(summary.reconnection.removal_applied());
/// # Ok::<(), spanswap_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(source = field::Empty, seed = ?command.seed, remove_index = ?command.remove_index),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let (graph_name, graph) = match command.source {
        RunSource::Sample => {
            Span::current().record("source", field::display("sample"));
            ("sample".to_owned(), sample_graph())
        }
        RunSource::File(FileArgs { path }) => {
            Span::current().record("source", field::display(path.display()));
            (graph_name_for(&path), load_edge_list(&path)?)
        }
    };

    let forest = build_mst(&graph)?;
    let removed_index = choose_removal(&forest, command.remove_index, command.seed)?;
    let removed = *forest
        .edges()
        .get(removed_index)
        .ok_or(CliError::RemoveIndexOutOfRange {
            index: removed_index,
            len: forest.edges().len(),
        })?;
    let reconnection = reconnect(&graph, &forest, &removed)?;

    info!(
        graph = graph_name.as_str(),
        removed = %removed,
        delta = reconnection.weight_delta(),
        "command completed"
    );
    Ok(ExecutionSummary {
        graph_name,
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        forest,
        removed_index,
        reconnection,
    })
}

/// Picks the position of the MST edge to remove.
///
/// An explicit index is validated; otherwise one is drawn uniformly, seeded
/// by `seed` when given.
pub(super) fn choose_removal(
    forest: &SpanningForest,
    explicit: Option<usize>,
    seed: Option<u64>,
) -> Result<usize, CliError> {
    let len = forest.edges().len();
    if len == 0 {
        return Err(CliError::EmptyMst);
    }
    if let Some(index) = explicit {
        return if index < len {
            Ok(index)
        } else {
            Err(CliError::RemoveIndexOutOfRange { index, len })
        };
    }
    let mut rng = seed.map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64);
    Ok(rng.gen_range(0..len))
}

/// Returns the built-in sample graph: seven vertices, eleven edges and an
/// MST of weight 39.
#[must_use]
pub fn sample_graph() -> Graph {
    Graph::from_edges(
        7,
        [
            Edge::new(0, 1, 7.0),
            Edge::new(0, 3, 5.0),
            Edge::new(1, 2, 8.0),
            Edge::new(1, 3, 9.0),
            Edge::new(1, 4, 7.0),
            Edge::new(2, 4, 5.0),
            Edge::new(3, 4, 15.0),
            Edge::new(3, 5, 6.0),
            Edge::new(4, 5, 8.0),
            Edge::new(4, 6, 9.0),
            Edge::new(5, 6, 11.0),
        ],
    )
}

pub(super) fn graph_name_for(path: &Path) -> String {
    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "graph".to_owned(), ToOwned::to_owned)
}

/// Renders `summary` to `writer` as a human-readable stage-by-stage report.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spanswap_cli::cli::{Cli, Command, RunCommand, RunSource, render_summary, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = run_cli(Cli {
///     command: Command::Run(RunCommand {
///         seed: None,
///         remove_index: Some(2),
///         source: RunSource::Sample,
///     }),
/// })?;
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let report = String::from_utf8(buffer)?;
/// assert!(report.starts_with("graph: sample (7 vertices, 11 edges)\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let outcome = &summary.reconnection;
    writeln!(
        writer,
        "graph: {} ({} vertices, {} edges)",
        summary.graph_name, summary.vertex_count, summary.edge_count
    )?;

    writeln!(writer, "original MST edges:")?;
    write_edges(&mut writer, summary.forest.edges())?;
    writeln!(writer, "original MST weight: {}", outcome.original_weight())?;
    writeln!(
        writer,
        "removed edge #{}: {}",
        summary.removed_index,
        outcome.removed()
    )?;

    writeln!(writer, "components after removal:")?;
    for (id, members) in outcome.components().groups().iter().enumerate() {
        writeln!(writer, "  component {id}: {members:?}")?;
    }

    match outcome.replacement() {
        Some(edge) => writeln!(writer, "replacement edge: {edge}")?,
        None => writeln!(writer, "no replacement edge found (graph disconnected)")?,
    }

    writeln!(writer, "new MST edges:")?;
    write_edges(&mut writer, outcome.edges())?;
    writeln!(
        writer,
        "new MST weight: {} ({:+})",
        outcome.weight(),
        outcome.weight_delta()
    )?;
    Ok(())
}

fn write_edges(writer: &mut impl Write, edges: &[Edge]) -> io::Result<()> {
    for edge in edges {
        writeln!(writer, "  {edge}")?;
    }
    Ok(())
}
