//! Command-line interface orchestration for spanswap.
//!
//! The `run` command loads the built-in sample graph or an edge-list file,
//! builds its minimum spanning tree, removes one tree edge (chosen by index
//! or at random) and reports the replacement that repairs the cut.

mod commands;
mod edge_list;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, FileArgs, RunCommand, RunSource, render_summary,
    run_cli, sample_graph,
};
