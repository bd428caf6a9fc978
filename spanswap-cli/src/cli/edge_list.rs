//! Plain-text edge-list loading.
//!
//! The first meaningful line holds the vertex count; every following line is
//! `u v w` separated by whitespace. Blank lines and lines starting with `#`
//! are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use spanswap_core::Graph;
use tracing::{debug, field, instrument};

use super::commands::CliError;

/// Opens and parses the edge list at `path`.
#[instrument(name = "cli.load_edge_list", err, fields(path = %path.display(), edges = field::Empty))]
pub(super) fn load_edge_list(path: &Path) -> Result<Graph, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = parse_edge_list(BufReader::new(file), path)?;
    tracing::Span::current().record("edges", graph.edge_count());
    Ok(graph)
}

/// Parses an edge list from `reader`; `path` is only used in errors.
pub(super) fn parse_edge_list(reader: impl BufRead, path: &Path) -> Result<Graph, CliError> {
    let parse_error = |line: usize, reason: String| CliError::Parse {
        path: path.to_path_buf(),
        line,
        reason,
    };

    let mut graph: Option<Graph> = None;
    let mut number = 0;
    for line in reader.lines() {
        number += 1;
        let line = line.map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = line.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }

        match graph.as_mut() {
            None => {
                let vertex_count = content.parse::<usize>().map_err(|err| {
                    parse_error(number, format!("invalid vertex count `{content}`: {err}"))
                })?;
                graph = Some(Graph::new(vertex_count));
            }
            Some(graph) => {
                let (u, v, weight) =
                    parse_edge_line(content, graph.vertex_count()).map_err(|reason| {
                        parse_error(number, reason)
                    })?;
                graph.add_edge(u, v, weight);
            }
        }
    }

    let graph = graph.ok_or_else(|| parse_error(number, "missing vertex count".to_owned()))?;
    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "edge list parsed"
    );
    Ok(graph)
}

fn parse_edge_line(content: &str, vertex_count: usize) -> Result<(usize, usize, f64), String> {
    let fields: Vec<&str> = content.split_whitespace().collect();
    let [u, v, weight] = fields.as_slice() else {
        return Err(format!(
            "expected `u v w`, found {} fields",
            fields.len()
        ));
    };

    let u = parse_vertex(u, vertex_count)?;
    let v = parse_vertex(v, vertex_count)?;
    let weight = weight
        .parse::<f64>()
        .map_err(|err| format!("invalid weight `{weight}`: {err}"))?;
    if !weight.is_finite() {
        return Err(format!("weight `{weight}` is not finite"));
    }
    Ok((u, v, weight))
}

fn parse_vertex(raw: &str, vertex_count: usize) -> Result<usize, String> {
    let vertex = raw
        .parse::<usize>()
        .map_err(|err| format!("invalid vertex `{raw}`: {err}"))?;
    if vertex >= vertex_count {
        return Err(format!(
            "vertex {vertex} is outside 0..{vertex_count}"
        ));
    }
    Ok(vertex)
}
