//! The interactive prompt loop: validated graphs in, printed trees out
//!
//! All parsing and validation happens here; the sprig core only ever sees
//! well-formed input. Invalid lines re-prompt with a one-line reason, a
//! disconnected graph is reported and the session continues, and a blank
//! vertex count (or end of input) ends the session.

use std::io::{BufRead, Write};

use sprig::{
    graph::{BadEdge, Graph},
    mst::{self, SpanningTree},
};

use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Algorithm {
    /// Scan the edges cheapest-first, growing a forest with union-find
    Kruskal,
    /// Grow a single tree from the start vertex with a priority queue
    Prim,
}

#[derive(Debug, thiserror::Error)]
enum BadInput {
    #[error("Expected an integer, got {0:?}")]
    NotAnInteger(String),
    #[error("Expected a non-negative value, got {0}")]
    Negative(i64),
    #[error("Vertex count must be positive")]
    NoVertices,
    #[error("Weight {0} exceeds the 32-bit limit")]
    TooHeavy(i64),
    #[error("Expected `u v w`, got {0} fields")]
    FieldCount(usize),
    #[error(transparent)]
    Edge(#[from] BadEdge),
}

/// Run prompt rounds until the input ends or a vertex count is left blank
///
/// # Errors
/// Fails only on I/O errors from `input` or `output`; everything the user
/// can type wrong is handled with a re-prompt instead.
pub fn session<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    algorithm: Algorithm,
    start: usize,
) -> Result {
    loop {
        let Some(graph) = read_graph(&mut input, &mut output)? else {
            break Ok(());
        };

        if matches!(algorithm, Algorithm::Prim) && start >= graph.vertices() {
            writeln!(
                output,
                "Start vertex {start} out of range for a graph on {} vertices",
                graph.vertices(),
            )?;
            continue;
        }

        info!(
            vertices = graph.vertices(),
            edges = graph.edges().len(),
            ?algorithm,
            "Computing spanning tree"
        );

        match solve(&graph, algorithm, start) {
            Ok(tree) => print_tree(&mut output, &tree)?,
            Err(e) => writeln!(output, "{e}")?,
        }
    }
}

fn solve(graph: &Graph, algorithm: Algorithm, start: usize) -> Result<SpanningTree, mst::Disconnected> {
    match algorithm {
        Algorithm::Kruskal => mst::kruskal(graph),
        Algorithm::Prim => mst::prim(&graph.adjacency(), start),
    }
}

fn print_tree<W: Write>(output: &mut W, tree: &SpanningTree) -> Result {
    for edge in tree.edges() {
        writeln!(output, "{} -- {} (cost {})", edge.u, edge.v, edge.weight)?;
    }

    writeln!(output, "total cost: {}", tree.total())?;
    Ok(())
}

/// Prompt for one graph; `None` means the session is over
fn read_graph<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<Graph>> {
    let vertices = loop {
        let Some(line) = read_line(input, output, "vertices> ")? else {
            return Ok(None);
        };

        if line.is_empty() {
            return Ok(None);
        }

        match parse_vertex_count(&line) {
            Ok(n) => break n,
            Err(e) => writeln!(output, "{e}")?,
        }
    };

    let edge_count = loop {
        let Some(line) = read_line(input, output, "edges> ")? else {
            return Ok(None);
        };

        match parse_index(&line) {
            Ok(m) => break m,
            Err(e) => writeln!(output, "{e}")?,
        }
    };

    let mut graph = Graph::new(vertices);
    while graph.edges().len() < edge_count {
        let prompt = format!("edge {}> ", graph.edges().len());
        let Some(line) = read_line(input, output, &prompt)? else {
            return Ok(None);
        };

        let admit = parse_edge(&line)
            .and_then(|(u, v, w)| graph.insert(u, v, w).map_err(BadInput::from));
        if let Err(e) = admit {
            writeln!(output, "{e}")?;
        }
    }

    Ok(Some(graph))
}

/// Prompt and read one trimmed line; `None` on end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line).context("Error reading input")? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_owned()))
}

fn parse_int(token: &str) -> Result<i64, BadInput> {
    token
        .parse()
        .map_err(|_| BadInput::NotAnInteger(token.into()))
}

fn parse_index(token: &str) -> Result<usize, BadInput> {
    let value = parse_int(token)?;
    usize::try_from(value).map_err(|_| BadInput::Negative(value))
}

fn parse_vertex_count(line: &str) -> Result<usize, BadInput> {
    match parse_index(line)? {
        0 => Err(BadInput::NoVertices),
        n => Ok(n),
    }
}

fn parse_edge(line: &str) -> Result<(usize, usize, u32), BadInput> {
    let fields: Vec<_> = line.split_whitespace().collect();
    let [u, v, w] = fields[..] else {
        return Err(BadInput::FieldCount(fields.len()));
    };

    let (u, v) = (parse_index(u)?, parse_index(v)?);

    let w = parse_int(w)?;
    if w < 0 {
        return Err(BadInput::Negative(w));
    }
    let w = u32::try_from(w).map_err(|_| BadInput::TooHeavy(w))?;

    Ok((u, v, w))
}

#[cfg(test)]
mod test {
    use super::{session, Algorithm};

    fn run(input: &str, algorithm: Algorithm, start: usize) -> String {
        let mut output = Vec::new();
        session(input.as_bytes(), &mut output, algorithm, start).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn a_session_computes_and_prints_the_tree() {
        let output = run(
            "4\n4\n0 1 1\n1 2 2\n2 3 3\n0 3 10\n\n",
            Algorithm::Kruskal,
            0,
        );

        assert!(output.contains("0 -- 1 (cost 1)"));
        assert!(output.contains("1 -- 2 (cost 2)"));
        assert!(output.contains("2 -- 3 (cost 3)"));
        assert!(output.contains("total cost: 6"));
        assert!(!output.contains("cost 10"));
    }

    #[test]
    fn prim_agrees_on_the_total() {
        let output = run("4\n4\n0 1 1\n1 2 2\n2 3 3\n0 3 10\n\n", Algorithm::Prim, 3);

        assert!(output.contains("total cost: 6"));
    }

    #[test]
    fn invalid_input_reprompts_with_a_reason() {
        let output = run(
            "zero\n-1\n0\n2\nx\n1\n0 0 1\n0 9 1\n0 1 -4\n0 1\n0 1 4\n\n",
            Algorithm::Kruskal,
            0,
        );

        assert!(output.contains("Expected an integer, got \"zero\""));
        assert!(output.contains("Expected a non-negative value, got -1"));
        assert!(output.contains("Vertex count must be positive"));
        assert!(output.contains("Expected an integer, got \"x\""));
        assert!(output.contains("Self-loop at vertex 0"));
        assert!(output.contains("Vertex 9 out of range for a graph on 2 vertices"));
        assert!(output.contains("Expected a non-negative value, got -4"));
        assert!(output.contains("Expected `u v w`, got 2 fields"));
        assert!(output.contains("total cost: 4"));
    }

    #[test]
    fn disconnection_is_reported_and_the_session_continues() {
        let output = run(
            "4\n1\n0 1 5\n2\n1\n0 1 3\n\n",
            Algorithm::Kruskal,
            0,
        );

        assert!(output.contains("Graph is not connected: admitted 1 of 3 tree edges"));
        assert!(output.contains("total cost: 3"));
    }

    #[test]
    fn an_out_of_range_start_is_caught_before_the_core() {
        let output = run("2\n1\n0 1 5\n\n", Algorithm::Prim, 5);

        assert!(output.contains("Start vertex 5 out of range"));
        assert!(!output.contains("total cost"));
    }

    #[test]
    fn end_of_input_ends_the_session() {
        assert!(run("", Algorithm::Kruskal, 0).contains("vertices> "));
        assert!(run("3\n", Algorithm::Prim, 0).contains("edges> "));
    }
}
