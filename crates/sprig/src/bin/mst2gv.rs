//! Convert a weighted edge list to a Graphviz DOT document with its minimum
//! spanning tree emphasized
//!
//! Input is whitespace-separated: a vertex count, an edge count, then one
//! `u v w` triple per edge.

#![deny(
    clippy::disallowed_methods,
    clippy::suspicious,
    clippy::style,
    clippy::clone_on_ref_ptr,
    missing_debug_implementations,
    missing_copy_implementations
)]
#![warn(clippy::pedantic, missing_docs)]
#![allow(clippy::module_name_repetitions)]

use std::io::{self, Read};

use sprig::{graph::Graph, mst};

fn main() {
    let mut s = String::new();
    io::stdin().read_to_string(&mut s).unwrap();
    let mut tokens = s.split_whitespace();

    let mut next = |what: &str| {
        tokens
            .next()
            .unwrap_or_else(|| panic!("Missing {what}"))
            .parse::<usize>()
            .unwrap_or_else(|e| panic!("Invalid {what}: {e}"))
    };

    let vertices = next("vertex count");
    let edge_count = next("edge count");

    let mut graph = Graph::new(vertices);
    for _ in 0..edge_count {
        let (u, v, w) = (next("endpoint"), next("endpoint"), next("weight"));
        let w = w.try_into().expect("Weight exceeds the 32-bit limit");
        graph.insert(u, v, w).unwrap_or_else(|e| panic!("Bad edge: {e}"));
    }

    match mst::kruskal(&graph) {
        Ok(tree) => {
            eprintln!("total cost: {}", tree.total());
            println!("{}", tree.dot(&graph));
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
