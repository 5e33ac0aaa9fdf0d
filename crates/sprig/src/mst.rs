//! Kruskal's and Prim's minimum-spanning-tree algorithms
//!
//! Both entry points take validated inputs and perform no I/O; the only
//! failure they can produce is [`Disconnected`]. On connected input they
//! agree on the total weight, though equal-weight edges may be represented
//! differently depending on sort and heap tie order.

use std::collections::BTreeMap;

use crate::{
    dot,
    graph::{AdjList, Edge, Graph},
    heap::MinHeap,
    union_find::UnionFind,
};

/// The edges admitted into a spanning tree, in admission order, plus their
/// accumulated total weight
///
/// A spanning tree of a graph on `n` vertices always holds exactly `n - 1`
/// edges. Weights are 32-bit, so the 64-bit total cannot overflow.
#[derive(Debug, Clone, Default)]
pub struct SpanningTree {
    edges: Vec<Edge>,
    total: u64,
}

impl SpanningTree {
    /// The admitted edges, cheapest-compatible-first
    #[must_use]
    #[inline]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// The sum of the admitted edge weights
    #[must_use]
    #[inline]
    pub const fn total(&self) -> u64 { self.total }

    fn admit(&mut self, edge: Edge) {
        self.total += u64::from(edge.weight);
        self.edges.push(edge);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Graph is not connected: admitted {selected} of {required} tree edges")]
pub struct Disconnected {
    pub selected: usize,
    pub required: usize,
}

/// Compute a minimum spanning tree by Kruskal's algorithm
///
/// Edges are scanned cheapest-first; an edge joining two distinct partitions
/// of the union-find forest is admitted, and the scan stops as soon as the
/// tree is complete.
///
/// # Errors
/// Returns an error if fewer than `n - 1` edges can be admitted, i.e. the
/// graph is disconnected. No partial tree is returned.
pub fn kruskal(graph: &Graph) -> Result<SpanningTree, Disconnected> {
    let required = graph.vertices().saturating_sub(1);
    let mut forest = UnionFind::singletons(graph.vertices());
    let mut tree = SpanningTree::default();

    let mut edges = graph.edges().to_vec();
    edges.sort_unstable_by_key(|edge| edge.weight);

    for edge in edges {
        let unioned = forest
            .union(edge.u, edge.v)
            .unwrap_or_else(|_| unreachable!());

        if unioned.did_merge() {
            tree.admit(edge);

            if tree.edges.len() == required {
                break;
            }
        }
    }

    if tree.edges.len() == required {
        Ok(tree)
    } else {
        Err(Disconnected {
            selected: tree.edges.len(),
            required,
        })
    }
}

/// A frontier edge awaiting admission, ordered weight-first so the heap
/// pops the cheapest way out of the visited set
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Candidate {
    weight: u32,
    from: usize,
    to: usize,
}

/// Compute a minimum spanning tree by Prim's algorithm, grown from `start`
///
/// Frontier edges are held in a binary min-heap; entries whose target was
/// visited after they were pushed come out stale and are discarded, which is
/// expected and not an error.
///
/// # Errors
/// Returns an error if the heap is exhausted before the tree is complete,
/// i.e. the component containing `start` is not the whole graph. No partial
/// tree is returned.
///
/// # Panics
/// Panics if `start` is not a vertex of the graph.
pub fn prim(adjacency: &AdjList, start: usize) -> Result<SpanningTree, Disconnected> {
    let vertices = adjacency.len();
    let required = vertices.saturating_sub(1);
    let mut tree = SpanningTree::default();

    if vertices == 0 {
        return Ok(tree);
    }

    assert!(
        start < vertices,
        "start vertex {start} out of range for {vertices} vertices"
    );

    let mut visited = vec![false; vertices];
    let mut frontier = MinHeap::new();

    visited[start] = true;
    extend_frontier(&mut frontier, adjacency, &visited, start);

    while tree.edges.len() < required {
        let Some(Candidate { weight, from, to }) = frontier.pop() else {
            return Err(Disconnected {
                selected: tree.edges.len(),
                required,
            });
        };

        if visited[to] {
            continue;
        }

        visited[to] = true;
        tree.admit(Edge::new(from, to, weight));
        extend_frontier(&mut frontier, adjacency, &visited, to);
    }

    Ok(tree)
}

impl SpanningTree {
    /// Render `graph` as a DOT document, with this tree's edges emphasized
    /// and the rest dashed
    #[must_use]
    pub fn dot(&self, graph: &Graph) -> dot::Graph<'static> {
        let mut doc = dot::Graph::new();

        // Parallel edges: emphasize only as many copies as were admitted
        let mut admitted = BTreeMap::new();
        for &Edge { u, v, weight } in &self.edges {
            *admitted
                .entry((u.min(v), u.max(v), weight))
                .or_insert(0_usize) += 1;
        }

        for vertex in 0..graph.vertices() {
            doc.node(vertex.to_string());
        }

        for &Edge { u, v, weight } in graph.edges() {
            let edge = doc.edge(u.to_string(), v.to_string());
            edge.label(weight.to_string());

            match admitted.get_mut(&(u.min(v), u.max(v), weight)) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    edge.penwidth("3");
                },
                _ => edge.style("dashed"),
            }
        }

        doc
    }
}

fn extend_frontier(
    frontier: &mut MinHeap<Candidate>,
    adjacency: &AdjList,
    visited: &[bool],
    from: usize,
) {
    let neighbors = adjacency.neighbors(from).unwrap_or_else(|| unreachable!());

    for &(to, weight) in neighbors {
        if !visited[to] {
            frontier.push(Candidate { weight, from, to });
        }
    }
}
