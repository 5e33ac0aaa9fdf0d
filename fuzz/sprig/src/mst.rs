use arbitrary::Arbitrary;
use sprig::{
    graph::Graph,
    mst::{self, SpanningTree},
    union_find::UnionFind,
};

#[derive(Debug, Clone, Copy, Arbitrary)]
pub struct RawEdge {
    pub u: u8,
    pub v: u8,
    pub weight: u16,
}

/// Fold arbitrary edge data onto `vertices` vertices, discarding self-loops
pub fn build(vertices: usize, edges: &[RawEdge]) -> Graph {
    let mut graph = Graph::new(vertices);

    for &RawEdge { u, v, weight } in edges {
        let (u, v) = (usize::from(u) % vertices, usize::from(v) % vertices);
        if u == v {
            continue;
        }

        graph
            .insert(u, v, u32::from(weight))
            .unwrap_or_else(|_| unreachable!());
    }

    graph
}

/// Run both algorithms over `graph` and check they tell the same story
///
/// On success the totals must agree and both trees must span; on failure both
/// must report disconnection. Anything else is a bug in one of the two.
pub fn run_differential(graph: &Graph, start: usize) {
    let kruskal = mst::kruskal(graph);
    let prim = mst::prim(&graph.adjacency(), start);

    match (kruskal, prim) {
        (Ok(kruskal), Ok(prim)) => {
            assert_eq!(kruskal.total(), prim.total());
            assert_spanning(graph, &kruskal);
            assert_spanning(graph, &prim);
        },
        (Err(kruskal), Err(prim)) => assert_eq!(kruskal.required, prim.required),
        (kruskal, prim) => {
            panic!("Algorithms disagree on connectivity: {kruskal:?} vs {prim:?}")
        },
    }
}

fn assert_spanning(graph: &Graph, tree: &SpanningTree) {
    assert_eq!(tree.edges().len(), graph.vertices().saturating_sub(1));

    let mut total = 0_u64;
    let mut forest = UnionFind::singletons(graph.vertices());

    for edge in tree.edges() {
        total += u64::from(edge.weight);
        assert!(
            forest.union(edge.u, edge.v).unwrap().did_merge(),
            "tree contains a cycle through {edge:?}",
        );
    }

    assert_eq!(total, tree.total());
    assert_eq!(forest.roots().count(), graph.vertices().min(1));
}
