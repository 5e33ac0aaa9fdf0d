//! Tiny builder for Graphviz DOT documents describing undirected graphs

use std::{
    borrow::Cow,
    collections::BTreeMap,
    fmt::{self, Display},
};

use indexmap::IndexMap;

macro_rules! attr {
    ($id:ident, $name:literal) => {
        pub fn $id<S: Into<Cow<'a, str>>>(&mut self, $id: S) {
            self.attrs.insert($name, $id.into());
        }
    };
}

/// A DOT `graph` document; node and edge order is kept from insertion so
/// rendering is deterministic
#[derive(Debug, Default)]
pub struct Graph<'a> {
    id: Option<Cow<'a, str>>,
    attrs: BTreeMap<&'static str, Cow<'a, str>>,
    nodes: IndexMap<Cow<'a, str>, Node<'a>>,
    edges: IndexMap<(Cow<'a, str>, Cow<'a, str>), Vec<Edge<'a>>>,
}

impl<'a> Graph<'a> {
    attr!(label, "label");

    #[must_use]
    #[inline]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn new_with_id<S: Into<Cow<'a, str>>>(id: S) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Gets or inserts the node with the given ID
    #[inline]
    pub fn node<S: Into<Cow<'a, str>>>(&mut self, id: S) -> &mut Node<'a> {
        self.nodes.entry(id.into()).or_default()
    }

    /// Append an edge between `l` and `r`, inserting the endpoint nodes if
    /// necessary
    ///
    /// Every call appends a fresh edge; parallel edges render separately.
    pub fn edge<L: Into<Cow<'a, str>>, R: Into<Cow<'a, str>>>(
        &mut self,
        l: L,
        r: R,
    ) -> &mut Edge<'a> {
        let l = l.into();
        let r = r.into();
        self.node(l.clone());
        self.node(r.clone());
        let edges = self.edges.entry((l, r)).or_default();
        edges.push(Edge::default());
        edges.last_mut().unwrap_or_else(|| unreachable!())
    }
}

#[derive(Default)]
struct AttrState {
    any: bool,
}

impl AttrState {
    fn write_one(
        &mut self,
        f: &mut fmt::Formatter,
        key: &'static str,
        val: impl FnOnce(&mut fmt::Formatter) -> fmt::Result,
    ) -> fmt::Result {
        f.write_str(if self.any {
            ","
        } else {
            self.any = true;
            "["
        })?;

        f.write_str(key)?;
        f.write_str("=")?;
        val(f)
    }

    fn finish(self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.any { f.write_str("]") } else { Ok(()) }
    }
}

impl Display for Graph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            id,
            attrs,
            nodes,
            edges,
        } = self;

        f.write_str("graph")?;

        if let Some(id) = id {
            write!(f, " {id:?}")?;
        }

        f.write_str(" {")?;

        for (key, val) in attrs {
            write!(f, "{key}={val:?};")?;
        }

        for (id, Node { attrs }) in nodes {
            let mut attr_state = AttrState::default();
            write!(f, "{id:?}")?;

            for (key, val) in attrs {
                attr_state.write_one(f, key, |f| write!(f, "{val:?}"))?;
            }

            attr_state.finish(f)?;
            f.write_str(";")?;
        }

        for ((l, r), edges) in edges {
            for Edge { attrs } in edges {
                let mut attr_state = AttrState::default();
                write!(f, "{l:?}--{r:?}")?;

                for (key, val) in attrs {
                    attr_state.write_one(f, key, |f| write!(f, "{val:?}"))?;
                }

                attr_state.finish(f)?;
                f.write_str(";")?;
            }
        }

        f.write_str("}")
    }
}

#[derive(Debug, Default)]
pub struct Node<'a> {
    attrs: BTreeMap<&'static str, Cow<'a, str>>,
}

impl<'a> Node<'a> {
    attr!(label, "label");

    attr!(shape, "shape");

    attr!(style, "style");
}

#[derive(Debug, Default)]
pub struct Edge<'a> {
    attrs: BTreeMap<&'static str, Cow<'a, str>>,
}

impl<'a> Edge<'a> {
    attr!(label, "label");

    attr!(penwidth, "penwidth");

    attr!(style, "style");
}

#[cfg(test)]
mod test {
    use super::Graph;

    #[test]
    fn renders_nodes_edges_and_attrs() {
        let mut graph = Graph::new_with_id("g");
        graph.label("two triangles");
        graph.node("a").shape("circle");
        graph.edge("a", "b").label("1");
        graph.edge("a", "b").label("2");

        let edge = graph.edge("b", "c");
        edge.label("3");
        edge.penwidth("3");

        assert_eq!(
            graph.to_string(),
            "graph \"g\" {label=\"two triangles\";\
             \"a\"[shape=\"circle\"];\"b\";\"c\";\
             \"a\"--\"b\"[label=\"1\"];\"a\"--\"b\"[label=\"2\"];\
             \"b\"--\"c\"[label=\"3\",penwidth=\"3\"];}",
        );
    }
}
