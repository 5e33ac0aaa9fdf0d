//! A disjoint-set data structure and relevant support types

use std::fmt;

use vec_forest::VecForestSet;
pub use vec_forest::Roots;

pub mod disjoint_set;
pub mod vec_forest;

pub type NoNode = disjoint_set::NoNode<usize>;
pub type Unioned = disjoint_set::Unioned<usize>;

/// A disjoint-set data structure over the dense key range `0..len`
#[derive(Default, Clone)]
#[repr(transparent)]
pub struct UnionFind(VecForestSet);

impl fmt::Debug for UnionFind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(nodes) = self;
        fmt::Debug::fmt(nodes, f)
    }
}

impl UnionFind {
    /// Construct a new, empty union-find
    #[must_use]
    #[inline]
    pub fn new() -> Self { Self::default() }

    /// Construct a union-find of `len` singleton partitions
    #[must_use]
    #[inline]
    pub fn singletons(len: usize) -> Self { Self(VecForestSet::singletons(len)) }

    /// Gets the number of nodes in the union-find
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize { self.0.len() }

    /// Returns true if the union-find has no nodes
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Iterate the root of every partition
    #[inline]
    pub fn roots(&self) -> Roots<'_> { self.0.roots() }

    /// Add a new node to the union-find, returning its ID
    #[inline]
    pub fn add(&mut self) -> usize { self.0.add() }

    /// Find the partition root ID for the given node ID, and optimize the
    /// search path between the node and its root
    ///
    /// # Errors
    /// This method first checks if the node ID is valid, returning an error if
    /// no associated node can be found.
    #[inline]
    pub fn find(&self, key: usize) -> Result<usize, NoNode> {
        disjoint_set::forest_find(&self.0, key)
    }

    /// Perform the in-place union of the partitions containing the two given
    /// node IDs
    ///
    /// # Errors
    /// This method first checks if both node IDs are valid, returning an error
    /// if either cannot be found.
    #[inline]
    pub fn union(&mut self, a: usize, b: usize) -> Result<Unioned, NoNode> {
        disjoint_set::ranked_union(&mut self.0, a, b)
    }
}

#[cfg(test)]
mod test {
    use prop::sample::SizeRange;
    use proptest::prelude::*;

    use super::UnionFind;

    #[test]
    fn union_reports_the_first_merge_only() {
        let mut uf = UnionFind::singletons(4);

        assert!(uf.union(0, 1).unwrap().did_merge());
        assert!(!uf.union(0, 1).unwrap().did_merge());
        assert!(!uf.union(1, 0).unwrap().did_merge());

        assert!(uf.union(2, 3).unwrap().did_merge());
        assert!(uf.union(1, 3).unwrap().did_merge());
        assert!(!uf.union(0, 2).unwrap().did_merge());
    }

    #[test]
    fn find_is_stable_across_compression() {
        let mut uf = UnionFind::singletons(5);

        for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 4)] {
            assert!(uf.union(a, b).unwrap().did_merge());
        }

        let root = uf.find(4).unwrap();
        for key in 0..5 {
            assert_eq!(uf.find(key).unwrap(), root);
        }

        assert_eq!(uf.roots().count(), 1);
    }

    #[test]
    fn missing_keys_are_reported() {
        let mut uf = UnionFind::singletons(2);

        assert_eq!(uf.find(2).unwrap_err().0, 2);
        assert_eq!(uf.union(0, 7).unwrap_err().0, 7);
    }

    /// Quadratic reference model: partitions tracked as a flat label vector
    struct Labels(Vec<usize>);

    impl Labels {
        fn new(len: usize) -> Self { Self((0..len).collect()) }

        fn merge(&mut self, a: usize, b: usize) -> bool {
            let (a, b) = (self.0[a], self.0[b]);
            if a == b {
                return false;
            }

            for label in &mut self.0 {
                if *label == b {
                    *label = a;
                }
            }

            true
        }

        fn same(&self, a: usize, b: usize) -> bool { self.0[a] == self.0[b] }
    }

    fn len_and_merges(
        len: impl Strategy<Value = usize>,
        merge_len: impl Clone + Into<SizeRange>,
    ) -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
        len.prop_flat_map(move |l| {
            prop::collection::vec((0..l, 0..l), merge_len.clone()).prop_map(move |v| (l, v))
        })
    }

    proptest! {
        #[test]
        fn differential((len, merges) in len_and_merges(1..=512_usize, 1..=128)) {
            let mut labels = Labels::new(len);
            let mut uf = UnionFind::singletons(len);

            for (a, b) in merges {
                assert_eq!(uf.union(a, b).unwrap().did_merge(), labels.merge(a, b));
            }

            for a in 0..len {
                for b in 0..len {
                    assert_eq!(
                        uf.find(a).unwrap() == uf.find(b).unwrap(),
                        labels.same(a, b),
                    );
                }
            }
        }
    }
}
