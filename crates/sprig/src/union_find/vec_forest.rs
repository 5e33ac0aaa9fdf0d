use std::{
    fmt, iter, slice,
    sync::atomic::{self, AtomicUsize},
};

use super::disjoint_set::{ForestFind, NoNode, RankedUnion, forest_find};

#[derive(Debug)]
pub(super) struct Node {
    pub parent: AtomicUsize,
    pub rank: u32,
}

impl Clone for Node {
    fn clone(&self) -> Self {
        Self {
            parent: self.parent.load(atomic::Ordering::Relaxed).into(),
            rank: self.rank,
        }
    }
}

/// A disjoint-set forest over the dense key range `0..len`
///
/// Parent pointers are atomics so path compression can run through a shared
/// reference; every set instance is still private to a single caller.
#[derive(Default, Clone)]
#[repr(transparent)]
pub struct VecForestSet(pub(super) Vec<Node>);

impl fmt::Debug for VecForestSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(nodes) = self;
        let mut f = f.debug_map();

        for (key, node) in nodes.iter().enumerate() {
            let parent = node.parent.load(atomic::Ordering::Relaxed);
            f.entry(&key, &(parent != key).then_some(parent));
        }

        f.finish()
    }
}

impl VecForestSet {
    #[must_use]
    #[inline]
    pub fn new() -> Self { Self::default() }

    /// Construct a forest of `len` singleton partitions
    #[must_use]
    pub fn singletons(len: usize) -> Self {
        Self(
            (0..len)
                .map(|key| Node {
                    parent: key.into(),
                    rank: 0,
                })
                .collect(),
        )
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize { self.0.len() }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn add(&mut self) -> usize {
        let key = self.0.len();
        self.0.push(Node {
            parent: key.into(),
            rank: 0,
        });
        key
    }

    #[inline]
    pub fn roots(&self) -> Roots { Roots(self.0.iter().enumerate()) }
}

impl ForestFind<usize> for VecForestSet {
    fn load_parent(&self, key: usize) -> Option<usize> {
        Some(self.0.get(key)?.parent.load(atomic::Ordering::SeqCst))
    }

    fn compare_exchange_parent(
        &self,
        key: usize,
        current: usize,
        new: usize,
    ) -> Option<Result<usize, usize>> {
        Some(self.0.get(key)?.parent.compare_exchange(
            current,
            new,
            atomic::Ordering::SeqCst,
            atomic::Ordering::SeqCst,
        ))
    }
}

impl RankedUnion<usize> for VecForestSet {
    type Rank = u32;
    type Root = usize;

    #[inline]
    fn find(&self, key: usize) -> Result<usize, NoNode<usize>> { forest_find(self, key) }

    #[inline]
    fn cmp_roots(&self, &a: &usize, &b: &usize) -> std::cmp::Ordering { a.cmp(&b) }

    #[inline]
    fn rank(&self, &key: &usize) -> Option<Self::Rank> { Some(self.0.get(key)?.rank) }

    fn merge(&mut self, &root: &usize, &merged: &usize) {
        let merged_rank = self.0.get(merged).unwrap_or_else(|| unreachable!()).rank;
        self.0
            .get_mut(merged)
            .unwrap_or_else(|| unreachable!())
            .parent = root.into();

        // Equal ranks only survive orientation as a tie; the survivor deepens
        let node = self.0.get_mut(root).unwrap_or_else(|| unreachable!());
        if node.rank == merged_rank {
            node.rank = node.rank.checked_add(1).unwrap_or_else(|| unreachable!());
        }
    }
}

#[derive(Debug, Clone)]
#[must_use]
#[repr(transparent)]
pub struct Roots<'a>(iter::Enumerate<slice::Iter<'a, Node>>);

impl Iterator for Roots<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            let (key, node) = self.0.next()?;

            let parent = node.parent.load(atomic::Ordering::Relaxed);
            if parent == key {
                break Some(parent);
            }
        }
    }
}
