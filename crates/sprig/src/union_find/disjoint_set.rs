use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("No disjoint-set node found with ID {0}")]
pub struct NoNode<T>(pub T);

/// The outcome of a union operation: the surviving root, and the root that
/// was attached beneath it (`None` if the keys already shared a partition)
#[derive(Debug, Clone, Copy)]
pub struct Unioned<K> {
    pub root: K,
    pub unioned: Option<K>,
}

impl<K> Unioned<K> {
    #[inline]
    #[must_use]
    pub fn did_merge(self) -> bool { self.unioned.is_some() }
}

pub trait ForestFind<K> {
    fn load_parent(&self, key: K) -> Option<K>;

    fn compare_exchange_parent(&self, key: K, current: K, new: K) -> Option<Result<K, K>>;
}

/// Find the partition root for the given key, and re-point every node on the
/// walked path directly at that root
///
/// The search runs in two passes, an upward walk to locate the root and then
/// a second walk performing the compression, so the path length is bounded by
/// the forest depth rather than the stack.
///
/// # Errors
/// This function first checks that the key is valid, returning an error if no
/// associated node can be found.
pub fn forest_find<K: Copy + Eq, F: ForestFind<K>>(set: &F, key: K) -> Result<K, NoNode<K>> {
    let mut root = set.load_parent(key).ok_or(NoNode(key))?;

    loop {
        let parent = set.load_parent(root).unwrap_or_else(|| unreachable!());
        if parent == root {
            break;
        }

        root = parent;
    }

    let mut node = key;
    while node != root {
        let parent = set.load_parent(node).unwrap_or_else(|| unreachable!());

        let prev = set
            .compare_exchange_parent(node, parent, root)
            .unwrap_or_else(|| unreachable!());
        assert!(prev == Ok(parent) || prev == Err(root));

        node = parent;
    }

    Ok(root)
}

pub trait RankedUnion<K> {
    type Root;
    type Rank: Ord;

    fn find(&self, key: K) -> Result<Self::Root, NoNode<K>>;

    fn cmp_roots(&self, a: &Self::Root, b: &Self::Root) -> Ordering;

    fn rank(&self, root: &Self::Root) -> Option<Self::Rank>;

    /// Attach `merged` beneath `root`, settling the surviving root's rank
    fn merge(&mut self, root: &Self::Root, merged: &Self::Root);
}

/// Perform the in-place union of the partitions containing the two given keys
///
/// The root of lesser rank is attached beneath the root of greater rank; on a
/// rank tie the orientation falls to `cmp_roots`, keeping the result
/// deterministic.
///
/// # Errors
/// This function first checks that both keys are valid, returning an error if
/// either cannot be found.
pub fn ranked_union<K: Copy, S: RankedUnion<K>>(
    set: &mut S,
    a: K,
    b: K,
) -> Result<Unioned<S::Root>, NoNode<K>> {
    let mut a = set.find(a)?;
    let mut b = set.find(b)?;

    let cmp = set.cmp_roots(&a, &b);

    if cmp.is_eq() {
        return Ok(Unioned {
            root: a,
            unioned: None,
        });
    }

    let a_rank = set.rank(&a).unwrap_or_else(|| unreachable!());
    let b_rank = set.rank(&b).unwrap_or_else(|| unreachable!());

    match (a_rank.cmp(&b_rank), cmp) {
        (_, Ordering::Equal) => unreachable!(),
        (Ordering::Less, _) | (Ordering::Equal, Ordering::Greater) => std::mem::swap(&mut a, &mut b),
        _ => (),
    }

    set.merge(&a, &b);

    Ok(Unioned {
        root: a,
        unioned: Some(b),
    })
}
