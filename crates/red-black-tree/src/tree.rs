use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use crate::error::TreeError;
use crate::insert::{fix_insert, insert_at, locate, Slot};
use crate::remove::remove;
use crate::traverse::{Entry, Iter};
use crate::types::{Color, RbNode};
use crate::util::{self, find, first, last, relink_moved};
use crate::validate::assert_compact;

/// Red-black tree set.
///
/// Keys are ordered by a comparator (`Ord::cmp` by default). Every key is
/// stored at most once: inserting a key that compares equal to a stored one
/// leaves the tree unchanged.
///
/// Nodes live in a compact arena. Removing a node moves the last arena record
/// into the vacated slot, so node indices are not stable across deletions;
/// [`NodeRef`] handles borrow the tree and therefore cannot outlive a change.
pub struct RbTree<K, C = fn(&K, &K) -> Ordering>
where
    C: Fn(&K, &K) -> Ordering,
{
    arena: Vec<RbNode<K>>,
    root: Option<u32>,
    comparator: C,
}

impl<K: Ord> RbTree<K> {
    pub fn new() -> Self {
        Self::with_comparator(K::cmp)
    }
}

impl<K: Ord> Default for RbTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FromIterator<K> for RbTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K, C> Extend<K> for RbTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K, C> RbTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            comparator,
        }
    }

    /// Inserts `key`. Returns `false` (and drops `key`) if an equal key is
    /// already stored.
    pub fn insert(&mut self, key: K) -> bool {
        match locate(&self.arena, self.root, &key, &self.comparator) {
            Slot::Occupied(_) => {
                debug!(len = self.len(), "insert: key already present");
                false
            }
            Slot::Root => {
                let n = self.push(key);
                self.root = fix_insert(&mut self.arena, Some(n), n);
                debug!(len = self.len(), "insert: new root");
                true
            }
            Slot::Vacant { parent, dir } => {
                let n = self.push(key);
                self.root = insert_at(&mut self.arena, self.root, n, parent, dir);
                debug!(len = self.len(), "insert");
                true
            }
        }
    }

    /// Removes the node holding `key`. Deleting an absent key is a no-op
    /// that returns `false`.
    pub fn delete(&mut self, key: &K) -> bool {
        let Some(z) = find(&self.arena, self.root, key, &self.comparator) else {
            debug!(len = self.len(), "delete: key not found");
            return false;
        };
        self.root = remove(&mut self.arena, self.root, z);
        self.release(z);
        debug!(len = self.len(), "delete");
        true
    }

    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Finds the node holding `key`.
    pub fn search(&self, key: &K) -> Option<NodeRef<'_, K>> {
        find(&self.arena, self.root, key, &self.comparator).map(|idx| self.node_ref(idx))
    }

    /// Visits every node in key order, reporting color and depth. Each call
    /// starts a fresh walk.
    pub fn traverse(&self) -> Iter<'_, K> {
        Iter::new(&self.arena, self.root)
    }

    /// Keys in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &K> + '_ {
        self.traverse().map(|e| e.key)
    }

    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        self.root.map(|idx| self.node_ref(idx))
    }

    pub fn min(&self) -> Option<&K> {
        first(&self.arena, self.root).map(|i| &self.arena[i as usize].k)
    }

    pub fn max(&self) -> Option<&K> {
        last(&self.arena, self.root).map(|i| &self.arena[i as usize].k)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// Nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        util::height(&self.arena, self.root)
    }

    /// Black nodes below the root on any path down to an absent child.
    pub fn black_height(&self) -> usize {
        let mut count = 0;
        let mut curr = self.root.and_then(|r| self.arena[r as usize].l);
        while let Some(i) = curr {
            let node = &self.arena[i as usize];
            if node.c.is_black() {
                count += 1;
            }
            curr = node.l;
        }
        count
    }

    /// Checks every red-black invariant and arena compactness.
    pub fn assert_valid(&self) -> Result<usize, TreeError> {
        assert_compact(&self.arena, self.root, &self.comparator)
    }

    fn push(&mut self, key: K) -> u32 {
        let idx = u32::try_from(self.arena.len()).expect("arena index fits in u32");
        self.arena.push(RbNode::new(key));
        idx
    }

    /// Drops the detached node in slot `z`, filling the hole with the last
    /// arena record.
    fn release(&mut self, z: u32) {
        let last = (self.arena.len() - 1) as u32;
        self.arena.swap_remove(z as usize);
        if z != last {
            relink_moved(&mut self.arena, &mut self.root, last, z);
        }
    }

    fn node_ref(&self, idx: u32) -> NodeRef<'_, K> {
        NodeRef {
            arena: &self.arena,
            idx,
        }
    }
}

impl<K: Clone, C: Clone> Clone for RbTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn clone(&self) -> Self {
        Self {
            arena: self.arena.clone(),
            root: self.root,
            comparator: self.comparator.clone(),
        }
    }
}

impl<K: fmt::Debug, C> fmt::Debug for RbTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, K, C> IntoIterator for &'a RbTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    type Item = &'a K;
    type IntoIter = std::iter::Map<Iter<'a, K>, fn(Entry<'a, K>) -> &'a K>;

    fn into_iter(self) -> Self::IntoIter {
        self.traverse().map(entry_key as fn(Entry<'a, K>) -> &'a K)
    }
}

fn entry_key<K>(entry: Entry<'_, K>) -> &K {
    entry.key
}

/// Read-only handle to a node of a borrowed tree.
pub struct NodeRef<'a, K> {
    arena: &'a [RbNode<K>],
    idx: u32,
}

impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for NodeRef<'_, K> {}

impl<'a, K> NodeRef<'a, K> {
    fn node(&self) -> &'a RbNode<K> {
        &self.arena[self.idx as usize]
    }

    fn at(&self, idx: Option<u32>) -> Option<NodeRef<'a, K>> {
        idx.map(|idx| NodeRef {
            arena: self.arena,
            idx,
        })
    }

    pub fn key(&self) -> &'a K {
        &self.node().k
    }

    pub fn color(&self) -> Color {
        self.node().c
    }

    pub fn left(&self) -> Option<NodeRef<'a, K>> {
        self.at(self.node().l)
    }

    pub fn right(&self) -> Option<NodeRef<'a, K>> {
        self.at(self.node().r)
    }

    pub fn parent(&self) -> Option<NodeRef<'a, K>> {
        self.at(self.node().p)
    }

    /// Edges between this node and the root.
    pub fn depth(&self) -> usize {
        util::depth(self.arena, self.idx)
    }
}

impl<K: fmt::Debug> fmt::Debug for NodeRef<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("key", self.key())
            .field("color", &self.color())
            .finish()
    }
}
