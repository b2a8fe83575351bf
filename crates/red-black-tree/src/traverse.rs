//! Lazy in-order traversal.

use std::iter::FusedIterator;

use serde::Serialize;

use crate::types::{Color, RbNode};

/// One visited node: its key, color and distance from the root.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Entry<'a, K> {
    pub key: &'a K,
    pub color: Color,
    pub depth: usize,
}

impl<K> Clone for Entry<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Entry<'_, K> {}

/// In-order iterator over a tree, driven by an explicit stack so that the
/// call depth does not grow with the tree height.
///
/// Created by [`RbTree::traverse`](crate::RbTree::traverse).
#[derive(Debug)]
pub struct Iter<'a, K> {
    arena: &'a [RbNode<K>],
    stack: Vec<(u32, usize)>,
    remaining: usize,
}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(arena: &'a [RbNode<K>], root: Option<u32>) -> Self {
        let mut it = Self {
            arena,
            stack: Vec::new(),
            remaining: arena.len(),
        };
        if let Some(root) = root {
            it.push_left_spine(root, 0);
        }
        it
    }

    fn push_left_spine(&mut self, mut idx: u32, mut depth: usize) {
        loop {
            self.stack.push((idx, depth));
            match self.arena[idx as usize].l {
                Some(l) => {
                    idx = l;
                    depth += 1;
                }
                None => break,
            }
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = Entry<'a, K>;

    fn next(&mut self) -> Option<Self::Item> {
        let (idx, depth) = self.stack.pop()?;
        let node = &self.arena[idx as usize];
        if let Some(r) = node.r {
            self.push_left_spine(r, depth + 1);
        }
        self.remaining = self.remaining.saturating_sub(1);
        Some(Entry {
            key: &node.k,
            color: node.c,
            depth,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.stack.is_empty() {
            (0, Some(0))
        } else {
            (self.stack.len(), Some(self.remaining))
        }
    }
}

impl<K> FusedIterator for Iter<'_, K> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Dir, Node};

    fn attach(arena: &mut [RbNode<i32>], p: u32, dir: Dir, c: u32) {
        arena[p as usize].set_child(dir, Some(c));
        arena[c as usize].p = Some(p);
    }

    #[test]
    fn empty_tree_yields_nothing() {
        let arena: Vec<RbNode<i32>> = Vec::new();
        let mut it = Iter::new(&arena, None);
        assert_eq!(it.size_hint(), (0, Some(0)));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn yields_keys_in_order_with_depth() {
        // 4(2(1, 3), 6(-, 7))
        let mut arena: Vec<RbNode<i32>> = [4, 2, 6, 1, 3, 7].into_iter().map(RbNode::new).collect();
        arena[0].c = Color::Black;
        attach(&mut arena, 0, Dir::Left, 1);
        attach(&mut arena, 0, Dir::Right, 2);
        attach(&mut arena, 1, Dir::Left, 3);
        attach(&mut arena, 1, Dir::Right, 4);
        attach(&mut arena, 2, Dir::Right, 5);

        let seen: Vec<(i32, usize)> = Iter::new(&arena, Some(0)).map(|e| (*e.key, e.depth)).collect();
        assert_eq!(seen, vec![(1, 2), (2, 1), (3, 2), (4, 0), (6, 1), (7, 2)]);

        let root = Iter::new(&arena, Some(0)).find(|e| e.depth == 0).unwrap();
        assert_eq!(root.color, Color::Black);
    }

    #[test]
    fn entry_serializes_as_object() {
        let e = Entry { key: &5, color: Color::Red, depth: 2 };
        assert_eq!(
            serde_json::to_string(&e).unwrap(),
            r#"{"key":5,"color":"RED","depth":2}"#
        );
    }
}
