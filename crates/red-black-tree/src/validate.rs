//! Invariant checker used by tests and debug tooling.

use std::cmp::Ordering;

use crate::error::TreeError;
use crate::types::RbNodeLike;
use crate::util::{first, next};

/// Checks every red-black invariant on the tree rooted at `root`.
///
/// Returns the black-height of the root (the number of black nodes on any
/// path from the root down to an absent child, the root included) or the
/// first violation found.
pub fn assert_red_black_tree<K, N, C>(
    arena: &[N],
    root: Option<u32>,
    comparator: &C,
) -> Result<usize, TreeError>
where
    N: RbNodeLike<K>,
    C: Fn(&K, &K) -> Ordering,
{
    let Some(root) = root else {
        return Ok(0);
    };

    if arena[root as usize].p().is_some() {
        return Err(TreeError::RootHasParent(root));
    }
    if !arena[root as usize].is_black() {
        return Err(TreeError::RedRoot(root));
    }

    fn black_height<K, N>(arena: &[N], node: Option<u32>) -> Result<usize, TreeError>
    where
        N: RbNodeLike<K>,
    {
        let Some(node) = node else {
            return Ok(0);
        };
        let n = &arena[node as usize];

        for child in [n.l(), n.r()].into_iter().flatten() {
            let c = &arena[child as usize];
            if c.p() != Some(node) {
                return Err(TreeError::BrokenParentLink { parent: node, child });
            }
            if !n.is_black() && !c.is_black() {
                return Err(TreeError::RedRed { parent: node, child });
            }
        }

        let left = black_height(arena, n.l())?;
        let right = black_height(arena, n.r())?;
        if left != right {
            return Err(TreeError::BlackHeight { node, left, right });
        }
        Ok(left + usize::from(n.is_black()))
    }

    let height = black_height(arena, Some(root))?;

    let mut prev: Option<u32> = None;
    let mut curr = first(arena, Some(root));
    while let Some(i) = curr {
        if let Some(prev) = prev {
            if comparator(arena[prev as usize].key(), arena[i as usize].key()) != Ordering::Less {
                return Err(TreeError::Order(i));
            }
        }
        prev = Some(i);
        curr = next(arena, i);
    }

    Ok(height)
}

/// Like [`assert_red_black_tree`], additionally requiring that every arena
/// slot is part of the tree.
pub fn assert_compact<K, N, C>(arena: &[N], root: Option<u32>, comparator: &C) -> Result<usize, TreeError>
where
    N: RbNodeLike<K>,
    C: Fn(&K, &K) -> Ordering,
{
    let height = assert_red_black_tree(arena, root, comparator)?;
    let reachable = crate::util::size(arena, root);
    if reachable != arena.len() {
        return Err(TreeError::Unreachable { arena: arena.len(), reachable });
    }
    Ok(height)
}
