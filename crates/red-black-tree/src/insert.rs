//! Ordered placement and insert fixup.

use std::cmp::Ordering;

use tracing::trace;

use crate::rotate::rotate;
use crate::types::{Color, Dir, RbNodeLike};
use crate::util::{child, dir_of, get_p, is_red, set_child, set_color, set_p};

/// Where a key belongs in the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// The tree is empty; the key becomes the root.
    Root,
    /// A node with an equal key already exists.
    Occupied(u32),
    /// The key would hang on the `dir` side of `parent`.
    Vacant { parent: u32, dir: Dir },
}

/// Descends from `root` recording the last node visited.
pub fn locate<K, N, C>(arena: &[N], root: Option<u32>, key: &K, comparator: &C) -> Slot
where
    N: RbNodeLike<K>,
    C: Fn(&K, &K) -> Ordering,
{
    let Some(mut curr) = root else {
        return Slot::Root;
    };
    loop {
        let dir = match comparator(key, arena[curr as usize].key()) {
            Ordering::Less => Dir::Left,
            Ordering::Greater => Dir::Right,
            Ordering::Equal => return Slot::Occupied(curr),
        };
        match child(arena, curr, dir) {
            Some(next) => curr = next,
            None => return Slot::Vacant { parent: curr, dir },
        }
    }
}

/// Attaches the detached node `n` on the `dir` side of `p` and rebalances.
pub fn insert_at<K, N>(arena: &mut [N], root: Option<u32>, n: u32, p: u32, dir: Dir) -> Option<u32>
where
    N: RbNodeLike<K>,
{
    debug_assert!(child(arena, p, dir).is_none(), "insert target slot is occupied");
    set_child(arena, p, dir, Some(n));
    set_p(arena, n, Some(p));
    fix_insert(arena, root, n)
}

pub fn insert_left<K, N>(arena: &mut [N], root: Option<u32>, n: u32, p: u32) -> Option<u32>
where
    N: RbNodeLike<K>,
{
    insert_at(arena, root, n, p, Dir::Left)
}

pub fn insert_right<K, N>(arena: &mut [N], root: Option<u32>, n: u32, p: u32) -> Option<u32>
where
    N: RbNodeLike<K>,
{
    insert_at(arena, root, n, p, Dir::Right)
}

/// Restores the red-black invariants after `n` was attached as a red leaf.
///
/// While `n` and its parent are both red, either pushes the violation two
/// levels up (red uncle) or resolves it with one or two rotations (black or
/// absent uncle). The root is painted black on exit.
pub fn fix_insert<K, N>(arena: &mut [N], root: Option<u32>, n: u32) -> Option<u32>
where
    N: RbNodeLike<K>,
{
    let mut root = root;
    let mut n = n;

    while let Some(mut p) = get_p(arena, n) {
        if !is_red(arena, Some(n)) || !is_red(arena, Some(p)) {
            break;
        }
        let g = get_p(arena, p).expect("red parent is never the root");
        let side = dir_of(arena, g, Some(p));
        let uncle = child(arena, g, side.opposite());

        if is_red(arena, uncle) {
            trace!(n, p, g, "insert fixup: red uncle, recolor");
            set_color(arena, p, Color::Black);
            if let Some(u) = uncle {
                set_color(arena, u, Color::Black);
            }
            set_color(arena, g, Color::Red);
            n = g;
            continue;
        }

        if child(arena, p, side.opposite()) == Some(n) {
            trace!(n, p, ?side, "insert fixup: inner child, rotate parent");
            root = rotate(arena, root, p, side);
            n = p;
            p = get_p(arena, n).expect("rotated node has a parent");
        }

        trace!(n, p, g, ?side, "insert fixup: outer child, rotate grandparent");
        root = rotate(arena, root, g, side.opposite());
        let pc = arena[p as usize].color();
        let gc = arena[g as usize].color();
        set_color(arena, p, gc);
        set_color(arena, g, pc);
        break;
    }

    if let Some(r) = root {
        set_color(arena, r, Color::Black);
    }
    root
}
