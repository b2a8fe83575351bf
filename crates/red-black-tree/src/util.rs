//! Arena navigation helpers.
//!
//! All helpers take the arena as a slice and work with `u32` indices. An
//! absent link (`None`) plays the role of the black sentinel leaf: it is
//! black, has no children, and never needs recoloring.

use std::cmp::Ordering;

use crate::types::{Color, Dir, Node, RbNodeLike};

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn child<N: Node>(arena: &[N], idx: u32, dir: Dir) -> Option<u32> {
    arena[idx as usize].child(dir)
}

#[inline]
pub(crate) fn set_child<N: Node>(arena: &mut [N], idx: u32, dir: Dir, v: Option<u32>) {
    arena[idx as usize].set_child(dir, v);
}

/// Color of a link; the absent link is black.
#[inline]
pub(crate) fn color_of<K, N: RbNodeLike<K>>(arena: &[N], idx: Option<u32>) -> Color {
    idx.map_or(Color::Black, |i| arena[i as usize].color())
}

#[inline]
pub(crate) fn is_red<K, N: RbNodeLike<K>>(arena: &[N], idx: Option<u32>) -> bool {
    color_of::<K, N>(arena, idx).is_red()
}

#[inline]
pub(crate) fn set_color<K, N: RbNodeLike<K>>(arena: &mut [N], idx: u32, color: Color) {
    arena[idx as usize].set_color(color);
}

/// Side of `parent` that `idx` hangs on.
///
/// `idx` may be `None` when asking about a vacated position; in that case the
/// answer is the side whose link is absent, preferring left.
#[inline]
pub(crate) fn dir_of<N: Node>(arena: &[N], parent: u32, idx: Option<u32>) -> Dir {
    if get_l(arena, parent) == idx {
        Dir::Left
    } else {
        Dir::Right
    }
}

/// Points `parent`'s link that currently refers to `old` at `new` instead.
/// With no parent, `old` was the root and `new` becomes the root.
pub(crate) fn replace_child<N: Node>(
    arena: &mut [N],
    root: &mut Option<u32>,
    parent: Option<u32>,
    old: u32,
    new: Option<u32>,
) {
    match parent {
        None => *root = new,
        Some(p) => {
            let dir = dir_of(arena, p, Some(old));
            set_child(arena, p, dir, new);
        }
    }
}

/// Leftmost node in the tree.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node in the tree.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        return first(arena, Some(r));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        return last(arena, Some(l));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Number of nodes under `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let mut count = 0;
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(i) = stack.pop() {
        count += 1;
        stack.extend(get_l(arena, i));
        stack.extend(get_r(arena, i));
    }
    count
}

/// Number of nodes on the longest root-to-leaf path (0 for an empty tree).
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let mut max = 0;
    let mut stack: Vec<(u32, usize)> = root.map(|r| (r, 1)).into_iter().collect();
    while let Some((i, depth)) = stack.pop() {
        max = max.max(depth);
        stack.extend(get_l(arena, i).map(|l| (l, depth + 1)));
        stack.extend(get_r(arena, i).map(|r| (r, depth + 1)));
    }
    max
}

/// Number of edges between `idx` and the root.
pub fn depth<N: Node>(arena: &[N], idx: u32) -> usize {
    let mut d = 0;
    let mut curr = idx;
    while let Some(p) = get_p(arena, curr) {
        d += 1;
        curr = p;
    }
    d
}

/// Finds a node by key.
pub fn find<K, N, C>(arena: &[N], root: Option<u32>, key: &K, comparator: &C) -> Option<u32>
where
    N: RbNodeLike<K>,
    C: Fn(&K, &K) -> Ordering,
{
    let mut curr = root;
    while let Some(i) = curr {
        curr = match comparator(key, arena[i as usize].key()) {
            Ordering::Less => get_l(arena, i),
            Ordering::Greater => get_r(arena, i),
            Ordering::Equal => return Some(i),
        };
    }
    None
}

/// Moves the node stored at `from` into slot `to` by rewriting every link
/// that refers to `from`. The caller is responsible for the slot contents
/// (typically `Vec::swap_remove`, which already moved the record).
pub(crate) fn relink_moved<N: Node>(arena: &mut [N], root: &mut Option<u32>, from: u32, to: u32) {
    let moved = &arena[to as usize];
    let (p, l, r) = (moved.p(), moved.l(), moved.r());
    match p {
        None => *root = Some(to),
        Some(p) => {
            let dir = dir_of(arena, p, Some(from));
            set_child(arena, p, dir, Some(to));
        }
    }
    if let Some(l) = l {
        set_p(arena, l, Some(to));
    }
    if let Some(r) = r {
        set_p(arena, r, Some(to));
    }
}
