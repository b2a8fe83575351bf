//! Rotation primitives.
//!
//! Each rotation relinks at most three parent/child pairs, preserves the
//! in-order key sequence, and returns the (possibly new) root index.

use tracing::trace;

use crate::types::{Dir, Node};
use crate::util::{child, get_p, replace_child, set_child, set_p};

/// Rotates `x` towards `dir`: the child on the opposite side is lifted into
/// `x`'s position and `x` becomes its `dir` child.
///
/// # Panics
///
/// Panics if `x` has no child on the side opposite `dir`.
pub fn rotate<N: Node>(arena: &mut [N], root: Option<u32>, x: u32, dir: Dir) -> Option<u32> {
    let mut root = root;
    let y = child(arena, x, dir.opposite()).expect("rotation pivot has a child to lift");
    trace!(x, y, ?dir, "rotate");

    let inner = child(arena, y, dir);
    set_child(arena, x, dir.opposite(), inner);
    if let Some(inner) = inner {
        set_p(arena, inner, Some(x));
    }

    let p = get_p(arena, x);
    set_p(arena, y, p);
    replace_child(arena, &mut root, p, x, Some(y));

    set_child(arena, y, dir, Some(x));
    set_p(arena, x, Some(y));
    root
}

/// Lifts `x`'s right child into `x`'s position.
pub fn rotate_left<N: Node>(arena: &mut [N], root: Option<u32>, x: u32) -> Option<u32> {
    rotate(arena, root, x, Dir::Left)
}

/// Lifts `x`'s left child into `x`'s position.
pub fn rotate_right<N: Node>(arena: &mut [N], root: Option<u32>, x: u32) -> Option<u32> {
    rotate(arena, root, x, Dir::Right)
}
