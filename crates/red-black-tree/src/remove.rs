//! Node removal, subtree transplant and delete fixup.
//!
//! The position vacated by a removed black node may be empty. It is handled
//! as a black sentinel whose parent is carried next to it (`x`, `x_parent`),
//! so the fixup runs the full case analysis even when `x` is absent.

use tracing::trace;

use crate::rotate::rotate;
use crate::types::{Color, Node, RbNodeLike};
use crate::util::{
    child, color_of, dir_of, first, get_l, get_p, get_r, is_red, replace_child, set_color, set_p,
};

/// Replaces the subtree rooted at `u` with the subtree rooted at `v`, as seen
/// from `u`'s parent. `v`'s children are left untouched.
pub fn transplant<N: Node>(arena: &mut [N], root: Option<u32>, u: u32, v: Option<u32>) -> Option<u32> {
    let mut root = root;
    let p = get_p(arena, u);
    replace_child(arena, &mut root, p, u, v);
    if let Some(v) = v {
        set_p(arena, v, p);
    }
    root
}

/// Unlinks `z` from the tree and rebalances. Returns the new root.
///
/// A node with two children is replaced by its in-order successor, which is
/// moved (not copied) into `z`'s position and takes over `z`'s color. `z` is
/// left fully detached in its arena slot; releasing the slot is up to the
/// caller.
pub fn remove<K, N>(arena: &mut [N], root: Option<u32>, z: u32) -> Option<u32>
where
    N: RbNodeLike<K>,
{
    let mut root = root;
    let zl = get_l(arena, z);
    let zr = get_r(arena, z);

    let removed: Color;
    let x: Option<u32>;
    let x_parent: Option<u32>;

    match (zl, zr) {
        (None, _) => {
            removed = arena[z as usize].color();
            x = zr;
            x_parent = get_p(arena, z);
            root = transplant(arena, root, z, zr);
        }
        (Some(_), None) => {
            removed = arena[z as usize].color();
            x = zl;
            x_parent = get_p(arena, z);
            root = transplant(arena, root, z, zl);
        }
        (Some(zl), Some(zr)) => {
            let y = first(arena, Some(zr)).expect("right subtree has a minimum");
            removed = arena[y as usize].color();
            x = get_r(arena, y);
            if get_p(arena, y) == Some(z) {
                x_parent = Some(y);
            } else {
                x_parent = get_p(arena, y);
                root = transplant(arena, root, y, x);
                arena[y as usize].set_r(Some(zr));
                set_p(arena, zr, Some(y));
            }
            root = transplant(arena, root, z, Some(y));
            arena[y as usize].set_l(Some(zl));
            set_p(arena, zl, Some(y));
            let zc = arena[z as usize].color();
            set_color(arena, y, zc);
        }
    }

    let zn = &mut arena[z as usize];
    zn.set_p(None);
    zn.set_l(None);
    zn.set_r(None);

    if removed.is_black() {
        root = fix_remove(arena, root, x, x_parent);
    }
    root
}

/// Repairs the black-height deficit at `x` (child of `x_parent`) after a
/// black node was removed from that position.
pub fn fix_remove<K, N>(
    arena: &mut [N],
    root: Option<u32>,
    x: Option<u32>,
    x_parent: Option<u32>,
) -> Option<u32>
where
    N: RbNodeLike<K>,
{
    let mut root = root;
    let mut x = x;
    let mut parent = x_parent;

    while x != root && !is_red(arena, x) {
        let Some(p) = parent else {
            break;
        };
        let side = dir_of(arena, p, x);
        let mut s = child(arena, p, side.opposite()).expect("doubly-black position has a sibling");

        if is_red(arena, Some(s)) {
            trace!(p, s, ?side, "delete fixup: red sibling, rotate parent");
            set_color(arena, s, Color::Black);
            set_color(arena, p, Color::Red);
            root = rotate(arena, root, p, side);
            s = child(arena, p, side.opposite()).expect("rotation leaves a sibling");
        }

        let near = child(arena, s, side);
        let far = child(arena, s, side.opposite());

        if !is_red(arena, near) && !is_red(arena, far) {
            trace!(p, s, "delete fixup: black nephews, push deficit up");
            set_color(arena, s, Color::Red);
            x = Some(p);
            parent = get_p(arena, p);
            continue;
        }

        if !is_red(arena, far) {
            trace!(p, s, ?side, "delete fixup: red near nephew, rotate sibling");
            if let Some(near) = near {
                set_color(arena, near, Color::Black);
            }
            set_color(arena, s, Color::Red);
            root = rotate(arena, root, s, side.opposite());
            s = child(arena, p, side.opposite()).expect("rotation leaves a sibling");
        }

        trace!(p, s, ?side, "delete fixup: red far nephew, rotate parent");
        let pc = color_of(arena, Some(p));
        set_color(arena, s, pc);
        set_color(arena, p, Color::Black);
        if let Some(far) = child(arena, s, side.opposite()) {
            set_color(arena, far, Color::Black);
        }
        root = rotate(arena, root, p, side);
        x = root;
        break;
    }

    if let Some(x) = x {
        set_color(arena, x, Color::Black);
    }
    root
}
