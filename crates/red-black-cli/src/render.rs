//! Human-readable tree rendering.

use std::cmp::Ordering;
use std::fmt::{Display, Write};

use red_black_tree::{NodeRef, RbTree};

/// Renders the tree top-down, one node per line:
///
/// ```text
/// R----20(BLACK)
///      L----10(RED)
///      R----30(RED)
/// ```
///
/// Each node is followed by its left subtree, then its right subtree. Left
/// children are tagged `L----` and continue their parent's rail with `|`;
/// right children are tagged `R----`. An empty tree renders as an empty
/// string.
pub fn render<K, C>(tree: &RbTree<K, C>) -> String
where
    K: Display,
    C: Fn(&K, &K) -> Ordering,
{
    let mut out = String::new();
    let mut stack: Vec<(NodeRef<'_, K>, String, bool)> = Vec::new();
    if let Some(root) = tree.root() {
        stack.push((root, String::new(), true));
    }

    while let Some((node, indent, is_last)) = stack.pop() {
        let (branch, rail) = if is_last {
            ("R----", "     ")
        } else {
            ("L----", "|    ")
        };
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{indent}{branch}{}({})", node.key(), node.color());

        let child_indent = format!("{indent}{rail}");
        if let Some(r) = node.right() {
            stack.push((r, child_indent.clone(), true));
        }
        if let Some(l) = node.left() {
            stack.push((l, child_indent, false));
        }
    }
    out
}
