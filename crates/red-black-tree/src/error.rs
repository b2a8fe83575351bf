use thiserror::Error;

/// A broken red-black tree invariant.
///
/// Never produced by normal operation; reported by
/// [`assert_red_black_tree`](crate::validate::assert_red_black_tree) when a
/// tree has been corrupted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("root node {0} has a parent")]
    RootHasParent(u32),
    #[error("root node {0} is not black")]
    RedRoot(u32),
    #[error("node {child} does not link back to parent {parent}")]
    BrokenParentLink { parent: u32, child: u32 },
    #[error("red node {parent} has red child {child}")]
    RedRed { parent: u32, child: u32 },
    #[error("black height mismatch under node {node}: left {left}, right {right}")]
    BlackHeight { node: u32, left: usize, right: usize },
    #[error("in-order key order violated at node {0}")]
    Order(u32),
    #[error("arena holds {arena} nodes but {reachable} are reachable from the root")]
    Unreachable { arena: usize, reachable: usize },
}
