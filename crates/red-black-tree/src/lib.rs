//! Arena-based red-black tree.
//!
//! Nodes are stored in a `Vec` owned by [`RbTree`]; every link (parent, left,
//! right) is an `Option<u32>` index into that arena instead of a pointer. An
//! absent link stands in for the black sentinel leaf, and the delete fixup
//! tracks the parent of an empty position explicitly, so each rebalancing
//! case applies uniformly whether or not a child exists.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`RbNode`], [`Color`], [`Dir`], the [`Node`] / [`RbNodeLike`] traits |
//! [`util`] | `first`, `last`, `next`, `prev`, `size`, `height`, `find` |
//! [`rotate`] | `rotate_left`, `rotate_right` |
//! [`insert`] | `locate`, `insert_left`, `insert_right`, `fix_insert` |
//! [`remove`] | `transplant`, `remove`, `fix_remove` |
//! [`validate`] | `assert_red_black_tree` invariant checker |
//! [`traverse`] | lazy in-order [`Iter`] yielding key, color and depth |
//!
//! [`RbTree`] wraps these free functions into a set with `insert`, `delete`,
//! `search` and `traverse`.
//!
//! ```
//! use red_black_tree::{Color, RbTree};
//!
//! let mut tree = RbTree::new();
//! for key in [10, 20, 30] {
//!     tree.insert(key);
//! }
//! let root = tree.root().unwrap();
//! assert_eq!(*root.key(), 20);
//! assert_eq!(root.color(), Color::Black);
//!
//! tree.delete(&20);
//! assert!(!tree.contains(&20));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![10, 30]);
//! ```

mod error;
pub mod insert;
pub mod remove;
pub mod rotate;
pub mod traverse;
mod tree;
pub mod types;
pub mod util;
pub mod validate;

pub use error::TreeError;
pub use insert::{fix_insert, insert_at, insert_left, insert_right, locate, Slot};
pub use remove::{fix_remove, remove, transplant};
pub use rotate::{rotate, rotate_left, rotate_right};
pub use traverse::{Entry, Iter};
pub use tree::{NodeRef, RbTree};
pub use types::{Color, Dir, Node, RbNode, RbNodeLike};
pub use validate::{assert_compact, assert_red_black_tree};
