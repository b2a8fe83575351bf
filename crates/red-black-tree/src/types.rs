//! Node and link definitions.
//!
//! Nodes live in a `Vec`-backed arena owned by [`RbTree`](crate::RbTree).
//! Every link (`p`, `l`, `r`) is an `Option<u32>` index into that arena, so
//! parent back-references never alias an owning child link.

use std::fmt;

use serde::Serialize;

/// Node color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn is_red(self) -> bool {
        self == Color::Red
    }

    pub fn is_black(self) -> bool {
        self == Color::Black
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => f.write_str("RED"),
            Color::Black => f.write_str("BLACK"),
        }
    }
}

/// Child side. Lets each mirrored rebalancing branch be written once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dir {
    Left,
    Right,
}

impl Dir {
    #[inline]
    pub fn opposite(self) -> Dir {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

/// Tree links (`p`, `l`, `r`).
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);

    #[inline]
    fn child(&self, dir: Dir) -> Option<u32> {
        match dir {
            Dir::Left => self.l(),
            Dir::Right => self.r(),
        }
    }

    #[inline]
    fn set_child(&mut self, dir: Dir, v: Option<u32>) {
        match dir {
            Dir::Left => self.set_l(v),
            Dir::Right => self.set_r(v),
        }
    }
}

/// Red-black specific node behavior.
pub trait RbNodeLike<K>: Node {
    fn key(&self) -> &K;
    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);

    #[inline]
    fn is_black(&self) -> bool {
        self.color().is_black()
    }
}

/// Arena record for one stored key.
#[derive(Clone, Debug)]
pub struct RbNode<K> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub c: Color,
}

impl<K> RbNode<K> {
    /// A detached red node.
    pub fn new(k: K) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            c: Color::Red,
        }
    }
}

impl<K> Node for RbNode<K> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<K> RbNodeLike<K> for RbNode<K> {
    fn key(&self) -> &K {
        &self.k
    }

    fn color(&self) -> Color {
        self.c
    }

    fn set_color(&mut self, color: Color) {
        self.c = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_detached_and_red() {
        let n = RbNode::new(7);
        assert_eq!((n.p, n.l, n.r), (None, None, None));
        assert_eq!(n.color(), Color::Red);
        assert!(!n.is_black());
    }

    #[test]
    fn child_accessors_follow_direction() {
        let mut n = RbNode::new(1);
        n.set_child(Dir::Left, Some(3));
        n.set_child(Dir::Right, Some(4));
        assert_eq!(n.child(Dir::Left), Some(3));
        assert_eq!(n.child(Dir::Right), Some(4));
        assert_eq!(Dir::Left.opposite(), Dir::Right);
    }

    #[test]
    fn color_display_and_serialize() {
        assert_eq!(Color::Red.to_string(), "RED");
        assert_eq!(Color::Black.to_string(), "BLACK");
        assert_eq!(serde_json::to_string(&Color::Black).unwrap(), "\"BLACK\"");
    }
}
