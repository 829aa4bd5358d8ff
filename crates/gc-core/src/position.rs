//! Where a point sits: exactly on a node, or strictly inside an edge.
//!
//! # Representation
//!
//! ```text
//! Node(n)                 at-node, offset 0
//! Edge { a, b, offset }   mid-edge, 0 < offset < weight(a, b),
//!                         offset measured from `a`
//! ```
//!
//! `Position` carries no edge weights; operations that need the length of
//! the interval take it as an argument so this type stays graph-agnostic.
//! The invariant "`b` is present iff the offset is positive" is kept by the
//! [`Position::on_edge`] constructor, which snaps offsets at either end of the
//! edge onto the corresponding node.

use std::fmt;

use crate::Node;

/// A location on a weighted graph.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Position<N> {
    /// Exactly at node `N`.
    Node(N),
    /// Strictly between adjacent nodes `a` and `b`, `offset` away from `a`.
    Edge { a: N, b: N, offset: f64 },
}

impl<N: Node> Position<N> {
    /// Build a position `offset` along the edge `a → b` of length `weight`.
    ///
    /// Offsets within `tolerance` of either end collapse onto that end's
    /// node, so the result is `Edge` only for strictly interior offsets.
    /// The caller is responsible for range-checking `offset` first.
    pub fn on_edge(a: N, b: N, offset: f64, weight: f64, tolerance: f64) -> Self {
        if offset <= tolerance {
            Position::Node(a)
        } else if weight - offset <= tolerance {
            Position::Node(b)
        } else {
            Position::Edge { a, b, offset }
        }
    }

    /// `true` iff the offset is not positive.
    #[inline]
    pub fn is_at_node(&self) -> bool {
        self.offset() <= 0.0
    }

    /// Distance from the anchor endpoint; `0.0` when at-node.
    #[inline]
    pub fn offset(&self) -> f64 {
        match *self {
            Position::Node(_) => 0.0,
            Position::Edge { offset, .. } => offset,
        }
    }

    /// The anchor: the node itself, or the endpoint `offset` is measured from.
    #[inline]
    pub fn anchor(&self) -> N {
        match *self {
            Position::Node(n) => n,
            Position::Edge { a, .. } => a,
        }
    }

    /// The far endpoint of a mid-edge position.
    #[inline]
    pub fn far(&self) -> Option<N> {
        match *self {
            Position::Node(_) => None,
            Position::Edge { b, .. } => Some(b),
        }
    }

    /// The node for an at-node position.
    #[inline]
    pub fn node(&self) -> Option<N> {
        match *self {
            Position::Node(n) => Some(n),
            Position::Edge { .. } => None,
        }
    }

    /// `true` if `n` is the node itself or one of the two endpoints.
    pub fn touches(&self, n: N) -> bool {
        match *self {
            Position::Node(m) => m == n,
            Position::Edge { a, b, .. } => a == n || b == n,
        }
    }

    /// `true` if mid-edge on the unordered pair `{x, y}`.
    pub fn on_pair(&self, x: N, y: N) -> bool {
        match *self {
            Position::Node(_) => false,
            Position::Edge { a, b, .. } => (a == x && b == y) || (a == y && b == x),
        }
    }

    /// `true` if both positions are mid-edge on the same unordered pair.
    pub fn shares_edge(&self, other: &Position<N>) -> bool {
        match *other {
            Position::Node(_) => false,
            Position::Edge { a, b, .. } => self.on_pair(a, b),
        }
    }

    /// Distance to endpoint `n` of a mid-edge position whose edge is `weight`
    /// long.  For at-node positions this is `Some(0.0)` when `n` is the node.
    ///
    /// Returns `None` when `n` is not an endpoint of the interval.
    pub fn distance_along(&self, n: N, weight: f64) -> Option<f64> {
        match *self {
            Position::Node(m) => (m == n).then_some(0.0),
            Position::Edge { a, offset, .. } if a == n => Some(offset),
            Position::Edge { b, offset, .. } if b == n => Some(weight - offset),
            Position::Edge { .. } => None,
        }
    }

    /// The same mid-edge location measured from the other endpoint.
    pub fn reversed(&self, weight: f64) -> Self {
        match *self {
            Position::Node(n) => Position::Node(n),
            Position::Edge { a, b, offset } => Position::Edge { a: b, b: a, offset: weight - offset },
        }
    }
}

impl<N: fmt::Debug> fmt::Display for Position<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Node(n) => write!(f, "@{n:?}"),
            Position::Edge { a, b, offset } => write!(f, "{a:?}-[{offset}]->{b:?}"),
        }
    }
}
