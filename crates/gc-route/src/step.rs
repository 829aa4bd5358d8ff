//! A single edge traversal.

use std::fmt;

use gc_core::Node;

/// Traverse the edge `origin → destination`, which is `weight` long.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step<N> {
    pub origin:      N,
    pub destination: N,
    pub weight:      f64,
}

impl<N: Node> Step<N> {
    #[inline]
    pub fn new(origin: N, destination: N, weight: f64) -> Self {
        Self { origin, destination, weight }
    }

    /// `true` if `next` picks up where `self` left off.
    #[inline]
    pub fn continues_into(&self, next: &Step<N>) -> bool {
        self.destination == next.origin
    }
}

impl<N: fmt::Debug> fmt::Display for Step<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} -({})-> {:?}", self.origin, self.weight, self.destination)
    }
}
