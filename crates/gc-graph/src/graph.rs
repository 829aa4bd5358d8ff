//! The weighted graph contract.
//!
//! Consumers (routers, the continuum) depend only on [`WeightedGraph`], so
//! any backend can be swapped in, including behind `&dyn WeightedGraph<N>`.

use gc_core::Node;

/// Read-only view of a graph with a fixed node set and non-negative edge
/// weights.
///
/// `weight` is a *directed* lookup: in an undirected graph `weight(a, b)` and
/// `weight(b, a)` agree, in a directed one they may not.  Use
/// [`edge_weight`](Self::edge_weight) when direction does not matter.
pub trait WeightedGraph<N: Node> {
    fn node_count(&self) -> usize;

    /// Number of stored edges.  An undirected edge counts once.
    fn edge_count(&self) -> usize;

    /// Every node, in insertion order.
    fn nodes(&self) -> Box<dyn Iterator<Item = N> + '_>;

    fn contains_node(&self, n: N) -> bool;

    /// Weight of the edge `a → b`, or `None` when there is no such edge.
    fn weight(&self, a: N, b: N) -> Option<f64>;

    /// Nodes reachable from `a` over one edge.  Empty for unknown nodes.
    fn neighbors(&self, a: N) -> Box<dyn Iterator<Item = N> + '_>;

    fn is_directed(&self) -> bool;

    /// Weight of the edge between `a` and `b` in either direction, preferring
    /// `a → b`.
    #[inline]
    fn edge_weight(&self, a: N, b: N) -> Option<f64> {
        self.weight(a, b).or_else(|| self.weight(b, a))
    }

    /// `true` if an edge joins `a` and `b` in either direction.
    #[inline]
    fn adjacent(&self, a: N, b: N) -> bool {
        self.edge_weight(a, b).is_some()
    }

    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }
}
