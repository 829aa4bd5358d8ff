//! Flat edge-list backend.

use rustc_hash::FxHashMap;

use gc_core::Node;

use crate::WeightedGraph;
use crate::builder::RawEdge;

/// Weighted graph stored as a plain vector of edges.  Every weight or
/// neighbor query scans the whole list.  Build with
/// [`GraphBuilder::build_edge_list`](crate::GraphBuilder::build_edge_list).
#[derive(Clone, Debug)]
pub struct EdgeListGraph<N: Node> {
    directed: bool,
    nodes:    Vec<N>,
    index:    FxHashMap<N, usize>,
    edges:    Vec<RawEdge<N>>,
}

impl<N: Node> EdgeListGraph<N> {
    pub(crate) fn from_parts(
        directed: bool,
        nodes:    Vec<N>,
        index:    FxHashMap<N, usize>,
        edges:    Vec<RawEdge<N>>,
    ) -> Self {
        Self { directed, nodes, index, edges }
    }

    /// Every stored edge as `(from, to, weight)`.  Undirected edges appear
    /// once, in the orientation they were added.
    pub fn edges(&self) -> impl Iterator<Item = (N, N, f64)> + '_ {
        self.edges.iter().map(|e| (e.from, e.to, e.weight))
    }
}

impl<N: Node> WeightedGraph<N> for EdgeListGraph<N> {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = N> + '_> {
        Box::new(self.nodes.iter().copied())
    }

    fn contains_node(&self, n: N) -> bool {
        self.index.contains_key(&n)
    }

    fn weight(&self, a: N, b: N) -> Option<f64> {
        self.edges
            .iter()
            .find(|e| (e.from == a && e.to == b) || (!self.directed && e.from == b && e.to == a))
            .map(|e| e.weight)
    }

    fn neighbors(&self, a: N) -> Box<dyn Iterator<Item = N> + '_> {
        let directed = self.directed;
        Box::new(self.edges.iter().filter_map(move |e| {
            if e.from == a {
                Some(e.to)
            } else if !directed && e.to == a {
                Some(e.from)
            } else {
                None
            }
        }))
    }

    fn is_directed(&self) -> bool {
        self.directed
    }
}
