//! Sparse neighbor-set backend.

use rustc_hash::FxHashMap;

use gc_core::Node;

use crate::WeightedGraph;
use crate::builder::RawEdge;

/// Weighted graph stored as one `neighbor → weight` map per node.  Build with
/// [`GraphBuilder::build_neighbor_set`](crate::GraphBuilder::build_neighbor_set).
#[derive(Clone, Debug)]
pub struct NeighborSetGraph<N: Node> {
    directed:   bool,
    nodes:      Vec<N>,
    adjacency:  FxHashMap<N, FxHashMap<N, f64>>,
    edge_count: usize,
}

impl<N: Node> NeighborSetGraph<N> {
    pub(crate) fn from_parts(directed: bool, nodes: Vec<N>, edges: &[RawEdge<N>]) -> Self {
        let mut adjacency: FxHashMap<N, FxHashMap<N, f64>> =
            nodes.iter().map(|&n| (n, FxHashMap::default())).collect();
        for e in edges {
            adjacency.entry(e.from).or_default().insert(e.to, e.weight);
            if !directed {
                adjacency.entry(e.to).or_default().insert(e.from, e.weight);
            }
        }
        Self { directed, nodes, adjacency, edge_count: edges.len() }
    }

    /// Out-degree of `n`; `0` for unknown nodes.
    pub fn degree(&self, n: N) -> usize {
        self.adjacency.get(&n).map_or(0, |s| s.len())
    }
}

impl<N: Node> WeightedGraph<N> for NeighborSetGraph<N> {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = N> + '_> {
        Box::new(self.nodes.iter().copied())
    }

    fn contains_node(&self, n: N) -> bool {
        self.adjacency.contains_key(&n)
    }

    fn weight(&self, a: N, b: N) -> Option<f64> {
        self.adjacency.get(&a)?.get(&b).copied()
    }

    fn neighbors(&self, a: N) -> Box<dyn Iterator<Item = N> + '_> {
        match self.adjacency.get(&a) {
            Some(set) => Box::new(set.keys().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn is_directed(&self) -> bool {
        self.directed
    }
}
