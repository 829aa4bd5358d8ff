//! Dense adjacency-matrix backend.
//!
//! # Data layout
//!
//! Nodes are numbered by insertion order.  The weight of `i → j` lives at
//! `cells[i * n + j]`; `None` marks a missing edge.  Undirected edges are
//! written to both cells.

use rustc_hash::FxHashMap;

use gc_core::Node;

use crate::WeightedGraph;
use crate::builder::RawEdge;

/// Weighted graph stored as an `n × n` table.  Build with
/// [`GraphBuilder::build_matrix`](crate::GraphBuilder::build_matrix).
#[derive(Clone, Debug)]
pub struct AdjacencyMatrix<N: Node> {
    directed:   bool,
    nodes:      Vec<N>,
    index:      FxHashMap<N, usize>,
    cells:      Vec<Option<f64>>,
    edge_count: usize,
}

impl<N: Node> AdjacencyMatrix<N> {
    pub(crate) fn from_parts(
        directed: bool,
        nodes:    Vec<N>,
        index:    FxHashMap<N, usize>,
        edges:    &[RawEdge<N>],
    ) -> Self {
        let n = nodes.len();
        let mut cells = vec![None; n * n];
        for e in edges {
            let (i, j) = (index[&e.from], index[&e.to]);
            cells[i * n + j] = Some(e.weight);
            if !directed {
                cells[j * n + i] = Some(e.weight);
            }
        }
        Self { directed, nodes, index, cells, edge_count: edges.len() }
    }

    #[inline]
    fn cell(&self, i: usize, j: usize) -> Option<f64> {
        self.cells[i * self.nodes.len() + j]
    }
}

impl<N: Node> WeightedGraph<N> for AdjacencyMatrix<N> {
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
        self.index.contains_key(&n)
    }

    fn weight(&self, a: N, b: N) -> Option<f64> {
        let i = *self.index.get(&a)?;
        let j = *self.index.get(&b)?;
        self.cell(i, j)
    }

    fn neighbors(&self, a: N) -> Box<dyn Iterator<Item = N> + '_> {
        let Some(&i) = self.index.get(&a) else {
            return Box::new(std::iter::empty());
        };
        Box::new(
            self.nodes
                .iter()
                .enumerate()
                .filter(move |&(j, _)| self.cell(i, j).is_some())
                .map(|(_, &n)| n),
        )
    }

    fn is_directed(&self) -> bool {
        self.directed
    }
}
