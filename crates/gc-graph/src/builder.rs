//! Validated, backend-agnostic graph construction.

use rustc_hash::FxHashMap;

use gc_core::Node;

use crate::{AdjacencyMatrix, EdgeListGraph, GraphError, GraphResult, NeighborSetGraph};

/// One validated edge as recorded by the builder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct RawEdge<N> {
    pub from:   N,
    pub to:     N,
    pub weight: f64,
}

/// Construct a graph incrementally, then call one of the `build_*` methods.
///
/// The builder validates every edge as it is added, so all backends can
/// assume non-negative finite weights and no self-loops.  Adding an edge that
/// already exists replaces its weight; in an undirected builder `(a, b)` and
/// `(b, a)` are the same edge.
///
/// # Example
///
/// ```
/// use gc_graph::{GraphBuilder, WeightedGraph};
///
/// let mut b = GraphBuilder::undirected();
/// b.add_edge('a', 'b', 2.5).unwrap();
/// b.add_unweighted_edge('b', 'c').unwrap();
/// let g = b.build_neighbor_set();
/// assert_eq!(g.node_count(), 3);
/// assert_eq!(g.weight('b', 'a'), Some(2.5));
/// assert_eq!(g.weight('a', 'c'), None);
/// ```
#[derive(Clone, Debug)]
pub struct GraphBuilder<N: Node> {
    directed:   bool,
    nodes:      Vec<N>,
    node_index: FxHashMap<N, usize>,
    edges:      Vec<RawEdge<N>>,
    edge_index: FxHashMap<(N, N), usize>,
}

impl<N: Node> GraphBuilder<N> {
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            nodes:      Vec::new(),
            node_index: FxHashMap::default(),
            edges:      Vec::new(),
            edge_index: FxHashMap::default(),
        }
    }

    /// Builder for a symmetric graph: every edge is traversable both ways
    /// with the same weight.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Pre-allocate for the expected number of nodes and edges.
    pub fn with_capacity(directed: bool, nodes: usize, edges: usize) -> Self {
        let mut b = Self::new(directed);
        b.nodes.reserve(nodes);
        b.node_index.reserve(nodes);
        b.edges.reserve(edges);
        b.edge_index.reserve(edges);
        b
    }

    /// Add `n` if it is not already present.  Returns `true` if it was new.
    pub fn add_node(&mut self, n: N) -> bool {
        if self.node_index.contains_key(&n) {
            return false;
        }
        self.node_index.insert(n, self.nodes.len());
        self.nodes.push(n);
        true
    }

    /// Add (or re-weight) the edge `from → to`, adding missing endpoints.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidWeight`] for negative, NaN or infinite weights;
    /// [`GraphError::SelfLoop`] when `from == to`.
    pub fn add_edge(&mut self, from: N, to: N, weight: f64) -> GraphResult<(), N> {
        if from == to {
            return Err(GraphError::SelfLoop(from));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight { from, to, weight });
        }
        self.add_node(from);
        self.add_node(to);

        let existing = self
            .edge_index
            .get(&(from, to))
            .or_else(|| if self.directed { None } else { self.edge_index.get(&(to, from)) })
            .copied();
        match existing {
            Some(i) => self.edges[i].weight = weight,
            None => {
                self.edge_index.insert((from, to), self.edges.len());
                self.edges.push(RawEdge { from, to, weight });
            }
        }
        Ok(())
    }

    /// Add an edge of weight `1.0`, for graphs where only adjacency matters.
    pub fn add_unweighted_edge(&mut self, from: N, to: N) -> GraphResult<(), N> {
        self.add_edge(from, to, 1.0)
    }

    pub fn is_directed(&self) -> bool { self.directed }
    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Dense backend.  Memory is O(N²); lookups are O(1).
    pub fn build_matrix(self) -> AdjacencyMatrix<N> {
        AdjacencyMatrix::from_parts(self.directed, self.nodes, self.node_index, &self.edges)
    }

    /// Sparse backend with hashed neighbor sets.
    pub fn build_neighbor_set(self) -> NeighborSetGraph<N> {
        NeighborSetGraph::from_parts(self.directed, self.nodes, &self.edges)
    }

    /// Flat backend.  Lookups are O(E).
    pub fn build_edge_list(self) -> EdgeListGraph<N> {
        EdgeListGraph::from_parts(self.directed, self.nodes, self.node_index, self.edges)
    }
}
