//! `gc-graph` — the read-only weighted graph the continuum moves over.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                  |
//! |------------------|-----------------------------------------------------------|
//! | [`graph`]        | `WeightedGraph` trait — the only thing consumers rely on  |
//! | [`matrix`]       | `AdjacencyMatrix` — dense `n × n` weight table            |
//! | [`neighbor_set`] | `NeighborSetGraph` — per-node neighbor → weight maps      |
//! | [`edge_list`]    | `EdgeListGraph` — flat edge vector, linear lookups        |
//! | [`builder`]      | `GraphBuilder` — validates input, builds any backend      |
//! | [`generate`]     | path / cycle / grid / seeded random graphs                |
//! | [`error`]        | `GraphError`, `GraphResult<T>`                            |
//!
//! # Backends
//!
//! All three backends answer the same queries with the same results; they
//! differ only in memory layout and lookup cost.  Pick the matrix for small
//! dense graphs, the neighbor set for sparse graphs with frequent weight
//! lookups, and the edge list when the graph is tiny or write-once.
//!
//! Graphs are immutable once built.  "No edge" is `None`, never `0.0`.

pub mod builder;
pub mod edge_list;
pub mod error;
pub mod generate;
pub mod graph;
pub mod matrix;
pub mod neighbor_set;


pub use builder::GraphBuilder;
pub use edge_list::EdgeListGraph;
pub use error::{GraphError, GraphResult};
pub use graph::WeightedGraph;
pub use matrix::AdjacencyMatrix;
pub use neighbor_set::NeighborSetGraph;
