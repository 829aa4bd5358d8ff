//! Graph-subsystem error type.

use thiserror::Error;

use gc_core::Node;

/// Errors produced by `gc-graph`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError<N: Node> {
    #[error("node {0:?} not found in graph")]
    NonExistentNode(N),

    #[error("no edge between {0:?} and {1:?}")]
    NoSuchEdge(N, N),

    #[error("edge {from:?} -> {to:?} has invalid weight {weight}")]
    InvalidWeight { from: N, to: N, weight: f64 },

    #[error("self-loop on {0:?} is not allowed")]
    SelfLoop(N),

    #[error("invalid generator parameter: {0}")]
    InvalidParameter(String),
}

pub type GraphResult<T, N> = Result<T, GraphError<N>>;
