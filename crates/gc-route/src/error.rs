//! Route-subsystem error type.

use thiserror::Error;

use gc_core::{Node, Position};
use gc_graph::GraphError;

/// Errors produced by `gc-route`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RouteError<N: Node> {
    #[error("inconsistent path: {0}")]
    InconsistentPath(String),

    #[error("no route from {from} to {to}")]
    NoRoute { from: Position<N>, to: Position<N> },

    #[error(transparent)]
    Graph(#[from] GraphError<N>),
}

pub type RouteResult<T, N> = Result<T, RouteError<N>>;
