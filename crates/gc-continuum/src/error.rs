//! Continuum error type.
//!
//! Every variant marks a violated precondition.  Nothing is retried or
//! repaired internally: the point is left exactly as it was before the
//! failing call.

use thiserror::Error;

use gc_core::{CoreError, Node, PointId, Position};
use gc_route::RouteError;

/// Errors produced by `gc-continuum`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ContinuumError<N: Node> {
    #[error("node {0:?} not found in graph")]
    NonExistentNode(N),

    #[error("point {0} is not live in this continuum")]
    UnknownPoint(PointId),

    #[error("no edge between {0:?} and {1:?}")]
    NoSuchEdge(N, N),

    #[error("offset {offset} outside [0, {weight}] on edge {a:?} - {b:?}")]
    InvalidOffset { a: N, b: N, offset: f64, weight: f64 },

    #[error("{node:?} is not an endpoint of the interval at {position}")]
    NotAnEndpoint { node: N, position: Position<N> },

    #[error("point table is full after {0} slots")]
    TableFull(usize),

    #[error("invalid advance: {0}")]
    InvalidAdvance(String),

    #[error(transparent)]
    Route(#[from] RouteError<N>),

    #[error(transparent)]
    Config(#[from] CoreError),
}

pub type ContinuumResult<T, N> = Result<T, ContinuumError<N>>;
