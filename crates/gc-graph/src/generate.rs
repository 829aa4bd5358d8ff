//! Ready-made graph shapes for tests, demos and benchmarks.
//!
//! Every generator returns an undirected [`GraphBuilder<usize>`] with nodes
//! `0..n` so callers can still add edges or pick a backend.
//!
//! # Determinism
//!
//! [`random`] draws from a `SmallRng` seeded with the caller's seed, so the
//! same `(n, p, weights, seed)` always yields the same graph.

use std::ops::Range;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{GraphBuilder, GraphError, GraphResult};

/// `0 — 1 — … — (n-1)`, every edge of weight `weight`.
pub fn path(n: usize, weight: f64) -> GraphResult<GraphBuilder<usize>, usize> {
    let mut b = GraphBuilder::with_capacity(false, n, n.saturating_sub(1));
    for i in 0..n {
        b.add_node(i);
    }
    for i in 1..n {
        b.add_edge(i - 1, i, weight)?;
    }
    Ok(b)
}

/// [`path`] plus the closing edge `(n-1) — 0`.  Needs `n >= 3`; smaller
/// inputs degrade to a path.
pub fn cycle(n: usize, weight: f64) -> GraphResult<GraphBuilder<usize>, usize> {
    let mut b = path(n, weight)?;
    if n >= 3 {
        b.add_edge(n - 1, 0, weight)?;
    }
    Ok(b)
}

/// `rows × cols` lattice; node `r * cols + c` joins its right and lower
/// neighbors.
pub fn grid(rows: usize, cols: usize, weight: f64) -> GraphResult<GraphBuilder<usize>, usize> {
    let mut b = GraphBuilder::with_capacity(false, rows * cols, 2 * rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            let n = r * cols + c;
            b.add_node(n);
            if c + 1 < cols {
                b.add_edge(n, n + 1, weight)?;
            }
            if r + 1 < rows {
                b.add_edge(n, n + cols, weight)?;
            }
        }
    }
    Ok(b)
}

/// Erdős–Rényi style graph: each unordered pair is joined with probability
/// `p` and a weight drawn uniformly from `weights`.
///
/// `p` is clamped to `[0, 1]`.
///
/// # Errors
///
/// [`GraphError::InvalidParameter`] if `p` or either bound of `weights` is
/// NaN or infinite; [`GraphError::InvalidWeight`] for negative weights.
pub fn random(
    n:       usize,
    p:       f64,
    weights: Range<f64>,
    seed:    u64,
) -> GraphResult<GraphBuilder<usize>, usize> {
    if !p.is_finite() {
        return Err(GraphError::InvalidParameter(format!("edge probability {p}")));
    }
    if !weights.start.is_finite() || !weights.end.is_finite() {
        return Err(GraphError::InvalidParameter(format!("weight range {weights:?}")));
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    let p = p.clamp(0.0, 1.0);
    let mut b = GraphBuilder::with_capacity(false, n, 0);
    for i in 0..n {
        b.add_node(i);
    }
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_bool(p) {
                let w = if weights.is_empty() { weights.start } else { rng.gen_range(weights.clone()) };
                b.add_edge(i, j, w)?;
            }
        }
    }
    Ok(b)
}
