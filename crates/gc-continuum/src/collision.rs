//! Swept-interval collision test.
//!
//! # Sweep
//!
//! One movement step takes a point from `before` to `after`.  Both lie on a
//! single edge (or at one node), so the step covers a closed range of
//! distances measured from one reference node of that edge:
//!
//! ```text
//!   reference                    far
//!       o------[=========]--------o
//!              lo       hi
//! ```
//!
//! Every other mobile point on that edge, or at either of its ends, whose
//! distance from the reference falls in `[lo, hi]` (widened by the configured
//! tolerance) collides with the mover.  The test only looks at the range
//! swept by this one step: two points crossing each other inside a single
//! large step of each are missed if neither step's range contains the
//! other's position at that moment.
//!
//! Fixed points mark nodes and never collide.

use log::warn;

use gc_core::{Node, PointId, Position};
use gc_graph::WeightedGraph;

use crate::Continuum;

/// The closed range of an edge covered by one movement step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sweep<N> {
    /// Node distances are measured from.
    pub reference: N,
    /// The other end of the swept edge; `None` when the step never left
    /// `reference`.
    pub far:       Option<N>,
    /// Length of the swept edge (`0.0` without a far end).
    pub weight:    f64,
    pub lo:        f64,
    pub hi:        f64,
}

impl<N: Node> Sweep<N> {
    /// The sweep of a step from `before` to `after`, or `None` if the two
    /// positions do not share an edge or node.
    pub fn between<G>(graph: &G, before: &Position<N>, after: &Position<N>) -> Option<Self>
    where
        G: WeightedGraph<N> + ?Sized,
    {
        let on_edge = |reference: N, far: N, from: f64, to: f64| {
            let weight = graph.edge_weight(reference, far)?;
            Some(Sweep { reference, far: Some(far), weight, lo: from.min(to), hi: from.max(to) })
        };
        match (*before, *after) {
            (Position::Node(u), Position::Node(v)) if u == v => {
                Some(Sweep { reference: u, far: None, weight: 0.0, lo: 0.0, hi: 0.0 })
            }
            (Position::Node(u), Position::Node(v)) => {
                let w = graph.edge_weight(u, v)?;
                on_edge(u, v, 0.0, w)
            }
            (Position::Node(u), p @ Position::Edge { .. })
            | (p @ Position::Edge { .. }, Position::Node(u)) => {
                let far = other_end(&p, u)?;
                let w = graph.edge_weight(u, far)?;
                on_edge(u, far, 0.0, p.distance_along(u, w)?)
            }
            (Position::Edge { a, b, .. }, Position::Edge { .. }) if before.shares_edge(after) => {
                let w = graph.edge_weight(a, b)?;
                on_edge(a, b, before.distance_along(a, w)?, after.distance_along(a, w)?)
            }
            _ => None,
        }
    }

    /// Distance of `p` from the reference node, if `p` lies on the swept
    /// edge or at one of its ends.
    pub fn locate(&self, p: &Position<N>) -> Option<f64> {
        match (*p, self.far) {
            (Position::Node(n), _) if n == self.reference => Some(0.0),
            (Position::Node(n), Some(far)) if n == far => Some(self.weight),
            (Position::Edge { .. }, Some(far)) if p.on_pair(self.reference, far) => {
                p.distance_along(self.reference, self.weight)
            }
            _ => None,
        }
    }

    /// `true` if `p` is inside the swept range, `tolerance` included.
    pub fn contains(&self, p: &Position<N>, tolerance: f64) -> bool {
        self.locate(p)
            .is_some_and(|d| self.lo - tolerance <= d && d <= self.hi + tolerance)
    }
}

fn other_end<N: Node>(p: &Position<N>, n: N) -> Option<N> {
    match *p {
        Position::Edge { a, b, .. } if a == n => Some(b),
        Position::Edge { a, b, .. } if b == n => Some(a),
        _ => None,
    }
}

impl<N: Node, G: WeightedGraph<N> + ?Sized> Continuum<'_, N, G> {
    /// Mobile points other than `mover` hit by a step from `before` to
    /// `after`, in creation order.
    pub fn collisions(&self, mover: PointId, before: &Position<N>, after: &Position<N>) -> Vec<PointId> {
        let Some(sweep) = Sweep::between(self.graph(), before, after) else {
            warn!("{mover}: step {before} -> {after} does not stay on one edge");
            return Vec::new();
        };
        let tolerance = self.config().tolerance;
        self.mobile_points()
            .filter(|&(id, p)| id != mover && sweep.contains(&p, tolerance))
            .map(|(id, _)| id)
            .collect()
    }
}
