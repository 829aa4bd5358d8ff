//! Movement notifications.

use gc_core::{Node, PointId, Position};
use gc_graph::WeightedGraph;

use crate::Continuum;

/// Callbacks invoked by the `advance_*` methods after each step.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// Delivery is synchronous and ordered: `on_displaced`, then `on_arrived`,
/// then one `on_collision` per side of every collision found by the step.
/// Each hook receives the continuum mutably and may call back into it; a
/// point removed by an earlier hook still gets its remaining notifications
/// for the current step.
///
/// # Example — stop at the first collision
///
/// ```rust,ignore
/// struct Crash(Option<(PointId, PointId)>);
///
/// impl<N: Node, G: WeightedGraph<N> + ?Sized> MotionObserver<N, G> for Crash {
///     fn on_collision(&mut self, c: &mut Continuum<'_, N, G>, point: PointId, other: PointId) {
///         self.0.get_or_insert((point, other));
///         c.remove(point);
///     }
/// }
/// ```
pub trait MotionObserver<N: Node, G: WeightedGraph<N> + ?Sized> {
    /// `point` changed position.
    fn on_displaced(&mut self, _continuum: &mut Continuum<'_, N, G>, _point: PointId) {}

    /// `point` snapped onto `node`.
    fn on_arrived(&mut self, _continuum: &mut Continuum<'_, N, G>, _point: PointId, _node: N) {}

    /// `point` consumed the last piece of the route it was driven along.
    fn on_route_finished(&mut self, _continuum: &mut Continuum<'_, N, G>, _point: PointId) {}

    /// `point` swept over (or sits on) `other`.  Always delivered in pairs,
    /// once from each side.
    fn on_collision(
        &mut self,
        _continuum: &mut Continuum<'_, N, G>,
        _point:     PointId,
        _other:     PointId,
    ) {}
}

/// A [`MotionObserver`] that does nothing.
pub struct NoopObserver;

impl<N: Node, G: WeightedGraph<N> + ?Sized> MotionObserver<N, G> for NoopObserver {}

// ── EventLog ──────────────────────────────────────────────────────────────────

/// One recorded notification.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MotionEvent<N> {
    Displaced { point: PointId, position: Position<N> },
    Arrived { point: PointId, node: N },
    RouteFinished { point: PointId },
    Collision { point: PointId, other: PointId },
}

/// Observer that appends every notification to a list.
#[derive(Clone, Debug)]
pub struct EventLog<N> {
    events: Vec<MotionEvent<N>>,
}

impl<N: Node> EventLog<N> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn events(&self) -> &[MotionEvent<N>] {
        &self.events
    }

    /// Drain everything recorded so far.
    pub fn take(&mut self) -> Vec<MotionEvent<N>> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Points `point` was reported colliding with, in delivery order.
    pub fn collisions_of(&self, point: PointId) -> Vec<PointId> {
        self.events
            .iter()
            .filter_map(|e| match *e {
                MotionEvent::Collision { point: p, other } if p == point => Some(other),
                _ => None,
            })
            .collect()
    }
}

impl<N: Node> Default for EventLog<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node, G: WeightedGraph<N> + ?Sized> MotionObserver<N, G> for EventLog<N> {
    fn on_displaced(&mut self, continuum: &mut Continuum<'_, N, G>, point: PointId) {
        if let Ok(position) = continuum.position(point) {
            self.events.push(MotionEvent::Displaced { point, position });
        }
    }

    fn on_arrived(&mut self, _continuum: &mut Continuum<'_, N, G>, point: PointId, node: N) {
        self.events.push(MotionEvent::Arrived { point, node });
    }

    fn on_route_finished(&mut self, _continuum: &mut Continuum<'_, N, G>, point: PointId) {
        self.events.push(MotionEvent::RouteFinished { point });
    }

    fn on_collision(&mut self, _continuum: &mut Continuum<'_, N, G>, point: PointId, other: PointId) {
        self.events.push(MotionEvent::Collision { point, other });
    }
}
