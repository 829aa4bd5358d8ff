//! Movement engine.
//!
//! # State machine
//!
//! ```text
//!            advance, budget < remaining
//!   AtNode(n) ─────────────────────────► MidEdge(n, d)
//!       ▲                                    │
//!       └────────────────────────────────────┘
//!            advance, budget ≥ remaining (snap)
//! ```
//!
//! Every step moves a point along a single edge by at most its budget, then
//! runs the collision sweep and notifies the observer.  Routes are driven
//! one step at a time and consumed from the front.
//!
//! A remaining distance within `tolerance` of the budget counts as reached,
//! so repeated small advances land exactly on the node instead of stopping
//! a rounding error short of it.

use log::{debug, trace};

use gc_core::{Node, PointId, Position};
use gc_graph::WeightedGraph;
use gc_route::Route;

use crate::{Continuum, ContinuumError, ContinuumResult, MotionObserver};

fn check_budget<N: Node>(budget: f64) -> ContinuumResult<(), N> {
    if !budget.is_finite() || budget < 0.0 {
        return Err(ContinuumError::InvalidAdvance(format!(
            "distance budget must be finite and non-negative, got {budget}"
        )));
    }
    Ok(())
}

impl<'g, N: Node, G: WeightedGraph<N> + ?Sized> Continuum<'g, N, G> {
    /// Move `point` towards node `destination` by at most `budget`.
    ///
    /// Returns `true` once the point sits on `destination`.  A budget of `0`
    /// leaves the point in place but still reports collisions with anything
    /// already on top of it.
    ///
    /// # Errors
    ///
    /// [`ContinuumError::InvalidAdvance`] if `budget` is negative or not
    /// finite, if `point` is fixed, or if `destination` is neither an end of
    /// the point's current edge nor reachable from its node over one edge.
    /// [`ContinuumError::UnknownPoint`] if `point` is not live.
    pub fn advance_toward_node<O>(
        &mut self,
        point:       PointId,
        destination: N,
        budget:      f64,
        observer:    &mut O,
    ) -> ContinuumResult<bool, N>
    where
        O: MotionObserver<N, G>,
    {
        let mut budget = budget;
        self.step_toward_node(point, destination, &mut budget, observer)
    }

    /// Move `point` towards wherever `target` currently is.
    ///
    /// Both points must share an interval (see
    /// [`PointRef::same_interval`][crate::PointRef::same_interval]).  The
    /// distance actually travelled is subtracted from `budget`; the point
    /// never overshoots `target`.  Returns `true` if the two now coincide.
    pub fn advance_toward_point<O>(
        &mut self,
        point:    PointId,
        target:   PointId,
        budget:   &mut f64,
        observer: &mut O,
    ) -> ContinuumResult<bool, N>
    where
        O: MotionObserver<N, G>,
    {
        check_budget(*budget)?;
        let to = self.position(target)?;
        self.step_toward_position(point, to, budget, observer)
    }

    /// Drive `point` along `route`, consuming it from the front, for at most
    /// `budget`.
    ///
    /// Returns `true` when the route is exhausted; `on_route_finished` fires
    /// on the call that consumes its last piece.  An already-empty route
    /// returns `true` without moving or notifying.  Returns `false` if the
    /// budget runs out first, or if an observer removed the point.
    pub fn advance_along_route<O>(
        &mut self,
        point:    PointId,
        route:    &mut Route<N>,
        budget:   f64,
        observer: &mut O,
    ) -> ContinuumResult<bool, N>
    where
        O: MotionObserver<N, G>,
    {
        check_budget(budget)?;
        self.slot(point)?;
        if route.is_empty() {
            return Ok(true);
        }

        let mut budget = budget;
        let mut first = true;
        while !route.is_empty() {
            // Only the first piece runs on an empty budget; later ones would
            // just repeat its collision report.  Rounding can leave a
            // remainder below tolerance, which moves nothing.
            if !first && budget <= self.config().tolerance {
                return Ok(false);
            }
            first = false;

            let done = if let Some(head) = route.start().and(route.first_node()) {
                let done = self.step_toward_node(point, head, &mut budget, observer)?;
                if done {
                    route.take_start();
                }
                done
            } else if let Some(step) = route.front_step().copied() {
                let done = self.step_toward_node(point, step.destination, &mut budget, observer)?;
                if done {
                    route.pop_step();
                }
                done
            } else if let Some(leg) = route.end().copied() {
                let done = self.step_toward_position(point, leg.position, &mut budget, observer)?;
                if done {
                    route.take_end();
                }
                done
            } else {
                route.take_start();
                continue;
            };

            if !self.contains(point) || !done {
                return Ok(false);
            }
        }

        debug!("{point} finished its route");
        observer.on_route_finished(self, point);
        Ok(true)
    }

    // ── Single steps ──────────────────────────────────────────────────────

    pub(crate) fn step_toward_node<O>(
        &mut self,
        point:       PointId,
        destination: N,
        budget:      &mut f64,
        observer:    &mut O,
    ) -> ContinuumResult<bool, N>
    where
        O: MotionObserver<N, G>,
    {
        check_budget(*budget)?;
        let slot = *self.slot(point)?;
        if slot.fixed {
            return Err(ContinuumError::InvalidAdvance(format!("{point} is fixed")));
        }
        let before = slot.position;
        let tolerance = self.config().tolerance;
        let unreachable = || {
            ContinuumError::InvalidAdvance(format!(
                "{destination:?} is not reachable from {before} along one edge"
            ))
        };

        let remaining = match before {
            Position::Node(n) if n == destination => 0.0,
            Position::Node(n) => self.graph().weight(n, destination).ok_or_else(unreachable)?,
            Position::Edge { .. } => {
                let w = self.interval_weight(&before)?;
                before.distance_along(destination, w).ok_or_else(unreachable)?
            }
        };

        let (after, consumed, arrived) = if remaining <= *budget + tolerance {
            (Position::Node(destination), remaining, true)
        } else {
            let moved = *budget;
            let after = match before {
                Position::Node(n) => Position::on_edge(n, destination, moved, remaining, tolerance),
                Position::Edge { a, b, offset } => {
                    let w = self.interval_weight(&before)?;
                    let offset = if destination == a { offset - moved } else { offset + moved };
                    Position::on_edge(a, b, offset, w, tolerance)
                }
            };
            (after, moved, false)
        };

        *budget = (*budget - consumed).max(0.0);
        self.set_position(point, after);
        trace!("{point}: {before} -> {after} ({consumed}, {budget} left)");

        let hits = self.collisions(point, &before, &after);
        let moved = before != after;
        self.notify(point, moved, (arrived && moved).then_some(destination), hits, observer);
        Ok(arrived)
    }

    /// One step towards a position on the point's interval.  Returns `true`
    /// if the point ends up on `to`.
    pub(crate) fn step_toward_position<O>(
        &mut self,
        point:    PointId,
        to:       Position<N>,
        budget:   &mut f64,
        observer: &mut O,
    ) -> ContinuumResult<bool, N>
    where
        O: MotionObserver<N, G>,
    {
        check_budget(*budget)?;
        let from = self.position(point)?;
        if self.coincide(&from, &to) {
            return Ok(true);
        }
        if !self.share_interval(&from, &to) {
            return Err(ContinuumError::InvalidAdvance(format!(
                "{to} is not on the interval of {from}"
            )));
        }

        let Position::Edge { a, b, .. } = to else {
            return self.step_toward_node(point, to.anchor(), budget, observer);
        };

        // Both positions measured from `a` along the target's edge.
        let w = self.interval_weight(&to)?;
        let target = to.offset();
        let current = match from {
            Position::Node(n) if n == b => w,
            _ => from
                .distance_along(a, w)
                .ok_or(ContinuumError::NotAnEndpoint { node: a, position: from })?,
        };
        let gap = target - current;
        let toward = if gap < 0.0 { a } else { b };

        let mut allowed = budget.min(gap.abs());
        let granted = allowed;
        self.step_toward_node(point, toward, &mut allowed, observer)?;
        *budget = (*budget - (granted - allowed)).max(0.0);

        match self.position(point) {
            Ok(now) => Ok(self.coincide(&now, &to)),
            Err(_) => Ok(false),
        }
    }

    fn notify<O>(
        &mut self,
        point:    PointId,
        moved:    bool,
        arrived:  Option<N>,
        hits:     Vec<PointId>,
        observer: &mut O,
    ) where
        O: MotionObserver<N, G>,
    {
        if moved {
            observer.on_displaced(self, point);
        }
        if let Some(node) = arrived {
            debug!("{point} arrived at {node:?}");
            observer.on_arrived(self, point, node);
        }
        for other in hits {
            debug!("{point} collided with {other}");
            observer.on_collision(self, point, other);
            observer.on_collision(self, other, point);
        }
    }
}
