//! Routes: ordered walks of steps, consumed from the front as a point moves.

use std::collections::VecDeque;

use gc_core::{Node, Position};
use gc_graph::{GraphError, WeightedGraph};

use crate::{RouteError, RouteResult, Step};

/// A fractional piece of a route between a mid-edge position and a node.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg<N> {
    pub position: Position<N>,
    /// Distance covered by the leg.
    pub distance: f64,
}

/// An ordered walk over the graph.
///
/// Invariants:
/// - each step's origin equals the previous step's destination;
/// - `first_node` is the first step's origin (or the only node of a
///   zero-step route);
/// - a start leg sits on an edge incident to `first_node`, an end leg on an
///   edge incident to `last_node`.
///
/// A route without nodes may still hold an end leg: the direct move between
/// two positions on the same edge.
///
/// The movement engine consumes a route destructively: completed legs and
/// steps are dropped as the moving point passes them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route<N> {
    start: Option<Leg<N>>,
    first: Option<N>,
    steps: VecDeque<Step<N>>,
    end:   Option<Leg<N>>,
}

impl<N: Node> Route<N> {
    /// A route with nothing to traverse.
    pub fn empty() -> Self {
        Self { start: None, first: None, steps: VecDeque::new(), end: None }
    }

    /// A zero-step route anchored at `node`.  Extend it with
    /// [`push_step`](Self::push_step).
    pub fn at(node: N) -> Self {
        Self { first: Some(node), ..Self::empty() }
    }

    /// Build a route from consecutive steps.
    ///
    /// # Errors
    ///
    /// [`RouteError::InconsistentPath`] if the steps do not form a walk.
    pub fn from_steps<I>(steps: I) -> RouteResult<Self, N>
    where
        I: IntoIterator<Item = Step<N>>,
    {
        let mut route = Self::empty();
        for step in steps {
            route.push_step(step)?;
        }
        Ok(route)
    }

    /// Build a route along `nodes`, reading each step's weight from `graph`.
    ///
    /// # Errors
    ///
    /// [`GraphError::NoSuchEdge`] if two consecutive nodes are not joined by
    /// an edge in the direction of travel.
    pub fn through<G>(graph: &G, nodes: &[N]) -> RouteResult<Self, N>
    where
        G: WeightedGraph<N> + ?Sized,
    {
        let Some(&head) = nodes.first() else {
            return Ok(Self::empty());
        };
        if !graph.contains_node(head) {
            return Err(GraphError::NonExistentNode(head).into());
        }
        let mut route = Self::at(head);
        for pair in nodes.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let w = graph.weight(a, b).ok_or(GraphError::NoSuchEdge(a, b))?;
            route.push_step(Step::new(a, b, w))?;
        }
        Ok(route)
    }

    /// Append one step to the end of the walk.
    pub fn push_step(&mut self, step: Step<N>) -> RouteResult<(), N> {
        if self.end.is_some() {
            return Err(RouteError::InconsistentPath(
                "cannot extend a route past its fractional end".into(),
            ));
        }
        match (self.steps.back(), self.first) {
            (Some(prev), _) if prev.continues_into(&step) => {}
            (None, Some(first)) if first == step.origin => {}
            (None, None) => self.first = Some(step.origin),
            _ => {
                return Err(RouteError::InconsistentPath(format!(
                    "step {step} does not continue from {:?}",
                    self.last_node()
                )));
            }
        }
        self.steps.push_back(step);
        Ok(())
    }

    /// Begin the route at mid-edge `position`, on an edge incident to the
    /// first node.  An at-node position equal to the first node is a no-op.
    pub fn with_start<G>(mut self, graph: &G, position: Position<N>) -> RouteResult<Self, N>
    where
        G: WeightedGraph<N> + ?Sized,
    {
        self.start = self.leg_to(graph, position, self.first_node(), "start")?;
        Ok(self)
    }

    /// Finish the route at mid-edge `position`, on an edge incident to the
    /// last node.  An at-node position equal to the last node is a no-op.
    pub fn with_end<G>(mut self, graph: &G, position: Position<N>) -> RouteResult<Self, N>
    where
        G: WeightedGraph<N> + ?Sized,
    {
        self.end = self.leg_to(graph, position, self.last_node(), "end")?;
        Ok(self)
    }

    /// The direct move between two positions that lie on the same edge.
    pub(crate) fn direct(to: Position<N>, distance: f64) -> Self {
        Self { end: Some(Leg { position: to, distance }), ..Self::empty() }
    }

    pub(crate) fn set_start(&mut self, leg: Leg<N>) {
        self.start = Some(leg);
    }

    pub(crate) fn set_end(&mut self, leg: Leg<N>) {
        self.end = Some(leg);
    }

    fn leg_to<G>(
        &self,
        graph:    &G,
        position: Position<N>,
        node:     Option<N>,
        which:    &str,
    ) -> RouteResult<Option<Leg<N>>, N>
    where
        G: WeightedGraph<N> + ?Sized,
    {
        let Some(node) = node else {
            return Err(RouteError::InconsistentPath(format!(
                "a {which} leg needs a route with at least one node"
            )));
        };
        match position {
            Position::Node(n) if n == node => Ok(None),
            Position::Node(n) => Err(RouteError::InconsistentPath(format!(
                "{which} node {n:?} is not the route's {which} node {node:?}"
            ))),
            Position::Edge { a, b, .. } => {
                let w = graph.edge_weight(a, b).ok_or(GraphError::NoSuchEdge(a, b))?;
                let distance = position.distance_along(node, w).ok_or_else(|| {
                    RouteError::InconsistentPath(format!(
                        "{which} position {position} is not on an edge of {node:?}"
                    ))
                })?;
                Ok(Some(Leg { position, distance }))
            }
        }
    }

    /// Concatenate `other` onto the end of `self`.
    ///
    /// # Errors
    ///
    /// [`RouteError::InconsistentPath`] if `other` does not start where
    /// `self` ends, or if a fractional end/start would sit in the middle of
    /// the combined route.
    pub fn concat(mut self, other: Route<N>) -> RouteResult<Self, N> {
        if other.is_empty() && other.first.is_none() {
            return Ok(self);
        }
        if self.is_empty() && self.first.is_none() {
            return Ok(other);
        }
        if self.end.is_some() || other.start.is_some() {
            return Err(RouteError::InconsistentPath(
                "fractional legs may only appear at the ends of a route".into(),
            ));
        }
        match (self.last_node(), other.first_node()) {
            (Some(last), Some(first)) if last == first => {}
            (last, first) => {
                return Err(RouteError::InconsistentPath(format!(
                    "route ending at {last:?} cannot continue from {first:?}"
                )));
            }
        }
        self.steps.extend(other.steps);
        self.end = other.end;
        Ok(self)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Total distance: every step's weight plus both fractional legs.
    pub fn length(&self) -> f64 {
        let legs = self.start.map_or(0.0, |l| l.distance) + self.end.map_or(0.0, |l| l.distance);
        legs + self.steps.iter().map(|s| s.weight).sum::<f64>()
    }

    /// `true` when there is nothing left to traverse.
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.steps.is_empty() && self.end.is_none()
    }

    pub fn first_node(&self) -> Option<N> {
        self.steps.front().map(|s| s.origin).or(self.first)
    }

    pub fn last_node(&self) -> Option<N> {
        self.steps.back().map(|s| s.destination).or(self.first)
    }

    pub fn steps(&self) -> impl ExactSizeIterator<Item = &Step<N>> + '_ {
        self.steps.iter()
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn start(&self) -> Option<&Leg<N>> {
        self.start.as_ref()
    }

    pub fn end(&self) -> Option<&Leg<N>> {
        self.end.as_ref()
    }

    /// The nodes of the walk, first node included.
    pub fn nodes(&self) -> impl Iterator<Item = N> + '_ {
        self.first_node()
            .into_iter()
            .chain(self.steps.iter().map(|s| s.destination))
    }

    // ── Consumption ───────────────────────────────────────────────────────

    pub fn front_step(&self) -> Option<&Step<N>> {
        self.steps.front()
    }

    /// Drop the first step; the route now begins at its destination.
    pub fn pop_step(&mut self) -> Option<Step<N>> {
        let step = self.steps.pop_front()?;
        self.first = Some(step.destination);
        Some(step)
    }

    pub fn take_start(&mut self) -> Option<Leg<N>> {
        self.start.take()
    }

    pub fn take_end(&mut self) -> Option<Leg<N>> {
        self.end.take()
    }
}
