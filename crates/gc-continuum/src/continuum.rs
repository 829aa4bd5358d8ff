//! The `Continuum` — every live point on one graph.
//!
//! # Point table
//!
//! ```text
//! slots[id] = Some(Slot { position, fixed })   live point
//! slots[id] = None                             detached
//! ```
//!
//! Slots are appended and never reused, so `PointId`s are stable for the
//! continuum's lifetime and a removed id cannot alias a newer point.
//! Interval queries are O(slots) scans.

use log::{debug, warn};
use rustc_hash::FxHashMap;

use gc_core::{ContinuumConfig, Node, PointId, Position};
use gc_graph::WeightedGraph;
use gc_route::{Route, Router};

use crate::{ContinuumError, ContinuumResult, PointRef, ScopedPoint};

/// One entry of the point table.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Slot<N> {
    pub position: Position<N>,
    /// Fixed points mark graph nodes; they never move and are never removed.
    pub fixed:    bool,
}

/// Owner of every point placed on a graph.
///
/// The graph is borrowed immutably for `'g`, so it cannot change while any
/// point exists.  Create points through [`add_point`](Self::add_point) and
/// friends, query them through [`point`](Self::point), move them with the
/// `advance_*` methods in [`motion`](crate::motion).
pub struct Continuum<'g, N: Node, G: WeightedGraph<N> + ?Sized> {
    graph:  &'g G,
    config: ContinuumConfig,
    slots:  Vec<Option<Slot<N>>>,
    fixed:  FxHashMap<N, PointId>,
    live:   usize,
}

impl<'g, N: Node, G: WeightedGraph<N> + ?Sized> Continuum<'g, N, G> {
    /// Wrap `graph` with the default configuration, creating one fixed point
    /// per node.
    ///
    /// # Errors
    ///
    /// [`ContinuumError::TableFull`] if the graph has more nodes than
    /// `PointId` can address.
    pub fn new(graph: &'g G) -> ContinuumResult<Self, N> {
        let mut c = Self {
            graph,
            config: ContinuumConfig::default(),
            slots:  Vec::with_capacity(graph.node_count()),
            fixed:  FxHashMap::default(),
            live:   0,
        };
        for n in graph.nodes() {
            let id = c.insert(Position::Node(n), true)?;
            c.fixed.insert(n, id);
        }
        Ok(c)
    }

    /// As [`new`](Self::new), with an explicit configuration.
    ///
    /// # Errors
    ///
    /// [`ContinuumError::Config`] if `config` fails validation.
    pub fn with_config(graph: &'g G, config: ContinuumConfig) -> ContinuumResult<Self, N> {
        config.validate()?;
        let mut c = Self::new(graph)?;
        c.config = config;
        Ok(c)
    }

    #[inline]
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    #[inline]
    pub fn config(&self) -> &ContinuumConfig {
        &self.config
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    fn insert(&mut self, position: Position<N>, fixed: bool) -> ContinuumResult<PointId, N> {
        let id = PointId::try_from(self.slots.len())
            .ok()
            .filter(|&id| id != PointId::INVALID)
            .ok_or(ContinuumError::TableFull(self.slots.len()))?;
        self.slots.push(Some(Slot { position, fixed }));
        self.live += 1;
        Ok(id)
    }

    /// Place a new point exactly at node `a`.
    pub fn add_point(&mut self, a: N) -> ContinuumResult<PointId, N> {
        if !self.graph.contains_node(a) {
            return Err(ContinuumError::NonExistentNode(a));
        }
        let id = self.insert(Position::Node(a), false)?;
        debug!("{id} added at {a:?}");
        Ok(id)
    }

    /// Place a new point `offset` along the edge from `a` towards `b`.
    ///
    /// An offset of `0` (or the full edge weight) puts the point at-node on
    /// `a` (or `b`).
    ///
    /// # Errors
    ///
    /// [`ContinuumError::NonExistentNode`] for unknown endpoints,
    /// [`ContinuumError::NoSuchEdge`] if `a` and `b` are not adjacent,
    /// [`ContinuumError::InvalidOffset`] if `offset` is outside
    /// `[0, weight(a, b)]`.
    pub fn add_point_on_edge(&mut self, a: N, b: N, offset: f64) -> ContinuumResult<PointId, N> {
        let position = self.edge_position(a, b, offset)?;
        let id = self.insert(position, false)?;
        debug!("{id} added at {position}");
        Ok(id)
    }

    /// Place a new point at an arbitrary position.
    pub fn add_point_at(&mut self, position: Position<N>) -> ContinuumResult<PointId, N> {
        match position {
            Position::Node(n) => self.add_point(n),
            Position::Edge { a, b, offset } => self.add_point_on_edge(a, b, offset),
        }
    }

    /// Validate and normalize a mid-edge location.
    pub(crate) fn edge_position(&self, a: N, b: N, offset: f64) -> ContinuumResult<Position<N>, N> {
        for n in [a, b] {
            if !self.graph.contains_node(n) {
                return Err(ContinuumError::NonExistentNode(n));
            }
        }
        let weight = self
            .graph
            .edge_weight(a, b)
            .filter(|_| a != b)
            .ok_or(ContinuumError::NoSuchEdge(a, b))?;
        if !offset.is_finite() || offset < 0.0 || offset > weight {
            return Err(ContinuumError::InvalidOffset { a, b, offset, weight });
        }
        Ok(Position::on_edge(a, b, offset, weight, self.config.tolerance))
    }

    /// Detach `point`.  Returns `true` if it was live.
    ///
    /// Idempotent: removing an already-detached id is a no-op, so it is safe
    /// from drop guards and from observer callbacks.  Fixed points are never
    /// removed.
    pub fn remove(&mut self, point: PointId) -> bool {
        match self.slots.get(point.index()).copied().flatten() {
            Some(slot) if slot.fixed => {
                warn!("refusing to remove fixed point {point}");
                false
            }
            Some(_) => {
                self.slots[point.index()] = None;
                self.live -= 1;
                debug!("{point} removed");
                true
            }
            None => false,
        }
    }

    /// Add a point at `a` that is removed again when the guard drops.
    pub fn scoped_point(&mut self, a: N) -> ContinuumResult<ScopedPoint<'_, 'g, N, G>, N> {
        let id = self.add_point(a)?;
        Ok(ScopedPoint::new(self, id))
    }

    /// Add a mid-edge point that is removed again when the guard drops.
    pub fn scoped_point_on_edge(
        &mut self,
        a:      N,
        b:      N,
        offset: f64,
    ) -> ContinuumResult<ScopedPoint<'_, 'g, N, G>, N> {
        let id = self.add_point_on_edge(a, b, offset)?;
        Ok(ScopedPoint::new(self, id))
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    #[inline]
    pub(crate) fn slot(&self, point: PointId) -> ContinuumResult<&Slot<N>, N> {
        self.slots
            .get(point.index())
            .and_then(Option::as_ref)
            .ok_or(ContinuumError::UnknownPoint(point))
    }

    #[inline]
    pub(crate) fn set_position(&mut self, point: PointId, position: Position<N>) {
        if let Some(Some(slot)) = self.slots.get_mut(point.index()) {
            slot.position = position;
        }
    }

    pub fn contains(&self, point: PointId) -> bool {
        self.slot(point).is_ok()
    }

    pub fn is_fixed(&self, point: PointId) -> bool {
        self.slot(point).is_ok_and(|s| s.fixed)
    }

    pub fn position(&self, point: PointId) -> ContinuumResult<Position<N>, N> {
        self.slot(point).map(|s| s.position)
    }

    /// Read-only view of a live point.
    pub fn point(&self, point: PointId) -> ContinuumResult<PointRef<'_, 'g, N, G>, N> {
        let slot = self.slot(point)?;
        Ok(PointRef::new(self, point, slot.position))
    }

    /// The permanent point marking node `n`.
    pub fn fixed_point(&self, n: N) -> ContinuumResult<PointId, N> {
        self.fixed.get(&n).copied().ok_or(ContinuumError::NonExistentNode(n))
    }

    /// Number of live points, fixed points included.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Live slots paired with their ids.  `insert` never hands out an id
    /// past `u32::MAX - 1`, so zipping with the id range covers every slot.
    fn live_slots(&self) -> impl Iterator<Item = (PointId, Slot<N>)> + '_ {
        (0..u32::MAX)
            .map(PointId)
            .zip(&self.slots)
            .filter_map(|(id, s)| s.map(|s| (id, s)))
    }

    /// Every live point with its position, in creation order.
    pub fn iter_points(&self) -> impl Iterator<Item = (PointId, Position<N>)> + '_ {
        self.live_slots().map(|(id, s)| (id, s.position))
    }

    /// Live points that are not fixed.
    pub fn mobile_points(&self) -> impl Iterator<Item = (PointId, Position<N>)> + '_ {
        self.live_slots()
            .filter(|(_, s)| !s.fixed)
            .map(|(id, s)| (id, s.position))
    }

    /// Live points strictly inside the edge `{a, b}` (either orientation).
    pub fn points_in_edge(&self, a: N, b: N) -> Vec<PointId> {
        self.iter_points()
            .filter(|(_, p)| p.on_pair(a, b))
            .map(|(id, _)| id)
            .collect()
    }

    // ── Geometry over positions ───────────────────────────────────────────

    /// Length of the edge a position lies on; `0.0` when at-node.
    pub(crate) fn interval_weight(&self, p: &Position<N>) -> ContinuumResult<f64, N> {
        match *p {
            Position::Node(_) => Ok(0.0),
            Position::Edge { a, b, .. } => {
                self.graph.edge_weight(a, b).ok_or(ContinuumError::NoSuchEdge(a, b))
            }
        }
    }

    /// Distance from `p` to node `e` along `p`'s interval.  An at-node
    /// position reaches its neighbors over one outgoing edge.
    pub(crate) fn distance_to(&self, p: &Position<N>, e: N) -> ContinuumResult<f64, N> {
        let not_endpoint = || ContinuumError::NotAnEndpoint { node: e, position: *p };
        match *p {
            Position::Node(n) if n == e => Ok(0.0),
            Position::Node(n) => self.graph.weight(n, e).ok_or_else(not_endpoint),
            Position::Edge { .. } => {
                let w = self.interval_weight(p)?;
                p.distance_along(e, w).ok_or_else(not_endpoint)
            }
        }
    }

    /// `true` if `p` and `q` lie on one straight segment of the graph.
    pub(crate) fn share_interval(&self, p: &Position<N>, q: &Position<N>) -> bool {
        match (*p, *q) {
            (Position::Node(u), Position::Node(v)) => u == v || self.graph.adjacent(u, v),
            (Position::Node(u), e @ Position::Edge { .. })
            | (e @ Position::Edge { .. }, Position::Node(u)) => e.touches(u),
            (Position::Edge { .. }, Position::Edge { .. }) => p.shares_edge(q),
        }
    }

    /// `true` if `p` and `q` are the same geometric location.
    pub(crate) fn coincide(&self, p: &Position<N>, q: &Position<N>) -> bool {
        match (*p, *q) {
            (Position::Node(u), Position::Node(v)) => u == v,
            (Position::Edge { a, .. }, Position::Edge { .. }) if p.shares_edge(q) => {
                let Ok(w) = self.interval_weight(p) else { return false };
                match (p.distance_along(a, w), q.distance_along(a, w)) {
                    (Some(x), Some(y)) => self.config.approx_eq(x, y),
                    _ => false,
                }
            }
            _ => false,
        }
    }

    /// Live points other than `exclude` whose interval touches `p`'s: for an
    /// at-node `p`, everything at or inside an edge of that node; for a
    /// mid-edge `p`, everything on the closed edge.
    pub(crate) fn neighborhood(&self, p: &Position<N>, exclude: PointId) -> Vec<PointId> {
        self.iter_points()
            .filter(|&(id, _)| id != exclude)
            .filter(|(_, x)| match *p {
                Position::Node(n) => x.touches(n),
                Position::Edge { a, b, .. } => x.on_pair(a, b) || x.node().is_some_and(|n| n == a || n == b),
            })
            .map(|(id, _)| id)
            .collect()
    }

    // ── Routing ───────────────────────────────────────────────────────────

    /// Shortest route from `point`'s current position to node `to`.
    pub fn route_to<R: Router>(&self, point: PointId, to: N, router: &R) -> ContinuumResult<Route<N>, N> {
        let from = self.position(point)?;
        Ok(router.route(self.graph, from, Position::Node(to))?)
    }

    /// Shortest route from `point` to wherever `target` currently is.
    pub fn route_to_point<R: Router>(
        &self,
        point:  PointId,
        target: PointId,
        router: &R,
    ) -> ContinuumResult<Route<N>, N> {
        let from = self.position(point)?;
        let to = self.position(target)?;
        Ok(router.route(self.graph, from, to)?)
    }
}
