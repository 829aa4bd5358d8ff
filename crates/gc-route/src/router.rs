//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The continuum asks for routes through the [`Router`] trait, so
//! applications can swap in A*, contraction hierarchies or domain-specific
//! heuristics without touching the movement engine.
//!
//! # Positions, not just nodes
//!
//! Both ends of a query are [`Position`]s.  A mid-edge origin may leave its
//! edge through either endpoint; a mid-edge target may be entered from
//! either endpoint, subject to edge direction.  Two positions on the same
//! edge also consider the direct move along that edge.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::trace;
use rustc_hash::FxHashMap;

use gc_core::{Node, Position};
use gc_graph::{GraphError, WeightedGraph};

use crate::{Leg, Route, RouteError, RouteResult, Step};

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
pub trait Router {
    /// Compute a route from `from` to `to` over `graph`.
    ///
    /// `from == to` yields a route with nothing to traverse.
    ///
    /// # Errors
    ///
    /// [`RouteError::NoRoute`] if `to` is unreachable; [`RouteError::Graph`]
    /// if either position names an unknown node or a missing edge.
    fn route<N, G>(&self, graph: &G, from: Position<N>, to: Position<N>) -> RouteResult<Route<N>, N>
    where
        N: Node,
        G: WeightedGraph<N> + ?Sized;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra over any [`WeightedGraph`], seeded from one or two
/// source nodes depending on whether the origin is at-node or mid-edge.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route<N, G>(&self, graph: &G, from: Position<N>, to: Position<N>) -> RouteResult<Route<N>, N>
    where
        N: Node,
        G: WeightedGraph<N> + ?Sized,
    {
        dijkstra(graph, from, to)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Min-heap entry.  Ordering is reversed on `cost` so `BinaryHeap` (a
/// max-heap) pops the cheapest entry first.
struct Frontier<N> {
    cost: f64,
    node: N,
}

impl<N> PartialEq for Frontier<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cost.total_cmp(&other.cost) == Ordering::Equal
    }
}

impl<N> Eq for Frontier<N> {}

impl<N> PartialOrd for Frontier<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for Frontier<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.total_cmp(&self.cost)
    }
}

/// Length of the edge a position sits on; `0.0` for at-node positions.
fn interval_weight<N, G>(graph: &G, p: &Position<N>) -> RouteResult<f64, N>
where
    N: Node,
    G: WeightedGraph<N> + ?Sized,
{
    match *p {
        Position::Node(n) if graph.contains_node(n) => Ok(0.0),
        Position::Node(n) => Err(GraphError::NonExistentNode(n).into()),
        Position::Edge { a, b, .. } => Ok(graph.edge_weight(a, b).ok_or(GraphError::NoSuchEdge(a, b))?),
    }
}

/// Ways of leaving `p`: `(node, distance from p)`.
fn exits<N: Node>(p: &Position<N>, weight: f64) -> Vec<(N, f64)> {
    match *p {
        Position::Node(n) => vec![(n, 0.0)],
        Position::Edge { a, b, offset } => vec![(a, offset), (b, weight - offset)],
    }
}

/// Ways of arriving at `p`: `(node, distance to p)`.  Entering an edge from
/// an endpoint requires the edge to run away from that endpoint.
fn entries<N, G>(graph: &G, p: &Position<N>, weight: f64) -> Vec<(N, f64)>
where
    N: Node,
    G: WeightedGraph<N> + ?Sized,
{
    match *p {
        Position::Node(n) => vec![(n, 0.0)],
        Position::Edge { a, b, offset } => {
            let mut v = Vec::with_capacity(2);
            if graph.weight(a, b).is_some() {
                v.push((a, offset));
            }
            if graph.weight(b, a).is_some() {
                v.push((b, weight - offset));
            }
            v
        }
    }
}

fn dijkstra<N, G>(graph: &G, from: Position<N>, to: Position<N>) -> RouteResult<Route<N>, N>
where
    N: Node,
    G: WeightedGraph<N> + ?Sized,
{
    let from_w = interval_weight(graph, &from)?;
    let to_w = interval_weight(graph, &to)?;

    if from == to {
        return Ok(match from {
            Position::Node(n) => Route::at(n),
            Position::Edge { .. } => Route::empty(),
        });
    }

    // dist[v] = best known distance from `from` to v.
    // prev[v] = predecessor node, `None` for the exits of `from`.
    let mut dist: FxHashMap<N, f64> = FxHashMap::default();
    let mut prev: FxHashMap<N, Option<N>> = FxHashMap::default();
    let mut heap = BinaryHeap::new();

    for (n, d) in exits(&from, from_w) {
        if dist.get(&n).is_none_or(|&best| d < best) {
            dist.insert(n, d);
            prev.insert(n, None);
            heap.push(Frontier { cost: d, node: n });
        }
    }

    while let Some(Frontier { cost, node }) = heap.pop() {
        // Skip stale heap entries.
        if dist.get(&node).is_some_and(|&best| cost > best) {
            continue;
        }
        for neighbor in graph.neighbors(node) {
            let Some(w) = graph.weight(node, neighbor) else { continue };
            let next = cost + w;
            if dist.get(&neighbor).is_none_or(|&best| next < best) {
                dist.insert(neighbor, next);
                prev.insert(neighbor, Some(node));
                heap.push(Frontier { cost: next, node: neighbor });
            }
        }
    }

    // Cheapest way into `to`, if any.
    let via_nodes = entries(graph, &to, to_w)
        .into_iter()
        .filter_map(|(n, leg)| dist.get(&n).map(|&d| (n, d + leg, leg)))
        .min_by(|x, y| x.1.total_cmp(&y.1));

    // Moving straight along a shared edge.
    let direct = if from.shares_edge(&to) {
        let anchor = from.anchor();
        match (from.distance_along(anchor, from_w), to.distance_along(anchor, to_w)) {
            (Some(x), Some(y)) => Some((x - y).abs()),
            _ => None,
        }
    } else {
        None
    };

    match (via_nodes, direct) {
        (_, Some(d)) if via_nodes.is_none_or(|(_, total, _)| d <= total) => {
            trace!("direct route {from} -> {to} ({d})");
            Ok(Route::direct(to, d))
        }
        (Some((last, total, leg)), _) => {
            trace!("route {from} -> {to} via {last:?} ({total})");
            reconstruct(graph, &prev, from, from_w, last, to, leg)
        }
        _ => Err(RouteError::NoRoute { from, to }),
    }
}

fn reconstruct<N, G>(
    graph:   &G,
    prev:    &FxHashMap<N, Option<N>>,
    from:    Position<N>,
    from_w:  f64,
    last:    N,
    to:      Position<N>,
    end_leg: f64,
) -> RouteResult<Route<N>, N>
where
    N: Node,
    G: WeightedGraph<N> + ?Sized,
{
    let mut walk = vec![last];
    let mut cur = last;
    while let Some(&Some(p)) = prev.get(&cur) {
        walk.push(p);
        cur = p;
    }
    walk.reverse();

    let mut route = Route::at(cur);
    for pair in walk.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let w = graph.weight(a, b).ok_or(GraphError::NoSuchEdge(a, b))?;
        route.push_step(Step::new(a, b, w))?;
    }

    if let Position::Edge { .. } = from {
        if let Some(distance) = from.distance_along(cur, from_w) {
            route.set_start(Leg { position: from, distance });
        }
    }
    if let Position::Edge { .. } = to {
        route.set_end(Leg { position: to, distance: end_leg });
    }
    Ok(route)
}
