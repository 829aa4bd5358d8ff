//! Read-only view of one live point.

use gc_core::{Node, PointId, Position};
use gc_graph::WeightedGraph;

use crate::{Continuum, ContinuumResult};

/// A live point together with the continuum it belongs to.
///
/// Obtained from [`Continuum::point`].  The view holds a snapshot of the
/// position taken when it was created; the shared borrow of the continuum
/// guarantees the point cannot move while the view exists.
pub struct PointRef<'c, 'g, N: Node, G: WeightedGraph<N> + ?Sized> {
    continuum: &'c Continuum<'g, N, G>,
    id:        PointId,
    position:  Position<N>,
}

impl<'c, 'g, N: Node, G: WeightedGraph<N> + ?Sized> PointRef<'c, 'g, N, G> {
    pub(crate) fn new(continuum: &'c Continuum<'g, N, G>, id: PointId, position: Position<N>) -> Self {
        Self { continuum, id, position }
    }

    #[inline]
    pub fn id(&self) -> PointId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> Position<N> {
        self.position
    }

    #[inline]
    pub fn is_at_node(&self) -> bool {
        self.position.is_at_node()
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.position.offset()
    }

    pub fn is_fixed(&self) -> bool {
        self.continuum.is_fixed(self.id)
    }

    /// Distance to node `e`.
    ///
    /// At-node: `0` for the node itself, otherwise the weight of the edge
    /// towards `e`.  Mid-edge: the offset to either endpoint.
    ///
    /// # Errors
    ///
    /// [`ContinuumError::NotAnEndpoint`][crate::ContinuumError::NotAnEndpoint]
    /// if `e` cannot be reached along the current interval.
    pub fn distance_to_endpoint(&self, e: N) -> ContinuumResult<f64, N> {
        self.continuum.distance_to(&self.position, e)
    }

    /// `true` if `other` lies on a segment shared with this point: the same
    /// or adjacent nodes, a node at an end of this point's edge, or the same
    /// edge.
    pub fn same_interval(&self, other: PointId) -> ContinuumResult<bool, N> {
        let q = self.continuum.position(other)?;
        Ok(self.continuum.share_interval(&self.position, &q))
    }

    /// `true` if `other` occupies exactly the same location.
    pub fn coincides_with(&self, other: PointId) -> ContinuumResult<bool, N> {
        let q = self.continuum.position(other)?;
        Ok(self.continuum.coincide(&self.position, &q))
    }

    /// Every other live point whose interval touches this one, fixed points
    /// included.  O(points).
    pub fn neighborhood_points(&self) -> Vec<PointId> {
        self.continuum.neighborhood(&self.position, self.id)
    }
}
