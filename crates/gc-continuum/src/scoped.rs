//! Points that detach themselves when they go out of scope.

use std::ops::{Deref, DerefMut};

use gc_core::{Node, PointId};
use gc_graph::WeightedGraph;

use crate::Continuum;

/// Guard owning a temporary point.
///
/// Dereferences to the continuum, so the point can be moved and queried
/// through the guard.  Dropping the guard removes the point; call
/// [`release`](Self::release) to keep it.
///
/// ```
/// use gc_continuum::Continuum;
/// use gc_graph::generate;
///
/// let graph = generate::path(3, 1.0).unwrap().build_matrix();
/// let mut continuum = Continuum::new(&graph).unwrap();
/// let before = continuum.len();
/// {
///     let guard = continuum.scoped_point(1).unwrap();
///     assert_eq!(guard.len(), before + 1);
/// }
/// assert_eq!(continuum.len(), before);
/// ```
pub struct ScopedPoint<'c, 'g, N: Node, G: WeightedGraph<N> + ?Sized> {
    continuum: &'c mut Continuum<'g, N, G>,
    id:        PointId,
    armed:     bool,
}

impl<'c, 'g, N: Node, G: WeightedGraph<N> + ?Sized> ScopedPoint<'c, 'g, N, G> {
    pub(crate) fn new(continuum: &'c mut Continuum<'g, N, G>, id: PointId) -> Self {
        Self { continuum, id, armed: true }
    }

    #[inline]
    pub fn id(&self) -> PointId {
        self.id
    }

    /// Keep the point alive past the guard and return its id.
    pub fn release(mut self) -> PointId {
        self.armed = false;
        self.id
    }
}

impl<'g, N: Node, G: WeightedGraph<N> + ?Sized> Deref for ScopedPoint<'_, 'g, N, G> {
    type Target = Continuum<'g, N, G>;

    fn deref(&self) -> &Self::Target {
        self.continuum
    }
}

impl<N: Node, G: WeightedGraph<N> + ?Sized> DerefMut for ScopedPoint<'_, '_, N, G> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.continuum
    }
}

impl<N: Node, G: WeightedGraph<N> + ?Sized> Drop for ScopedPoint<'_, '_, N, G> {
    fn drop(&mut self) {
        // May already be gone if an observer removed it.
        if self.armed {
            self.continuum.remove(self.id);
        }
    }
}
