//! `gc-continuum` — positions anywhere along a weighted graph, and how they
//! move.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`continuum`] | `Continuum` — point table, fixed points, interval queries       |
//! | [`point`]     | `PointRef` — read-only view of one live point                   |
//! | [`scoped`]    | `ScopedPoint` — detaches its point when dropped                 |
//! | [`motion`]    | advance toward a node, a point, or along a route                |
//! | [`collision`] | swept-interval collision test run after every step              |
//! | [`observer`]  | `MotionObserver`, `NoopObserver`, `EventLog`                    |
//! | [`error`]     | `ContinuumError`, `ContinuumResult<T>`                          |
//!
//! # Model
//!
//! A [`Continuum`] borrows a read-only [`WeightedGraph`][gc_graph::WeightedGraph]
//! for its whole lifetime and owns every point placed on it.  Points are
//! addressed by [`PointId`][gc_core::PointId], an index into the point table;
//! ids are never reused, so a detached id stays detached.  One fixed point
//! is created per graph node at construction.
//!
//! Movement is driven by the caller: each `advance_*` call moves one point by
//! at most a distance budget, then reports what happened to a
//! [`MotionObserver`] in order: displaced, arrived, collisions.  Observers
//! receive `&mut Continuum` and may re-enter any operation, including
//! removing the point being moved.
//!
//! # Quick-start
//!
//! ```
//! use gc_continuum::{Continuum, NoopObserver};
//! use gc_graph::generate;
//!
//! let graph = generate::path(11, 1.0).unwrap().build_neighbor_set();
//! let mut continuum = Continuum::new(&graph).unwrap();
//! let p = continuum.add_point(0).unwrap();
//!
//! assert!(!continuum.advance_toward_node(p, 1, 0.7, &mut NoopObserver).unwrap());
//! assert!(continuum.advance_toward_node(p, 1, 0.7, &mut NoopObserver).unwrap());
//! assert!(continuum.point(p).unwrap().is_at_node());
//! ```

pub mod collision;
pub mod continuum;
pub mod error;
pub mod motion;
pub mod observer;
pub mod point;
pub mod scoped;


pub use continuum::Continuum;
pub use error::{ContinuumError, ContinuumResult};
pub use observer::{EventLog, MotionEvent, MotionObserver, NoopObserver};
pub use point::PointRef;
pub use scoped::ScopedPoint;
