//! `gc-route` — ordered walks over a weighted graph, and how to find them.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`step`]   | `Step` — one edge traversal                                |
//! | [`route`]  | `Route`, `Leg` — a walk with optional fractional ends      |
//! | [`router`] | `Router` trait, `DijkstraRouter`                           |
//! | [`error`]  | `RouteError`, `RouteResult<T>`                             |
//!
//! # Fractional ends
//!
//! A route may start and/or end at a position strictly inside an edge.  The
//! start leg runs from that position to the route's first node, the end leg
//! from the last node to the final position:
//!
//! ```text
//!   start ──leg──▶ n0 ──step──▶ n1 ──step──▶ n2 ──leg──▶ end
//! ```
//!
//! `Route::length` counts both legs.

pub mod error;
pub mod route;
pub mod router;
pub mod step;

#[cfg(test)]
mod tests;

pub use error::{RouteError, RouteResult};
pub use route::{Leg, Route};
pub use router::{DijkstraRouter, Router};
pub use step::Step;
