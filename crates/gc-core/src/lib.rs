//! `gc-core` — foundational types for the graph continuum toolkit.
//!
//! This crate is a dependency of every other `gc-*` crate.  It intentionally
//! has no `gc-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`node`]       | `Node` — the bound every client node type satisfies    |
//! | [`ids`]        | `PointId`                                              |
//! | [`position`]   | `Position<N>` — at a node or somewhere along an edge   |
//! | [`config`]     | `ContinuumConfig`                                      |
//! | [`error`]      | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod node;
pub mod position;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::ContinuumConfig;
pub use error::{CoreError, CoreResult};
pub use ids::PointId;
pub use node::Node;
pub use position::Position;
