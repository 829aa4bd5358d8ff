//! The node identity bound.

use std::fmt::Debug;
use std::hash::Hash;

/// Identity of a graph node, supplied by the client and opaque to the
/// continuum.
///
/// Equality is the only semantic requirement.  `Hash` backs the index maps
/// of the graph backends; errors carry the offending node, hence `Debug`
/// and `'static`.
///
/// Implemented automatically for every type meeting the bounds, so `u32`,
/// `usize`, `char`, `&'static str` and small client enums all qualify.
pub trait Node: Copy + Eq + Hash + Debug + 'static {}

impl<T> Node for T where T: Copy + Eq + Hash + Debug + 'static {}
