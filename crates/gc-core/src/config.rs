//! Continuum configuration.

use crate::{CoreError, CoreResult};

/// Tunables shared by the continuum and its movement engine.
///
/// Typically built with `Default` or deserialized from JSON by the
/// application and handed to `Continuum::with_config`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ContinuumConfig {
    /// Distances closer than this are treated as equal: a point whose
    /// remaining distance to a node is within `tolerance` of the budget snaps
    /// onto the node, and two mid-edge offsets this close are coincident.
    /// Default: `1e-9`.
    pub tolerance: f64,
}

impl ContinuumConfig {
    pub const DEFAULT_TOLERANCE: f64 = 1e-9;

    /// Reject tolerances that would make every comparison meaningless.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(CoreError::Config(format!(
                "tolerance must be finite and non-negative, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }

    /// `true` if `a` and `b` are within `tolerance` of each other.
    #[inline]
    pub fn approx_eq(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.tolerance
    }
}

impl Default for ContinuumConfig {
    fn default() -> Self {
        Self { tolerance: Self::DEFAULT_TOLERANCE }
    }
}
