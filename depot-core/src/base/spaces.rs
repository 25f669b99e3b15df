//! Descriptors of observation and action spaces.
use serde::{Deserialize, Serialize};

/// Describes a box-shaped observation space: a fixed-length vector of
/// floating point values, each within `[low, high]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObsSpec {
    /// Number of elements in the observation vector.
    pub dim: usize,

    /// Lower bound of each element.
    pub low: f32,

    /// Upper bound of each element.
    pub high: f32,
}

impl ObsSpec {
    /// Constructs an [`ObsSpec`].
    pub fn new(dim: usize, low: f32, high: f32) -> Self {
        Self { dim, low, high }
    }
}

/// Describes a discrete action space with actions encoded as integers
/// in `[0, n)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActSpec {
    /// Number of actions.
    pub n: usize,
}

impl ActSpec {
    /// Constructs an [`ActSpec`].
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    /// Returns `true` if the raw action encoding is within the space.
    pub fn contains(&self, act: u8) -> bool {
        (act as usize) < self.n
    }
}
