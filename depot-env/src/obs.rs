//! Observation for [`DepotEnv`](crate::DepotEnv).
use crate::state::GridState;
use depot_core::Obs;

/// Version of the observation encoding.
///
/// A policy trained against one normalization scheme is invalid against
/// another, so any saved policy artifact should carry this constant and
/// refuse to load when it differs.
pub const OBS_ENCODING_VERSION: u32 = 1;

/// Number of elements in the observation vector.
pub const OBS_DIM: usize = 7;

/// Observation of [`DepotEnv`](crate::DepotEnv).
///
/// A fixed-length vector
/// `[agent_row, agent_col, pickup_row, pickup_col, dest_row, dest_col, holding]`
/// with positions normalized by `grid_size - 1` into `[0, 1]` and the
/// holding flag encoded as `0.0`/`1.0`. The scheme is stable across resets.
#[derive(Debug, Clone, PartialEq)]
pub struct DepotObs {
    v: Vec<f32>,
}

impl DepotObs {
    /// Encodes a grid state.
    pub(crate) fn encode(state: &GridState, grid_size: u32) -> Self {
        let scale = (grid_size - 1).max(1) as f32;
        let v = vec![
            state.agent.row as f32 / scale,
            state.agent.col as f32 / scale,
            state.pickup.row as f32 / scale,
            state.pickup.col as f32 / scale,
            state.dest.row as f32 / scale,
            state.dest.col as f32 / scale,
            if state.holding { 1.0 } else { 0.0 },
        ];
        Self { v }
    }

    /// The observation vector.
    pub fn as_slice(&self) -> &[f32] {
        &self.v
    }
}

impl Obs for DepotObs {
    fn len(&self) -> usize {
        self.v.len()
    }
}

impl From<DepotObs> for Vec<f32> {
    fn from(obs: DepotObs) -> Self {
        obs.v
    }
}
