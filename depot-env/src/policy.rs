//! Baseline policies on [`DepotEnv`](crate::DepotEnv).
//!
//! These exist for evaluation and as sanity baselines; learned policies
//! live outside this crate and interact only through the
//! [`Policy`](depot_core::Policy) seam.
use crate::act::{Action, DepotAct};
use crate::env::DepotEnv;
use crate::obs::DepotObs;
use depot_core::Policy;

/// Uniform random policy over the in-range actions.
pub struct RandomPolicy {
    rng: fastrand::Rng,
}

impl RandomPolicy {
    /// Constructs a [`RandomPolicy`] with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Policy<DepotEnv> for RandomPolicy {
    fn sample(&mut self, _obs: &DepotObs) -> DepotAct {
        DepotAct::new(self.rng.u8(0..Action::COUNT as u8))
    }
}

/// Scripted shortest-path policy.
///
/// Walks toward the current target (pickup cell while not holding, the
/// destination while holding), rows first, and issues PICKUP/DROP on
/// arrival. It reads nothing but the observation vector, so it sees
/// exactly what a learned policy would see.
pub struct GreedyPolicy;

impl Policy<DepotEnv> for GreedyPolicy {
    fn sample(&mut self, obs: &DepotObs) -> DepotAct {
        let v = obs.as_slice();
        let (agent_row, agent_col) = (v[0], v[1]);
        let holding = v[6] > 0.5;
        let (target_row, target_col) = if holding { (v[4], v[5]) } else { (v[2], v[3]) };

        let action = if agent_row > target_row {
            Action::Up
        } else if agent_row < target_row {
            Action::Down
        } else if agent_col > target_col {
            Action::Left
        } else if agent_col < target_col {
            Action::Right
        } else if holding {
            Action::Drop
        } else {
            Action::Pickup
        };
        action.into()
    }
}
