//! Environment.
use super::{Act, ActSpec, Info, Obs, ObsSpec, Step};
use crate::record::Record;
use anyhow::Result;

/// Represents an environment, typically an MDP.
///
/// The capability set is deliberately small: `reset`, `step` and the two
/// space descriptors. Task variants (other layouts, other reward tables)
/// are expressed through [`Env::Config`] rather than through additional
/// trait surface.
pub trait Env {
    /// Configuration of the environment, supplied at construction and
    /// immutable for the instance's lifetime.
    type Config: Clone;

    /// Observation of the environment.
    type Obs: Obs;

    /// Action of the environment.
    type Act: Act;

    /// Information attached to a [`Step`] object.
    type Info: Info;

    /// Builds an environment with a given random seed.
    ///
    /// Configuration errors are raised here, not at step time.
    fn build(config: &Self::Config, seed: u64) -> Result<Self>
    where
        Self: Sized;

    /// Resets the environment and returns the initial observation.
    fn reset(&mut self) -> Result<Self::Obs>;

    /// Reseeds the internal random source, then resets.
    ///
    /// Episodes produced from the same seed and action sequence are
    /// identical, which is relied upon for evaluation and testing.
    fn reset_with_seed(&mut self, seed: u64) -> Result<Self::Obs>;

    /// Performs an environment step.
    ///
    /// Fails if the action is outside the action space or if the previous
    /// episode has ended and `reset` has not been called.
    fn step(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)>
    where
        Self: Sized;

    /// Describes the observation space.
    ///
    /// Stable across resets for a given instance.
    fn obs_spec(&self) -> ObsSpec;

    /// Describes the action space.
    fn act_spec(&self) -> ActSpec;
}
