//! Configuration of [`DepotEnv`](crate::DepotEnv).
use crate::error::DepotEnvError;
use crate::state::Pos;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Reward constants of the task, summed per step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardConfig {
    /// Bonus on the transition into a successful delivery.
    pub delivery_bonus: f32,

    /// Bonus on the transition into holding the item.
    pub pickup_bonus: f32,

    /// Penalty (negative) for dropping the item away from the destination.
    pub wrong_drop_penalty: f32,

    /// Shaping bonus when the Manhattan distance to the current target
    /// strictly decreases.
    pub approach_bonus: f32,

    /// Constant per-step penalty (negative).
    pub step_penalty: f32,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            delivery_bonus: 200.0,
            pickup_bonus: 25.0,
            wrong_drop_penalty: -5.0,
            approach_bonus: 0.5,
            step_penalty: -0.01,
        }
    }
}

/// Placement of agent, pickup and destination cells at reset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Layout {
    /// Sample fresh positions from the seeded random source at every
    /// reset; pickup and destination are always distinct.
    Random,

    /// Fixed placement, for evaluation and scripted trajectories.
    Fixed {
        /// Starting cell of the agent.
        agent: Pos,
        /// Pickup cell.
        pickup: Pos,
        /// Destination cell.
        dest: Pos,
    },
}

/// Rendering options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Delay after each rendered frame, in milliseconds. The delay slows
    /// the episode down to human viewing speed; it does not affect the
    /// environment's logical step limit.
    pub frame_delay_ms: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { frame_delay_ms: 500 }
    }
}

/// Configuration of [`DepotEnv`](crate::DepotEnv).
///
/// Supplied at construction and immutable for the instance's lifetime.
/// Violations are reported as
/// [`DepotEnvError::InvalidConfiguration`] when the environment is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepotEnvConfig {
    /// Side length of the square grid. At least 2, so that two distinct
    /// pickup/destination cells fit.
    pub grid_size: u32,

    /// Step-count limit per episode; the episode is truncated once
    /// reached. A logical limit, not a wall-clock one.
    pub max_steps: u32,

    /// Reward constants.
    pub reward: RewardConfig,

    /// Placement strategy at reset.
    pub layout: Layout,

    /// Rendering; `None` disables it.
    pub render: Option<RenderConfig>,
}

impl Default for DepotEnvConfig {
    fn default() -> Self {
        Self {
            grid_size: 5,
            max_steps: 100,
            reward: RewardConfig::default(),
            layout: Layout::Random,
            render: None,
        }
    }
}

impl DepotEnvConfig {
    /// Sets the grid size.
    pub fn grid_size(mut self, v: u32) -> Self {
        self.grid_size = v;
        self
    }

    /// Sets the step-count limit.
    pub fn max_steps(mut self, v: u32) -> Self {
        self.max_steps = v;
        self
    }

    /// Sets the reward constants.
    pub fn reward(mut self, v: RewardConfig) -> Self {
        self.reward = v;
        self
    }

    /// Sets the placement strategy.
    pub fn layout(mut self, v: Layout) -> Self {
        self.layout = v;
        self
    }

    /// Enables or disables rendering.
    pub fn render(mut self, v: Option<RenderConfig>) -> Self {
        self.render = v;
        self
    }

    /// Constructs [`DepotEnvConfig`] from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let config = serde_yaml::from_reader(rdr)?;
        Ok(config)
    }

    /// Saves [`DepotEnvConfig`] as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }

    pub(crate) fn validate(&self) -> Result<(), DepotEnvError> {
        if self.grid_size < 2 {
            return Err(DepotEnvError::InvalidConfiguration(format!(
                "grid size {} is too small to place distinct pickup and destination cells",
                self.grid_size
            )));
        }
        if self.max_steps == 0 {
            return Err(DepotEnvError::InvalidConfiguration(
                "max_steps must be positive".to_string(),
            ));
        }
        if let Layout::Fixed {
            agent,
            pickup,
            dest,
        } = &self.layout
        {
            for pos in [agent, pickup, dest].iter() {
                if pos.row >= self.grid_size || pos.col >= self.grid_size {
                    return Err(DepotEnvError::InvalidConfiguration(format!(
                        "cell ({}, {}) is outside the {}x{} grid",
                        pos.row, pos.col, self.grid_size, self.grid_size
                    )));
                }
            }
            if pickup == dest {
                return Err(DepotEnvError::InvalidConfiguration(
                    "pickup and destination cells must differ".to_string(),
                ));
            }
        }
        Ok(())
    }
}
