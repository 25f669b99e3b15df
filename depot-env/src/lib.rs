#![warn(missing_docs)]
//! A warehouse pickup-and-delivery gridworld environment.
//!
//! An agent on a square grid must navigate to a pickup cell, acquire an
//! item, carry it to a destination cell and drop it there. The world
//! dynamics are deterministic: six discrete actions (four clamped moves,
//! PICKUP, DROP), a shaped reward with milestone bonuses, and episode
//! termination on delivery or on a step-count timeout. The environment
//! implements [`depot_core::Env`], so any [`depot_core::Policy`] can drive
//! it; training is out of scope for this crate.
//!
//! ```no_run
//! use anyhow::Result;
//! use depot_core::{DefaultEvaluator, Evaluator};
//! use depot_env::{DepotEnv, DepotEnvConfig, GreedyPolicy};
//!
//! fn main() -> Result<()> {
//!     let config = DepotEnvConfig::default();
//!     let mut evaluator = DefaultEvaluator::<DepotEnv>::new(&config, 42, 10)?;
//!     let record = evaluator.evaluate(&mut GreedyPolicy)?;
//!     println!("mean return: {}", record.get_scalar("Episode return")?);
//!     Ok(())
//! }
//! ```
mod act;
mod config;
mod env;
mod error;
mod obs;
mod policy;
mod renderer;
mod reward;
mod state;
mod transition;

pub use act::{Action, DepotAct};
pub use config::{DepotEnvConfig, Layout, RenderConfig, RewardConfig};
pub use env::{DepotEnv, DepotInfo, Outcome};
pub use error::DepotEnvError;
pub use obs::{DepotObs, OBS_DIM, OBS_ENCODING_VERSION};
pub use policy::{GreedyPolicy, RandomPolicy};
pub use renderer::{AnsiRenderer, Snapshot};
pub use reward::reward;
pub use state::{GridState, Pos};
pub use transition::transition;
