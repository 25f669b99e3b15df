//! The warehouse pickup-and-delivery environment.
use crate::act::{Action, DepotAct};
use crate::config::{DepotEnvConfig, Layout};
use crate::error::DepotEnvError;
use crate::obs::{DepotObs, OBS_DIM};
use crate::renderer::{AnsiRenderer, Snapshot};
use crate::reward::reward;
use crate::state::{GridState, Pos};
use crate::transition::transition;
use anyhow::Result;
use depot_core::{
    record::{Record, RecordValue},
    Act, ActSpec, Env, Info, ObsSpec, Step,
};
use std::convert::TryFrom;

/// Why an episode ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The item was dropped at the destination.
    Delivered,
    /// The step-count limit was reached without delivery.
    TimedOut,
}

impl Outcome {
    /// Display name of the outcome.
    pub fn name(&self) -> &'static str {
        match self {
            Outcome::Delivered => "delivered",
            Outcome::TimedOut => "timeout",
        }
    }
}

/// Step information of [`DepotEnv`].
#[derive(Debug, Clone)]
pub struct DepotInfo {
    /// `Some` on the step that ends the episode, reporting whether the
    /// termination was a success or a timeout.
    pub outcome: Option<Outcome>,
}

impl Info for DepotInfo {}

/// The warehouse pickup-and-delivery environment.
///
/// An agent on a square grid must reach the pickup cell, acquire the item,
/// carry it to the destination cell and drop it there. The environment owns
/// the [`GridState`] exclusively; each step replaces it through the pure
/// [`transition`] function and scores the move with the pure
/// [`reward`] function. Single-threaded and synchronous; parallel episodes
/// require independent instances.
pub struct DepotEnv {
    config: DepotEnvConfig,
    rng: fastrand::Rng,
    state: GridState,
    done: bool,
    renderer: Option<AnsiRenderer>,
}

impl DepotEnv {
    /// Read-only view of the current grid state, for renderers and other
    /// observers.
    pub fn state(&self) -> &GridState {
        &self.state
    }

    fn random_pos(rng: &mut fastrand::Rng, grid_size: u32) -> Pos {
        Pos::new(rng.u32(0..grid_size), rng.u32(0..grid_size))
    }

    fn place(&mut self) -> GridState {
        match self.config.layout {
            Layout::Fixed {
                agent,
                pickup,
                dest,
            } => GridState::new(agent, pickup, dest),
            Layout::Random => {
                let grid_size = self.config.grid_size;
                let agent = Self::random_pos(&mut self.rng, grid_size);
                let pickup = Self::random_pos(&mut self.rng, grid_size);
                let dest = loop {
                    let dest = Self::random_pos(&mut self.rng, grid_size);
                    if dest != pickup {
                        break dest;
                    }
                };
                GridState::new(agent, pickup, dest)
            }
        }
    }

    fn reset_impl(&mut self) -> Result<DepotObs> {
        self.state = self.place();
        self.done = false;
        log::trace!(
            "reset: agent = {:?}, pickup = {:?}, dest = {:?}",
            self.state.agent,
            self.state.pickup,
            self.state.dest
        );

        if let Some(renderer) = self.renderer.as_mut() {
            renderer.render(&Snapshot {
                state: self.state.clone(),
                last_act: None,
                last_reward: 0.0,
            });
        }

        Ok(DepotObs::encode(&self.state, self.config.grid_size))
    }
}

impl Env for DepotEnv {
    type Config = DepotEnvConfig;
    type Obs = DepotObs;
    type Act = DepotAct;
    type Info = DepotInfo;

    fn build(config: &Self::Config, seed: u64) -> Result<Self>
    where
        Self: Sized,
    {
        config.validate()?;
        let renderer = config
            .render
            .as_ref()
            .map(|render| AnsiRenderer::new(config.grid_size, render));

        // Place an initial episode so the instance is usable right away;
        // callers normally reset before the first step anyway.
        let mut env = Self {
            config: config.clone(),
            state: GridState::new(Pos::new(0, 0), Pos::new(0, 0), Pos::new(0, 1)),
            rng: fastrand::Rng::with_seed(seed),
            done: false,
            renderer,
        };
        env.state = env.place();
        Ok(env)
    }

    fn reset(&mut self) -> Result<Self::Obs> {
        self.reset_impl()
    }

    fn reset_with_seed(&mut self, seed: u64) -> Result<Self::Obs> {
        self.rng = fastrand::Rng::with_seed(seed);
        self.reset_impl()
    }

    fn step(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)>
    where
        Self: Sized,
    {
        if self.done {
            return Err(DepotEnvError::InvalidAction(
                "episode is done; call reset() before stepping".to_string(),
            )
            .into());
        }
        let action = Action::try_from(a.raw())?;

        let prev = self.state.clone();
        let next = transition(&prev, action, self.config.grid_size);
        let r = reward(&prev, action, &next, &self.config.reward);

        let is_terminated = next.delivered;
        let is_truncated = !is_terminated && next.step_count >= self.config.max_steps;
        let outcome = if is_terminated {
            Some(Outcome::Delivered)
        } else if is_truncated {
            Some(Outcome::TimedOut)
        } else {
            None
        };

        self.state = next;
        self.done = is_terminated || is_truncated;

        let mut record = Record::from_scalar("reward", r);
        record.insert(
            "step_count",
            RecordValue::Scalar(self.state.step_count as f32),
        );
        if let Some(outcome) = outcome {
            record.insert("outcome", RecordValue::String(outcome.name().to_string()));
            log::trace!(
                "episode ended after {} steps: {}",
                self.state.step_count,
                outcome.name()
            );
        }

        if let Some(renderer) = self.renderer.as_mut() {
            renderer.render(&Snapshot {
                state: self.state.clone(),
                last_act: Some(action),
                last_reward: r,
            });
        }

        let obs = DepotObs::encode(&self.state, self.config.grid_size);
        let step = Step::new(
            obs,
            a.clone(),
            r,
            is_terminated,
            is_truncated,
            DepotInfo { outcome },
        );
        Ok((step, record))
    }

    fn obs_spec(&self) -> ObsSpec {
        ObsSpec::new(OBS_DIM, 0.0, 1.0)
    }

    fn act_spec(&self) -> ActSpec {
        ActSpec::new(Action::COUNT)
    }
}
