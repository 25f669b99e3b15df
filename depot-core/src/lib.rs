#![warn(missing_docs)]
//! Core abstractions for gridworld reinforcement learning environments.
//!
//! The aim of this crate is to keep environments and policies independent of
//! each other. An environment implements [`Env`], which exposes the
//! `reset`/`step` contract together with descriptors of its observation and
//! action spaces ([`ObsSpec`], [`ActSpec`]). A policy implements [`Policy`],
//! a mapping from observations to actions; the environment makes no
//! assumption about how actions are chosen beyond their encoding.
//!
//! At every interaction step an environment emits a [`Step`] object carrying
//! the observation, reward and termination flags, along with a
//! [`Record`](record::Record) of metrics for logging.
pub mod error;
pub mod record;

mod base;
pub use base::{Act, ActSpec, Env, Info, Obs, ObsSpec, Policy, Step};

mod evaluator;
pub use evaluator::{DefaultEvaluator, Evaluator};
