//! Action for [`DepotEnv`](crate::DepotEnv).
use crate::error::DepotEnvError;
use depot_core::Act;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// Raw action for [`DepotEnv`](crate::DepotEnv).
///
/// Policies emit actions as integers; the environment validates the range
/// and rejects anything outside `[0, 5]` when stepping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepotAct {
    /// Integer encoding of the action.
    pub act: u8,
}

impl DepotAct {
    /// Constructs a [`DepotAct`] from its integer encoding.
    pub fn new(act: u8) -> Self {
        Self { act }
    }
}

impl Act for DepotAct {
    fn raw(&self) -> u8 {
        self.act
    }
}

impl From<u8> for DepotAct {
    fn from(act: u8) -> Self {
        Self { act }
    }
}

impl From<Action> for DepotAct {
    fn from(action: Action) -> Self {
        Self { act: action as u8 }
    }
}

/// Decoded action set of the pickup-and-delivery task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Action {
    /// Move one cell up (row - 1).
    Up = 0,
    /// Move one cell down (row + 1).
    Down = 1,
    /// Move one cell left (column - 1).
    Left = 2,
    /// Move one cell right (column + 1).
    Right = 3,
    /// Acquire the item; legal only at the pickup cell while not holding.
    Pickup = 4,
    /// Release the item; legal only while holding.
    Drop = 5,
}

impl Action {
    /// Number of actions.
    pub const COUNT: usize = 6;

    /// Display name of the action.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Up => "UP",
            Action::Down => "DOWN",
            Action::Left => "LEFT",
            Action::Right => "RIGHT",
            Action::Pickup => "PICKUP",
            Action::Drop => "DROP",
        }
    }
}

impl TryFrom<u8> for Action {
    type Error = DepotEnvError;

    fn try_from(act: u8) -> Result<Self, Self::Error> {
        match act {
            0 => Ok(Action::Up),
            1 => Ok(Action::Down),
            2 => Ok(Action::Left),
            3 => Ok(Action::Right),
            4 => Ok(Action::Pickup),
            5 => Ok(Action::Drop),
            _ => Err(DepotEnvError::InvalidAction(format!(
                "action {} is outside [0, 5]",
                act
            ))),
        }
    }
}
