//! Errors of the warehouse environment.
use thiserror::Error;

/// Errors of the warehouse environment.
///
/// Illegal-but-in-range actions (a PICKUP away from the pickup cell, a DROP
/// while not holding) are not errors; they are valid no-op transitions. Only
/// malformed inputs and misuse of the episode lifecycle are reported here.
#[derive(Error, Debug)]
pub enum DepotEnvError {
    /// Action outside `[0, 5]`, or a step after the episode ended without
    /// an intervening reset.
    #[error("invalid action: {0}")]
    InvalidAction(String),

    /// Rejected configuration, raised at construction rather than at step
    /// time.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
