//! Errors in the core crate.
use thiserror::Error;

/// Errors in the core crate.
#[derive(Error, Debug)]
pub enum DepotCoreError {
    /// Record key error.
    #[error("Record key error: {0}")]
    RecordKeyError(String),

    /// Record value type error.
    #[error("Record value type error: {0}")]
    RecordValueTypeError(String),
}
