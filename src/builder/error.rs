//! Build errors for devices and state graphs.

use thiserror::Error;

/// Errors that can occur when building a device.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("State set is empty. Declare at least one state")]
    NoStates,

    #[error("State '{0}' is declared more than once")]
    DuplicateState(String),

    #[error("State '{state}' allows a transition to unknown state '{target}'")]
    UnknownTarget { state: String, target: String },
}
