//! Core state types and logic.
//!
//! This module contains the pure part of the crate:
//! - State definitions via the `State` and `StateSet` traits
//! - The `resolve` transition function and its `TransitionOutcome`
//! - Immutable history of accepted transitions
//!
//! Nothing in this module prints, logs or mutates shared data.

mod history;
mod state;
mod transition;

pub use history::{StateHistory, StateTransition};
pub use state::{State, StateSet};
pub use transition::{resolve, TransitionOutcome};
