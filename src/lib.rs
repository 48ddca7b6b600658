//! Switchyard: finite-state devices with validated transitions
//!
//! A device owns exactly one current state drawn from a closed enumeration.
//! Asking it to move to another state either succeeds, because the target
//! is in the current state's allowed set, or is rejected and leaves the
//! state unchanged. Both outcomes are ordinary values and both are reported
//! as a single human-readable line.
//!
//! # Core Concepts
//!
//! - **State**: a named node with a set of allowed target names (`State` trait)
//! - **Transition**: the pure `resolve` function and its `TransitionOutcome`
//! - **Device**: owns the current state and reports every request
//! - **History**: immutable record of accepted transitions
//!
//! Two smaller pieces sit beside the device: [`interpret`], expression trees
//! that print a line per node, and [`factory`], name-keyed pet construction.
//!
//! # Example
//!
//! ```rust
//! use switchyard::device::{Device, RecordingReporter};
//! use switchyard::power::PowerState;
//!
//! let mut atm = Device::with_reporter(PowerState::default(), RecordingReporter::new());
//!
//! atm.request_transition(PowerState::On);
//! atm.request_transition(PowerState::Off);
//! let outcome = atm.request_transition(PowerState::Off);
//!
//! assert!(outcome.is_rejected());
//! assert_eq!(atm.current_state(), &PowerState::Off);
//! assert_eq!(
//!     atm.reporter().lines(),
//!     [
//!         "Current State: Off switched to: On",
//!         "Current State: On switched to: Off",
//!         "Current State: Off switching to: Off not possible!",
//!     ]
//! );
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod device;
pub mod factory;
pub mod interpret;
pub mod power;

// Re-export commonly used types
pub use builder::{BuildError, DeviceBuilder};
pub use config::{ConfigError, DeviceConfig};
pub use crate::core::{resolve, State, StateHistory, StateSet, StateTransition, TransitionOutcome};
pub use device::{
    ConsoleReporter, Device, RecordingReporter, Reporter, SharedDevice, WriteReporter,
};
pub use factory::{get_pet, Pet, PetError, PetKind};
pub use interpret::{Expression, Nonterminal, Terminal};
