//! The reference two-state machine: a power switch.
//!
//! `Off` may only switch to `On` and `On` may only switch to `Off`. A device
//! built on it starts `Off`.

crate::state_graph! {
    /// Power state of a simple device such as an ATM.
    pub enum PowerState {
        Off => [On],
        On => [Off],
    }
    initial: Off
}

/// A device holding a [`PowerState`] that prints its transitions.
pub type PowerDevice = crate::device::Device<PowerState>;
