//! Thread-safe handle to a device.

use crate::core::{State, TransitionOutcome};
use crate::device::machine::Device;
use crate::device::report::{ConsoleReporter, Reporter};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A device shared between threads.
///
/// Every request takes one exclusive lock, so requests from different
/// threads are applied one after another and each sees the state left by
/// the previous one. Clones refer to the same device.
pub struct SharedDevice<S: State, R: Reporter<S> = ConsoleReporter> {
    inner: Arc<Mutex<Device<S, R>>>,
}

impl<S: State, R: Reporter<S>> Clone for SharedDevice<S, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: State, R: Reporter<S>> From<Device<S, R>> for SharedDevice<S, R> {
    fn from(device: Device<S, R>) -> Self {
        Self::new(device)
    }
}

impl<S: State, R: Reporter<S>> SharedDevice<S, R> {
    pub fn new(device: Device<S, R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(device)),
        }
    }

    // A panic inside a reporter cannot leave the device half-updated:
    // the state is assigned before the reporter runs.
    fn lock(&self) -> MutexGuard<'_, Device<S, R>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Serialized [`Device::request_transition`].
    pub fn request_transition(&self, target: S) -> TransitionOutcome<S> {
        self.lock().request_transition(target)
    }

    /// Snapshot of the current state.
    pub fn current_state(&self) -> S {
        self.lock().current_state().clone()
    }

    /// Run `f` with the device locked.
    pub fn with<T>(&self, f: impl FnOnce(&Device<S, R>) -> T) -> T {
        f(&*self.lock())
    }
}
