//! Record of accepted transitions.
//!
//! Only transitions that actually moved a device are recorded. Rejected
//! requests leave no trace here; devices count them separately.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single accepted move between two states.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// When the device switched
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// Stamp a transition with the current time.
    pub fn now(from: S, to: S) -> Self {
        Self {
            from,
            to,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of accepted transitions.
///
/// History is immutable - `record` returns a new history with the
/// transition appended and leaves the original untouched.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{StateHistory, StateTransition};
/// use switchyard::power::PowerState;
///
/// let history = StateHistory::new()
///     .record(StateTransition::now(PowerState::Off, PowerState::On))
///     .record(StateTransition::now(PowerState::On, PowerState::Off));
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&PowerState::Off, &PowerState::On, &PowerState::Off]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition in place.
    pub(crate) fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// Drop the oldest transitions so that at most `max` remain.
    pub(crate) fn retain_latest(&mut self, max: usize) {
        if self.transitions.len() > max {
            let excess = self.transitions.len() - max;
            self.transitions.drain(..excess);
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` of the first transition followed by the `to` of
    /// every transition. Empty when nothing has been recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Export the history as a JSON document.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
