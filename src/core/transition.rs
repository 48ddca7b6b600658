//! The pure transition function and its outcome.

use super::state::State;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single transition request.
///
/// Rejection is an ordinary value, not an error. The `Display` form is the
/// line a device reports for the attempt.
///
/// ```rust
/// use switchyard::core::TransitionOutcome;
/// use switchyard::power::PowerState;
///
/// let switched = TransitionOutcome::Switched {
///     from: PowerState::Off,
///     to: PowerState::On,
/// };
/// assert_eq!(switched.to_string(), "Current State: Off switched to: On");
///
/// let rejected = TransitionOutcome::Rejected {
///     from: PowerState::Off,
///     target: PowerState::Off,
/// };
/// assert_eq!(
///     rejected.to_string(),
///     "Current State: Off switching to: Off not possible!"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub enum TransitionOutcome<S: State> {
    /// The target was allowed; the device moved to it
    Switched { from: S, to: S },

    /// The target was not allowed; the device stayed where it was
    Rejected { from: S, target: S },
}

impl<S: State> TransitionOutcome<S> {
    pub fn is_switched(&self) -> bool {
        matches!(self, Self::Switched { .. })
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// The state the device was in when the request arrived.
    pub fn from(&self) -> &S {
        match self {
            Self::Switched { from, .. } | Self::Rejected { from, .. } => from,
        }
    }

    /// The state that was asked for, whether or not it was reached.
    pub fn requested(&self) -> &S {
        match self {
            Self::Switched { to, .. } => to,
            Self::Rejected { target, .. } => target,
        }
    }
}

impl<S: State> fmt::Display for TransitionOutcome<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Switched { from, to } => {
                write!(f, "Current State: {} switched to: {}", from.name(), to.name())
            }
            Self::Rejected { from, target } => write!(
                f,
                "Current State: {} switching to: {} not possible!",
                from.name(),
                target.name()
            ),
        }
    }
}

/// Decide a transition without touching any device.
///
/// Returns the state the device should hold afterwards together with the
/// outcome to report. On rejection the returned state equals `current`.
pub fn resolve<S: State>(current: &S, target: S) -> (S, TransitionOutcome<S>) {
    if current.can_switch_to(&target) {
        let outcome = TransitionOutcome::Switched {
            from: current.clone(),
            to: target.clone(),
        };
        (target, outcome)
    } else {
        let outcome = TransitionOutcome::Rejected {
            from: current.clone(),
            target,
        };
        (current.clone(), outcome)
    }
}
