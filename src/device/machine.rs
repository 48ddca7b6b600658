//! Device that owns a current state and applies transition requests.

use crate::core::{resolve, State, StateHistory, StateTransition, TransitionOutcome};
use crate::device::report::{ConsoleReporter, Reporter};
use tracing::{debug, info};

/// A finite-state device.
///
/// Holds exactly one current state. The only way to change it is
/// [`Device::request_transition`], which either moves to the requested
/// target or leaves the state untouched, and reports the attempt either way.
pub struct Device<S: State, R: Reporter<S> = ConsoleReporter> {
    current: S,
    history: StateHistory<S>,
    record_history: bool,
    max_history: Option<usize>,
    rejections: usize,
    reporter: R,
}

impl<S: State + Default> Device<S> {
    /// Create a device in the default state that prints to stdout.
    pub fn new() -> Self {
        Self::with_reporter(S::default(), ConsoleReporter)
    }
}

impl<S: State + Default> Default for Device<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, R: Reporter<S>> Device<S, R> {
    /// Create a device in `initial` that reports through `reporter`.
    ///
    /// The state graph is not checked here. A hand-written state whose
    /// allowed set names a missing state simply never reaches it; use
    /// [`DeviceBuilder`](crate::builder::DeviceBuilder), which runs
    /// [`validate_graph`](crate::builder::validate_graph), to catch that
    /// up front. Types declared with `state_graph!` are checked at compile time.
    pub fn with_reporter(initial: S, reporter: R) -> Self {
        Self {
            current: initial,
            history: StateHistory::new(),
            record_history: true,
            max_history: None,
            rejections: 0,
            reporter,
        }
    }

    pub(crate) fn set_record_history(&mut self, record: bool) {
        self.record_history = record;
    }

    pub(crate) fn set_max_history(&mut self, max: Option<usize>) {
        self.max_history = max;
        if let Some(max) = max {
            self.history.retain_latest(max);
        }
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Get accepted-transition history (pure)
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Number of requests that were rejected so far.
    pub fn rejections(&self) -> usize {
        self.rejections
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }

    /// Check whether a request for `target` would be accepted (pure)
    pub fn can_transition_to(&self, target: &S) -> bool {
        self.current.can_switch_to(target)
    }

    /// Check if the current state has no outgoing transitions (pure)
    pub fn is_terminal(&self) -> bool {
        self.current.is_terminal()
    }

    /// Ask the device to move to `target`.
    ///
    /// If `target` is in the current state's allowed set the device switches
    /// to it; otherwise nothing changes. The outcome is reported once and
    /// returned. Rejection is not an error.
    pub fn request_transition(&mut self, target: S) -> TransitionOutcome<S> {
        let (next, outcome) = resolve(&self.current, target);

        match &outcome {
            TransitionOutcome::Switched { from, to } => {
                debug!(from = from.name(), to = to.name(), "state switched");
                if self.record_history {
                    self.history
                        .push(StateTransition::now(from.clone(), to.clone()));
                    if let Some(max) = self.max_history {
                        self.history.retain_latest(max);
                    }
                }
            }
            TransitionOutcome::Rejected { from, target } => {
                info!(
                    from = from.name(),
                    requested = target.name(),
                    "transition rejected"
                );
                self.rejections += 1;
            }
        }

        self.current = next;
        self.reporter.report(&outcome);
        outcome
    }
}
