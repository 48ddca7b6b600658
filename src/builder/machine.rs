//! Builder for constructing devices.

use crate::builder::error::BuildError;
use crate::builder::validate_graph;
use crate::config::{ConfigError, DeviceConfig};
use crate::core::StateSet;
use crate::device::{ConsoleReporter, Device, Reporter};

/// Builder for constructing devices with a fluent API.
pub struct DeviceBuilder<S: StateSet, R: Reporter<S> = ConsoleReporter> {
    initial: Option<S>,
    record_history: bool,
    max_history: Option<usize>,
    reporter: R,
}

impl<S: StateSet> DeviceBuilder<S> {
    /// Create a new builder that reports to stdout.
    pub fn new() -> Self {
        Self {
            initial: None,
            record_history: true,
            max_history: None,
            reporter: ConsoleReporter,
        }
    }
}

impl<S: StateSet + Default> DeviceBuilder<S> {
    /// Create a builder from a configuration.
    ///
    /// Starts from the state type's default and overrides it with the
    /// configured initial state, if any.
    pub fn from_config(config: &DeviceConfig) -> Result<Self, ConfigError> {
        Self::new().initial(S::default()).apply_config(config)
    }
}

impl<S: StateSet> Default for DeviceBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StateSet, R: Reporter<S>> DeviceBuilder<S, R> {
    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Keep or drop the history of accepted transitions.
    pub fn record_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// Keep at most `max` accepted transitions, dropping the oldest.
    pub fn max_history(mut self, max: usize) -> Self {
        self.max_history = Some(max);
        self
    }

    /// Replace the reporter.
    pub fn reporter<R2: Reporter<S>>(self, reporter: R2) -> DeviceBuilder<S, R2> {
        DeviceBuilder {
            initial: self.initial,
            record_history: self.record_history,
            max_history: self.max_history,
            reporter,
        }
    }

    /// Apply the settings from a configuration.
    pub fn apply_config(mut self, config: &DeviceConfig) -> Result<Self, ConfigError> {
        if let Some(name) = &config.initial {
            let state =
                S::from_name(name).ok_or_else(|| ConfigError::UnknownState(name.clone()))?;
            self.initial = Some(state);
        }
        self.record_history = config.record_history;
        if config.max_history.is_some() {
            self.max_history = config.max_history;
        }
        Ok(self)
    }

    /// Build the device.
    /// Returns an error if the initial state is missing or the state graph
    /// is inconsistent.
    pub fn build(self) -> Result<Device<S, R>, BuildError> {
        validate_graph::<S>()?;
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut device = Device::with_reporter(initial, self.reporter);
        device.set_record_history(self.record_history);
        device.set_max_history(self.max_history);
        Ok(device)
    }
}
