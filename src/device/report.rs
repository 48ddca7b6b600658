//! Sinks for the line a device emits on every transition request.

use crate::core::{State, TransitionOutcome};
use std::io::{self, Write};
use tracing::warn;

/// Receives the outcome of every transition request made on a device.
///
/// A device calls `report` exactly once per request, after its state has
/// been updated.
pub trait Reporter<S: State> {
    fn report(&mut self, outcome: &TransitionOutcome<S>);
}

/// Prints each outcome to stdout, one line per request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConsoleReporter;

impl<S: State> Reporter<S> for ConsoleReporter {
    fn report(&mut self, outcome: &TransitionOutcome<S>) {
        write_line(&mut io::stdout().lock(), outcome);
    }
}

/// Writes each outcome as a newline-terminated line to any `io::Write` sink.
///
/// A failed write is logged and otherwise ignored; the device keeps going.
///
/// ```rust
/// use switchyard::device::{Device, WriteReporter};
/// use switchyard::power::PowerState;
///
/// let mut atm = Device::with_reporter(PowerState::Off, WriteReporter::new(Vec::new()));
/// atm.request_transition(PowerState::On);
///
/// assert_eq!(
///     atm.reporter().get_ref().as_slice(),
///     b"Current State: Off switched to: On\n"
/// );
/// ```
#[derive(Debug, Default)]
pub struct WriteReporter<W: Write> {
    sink: W,
}

impl<W: Write> WriteReporter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<S: State, W: Write> Reporter<S> for WriteReporter<W> {
    fn report(&mut self, outcome: &TransitionOutcome<S>) {
        write_line(&mut self.sink, outcome);
    }
}

fn write_line<S: State>(sink: &mut impl Write, outcome: &TransitionOutcome<S>) {
    if let Err(error) = writeln!(sink, "{outcome}").and_then(|()| sink.flush()) {
        warn!(%error, "failed to write transition report");
    }
}

/// Keeps the report lines in memory instead of printing them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingReporter {
    lines: Vec<String>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Drain the collected lines, leaving the reporter empty.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl<S: State> Reporter<S> for RecordingReporter {
    fn report(&mut self, outcome: &TransitionOutcome<S>) {
        self.lines.push(outcome.to_string());
    }
}
