//! The stateful shell around the pure core.
//!
//! A [`Device`] owns its current state, delegates every decision to
//! [`crate::core::resolve`], records accepted transitions and hands each
//! outcome to a [`Reporter`].

mod machine;
mod report;
mod shared;

pub use machine::Device;
pub use report::{ConsoleReporter, RecordingReporter, Reporter, WriteReporter};
pub use shared::SharedDevice;
