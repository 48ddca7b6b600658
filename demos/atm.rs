//! ATM Power Switch
//!
//! This example drives the two-state power machine through the classic
//! sequence: switch on, switch off, then try to switch off again.
//!
//! Key concepts:
//! - Allowed transitions are declared per state
//! - A rejected request is an ordinary outcome, not an error
//! - Every request prints one line
//!
//! Run with: cargo run --example atm
//! Set RUST_LOG=debug to also see the structured transition logs.

use switchyard::power::{PowerDevice, PowerState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut atm = PowerDevice::new();

    atm.request_transition(PowerState::On);
    atm.request_transition(PowerState::Off);
    atm.request_transition(PowerState::Off);
}
