//! Interpreter
//!
//! Builds a tree of two non-terminal expressions around one terminal and
//! interprets it. Each node prints one line as it is visited.
//!
//! Run with: cargo run --example interpreter
//! Set RUST_LOG=trace to also see each node logged.

use switchyard::interpret::{interpret_to_stdout, Nonterminal, Terminal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let ast = Nonterminal::new(Nonterminal::new(Terminal));
    interpret_to_stdout(&ast)
}
