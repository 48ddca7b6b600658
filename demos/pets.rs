//! Pet Factory
//!
//! Asks the factory for a dog and a cat by name and prints what each says.
//!
//! Run with: cargo run --example pets

use switchyard::factory::{get_pet, PetError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<(), PetError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let dog = get_pet("dog")?;
    println!("{}", dog.speak());

    let cat = get_pet("cat")?;
    println!("{}", cat.speak());

    Ok(())
}
