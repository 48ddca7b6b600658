//! Name-keyed construction of pets.
//!
//! [`get_pet`] maps a kind name to a ready-made pet behind the [`Pet`]
//! trait. An unknown name is an error value rather than a panic.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PetError {
    #[error("Unknown pet kind '{0}'")]
    UnknownKind(String),
}

/// Something that has a name and can speak.
pub trait Pet: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;
    fn speak(&self) -> &'static str;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dog {
    name: String,
}

impl Dog {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Pet for Dog {
    fn name(&self) -> &str {
        &self.name
    }

    fn speak(&self) -> &'static str {
        "Woof!"
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cat {
    name: String,
}

impl Cat {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Pet for Cat {
    fn name(&self) -> &str {
        &self.name
    }

    fn speak(&self) -> &'static str {
        "Meow!"
    }
}

/// The kinds [`get_pet`] knows how to make.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PetKind {
    #[default]
    Dog,
    Cat,
}

impl PetKind {
    pub const ALL: [PetKind; 2] = [PetKind::Dog, PetKind::Cat];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
        }
    }

    /// Make a pet of this kind with its stock name.
    pub fn create(self) -> Box<dyn Pet> {
        match self {
            Self::Dog => Box::new(Dog::new("Hope")),
            Self::Cat => Box::new(Cat::new("Peace")),
        }
    }
}

impl fmt::Display for PetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PetKind {
    type Err = PetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| PetError::UnknownKind(s.to_string()))
    }
}

/// Make the pet registered under `kind` (`"dog"` or `"cat"`).
///
/// ```rust
/// use switchyard::factory::get_pet;
///
/// let dog = get_pet("dog").unwrap();
/// assert_eq!(dog.speak(), "Woof!");
/// assert!(get_pet("parrot").is_err());
/// ```
pub fn get_pet(kind: &str) -> Result<Box<dyn Pet>, PetError> {
    let kind: PetKind = kind.parse()?;
    debug!(%kind, "creating pet");
    Ok(kind.create())
}
