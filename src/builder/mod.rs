//! Builder API for device construction.
//!
//! This module provides a fluent builder, a graph check for hand-written
//! state types, and the [`state_graph!`](crate::state_graph) macro.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::DeviceBuilder;

use crate::core::StateSet;
use std::collections::HashSet;

/// Check that a state set forms a consistent graph.
///
/// Fails if the set is empty, if two variants share a name, or if any
/// allowed target does not name a variant.
///
/// # Example
///
/// ```
/// use switchyard::builder::validate_graph;
/// use switchyard::power::PowerState;
///
/// assert!(validate_graph::<PowerState>().is_ok());
/// ```
pub fn validate_graph<S: StateSet>() -> Result<(), BuildError> {
    let variants = S::variants();
    if variants.is_empty() {
        return Err(BuildError::NoStates);
    }

    let mut names = HashSet::new();
    for state in &variants {
        if !names.insert(state.name()) {
            return Err(BuildError::DuplicateState(state.name().to_string()));
        }
    }

    for state in &variants {
        if let Some(target) = state.allowed().iter().find(|t| !names.contains(*t)) {
            return Err(BuildError::UnknownTarget {
                state: state.name().to_string(),
                target: target.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Twin {
        Left,
        Right,
    }

    impl State for Twin {
        fn name(&self) -> &str {
            "Same"
        }

        fn allowed(&self) -> &[&str] {
            &["Same"]
        }
    }

    impl StateSet for Twin {
        fn variants() -> Vec<Self> {
            vec![Self::Left, Self::Right]
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Nothing {}

    impl State for Nothing {
        fn name(&self) -> &str {
            match *self {}
        }

        fn allowed(&self) -> &[&str] {
            match *self {}
        }
    }

    impl StateSet for Nothing {
        fn variants() -> Vec<Self> {
            Vec::new()
        }
    }

    crate::state_graph! {
        enum Ring {
            One => [Two],
            Two => [Three],
            Three => [One],
        }
    }

    #[test]
    fn macro_graphs_are_valid() {
        assert_eq!(validate_graph::<Ring>(), Ok(()));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        assert_eq!(
            validate_graph::<Twin>(),
            Err(BuildError::DuplicateState("Same".to_string()))
        );
    }

    #[test]
    fn empty_sets_are_rejected() {
        assert_eq!(validate_graph::<Nothing>(), Err(BuildError::NoStates));
    }
}
