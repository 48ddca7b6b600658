//! Core State traits for finite-state devices.
//!
//! A state knows its own name and the names of the states it may move to.
//! Everything here is pure: inspecting a state never changes it.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for device states.
///
/// All methods are pure - no side effects. A state is a node in a directed
/// graph; its outgoing edges are the names returned by [`State::allowed`].
///
/// # Required Traits
///
/// - `Clone`: States are copied into transition outcomes and history
/// - `PartialEq`: States must be comparable for assertions and lookups
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: History can be exported as JSON
///
/// # Example
///
/// ```rust
/// use switchyard::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
///     Locked,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Locked => "Locked",
///         }
///     }
///
///     fn allowed(&self) -> &[&str] {
///         match self {
///             Self::Open => &["Closed"],
///             Self::Closed => &["Open", "Locked"],
///             Self::Locked => &["Closed"],
///         }
///     }
/// }
///
/// assert!(Door::Closed.can_switch_to(&Door::Locked));
/// assert!(!Door::Open.can_switch_to(&Door::Locked));
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Names of the states this state may switch to.
    fn allowed(&self) -> &[&str];

    /// Check whether `target` is in this state's allowed set.
    ///
    /// Membership is decided by name, so a state listing its own name
    /// permits a self-transition.
    fn can_switch_to(&self, target: &Self) -> bool {
        let target = target.name();
        self.allowed().iter().any(|name| *name == target)
    }

    /// Check if this state has no outgoing transitions.
    fn is_terminal(&self) -> bool {
        self.allowed().is_empty()
    }
}

/// A closed enumeration of states known at compile time.
///
/// Implemented by every enum generated with [`state_graph!`](crate::state_graph).
pub trait StateSet: State + Sized {
    /// Every variant, in declaration order.
    fn variants() -> Vec<Self>;

    /// Look up a variant by its [`State::name`].
    fn from_name(name: &str) -> Option<Self> {
        Self::variants().into_iter().find(|s| s.name() == name)
    }
}
