//! Macros for declaring state graphs.

/// Declare an enum of states together with its transition graph.
///
/// Each variant lists the variants it may switch to. The macro derives the
/// usual traits and implements [`State`](crate::core::State) and
/// [`StateSet`](crate::core::StateSet). An optional `initial:` clause
/// implements `Default`. Naming a target that is not a variant fails to
/// compile.
///
/// # Example
///
/// ```
/// use switchyard::core::State;
/// use switchyard::state_graph;
///
/// state_graph! {
///     pub enum Valve {
///         Closed => [Opening],
///         Opening => [Open, Closed],
///         Open => [Closed],
///     }
///     initial: Closed
/// }
///
/// assert_eq!(Valve::default(), Valve::Closed);
/// assert_eq!(Valve::Opening.allowed(), &["Open", "Closed"]);
/// ```
#[macro_export]
macro_rules! state_graph {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => [$($target:ident),* $(,)?]
            ),* $(,)?
        }

        $(initial: $initial:ident)?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        const _: () = {
            $($(let _ = $name::$target;)*)*
        };

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn allowed(&self) -> &[&str] {
                match self {
                    $(Self::$variant => &[$(stringify!($target)),*]),*
                }
            }
        }

        impl $crate::core::StateSet for $name {
            fn variants() -> Vec<Self> {
                vec![$(Self::$variant),*]
            }
        }

        $(
            impl Default for $name {
                fn default() -> Self {
                    Self::$initial
                }
            }
        )?
    };
}
