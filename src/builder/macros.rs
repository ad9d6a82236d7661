//! Macros for ergonomic state machine construction.

/// Declare a unit enum and implement `State` for it.
///
/// The enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Debug` and
/// serde's `Serialize`/`Deserialize` (so the calling crate needs `serde`),
/// which lets it appear in a [`MachineConfig`](crate::config::MachineConfig).
///
/// # Example
///
/// ```
/// use table_fsm::state_enum;
/// use table_fsm::core::State;
///
/// state_enum! {
///     pub enum Turnstile {
///         Locked,
///         Unlocked,
///         Broken,
///     }
///     final: [Broken]
/// }
///
/// assert_eq!(Turnstile::Locked.name(), "Locked");
/// assert!(Turnstile::Broken.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                false $($(|| matches!(self, Self::$final))*)?
            }
        }
    };
}
