//! Macros for ergonomic state declaration.

/// Declare a fieldless state enum together with its `State` impl.
///
/// Each variant is named after its identifier unless an `as "NAME"` override
/// follows it. States listed under `final:` report `is_final`.
///
/// # Example
///
/// ```
/// use switchyard::core::State;
/// use switchyard::state_enum;
///
/// state_enum! {
///     pub enum CoinState {
///         Initial as "INITIAL",
///         Count as "COUNT",
///         Final,
///     }
///     final: [Final]
/// }
///
/// assert_eq!(CoinState::Count.name(), "COUNT");
/// assert_eq!(CoinState::Final.name(), "Final");
/// assert!(CoinState::Final.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (@name $variant:ident) => {
        stringify!($variant)
    };
    (@name $variant:ident $display:literal) => {
        $display
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(as $display:literal)?
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::state_enum!(@name $variant $($display)?)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
