/// Declare a single-valued enumeration.
///
/// Generates a unit marker struct implementing [`crate::types::EnumType`]. Constants are listed
/// as `NAME = value`, where `value` is anything convertible into a
/// [`crate::value::EnumValue`]. The optional `ignoring [..]` clause lists constants that are
/// declared but do not take part in the enumeration.
///
/// ```rust
/// # use flyenum::{declare_enum, EnumRegistry};
/// declare_enum! {
///     /// HTTP methods accepted by the router.
///     pub struct Method ignoring [DEFAULT] {
///         GET = "GET",
///         POST = "POST",
///         DEFAULT = "GET",
///     }
/// }
///
/// let registry = EnumRegistry::default();
/// assert_eq!(registry.available_values::<Method>().unwrap().len(), 2);
/// ```
#[macro_export]
macro_rules! declare_enum {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident $(ignoring [$($ignored:ident),* $(,)?])? {
            $( $constant:ident = $value:expr ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::types::EnumType for $name {
            const NAME: &'static str = stringify!($name);

            fn constants() -> ::std::vec::Vec<(&'static str, $crate::value::EnumValue)> {
                ::std::vec![
                    $( (stringify!($constant), $crate::value::EnumValue::from($value)) ),*
                ]
            }

            fn ignored_constants() -> &'static [&'static str] {
                &[$($(stringify!($ignored)),*)?]
            }
        }
    };
}

/// Declare a bitmask enumeration over the flags of a single-valued enumeration.
///
/// The component enumeration goes between parentheses. Composite constants may optionally
/// be declared in a body; they are exposed through
/// [`crate::registry::EnumRegistry::available_values`] but are not needed for validation.
///
/// ```rust
/// # use flyenum::{declare_enum, declare_multi_enum, EnumRegistry};
/// declare_enum! {
///     pub struct Weekday {
///         MONDAY = 1,
///         TUESDAY = 2,
///         WEDNESDAY = 4,
///     }
/// }
///
/// declare_multi_enum! {
///     pub struct Weekdays(Weekday) {
///         EARLY_WEEK = 3,
///     }
/// }
///
/// let registry = EnumRegistry::default();
/// let early = registry.get_by_name::<Weekdays>("EARLY_WEEK").unwrap();
/// assert!(registry.contains_value(&early, 2).unwrap());
/// ```
#[macro_export]
macro_rules! declare_multi_enum {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($flags:ty);
    ) => {
        $crate::declare_multi_enum! {
            $(#[$meta])*
            $vis struct $name($flags) {}
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($flags:ty) $(ignoring [$($ignored:ident),* $(,)?])? {
            $( $constant:ident = $value:expr ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::types::EnumType for $name {
            const NAME: &'static str = stringify!($name);

            fn constants() -> ::std::vec::Vec<(&'static str, $crate::value::EnumValue)> {
                ::std::vec![
                    $( (stringify!($constant), $crate::value::EnumValue::from($value)) ),*
                ]
            }

            fn ignored_constants() -> &'static [&'static str] {
                &[$($(stringify!($ignored)),*)?]
            }

            fn flag_source() -> ::std::option::Option<$crate::types::EnumDescriptor> {
                ::std::option::Option::Some($crate::types::EnumDescriptor::of::<$flags>())
            }
        }

        impl $crate::types::MultiEnumType for $name {
            type Flags = $flags;
        }
    };
}
