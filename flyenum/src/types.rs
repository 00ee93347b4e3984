//! Enumeration declarations.
//!
//! A concrete enumeration is a zero-sized marker type implementing [`EnumType`]. It
//! declares its constants once; the [`crate::registry::EnumRegistry`] turns them into a
//! validated [`crate::table::ValueTable`] on first use.
//!
//! Bitmask enumerations additionally implement [`MultiEnumType`], naming the single-valued
//! enumeration whose declared values are the individual flags. Both traits are normally
//! implemented through [`crate::declare_enum!`] and [`crate::declare_multi_enum!`].
use std::any::TypeId;

use crate::value::EnumValue;

/// A closed set of named scalar values.
pub trait EnumType: 'static {
    /// Name used in diagnostics.
    const NAME: &'static str;

    /// Declared constants, in declaration order.
    fn constants() -> Vec<(&'static str, EnumValue)>;

    /// Names among [`EnumType::constants`] that are not part of the enumeration.
    fn ignored_constants() -> &'static [&'static str] {
        &[]
    }

    /// The component enumeration supplying flag values, for bitmask enumerations.
    ///
    /// Must return `Some(EnumDescriptor::of::<Self::Flags>())` for every
    /// [`MultiEnumType`]; [`crate::declare_multi_enum!`] takes care of it.
    fn flag_source() -> Option<EnumDescriptor> {
        None
    }
}

/// An enumeration whose values are bitmasks over the values of [`MultiEnumType::Flags`].
pub trait MultiEnumType: EnumType {
    type Flags: EnumType;
}

/// Type-erased handle over an [`EnumType`] implementation.
#[derive(Clone, Copy)]
pub struct EnumDescriptor {
    type_id: TypeId,
    name: &'static str,
    constants: fn() -> Vec<(&'static str, EnumValue)>,
    ignored_constants: fn() -> &'static [&'static str],
    flag_source: fn() -> Option<EnumDescriptor>,
}

impl EnumDescriptor {
    /// Build the descriptor of `T`.
    pub fn of<T: EnumType>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            name: T::NAME,
            constants: T::constants,
            ignored_constants: T::ignored_constants,
            flag_source: T::flag_source,
        }
    }

    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn constants(&self) -> Vec<(&'static str, EnumValue)> {
        (self.constants)()
    }

    #[inline]
    pub fn ignored_constants(&self) -> &'static [&'static str] {
        (self.ignored_constants)()
    }

    #[inline]
    pub fn flag_source(&self) -> Option<EnumDescriptor> {
        (self.flag_source)()
    }

    /// Returns `true` if this descriptor is that of `T`.
    #[inline]
    pub fn is<T: EnumType>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }
}

impl std::fmt::Debug for EnumDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnumDescriptor")
            .field("name", &self.name)
            .field("type_id", &self.type_id)
            .finish()
    }
}

impl PartialEq for EnumDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for EnumDescriptor {}

impl std::hash::Hash for EnumDescriptor {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}
