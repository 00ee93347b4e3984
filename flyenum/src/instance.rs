//! Canonical enumeration instances.
use std::{any::TypeId, marker::PhantomData, sync::Arc};

use crate::{
    error::{EnumError, EnumOperand, EnumResult},
    types::{EnumType, MultiEnumType},
    value::EnumValue,
};

/// Shared storage of one canonical instance.
#[derive(Debug)]
pub(crate) struct EnumCell {
    pub(crate) enum_name: &'static str,
    pub(crate) value: EnumValue,
}

/// A canonical instance of the enumeration `T`.
///
/// Instances are only handed out by [`crate::registry::EnumRegistry`], which guarantees that
/// a given `(T, value)` pair always maps to the same underlying allocation. Consequently
/// `==` on instances is an identity comparison, and cloning an instance is a reference-count
/// increment.
pub struct Enum<T: EnumType> {
    cell: Arc<EnumCell>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: EnumType> Enum<T> {
    #[inline]
    pub(crate) fn from_cell(cell: Arc<EnumCell>) -> Self {
        Self {
            cell,
            _marker: PhantomData,
        }
    }

    /// The value this instance stands for.
    #[inline]
    pub fn value(&self) -> &EnumValue {
        &self.cell.value
    }

    /// Compare with an instance of a possibly different enumeration.
    ///
    /// Fails with [`EnumError::OperationSupportedOnlyForSameEnum`] if `U` is not `T`.
    pub fn equals<U: EnumType>(&self, other: &Enum<U>) -> EnumResult<bool> {
        if TypeId::of::<T>() != TypeId::of::<U>() {
            return Err(EnumError::OperationSupportedOnlyForSameEnum {
                operation: "equals",
                left: self.operand(),
                right: other.operand(),
            });
        }

        // Instances of distinct registries never share a cell, fall back to the value.
        Ok(Arc::ptr_eq(&self.cell, &other.cell) || self.cell.value == other.cell.value)
    }

    /// Returns `true` if this instance holds `value` (same kind, same value).
    #[inline]
    pub fn equals_value(&self, value: impl Into<EnumValue>) -> bool {
        self.cell.value == value.into()
    }

    pub(crate) fn operand(&self) -> EnumOperand {
        EnumOperand {
            enum_name: self.cell.enum_name,
            value: self.cell.value.clone(),
        }
    }
}

impl<M: MultiEnumType> Enum<M> {
    /// The bitmask held by this instance.
    #[inline]
    pub fn bitmask(&self) -> i64 {
        self.cell.value.as_int().unwrap_or_default()
    }

    /// Returns `true` if no flag is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bitmask() == 0
    }
}

impl<T: EnumType> Clone for Enum<T> {
    fn clone(&self) -> Self {
        Self::from_cell(Arc::clone(&self.cell))
    }
}

impl<T: EnumType> PartialEq for Enum<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.cell, &other.cell)
    }
}

impl<T: EnumType> Eq for Enum<T> {}

impl<T: EnumType> std::hash::Hash for Enum<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.cell).hash(state);
    }
}

impl<T: EnumType> std::fmt::Debug for Enum<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.cell.value)
    }
}

impl<T: EnumType> std::fmt::Display for Enum<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.cell.value, f)
    }
}
