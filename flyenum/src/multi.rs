//! Bitmask enumerations.
//!
//! A [`MultiEnumType`] stores a set of flags as one non-negative integer. The flags
//! themselves are the declared values of its component enumeration
//! ([`MultiEnumType::Flags`]); the multi enumeration does not need to declare its
//! composite values. Every operation below computes a new bitmask and resolves it through
//! [`EnumRegistry::get`], so results are canonical instances like any other.
//!
//! Binary operations accept either an instance of the same bitmask enumeration or a single
//! flag (an instance of the component enumeration). Any other operand fails with
//! [`EnumError::OperationSupportedOnlyForSameEnum`].
//!
//! ```rust
//! # use flyenum::{declare_enum, declare_multi_enum, EnumRegistry};
//! declare_enum! {
//!     pub struct Role {
//!         USER = 1,
//!         EMPLOYEE = 2,
//!         ADMIN = 4,
//!     }
//! }
//!
//! declare_multi_enum! {
//!     pub struct Roles(Role);
//! }
//!
//! let registry = EnumRegistry::default();
//! let roles = registry.get_multi::<Roles>([1, 4]).unwrap();
//! assert_eq!(roles.bitmask(), 5);
//!
//! let employee = registry.get::<Role>(2).unwrap();
//! let all = registry.add(&roles, &employee).unwrap();
//! assert_eq!(all.bitmask(), 7);
//! assert!(registry.contains(&all, &employee).unwrap());
//! ```
use std::sync::Arc;

use log::info;
use smallvec::SmallVec;

use crate::{
    check, collection,
    error::{EnumError, EnumResult, InvalidReason},
    instance::Enum,
    registry::EnumRegistry,
    table::ValueTable,
    types::{EnumDescriptor, EnumType, MultiEnumType},
    value::{EnumValue, ValueKind},
};

/// Split `bitmask` into its set bits, lowest first.
///
/// Negative bitmasks have no decomposition and yield nothing.
///
/// ```rust
/// # use flyenum::multi::decompose;
/// assert_eq!(decompose(13).as_slice(), &[1, 4, 8]);
/// assert!(decompose(0).is_empty());
/// ```
pub fn decompose(bitmask: i64) -> SmallVec<[i64; 8]> {
    let mut bits = SmallVec::new();
    let mut rest = bitmask;
    while rest > 0 {
        let bit = rest & rest.wrapping_neg();
        bits.push(bit);
        rest &= rest - 1;
    }
    bits
}

/// Returns `true` if `value` is an integer with exactly one bit set.
#[inline]
pub fn is_single_flag(value: &EnumValue) -> bool {
    matches!(value.as_int(), Some(flag) if flag > 0 && flag & (flag - 1) == 0)
}

impl EnumRegistry {
    /// Retrieve the instance of `M` combining every flag in `values`.
    ///
    /// Each value must be a declared integer flag of `M::Flags`. Order does not matter and an
    /// empty sequence yields the empty bitmask.
    pub fn get_multi<M: MultiEnumType>(
        &self,
        values: impl IntoIterator<Item = impl Into<EnumValue>>,
    ) -> EnumResult<Enum<M>> {
        let mut bitmask = 0;
        for value in values {
            bitmask |= self.flag_value::<M>(value.into())?;
        }
        self.get::<M>(bitmask)
    }

    /// Same as [`Self::get_multi`] for a slice of integer flags.
    pub fn get_multi_by_array<M: MultiEnumType>(&self, values: &[i64]) -> EnumResult<Enum<M>> {
        self.get_multi::<M>(values.iter().copied())
    }

    /// The declared flags of `M::Flags` that are set in `instance`.
    pub fn values<M: MultiEnumType>(&self, instance: &Enum<M>) -> EnumResult<ValueTable> {
        let table = self.flag_table(&EnumDescriptor::of::<M::Flags>())?;
        let bitmask = instance.bitmask();
        Ok(table.filtered(
            |value| matches!(value.as_int(), Some(flag) if flag != 0 && bitmask & flag == flag),
        ))
    }

    /// Canonical instances of the flags of `M::Flags` set in `instance`, in declaration order.
    pub fn enums<M: MultiEnumType>(&self, instance: &Enum<M>) -> EnumResult<Vec<Enum<M::Flags>>> {
        self.values(instance)?
            .values()
            .map(|value| self.get::<M::Flags>(value))
            .collect()
    }

    /// Returns `true` if every flag of `other` is set in `instance`.
    pub fn contains<M: MultiEnumType, O: EnumType>(
        &self,
        instance: &Enum<M>,
        other: &Enum<O>,
    ) -> EnumResult<bool> {
        let mask = self.operand_bitmask("contains", instance, other)?;
        Ok(instance.bitmask() & mask == mask)
    }

    /// Returns `true` if the flag `value` is set in `instance`.
    pub fn contains_value<M: MultiEnumType>(
        &self,
        instance: &Enum<M>,
        value: impl Into<EnumValue>,
    ) -> EnumResult<bool> {
        let mask = self.flag_value::<M>(value.into())?;
        Ok(instance.bitmask() & mask == mask)
    }

    /// Union of `instance` and `other`.
    pub fn add<M: MultiEnumType, O: EnumType>(
        &self,
        instance: &Enum<M>,
        other: &Enum<O>,
    ) -> EnumResult<Enum<M>> {
        let mask = self.operand_bitmask("add", instance, other)?;
        self.get::<M>(instance.bitmask() | mask)
    }

    /// Set the flag `value` in `instance`.
    pub fn add_value<M: MultiEnumType>(
        &self,
        instance: &Enum<M>,
        value: impl Into<EnumValue>,
    ) -> EnumResult<Enum<M>> {
        let mask = self.flag_value::<M>(value.into())?;
        self.get::<M>(instance.bitmask() | mask)
    }

    /// Flags of `instance` that are not in `other`.
    pub fn remove<M: MultiEnumType, O: EnumType>(
        &self,
        instance: &Enum<M>,
        other: &Enum<O>,
    ) -> EnumResult<Enum<M>> {
        let mask = self.operand_bitmask("remove", instance, other)?;
        self.get::<M>(instance.bitmask() & !mask)
    }

    /// Clear the flag `value` in `instance`.
    pub fn remove_value<M: MultiEnumType>(
        &self,
        instance: &Enum<M>,
        value: impl Into<EnumValue>,
    ) -> EnumResult<Enum<M>> {
        let mask = self.flag_value::<M>(value.into())?;
        self.get::<M>(instance.bitmask() & !mask)
    }

    /// Flags set in both `instance` and `other`.
    pub fn intersect<M: MultiEnumType, O: EnumType>(
        &self,
        instance: &Enum<M>,
        other: &Enum<O>,
    ) -> EnumResult<Enum<M>> {
        let mask = self.operand_bitmask("intersect", instance, other)?;
        self.get::<M>(instance.bitmask() & mask)
    }

    /// Keep only the flag `value` of `instance`, if set.
    pub fn intersect_value<M: MultiEnumType>(
        &self,
        instance: &Enum<M>,
        value: impl Into<EnumValue>,
    ) -> EnumResult<Enum<M>> {
        let mask = self.flag_value::<M>(value.into())?;
        self.get::<M>(instance.bitmask() & mask)
    }

    /// Validate `value` as a bitmask of the enumeration described by `descriptor`.
    pub(crate) fn check_bitmask(
        &self,
        descriptor: &EnumDescriptor,
        flags: &EnumDescriptor,
        value: EnumValue,
    ) -> EnumResult<EnumValue> {
        let table = self.flag_table(flags)?;
        let bitmask = match check::expect_int(&value) {
            Ok(bitmask) => bitmask,
            Err(mismatch) => {
                return Err(EnumError::InvalidValue {
                    enum_name: descriptor.name(),
                    value,
                    reason: InvalidReason::WrongKind {
                        expected: ValueKind::Int,
                        found: mismatch.found,
                    },
                    available: table,
                });
            }
        };

        if bitmask < 0 {
            return Err(EnumError::InvalidValue {
                enum_name: descriptor.name(),
                value,
                reason: InvalidReason::Negative,
                available: table,
            });
        }

        for bit in decompose(bitmask) {
            let flag = EnumValue::Int(bit);
            if !table.contains_value(&flag) {
                return Err(EnumError::InvalidValue {
                    enum_name: flags.name(),
                    value: flag,
                    reason: InvalidReason::NotDeclared,
                    available: table,
                });
            }
        }

        Ok(value)
    }

    /// Declared table of a component enumeration, checked for single-bit flags in strict mode.
    fn flag_table(&self, flags: &EnumDescriptor) -> EnumResult<Arc<ValueTable>> {
        let table = self.table_of(flags)?;
        if self.config().strict_flag_values {
            if let Some((name, value)) =
                collection::search(table.entries(), |_, value| !is_single_flag(value))
            {
                info!(
                    "Flag `{}` of enum `{}` rejected in strict mode: {} is not a single bit.",
                    name,
                    flags.name(),
                    value
                );
                return Err(EnumError::FlagNotPowerOfTwo {
                    enum_name: flags.name(),
                    name: *name,
                    value: value.clone(),
                });
            }
        }
        Ok(table)
    }

    /// Validate `value` as a single declared flag of `M::Flags` and return it.
    fn flag_value<M: MultiEnumType>(&self, value: EnumValue) -> EnumResult<i64> {
        let flags = EnumDescriptor::of::<M::Flags>();
        let table = self.flag_table(&flags)?;

        let flag = match check::expect_int(&value) {
            Ok(flag) => flag,
            Err(mismatch) => {
                return Err(EnumError::InvalidValue {
                    enum_name: flags.name(),
                    value,
                    reason: InvalidReason::WrongKind {
                        expected: ValueKind::Int,
                        found: mismatch.found,
                    },
                    available: table,
                });
            }
        };

        if !table.contains_value(&value) {
            return Err(EnumError::InvalidValue {
                enum_name: flags.name(),
                value,
                reason: InvalidReason::NotDeclared,
                available: table,
            });
        }

        Ok(flag)
    }

    /// Bitmask of the right-hand side of a binary operation on `instance`.
    fn operand_bitmask<M: MultiEnumType, O: EnumType>(
        &self,
        operation: &'static str,
        instance: &Enum<M>,
        other: &Enum<O>,
    ) -> EnumResult<i64> {
        let operand = EnumDescriptor::of::<O>();
        if operand.is::<M>() {
            Ok(other.value().as_int().unwrap_or_default())
        } else if operand.is::<M::Flags>() {
            self.flag_value::<M>(other.value().clone())
        } else {
            Err(EnumError::OperationSupportedOnlyForSameEnum {
                operation,
                left: instance.operand(),
                right: other.operand(),
            })
        }
    }
}
