use std::sync::Arc;

use strum::EnumIs;
use thiserror::Error;

use crate::{
    collection::CollectionError,
    table::ValueTable,
    value::{EnumValue, ValueKind},
};

/// Why a value was rejected by an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, EnumIs)]
pub enum InvalidReason {
    /// The value is not part of the declared value table.
    NotDeclared,

    /// The value has the wrong runtime kind (eg., a string where a flag integer is required).
    WrongKind { expected: ValueKind, found: ValueKind },

    /// Bitmasks cannot be negative.
    Negative,
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidReason::NotDeclared => write!(f, "is not declared"),
            InvalidReason::WrongKind { expected, found } => {
                write!(f, "must be of kind {}, found {}", expected, found)
            }
            InvalidReason::Negative => write!(f, "must be a non-negative bitmask"),
        }
    }
}

/// Diagnostic snapshot of one operand of a binary enum operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumOperand {
    pub enum_name: &'static str,
    pub value: EnumValue,
}

impl std::fmt::Display for EnumOperand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.enum_name, self.value)
    }
}

/// Errors raised by enumeration lookups, declarations and set operations.
#[derive(Debug, Clone, PartialEq, Eq, EnumIs, Error)]
pub enum EnumError {
    /// A value is not acceptable for the requested enumeration.
    #[error("Value `{value}` for enum `{enum_name}` {reason}. Available values: {available}.")]
    InvalidValue {
        enum_name: &'static str,
        value: EnumValue,
        reason: InvalidReason,
        available: Arc<ValueTable>,
    },

    /// Two constants of the same enumeration share the same value.
    #[error(
        "Enum `{enum_name}` declares value `{value}` more than once: constants `{first}` and `{second}` collide."
    )]
    DuplicateValueSpecified {
        enum_name: &'static str,
        value: EnumValue,
        first: &'static str,
        second: &'static str,
    },

    /// A binary operation received instances of two unrelated enumerations.
    #[error(
        "Operation `{operation}` is only supported between instances of the same enum, got `{left}` and `{right}`."
    )]
    OperationSupportedOnlyForSameEnum {
        operation: &'static str,
        left: EnumOperand,
        right: EnumOperand,
    },

    /// A flag of a component enumeration is not a single bit (strict mode only).
    #[error(
        "Flag `{name}` of enum `{enum_name}` has value `{value}`, which is not a positive power of two."
    )]
    FlagNotPowerOfTwo {
        enum_name: &'static str,
        name: &'static str,
        value: EnumValue,
    },

    #[error(transparent)]
    Collection(#[from] CollectionError),
}

pub type EnumResult<T> = Result<T, EnumError>;
