//! Scalar values carried by enumerations.
//!
//! An [`EnumValue`] is the closed set of scalars an enumeration may declare. Two
//! values are considered the same enum value only if they share the same
//! [`ValueKind`] *and* are equal within that kind: `Int(1)` and `Str("1")` are
//! distinct, and so are `Int(1)` and `Float(1.0)`.
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{EnumDiscriminants, EnumIs};

/// A scalar value declared by an enumeration.
///
/// Equality and hashing never coerce across variants. Floats are compared by
/// their bit pattern after folding `-0.0` into `0.0` and every NaN into a
/// single NaN, so that a float can act as a cache key.
///
/// ```rust
/// # use flyenum::value::{EnumValue, ValueKind};
/// assert_ne!(EnumValue::from(1), EnumValue::from("1"));
/// assert_eq!(EnumValue::from(-0.0), EnumValue::from(0.0));
/// assert_eq!(EnumValue::from("admin").kind(), ValueKind::Str);
/// ```
#[derive(Debug, Clone, EnumIs, EnumDiscriminants)]
#[strum_discriminants(name(ValueKind), derive(Hash, PartialOrd, Ord))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum EnumValue {
    /// Signed integer value. MultiEnum bitmasks are always of this kind.
    Int(i64),

    /// String value.
    Str(String),

    /// Floating-point value.
    Float(f64),

    /// Boolean value.
    Bool(bool),

    /// The absent value.
    Null,
}

impl EnumValue {
    /// Runtime-type bucket of this value.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        ValueKind::from(self)
    }

    /// Returns the integer payload, if any.
    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            EnumValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the string payload, if any.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            EnumValue::Str(value) => Some(value),
            _ => None,
        }
    }

    /// Bit pattern used for float identity.
    #[inline]
    fn float_identity(value: f64) -> u64 {
        if value == 0.0 {
            0
        } else if value.is_nan() {
            f64::NAN.to_bits()
        } else {
            value.to_bits()
        }
    }
}

impl PartialEq for EnumValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (EnumValue::Int(a), EnumValue::Int(b)) => a == b,
            (EnumValue::Str(a), EnumValue::Str(b)) => a == b,
            (EnumValue::Float(a), EnumValue::Float(b)) => {
                Self::float_identity(*a) == Self::float_identity(*b)
            }
            (EnumValue::Bool(a), EnumValue::Bool(b)) => a == b,
            (EnumValue::Null, EnumValue::Null) => true,
            _ => false,
        }
    }
}

impl Eq for EnumValue {}

impl Hash for EnumValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        match self {
            EnumValue::Int(value) => value.hash(state),
            EnumValue::Str(value) => value.hash(state),
            EnumValue::Float(value) => Self::float_identity(*value).hash(state),
            EnumValue::Bool(value) => value.hash(state),
            EnumValue::Null => {}
        }
    }
}

impl std::fmt::Display for EnumValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnumValue::Int(value) => write!(f, "{}", value),
            EnumValue::Str(value) => write!(f, "{:?}", value),
            EnumValue::Float(value) => write!(f, "{:?}", value),
            EnumValue::Bool(value) => write!(f, "{}", value),
            EnumValue::Null => write!(f, "null"),
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ValueKind::Int => "integer",
            ValueKind::Str => "string",
            ValueKind::Float => "float",
            ValueKind::Bool => "boolean",
            ValueKind::Null => "null",
        };
        write!(f, "{}", s)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for EnumValue {
                fn from(value: $ty) -> Self {
                    EnumValue::Int(value as i64)
                }
            }
        )+
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for EnumValue {
    fn from(value: f64) -> Self {
        EnumValue::Float(value)
    }
}

impl From<f32> for EnumValue {
    fn from(value: f32) -> Self {
        EnumValue::Float(value as f64)
    }
}

impl From<bool> for EnumValue {
    fn from(value: bool) -> Self {
        EnumValue::Bool(value)
    }
}

impl From<&str> for EnumValue {
    fn from(value: &str) -> Self {
        EnumValue::Str(value.to_string())
    }
}

impl From<String> for EnumValue {
    fn from(value: String) -> Self {
        EnumValue::Str(value)
    }
}

impl From<&EnumValue> for EnumValue {
    fn from(value: &EnumValue) -> Self {
        value.clone()
    }
}

impl<T: Into<EnumValue>> From<Option<T>> for EnumValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(EnumValue::Null, Into::into)
    }
}
