//! Runtime kind assertions on [`EnumValue`]s.
use thiserror::Error;

use crate::value::{EnumValue, ValueKind};

/// A value was not of any of the accepted kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Expected a value of kind {}, found {found} `{value}`.", display_kinds(.expected))]
pub struct KindMismatch {
    pub expected: Vec<ValueKind>,
    pub found: ValueKind,
    pub value: EnumValue,
}

fn display_kinds(kinds: &[ValueKind]) -> String {
    kinds
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Returns `true` if `value` belongs to one of the `accepted` kinds.
#[inline]
pub fn is_kind(value: &EnumValue, accepted: &[ValueKind]) -> bool {
    accepted.contains(&value.kind())
}

/// Asserts that `value` belongs to one of the `accepted` kinds.
///
/// ```rust
/// # use flyenum::{check::expect_kind, value::{EnumValue, ValueKind}};
/// assert!(expect_kind(&EnumValue::from(4), &[ValueKind::Int]).is_ok());
/// assert!(expect_kind(&EnumValue::from("4"), &[ValueKind::Int]).is_err());
/// ```
pub fn expect_kind(value: &EnumValue, accepted: &[ValueKind]) -> Result<(), KindMismatch> {
    if is_kind(value, accepted) {
        Ok(())
    } else {
        Err(KindMismatch {
            expected: accepted.to_vec(),
            found: value.kind(),
            value: value.clone(),
        })
    }
}

/// Asserts that `value` is an integer and returns it.
pub fn expect_int(value: &EnumValue) -> Result<i64, KindMismatch> {
    expect_kind(value, &[ValueKind::Int])?;
    Ok(value.as_int().unwrap_or_default())
}
