//! Declared value tables.
use std::collections::HashMap;

use crate::{
    collection,
    error::{EnumError, EnumResult},
    types::EnumDescriptor,
    value::EnumValue,
};

/// Ordered mapping from constant name to value, forming the closed set of valid values of an
/// enumeration.
///
/// Tables are built by [`crate::registry::EnumRegistry`] from an [`crate::types::EnumType`]
/// declaration: ignored constants are dropped and no two remaining constants may share the
/// same value (see [`EnumValue`] for the identity rule).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueTable {
    entries: Vec<(&'static str, EnumValue)>,
}

impl ValueTable {
    pub(crate) fn from_declaration(descriptor: &EnumDescriptor) -> EnumResult<Self> {
        let entries =
            collection::reject_keys(descriptor.constants(), descriptor.ignored_constants());

        let mut seen: HashMap<&EnumValue, &'static str> = HashMap::with_capacity(entries.len());
        for (name, value) in &entries {
            if let Some(first) = seen.insert(value, *name) {
                return Err(EnumError::DuplicateValueSpecified {
                    enum_name: descriptor.name(),
                    value: value.clone(),
                    first,
                    second: *name,
                });
            }
        }

        Ok(Self { entries })
    }

    pub(crate) fn filtered(&self, mut keep: impl FnMut(&EnumValue) -> bool) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(_, value)| keep(value))
                .cloned()
                .collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Constants as `(name, value)` pairs in declaration order.
    #[inline]
    pub fn entries(&self) -> &[(&'static str, EnumValue)] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &EnumValue)> + '_ {
        self.entries.iter().map(|(name, value)| (*name, value))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn values(&self) -> impl Iterator<Item = &EnumValue> + '_ {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Value declared under `name`.
    pub fn get(&self, name: &str) -> EnumResult<&EnumValue> {
        Ok(collection::find_by_key(&self.entries, name)?)
    }

    /// Name of the constant declaring `value`, if any.
    pub fn name_of(&self, value: &EnumValue) -> Option<&'static str> {
        collection::find_by_value(&self.entries, value).ok().copied()
    }

    #[inline]
    pub fn contains_value(&self, value: &EnumValue) -> bool {
        self.name_of(value).is_some()
    }
}

impl std::fmt::Display for ValueTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        write!(f, "}}")
    }
}
