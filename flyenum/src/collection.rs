//! Small helpers over ordered `(key, value)` collections.
//!
//! Declared value tables are ordered lists of pairs rather than maps, since
//! declaration order is part of their contract. These helpers provide the
//! filtering and searching primitives used to build and query them.
use std::borrow::Borrow;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// No entry carries the requested key.
    #[error("Key `{key}` was not found in the collection.")]
    KeyNotFound { key: String },

    /// No entry carries the requested value.
    #[error("Value `{value}` was not found in the collection.")]
    ValueNotFound { value: String },
}

/// Drops every entry whose key is listed in `rejected`, keeping the original order.
pub fn reject_keys<K, V, Q>(entries: Vec<(K, V)>, rejected: &[Q]) -> Vec<(K, V)>
where
    K: PartialEq<Q>,
{
    if rejected.is_empty() {
        return entries;
    }

    entries
        .into_iter()
        .filter(|(key, _)| !rejected.iter().any(|r| key == r))
        .collect()
}

/// Returns the first entry matching `predicate`.
pub fn search<K, V>(
    entries: &[(K, V)],
    mut predicate: impl FnMut(&K, &V) -> bool,
) -> Option<(&K, &V)> {
    entries
        .iter()
        .find(|(key, value)| predicate(key, value))
        .map(|(key, value)| (key, value))
}

/// Returns the value stored under `key`.
pub fn find_by_key<'a, K, V, Q>(entries: &'a [(K, V)], key: &Q) -> Result<&'a V, CollectionError>
where
    K: Borrow<Q>,
    Q: PartialEq + std::fmt::Display + ?Sized,
{
    search(entries, |k, _| <K as Borrow<Q>>::borrow(k) == key)
        .map(|(_, value)| value)
        .ok_or_else(|| CollectionError::KeyNotFound {
            key: key.to_string(),
        })
}

/// Returns the key of the first entry holding `value`.
pub fn find_by_value<'a, K, V>(entries: &'a [(K, V)], value: &V) -> Result<&'a K, CollectionError>
where
    V: PartialEq + std::fmt::Display,
{
    search(entries, |_, v| v == value)
        .map(|(key, _)| key)
        .ok_or_else(|| CollectionError::ValueNotFound {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<(&'static str, i32)> {
        vec![("A", 1), ("B", 2), ("HELPER", 99), ("C", 3)]
    }

    #[test]
    fn reject_keys_preserves_order() {
        let kept = reject_keys(sample(), &["HELPER"]);
        assert_eq!(kept, vec![("A", 1), ("B", 2), ("C", 3)]);
        assert_eq!(reject_keys(sample(), &[] as &[&str]).len(), 4);
    }

    #[test]
    fn search_by_predicate() {
        let entries = sample();
        assert_eq!(search(&entries, |_, v| *v > 1), Some((&"B", &2)));
        assert_eq!(search(&entries, |_, v| *v > 100), None);
    }

    #[test]
    fn lookups_report_missing_entries() {
        let entries = sample();
        assert_eq!(find_by_key(&entries, "C"), Ok(&3));
        assert_eq!(find_by_value(&entries, &2), Ok(&"B"));
        assert_eq!(
            find_by_key(&entries, "D"),
            Err(CollectionError::KeyNotFound { key: "D".into() })
        );
        assert_eq!(
            find_by_value(&entries, &7),
            Err(CollectionError::ValueNotFound { value: "7".into() })
        );
    }
}
