//! Key/value metadata attached to an [`AppError`](crate::AppError).
//!
//! # Memory Model
//!
//! Entries live in a `SmallVec` with four inline slots: the common case
//! (`field`, `row`, `info`, plus one caller key) never touches the heap for
//! the table itself. Keys are `Cow<'static, str>` so string literals cost
//! nothing. Values are always owned.
//!
//! Values frequently echo user input (the offending field value, a CSV
//! row), so they are zeroized on drop. Values leaving the table through
//! [`Metadata::insert`] or [`Metadata::remove`] come back wrapped in
//! [`Zeroizing`], so they are cleared too once the caller drops them.
//! Only the heap buffers are cleared; this is best-effort hygiene, not
//! secure memory wiping.
//!
//! # Ownership
//!
//! A `Metadata` is owned by exactly one error value. `Clone` copies every
//! entry, so two errors derived from a common base never observe each
//! other's insertions.

use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;
use zeroize::{Zeroize, Zeroizing};

/// Key used by [`AppError::with_field`](crate::AppError::with_field).
pub const FIELD_KEY: &str = "field";
/// Key used by [`AppError::with_row`](crate::AppError::with_row).
pub const ROW_KEY: &str = "row";
/// Key used by [`AppError::with_info`](crate::AppError::with_info).
pub const INFO_KEY: &str = "info";

type Entry = (Cow<'static, str>, String);

/// Insertion-ordered string map.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    entries: SmallVec<[Entry; 4]>,
}

impl Metadata {
    /// Empty map.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    /// Insert or replace a value, returning the previous one.
    ///
    /// Replacement keeps the key's original position. The previous value is
    /// zeroized when the returned wrapper drops.
    pub fn insert(
        &mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<String>,
    ) -> Option<Zeroizing<String>> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(Zeroizing::new(std::mem::replace(slot, value))),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Look up a value by key.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether `key` is present.
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Remove an entry, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<Zeroizing<String>> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        let (mut key, value) = self.entries.remove(idx);
        if let Cow::Owned(k) = &mut key {
            k.zeroize();
        }
        Some(Zeroizing::new(value))
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v.as_str()))
    }

    /// Whether the table has spilled to the heap.
    #[inline]
    pub fn spilled(&self) -> bool {
        self.entries.spilled()
    }
}

impl Zeroize for Metadata {
    fn zeroize(&mut self) {
        for (key, value) in &mut self.entries {
            if let Cow::Owned(k) = key {
                k.zeroize();
            }
            value.zeroize();
        }
        self.entries.clear();
    }
}

impl Drop for Metadata {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl fmt::Debug for Metadata {
    /// Keys only. Values may carry user input and stay out of debug output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.entries.iter().map(|(k, _)| &**k))
            .finish()
    }
}

impl<'a> IntoIterator for &'a Metadata {
    type Item = (&'a str, &'a str);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a str)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl<K, V> FromIterator<(K, V)> for Metadata
where
    K: Into<Cow<'static, str>>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut metadata = Self::new();
        for (key, value) in iter {
            metadata.insert(key, value);
        }
        metadata
    }
}
