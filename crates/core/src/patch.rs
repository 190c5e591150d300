//! Presence-sensitive field wrapper for partial updates.
//!
//! A plain `Option<T>` collapses "key omitted" and "key sent as `null`" into
//! the same `None`. [`Patch`] keeps the three states apart:
//!
//! | JSON                   | Value             |
//! |------------------------|-------------------|
//! | key omitted            | `Patch::Unchanged`|
//! | `"field": null`        | `Patch::Clear`    |
//! | `"field": <value>`     | `Patch::Set(v)`   |
//!
//! The omitted case relies on the field being annotated with
//! `#[serde(default)]`; serde never calls the deserializer for a missing key.

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    /// The key was absent; keep the stored value.
    #[default]
    Unchanged,
    /// The key was present with `null`; clear the stored value.
    Clear,
    /// The key was present with a value; replace the stored value.
    Set(T),
}

impl<T> Patch<T> {
    /// Merge this patch onto the currently stored value.
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            Patch::Unchanged => current,
            Patch::Clear => None,
            Patch::Set(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Patch::Set(v),
            None => Patch::Clear,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}
