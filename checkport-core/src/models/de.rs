//! Shared deserialization helpers.

use serde::{Deserialize, Deserializer};

/// Deserializes an explicit `null` as the type's default value.
///
/// `#[serde(default)]` only covers missing keys; the API also sends
/// `null` for empty strings, lists and numbers.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
