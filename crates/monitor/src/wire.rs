//! Decoding helpers for Burrow's JSON encoding.
//!
//! Burrow is written in Go, whose encoder writes a nil slice or string as
//! `null`. Fields decoded with [`null_as_default`] read `null` the way Go's
//! decoder does: as the zero value.

use serde::{Deserialize, Deserializer};

/// Deserializes `null` as `T::default()`, any other value as `T`.
///
/// Use as `#[serde(deserialize_with = "null_as_default")]`. Combine with
/// `#[serde(default)]` to also accept a missing key; without it a missing
/// key is still an error.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
