//! Upstream JSON sends `null` for fields it has no value for, where other
//! responses simply omit the key. Both read as the type's default.

use serde::{Deserialize, Deserializer};

/// `#[serde(default, deserialize_with = "deserialize_null_default")]`: an
/// absent key and an explicit `null` both become `T::default()`.
pub fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
