//! Transparent serde support.
//!
//! A present `Nullable<T>` serializes exactly as `T`; a null one as the format's
//! none marker (`null` in JSON). Decoding goes through `Option<T>`, so a field
//! missing from a derived struct reaches the none path and ends up null without
//! needing `#[serde(default)]`.

use crate::Nullable;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if let Some(value) = self.get_ref() {
            return value.serialize(serializer);
        }
        return serializer.serialize_none();
    }
}

/// A present `None` inside `Nullable<Option<U>>` encodes as `null` and so reads back as null.
impl<'de, T> Deserialize<'de> for Nullable<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<T>::deserialize(deserializer)?;
        return Ok(Nullable::from_option(value));
    }
}
