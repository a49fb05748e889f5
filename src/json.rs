//! JSON byte-level encoding for [`Nullable`].
//!
//! `unmarshal_json` decodes into an existing value. Empty input and `null` both
//! reset it to null. Anything else, whitespace-only input included, is decoded
//! as `T`; a failed decode also leaves it null, so the container is never
//! observed half-written.

use crate::Nullable;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::error::Category;
use thiserror::Error;

/// The input was neither the null marker nor a valid JSON encoding of `T`.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed JSON: {0}")]
    Syntax(#[source] serde_json::Error),
    #[error("JSON does not match the expected type: {0}")]
    Data(#[source] serde_json::Error),
    #[error("unexpected end of JSON input: {0}")]
    Eof(#[source] serde_json::Error),
    #[error("failed to read JSON input: {0}")]
    Io(#[source] serde_json::Error),
}

impl DecodeError {
    fn inner(&self) -> &serde_json::Error {
        match self {
            DecodeError::Syntax(err) => err,
            DecodeError::Data(err) => err,
            DecodeError::Eof(err) => err,
            DecodeError::Io(err) => err,
        }
    }

    /// One-based line of the input where decoding stopped.
    pub fn line(&self) -> usize {
        return self.inner().line();
    }

    /// One-based column of the input where decoding stopped.
    pub fn column(&self) -> usize {
        return self.inner().column();
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> DecodeError {
        match err.classify() {
            Category::Syntax => DecodeError::Syntax(err),
            Category::Data => DecodeError::Data(err),
            Category::Eof => DecodeError::Eof(err),
            Category::Io => DecodeError::Io(err),
        }
    }
}

#[derive(Debug, Error)]
#[error("failed to encode value as JSON: {0}")]
pub struct EncodeError(#[from] serde_json::Error);

const NULL_MARKER: &[u8] = b"null";

#[inline]
fn is_json_whitespace(b: &u8) -> bool {
    return matches!(b, b' ' | b'\t' | b'\n' | b'\r');
}

fn trim(data: &[u8]) -> &[u8] {
    let start = data
        .iter()
        .position(|b| !is_json_whitespace(b))
        .unwrap_or(data.len());
    let end = data
        .iter()
        .rposition(|b| !is_json_whitespace(b))
        .map_or(start, |i| i + 1);
    return &data[start..end];
}

/// Empty input counts as null, same as the literal marker. Whitespace-only
/// input is not empty and goes to the decoder.
fn is_null_marker(data: &[u8]) -> bool {
    if data.is_empty() {
        return true;
    }
    return trim(data) == NULL_MARKER;
}

impl<T: Serialize> Nullable<T> {
    /// Encodes the value as JSON; null becomes `null`.
    pub fn marshal_json(&self) -> Result<Vec<u8>, EncodeError> {
        return Ok(serde_json::to_vec(self)?);
    }
}

impl<T: DeserializeOwned + Default> Nullable<T> {
    /// Decodes `data` into `self`.
    ///
    /// On error `self` is null and the decode error is returned.
    pub fn unmarshal_json(&mut self, data: &[u8]) -> Result<(), DecodeError> {
        if is_null_marker(data) {
            tracing::trace!(len = data.len(), "null marker, resetting to null");
            self.unset();
            return Ok(());
        }

        match serde_json::from_slice::<T>(data) {
            Ok(value) => {
                self.set(value);
                return Ok(());
            }
            Err(err) => {
                self.unset();
                let err = DecodeError::from(err);
                tracing::debug!(error = %err, "decode failed, value reset to null");
                return Err(err);
            }
        }
    }
}

pub fn to_vec<T: Serialize>(value: &Nullable<T>) -> Result<Vec<u8>, EncodeError> {
    return value.marshal_json();
}

pub fn from_slice<T>(data: &[u8]) -> Result<Nullable<T>, DecodeError>
where
    T: DeserializeOwned + Default,
{
    let mut value = Nullable::null();
    value.unmarshal_json(data)?;
    return Ok(value);
}

#[cfg(test)]
mod test;
