//! A nullable value wrapper.
//!
//! [`Nullable<T>`] holds either a present `T` or an explicit null, keeping
//! "present but zero" apart from "null". With the `serde` feature it serializes
//! as `T` itself or as the null marker; the `json` feature adds byte-level
//! helpers that reset to null on empty input and on decode failure.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

mod nullable;

#[cfg(feature = "serde")]
mod codec;

#[cfg(feature = "json")]
pub mod json;

pub use nullable::MaybeNull;
pub use nullable::Nullable;

#[cfg(feature = "json")]
pub use json::DecodeError;
#[cfg(feature = "json")]
pub use json::EncodeError;
