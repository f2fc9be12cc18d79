// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Codec error type. The codec is stateless: every method here is a pure
//! function of its inputs, so every failure is representable without any
//! reference to outside state.

/// Errors the binary codec (C1) can raise. Corresponds to the "codec error"
/// kind in spec §7 — callers map this to a task failure, not an HTTP status
/// (the codec itself never talks to the API layer).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("value {value} out of range [{min}, {max}]")]
    OutOfRange { value: String, min: String, max: String },

    #[error("empty list is not a valid packable value")]
    Empty,

    #[error("unsupported or unrecognized type tag")]
    UnknownType,

    #[error("truncated input: need at least {needed} bytes, got {got}")]
    Truncated { needed: usize, got: usize },

    #[error("invalid utf-8 in packed char data")]
    InvalidUtf8,
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
