// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared error taxonomy (spec §7). Each crate's concrete error type exposes
//! a `kind() -> ErrorKind` so a caller (chiefly `gst-api`) can map any error
//! to an HTTP status without depending on the producing crate's own error
//! type.

use serde::{Deserialize, Serialize};

/// Error kinds, not types — a coarse classification shared across crates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Task id or key not present.
    NotFound,
    /// Duplicate task id on create.
    Conflict,
    /// Wrong status for the requested operation.
    Precondition,
    /// Request body exceeds the configured byte cap.
    PayloadTooLarge,
    /// Per-user task cap exceeded.
    RateLimited,
    /// No free RAM or no free GPU card; retryable.
    ResourceExhausted,
    /// Malformed binary envelope.
    Codec,
    /// Anything else.
    Internal,
}

impl ErrorKind {
    /// HTTP status this kind maps to per spec §6/§7. `ResourceExhausted` has
    /// no HTTP mapping (it never reaches the API layer) and falls back to
    /// 500 defensively.
    pub fn http_status(&self) -> u16 {
        match self {
            ErrorKind::NotFound => 400,
            ErrorKind::Conflict => 400,
            ErrorKind::Precondition => 400,
            ErrorKind::PayloadTooLarge => 413,
            ErrorKind::RateLimited => 429,
            ErrorKind::ResourceExhausted => 500,
            ErrorKind::Codec => 500,
            ErrorKind::Internal => 500,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
