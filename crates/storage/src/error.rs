// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised by the task store (C2) and file store (C3).

use gst_core::ErrorKind;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("task not found")]
    TaskNotFound,

    #[error("task already exists")]
    TaskConflict,

    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("file already exists: {0}")]
    FileConflict(String),

    #[error("invalid filename: {0}")]
    InvalidFilename(String),

    #[error("root {0} does not exist or is not a directory")]
    InvalidRoot(String),

    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::TaskNotFound | StoreError::FileNotFound(_) => ErrorKind::NotFound,
            StoreError::TaskConflict | StoreError::FileConflict(_) => ErrorKind::Conflict,
            StoreError::InvalidFilename(_) | StoreError::InvalidRoot(_) => ErrorKind::Precondition,
            StoreError::Redis(_) | StoreError::Serde(_) | StoreError::Io(_) => ErrorKind::Internal,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
