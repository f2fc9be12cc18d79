// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gst-storage: the task store (C2, Redis-backed) and file store (C3,
//! directory-rooted) behind the GPU job service.

pub mod error;
pub mod file_store;
pub mod redis_store;

pub use error::StoreError;
pub use file_store::FileStore;
pub use redis_store::{RedisConfig, TaskStore, DEFAULT_TTL};
