// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gst-worker: the per-task GPU worker process (C6, spec §4.6).
//!
//! Invoked by the launcher script the pull spawns for a `ready` task. Loads
//! the task's input argument envelope, acquires a GPU card under the rig's
//! admission rules, runs the kernel, writes the result envelope, and
//! finalizes the task to `finished`/`failed`. Resource-exhaustion errors
//! roll the task back to `ready` instead of failing it.

pub mod error;
pub mod kernel;
pub mod process;
pub mod reduce;

pub use error::WorkerError;
pub use process::{run_task, WorkerCtx};
