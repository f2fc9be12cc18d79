// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gst-codec: the binary scalar/array/parameter envelope codec (spec C1).
//!
//! Stateless by design — every function here is a pure function of its
//! inputs, with no I/O and no reference to outside state.

pub mod array;
pub mod delays;
pub mod error;
pub mod scalar;

pub use array::{Array, ArrayType};
pub use delays::DelaysFinderParameters;
pub use error::CodecError;
