// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Kernel compilation and enqueueing require a live OpenCL device, which
//! this workspace's test environment does not provide. These cover the
//! pure argument-sizing contract used by the worker's admission check
//! (spec §4.6).

use super::*;

#[test]
fn array_bytes_size_is_element_count_times_four() {
    let arr = GpuArray::new(vec![0.0; 10], false);
    assert_eq!(arr.bytes_size(), 40);
}

#[test]
fn scalar_arg_sizes_match_their_packed_width() {
    assert_eq!(GpuArg::Int(1).byte_size(), 4);
    assert_eq!(GpuArg::Float(1.0).byte_size(), 4);
}

#[test]
fn array_arg_size_delegates_to_the_array() {
    let arr = GpuArray::new(vec![0.0; 16], true);
    let arg = GpuArg::Array(&arr);
    assert_eq!(arg.byte_size(), arr.bytes_size());
}

#[test]
fn release_clears_any_device_buffer() {
    let mut arr = GpuArray::new(vec![1.0, 2.0], false);
    assert!(arr.buffer().is_none());
    arr.release();
    assert!(arr.buffer().is_none());
}
