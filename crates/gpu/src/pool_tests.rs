// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `GpuRig::discover` requires a real OpenCL platform, which this
//! workspace's test environment does not provide. These cover the
//! lookup-miss contracts against an empty pool.

use super::*;

#[test]
fn bus_id_lookup_on_empty_pool_is_not_found() {
    let rig = GpuRig { cards: Vec::new() };
    let err = rig.get_gpu_card_by_bus_id(7).unwrap_err();
    assert!(matches!(err, GpuError::BusIdNotFound(7)));
}

#[test]
fn uuid_lookup_on_empty_pool_is_not_found() {
    let rig = GpuRig { cards: Vec::new() };
    let err = rig.get_gpu_card_by_uuid("GPU-missing").unwrap_err();
    assert!(matches!(err, GpuError::UuidNotFound(_)));
}
