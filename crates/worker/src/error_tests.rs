// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use gst_core::ErrorKind;

use super::*;

#[test]
fn not_ready_maps_to_precondition() {
    assert_eq!(ErrorKind::from(WorkerError::NotReady), ErrorKind::Precondition);
}

#[test]
fn resource_exhaustion_maps_to_resource_exhausted() {
    assert_eq!(
        ErrorKind::from(WorkerError::NoFreeRam { required_bytes: 1 }),
        ErrorKind::ResourceExhausted
    );
    assert_eq!(
        ErrorKind::from(WorkerError::NoFreeGpuCard { required_bytes: 1 }),
        ErrorKind::ResourceExhausted
    );
}

#[test]
fn only_resource_errors_are_rollback_eligible() {
    assert!(WorkerError::NoFreeRam { required_bytes: 1 }.is_rollback_eligible());
    assert!(WorkerError::NoFreeGpuCard { required_bytes: 1 }.is_rollback_eligible());
    assert!(!WorkerError::NotReady.is_rollback_eligible());
    assert!(!WorkerError::UnsupportedTaskType(gst_core::TaskType::Location).is_rollback_eligible());
}

#[test]
fn unsupported_task_type_maps_to_internal() {
    assert_eq!(
        ErrorKind::from(WorkerError::UnsupportedTaskType(gst_core::TaskType::Fault)),
        ErrorKind::Internal
    );
}
