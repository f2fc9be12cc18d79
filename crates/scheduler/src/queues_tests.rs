// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use gst_core::TaskType;

use super::*;

#[test]
fn ready_index_is_fifo_per_type() {
    let (handles, _rx) = QueueHandles::new();
    handles.push_ready(TaskType::Delays, TaskId::new("a"));
    handles.push_ready(TaskType::Delays, TaskId::new("b"));

    assert_eq!(handles.pop_ready(TaskType::Delays), Some(TaskId::new("a")));
    assert_eq!(handles.pop_ready(TaskType::Delays), Some(TaskId::new("b")));
    assert_eq!(handles.pop_ready(TaskType::Delays), None);
}

#[test]
fn ready_index_is_independent_per_type() {
    let (handles, _rx) = QueueHandles::new();
    handles.push_ready(TaskType::Delays, TaskId::new("a"));
    handles.push_ready(TaskType::Location, TaskId::new("b"));

    assert_eq!(handles.ready_len(TaskType::Delays), 1);
    assert_eq!(handles.ready_len(TaskType::Location), 1);
    assert_eq!(handles.pop_ready(TaskType::Fault), None);
}

#[test]
fn duplicate_enqueues_are_tolerated() {
    let (handles, _rx) = QueueHandles::new();
    handles.push_ready(TaskType::Delays, TaskId::new("a"));
    handles.push_ready(TaskType::Delays, TaskId::new("a"));
    assert_eq!(handles.ready_len(TaskType::Delays), 2);
}

#[tokio::test]
async fn kill_and_accepted_queues_round_trip() {
    let (handles, mut rx) = QueueHandles::new();
    handles.push_kill(TaskId::new("k1"));
    handles.push_accepted(TaskId::new("a1"));

    assert_eq!(rx.kill_rx.recv().await, Some(TaskId::new("k1")));
    assert_eq!(rx.accepted_rx.recv().await, Some(TaskId::new("a1")));
}
