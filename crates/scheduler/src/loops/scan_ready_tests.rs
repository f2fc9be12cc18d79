// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use gst_core::{TaskState, TaskStatus, TaskType, UserId};

use super::*;

fn state(status: TaskStatus) -> TaskState {
    let mut state = TaskState::new(UserId::new("u"), TaskType::Delays, 0);
    state.status = status;
    state
}

#[test]
fn only_ready_tasks_are_enqueued() {
    assert!(should_enqueue(&state(TaskStatus::Ready)));
    assert!(!should_enqueue(&state(TaskStatus::New)));
    assert!(!should_enqueue(&state(TaskStatus::Running)));
}
