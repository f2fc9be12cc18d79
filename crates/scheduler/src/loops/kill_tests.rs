// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use gst_core::{TaskState, TaskType, UserId, NO_PID};

use super::*;

fn state(pid: i64, is_need_kill: bool) -> TaskState {
    let mut state = TaskState::new(UserId::new("u"), TaskType::Delays, 0);
    state.pid = pid;
    state.is_need_kill = is_need_kill;
    state
}

#[test]
fn a_task_that_never_asked_to_be_killed_is_skipped() {
    assert_eq!(decide(&state(42, false), Some(ProcessStatus::Running)), Action::Skip);
}

#[test]
fn a_task_with_no_pid_is_marked_killed_immediately() {
    assert_eq!(decide(&state(NO_PID, true), None), Action::MarkKilled);
}

#[test]
fn a_running_process_gets_a_sigterm_not_an_immediate_mark() {
    assert_eq!(decide(&state(42, true), Some(ProcessStatus::Running)), Action::SendTerm);
}

#[test]
fn a_zombie_process_is_marked_killed() {
    assert_eq!(decide(&state(42, true), Some(ProcessStatus::Zombie)), Action::MarkKilled);
}

#[test]
fn an_already_dead_process_is_marked_killed() {
    assert_eq!(decide(&state(42, true), Some(ProcessStatus::Dead)), Action::MarkKilled);
}
