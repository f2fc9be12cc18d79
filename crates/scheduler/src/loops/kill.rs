// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! L5 — the kill loop (spec §4.7). Consumes `kill_queue`; re-reads state
//! before acting, since a scan-enqueue is only an observation.

use gst_core::{TaskState, TaskStatus, NO_PID};
use tokio::sync::mpsc;
use tracing::warn;

use crate::os_process::{self, ProcessStatus};
use crate::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Skip,
    MarkKilled,
    SendTerm,
}

/// Pure decision given the freshly re-read state and, if the task has a
/// pid, its resolved OS process status.
fn decide(state: &TaskState, process: Option<ProcessStatus>) -> Action {
    if !state.is_need_kill {
        return Action::Skip;
    }
    if state.pid == NO_PID {
        return Action::MarkKilled;
    }
    match process {
        Some(ProcessStatus::Running) => Action::SendTerm,
        Some(ProcessStatus::Zombie) | Some(ProcessStatus::Dead) | None => Action::MarkKilled,
    }
}

async fn process_one(ctx: &Context, task_id: &gst_core::TaskId) {
    let mut state = match ctx.store.get_task_state(task_id).await {
        Ok(state) => state,
        Err(err) => {
            warn!(error = %err, %task_id, "kill: skipping, task no longer readable");
            return;
        }
    };

    let process = if state.pid == NO_PID { None } else { Some(os_process::process_status(state.pid)) };

    match decide(&state, process) {
        Action::Skip => {}
        Action::MarkKilled => {
            state.status = TaskStatus::Killed;
            if let Err(err) = ctx.store.update_task_state(task_id, &state).await {
                warn!(error = %err, %task_id, "kill: failed to write killed status");
                return;
            }
            if let Err(err) = ctx.store.add_log_message(task_id, "Task was killed").await {
                warn!(error = %err, %task_id, "kill: failed to append log");
            }
        }
        Action::SendTerm => {
            if let Err(err) = os_process::kill_process(state.pid).await {
                warn!(error = %err, %task_id, pid = state.pid, "kill: SIGTERM delivery failed");
            }
        }
    }
}

pub async fn tick(ctx: &Context, kill_rx: &mut mpsc::UnboundedReceiver<gst_core::TaskId>) {
    while let Ok(task_id) = kill_rx.try_recv() {
        process_one(ctx, &task_id).await;
    }
}

#[cfg(test)]
#[path = "kill_tests.rs"]
mod tests;
