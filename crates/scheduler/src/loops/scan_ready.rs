// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! L3 — scan for ready tasks (spec §4.7). Duplicate enqueues are possible
//! and expected; consumers re-validate on dequeue.

use gst_core::{TaskState, TaskStatus};
use tracing::warn;

use crate::Context;

fn should_enqueue(state: &TaskState) -> bool {
    state.status == TaskStatus::Ready
}

pub async fn tick(ctx: &Context) {
    let task_ids = match ctx.store.all_task_ids().await {
        Ok(ids) => ids,
        Err(err) => {
            warn!(error = %err, "scan_ready: failed to list task ids");
            return;
        }
    };

    for task_id in task_ids {
        match ctx.store.get_task_state(&task_id).await {
            Ok(state) if should_enqueue(&state) => {
                ctx.queues.push_ready(state.type_, task_id);
            }
            Ok(_) => {}
            Err(err) => warn!(error = %err, %task_id, "scan_ready: failed to read task state"),
        }
    }
}

#[cfg(test)]
#[path = "scan_ready_tests.rs"]
mod tests;
