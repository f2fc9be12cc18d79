// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! L2 — scan for kill intents (spec §4.7).

use gst_core::TaskState;
use tracing::warn;

use crate::Context;

/// A task belongs in `kill_queue` iff it asked to be killed and has not
/// already been killed.
fn should_enqueue(state: &TaskState) -> bool {
    state.is_need_kill && state.status != gst_core::TaskStatus::Killed
}

pub async fn tick(ctx: &Context) {
    let task_ids = match ctx.store.all_task_ids().await {
        Ok(ids) => ids,
        Err(err) => {
            warn!(error = %err, "scan_kill: failed to list task ids");
            return;
        }
    };

    for task_id in task_ids {
        match ctx.store.get_task_state(&task_id).await {
            Ok(state) if should_enqueue(&state) => ctx.queues.push_kill(task_id),
            Ok(_) => {}
            Err(err) => warn!(error = %err, %task_id, "scan_kill: failed to read task state"),
        }
    }
}

#[cfg(test)]
#[path = "scan_kill_tests.rs"]
mod tests;
