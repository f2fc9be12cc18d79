// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! L4 — scan for accepted tasks (spec §4.7).

use gst_core::TaskState;
use tracing::warn;

use crate::Context;

fn should_enqueue(state: &TaskState) -> bool {
    state.is_accepted
}

pub async fn tick(ctx: &Context) {
    let task_ids = match ctx.store.all_task_ids().await {
        Ok(ids) => ids,
        Err(err) => {
            warn!(error = %err, "scan_accepted: failed to list task ids");
            return;
        }
    };

    for task_id in task_ids {
        match ctx.store.get_task_state(&task_id).await {
            Ok(state) if should_enqueue(&state) => ctx.queues.push_accepted(task_id),
            Ok(_) => {}
            Err(err) => warn!(error = %err, %task_id, "scan_accepted: failed to read task state"),
        }
    }
}

#[cfg(test)]
#[path = "scan_accepted_tests.rs"]
mod tests;
