// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! L6 — remove accepted tasks (spec §4.7). Consumes `accepted_queue`;
//! re-reads state and skips if the task is no longer flagged accepted.

use gst_core::{TaskId, TaskState};
use tokio::sync::mpsc;
use tracing::warn;

use crate::Context;

/// A re-enqueued id whose state no longer carries `is_accepted` is a stale
/// observation, not a commitment (spec §4.7 "Ordering and tie-breaks").
fn should_remove(state: &TaskState) -> bool {
    state.is_accepted
}

async fn process_one(ctx: &Context, task_id: &TaskId) {
    let state = match ctx.store.get_task_state(task_id).await {
        Ok(state) => state,
        Err(err) => {
            warn!(error = %err, %task_id, "remove_accepted: skipping, task no longer readable");
            return;
        }
    };

    if !should_remove(&state) {
        return;
    }

    if let Err(err) = ctx.store.remove_task(task_id).await {
        warn!(error = %err, %task_id, "remove_accepted: failed to remove task record");
        return;
    }

    let filenames = state.all_filenames();
    if let Err(err) = ctx.files.remove_files(&filenames) {
        warn!(error = %err, %task_id, "remove_accepted: failed to remove artifact files");
    }
}

pub async fn tick(ctx: &Context, accepted_rx: &mut mpsc::UnboundedReceiver<TaskId>) {
    while let Ok(task_id) = accepted_rx.try_recv() {
        process_one(ctx, &task_id).await;
    }
}

#[cfg(test)]
#[path = "remove_accepted_tests.rs"]
mod tests;
