// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! L7 — one run loop per task type (spec §4.7). `TaskType` is a closed,
//! three-variant enum, so "for each discovered task type" becomes three
//! statically spawned loops rather than runtime discovery.

use gst_core::{TaskStatus, TaskType};
use tracing::{info, warn};

use crate::Context;

/// Global admission: a launch is attempted only while there is spare CPU
/// concurrency and host RAM headroom.
fn admitted(active_count: usize, cpu_cores: usize, ram_available: bool) -> bool {
    active_count < cpu_cores && ram_available
}

async fn launch(ctx: &Context, task_id: &gst_core::TaskId) {
    let mut state = match ctx.store.get_task_state(task_id).await {
        Ok(state) => state,
        Err(err) => {
            warn!(error = %err, %task_id, "run: skipping, task no longer readable");
            return;
        }
    };

    if state.status != TaskStatus::Ready {
        return;
    }

    let input_present = ctx.files.is_file_exist(&state.input_args_filename).unwrap_or(false);
    let script_present = ctx.files.is_file_exist(&state.script_filename).unwrap_or(false);
    if !input_present || !script_present {
        return;
    }

    let script_path = ctx.files.root().join(&state.script_filename);
    let child = match tokio::process::Command::new(&script_path).spawn() {
        Ok(child) => child,
        Err(err) => {
            warn!(error = %err, %task_id, "run: failed to spawn launcher script");
            return;
        }
    };

    let Some(pid) = child.id() else {
        warn!(%task_id, "run: spawned process has no pid, already reaped");
        return;
    };
    // Deliberately not awaited: the pull never waits on worker subprocesses
    // (spec §4.7). Dropping the handle here does not kill the child.
    drop(child);

    state.pid = pid as i64;
    state.status = TaskStatus::Running;
    if let Err(err) = ctx.store.update_task_state(task_id, &state).await {
        warn!(error = %err, %task_id, "run: failed to record running status");
        return;
    }
    info!(%task_id, pid, "run: launched task");
}

/// One pass of a single task-type's run loop: attempt to launch at most
/// one ready task, re-checking admission and state before each launch.
pub async fn tick(ctx: &Context, type_: TaskType) {
    let Some(task_id) = ctx.queues.pop_ready(type_) else {
        return;
    };

    let active = match ctx.store.active_task_ids().await {
        Ok(ids) => ids.len(),
        Err(err) => {
            warn!(error = %err, "run: failed to count active tasks");
            return;
        }
    };
    let ram_available = ctx.rig.is_available_ram_memory().unwrap_or(false);

    if !admitted(active, ctx.cpu_cores, ram_available) {
        // Not admitted this cycle; put the id back for the next one.
        ctx.queues.push_ready(type_, task_id);
        return;
    }

    launch(ctx, &task_id).await;
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
