// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The GPU worker's per-task lifecycle (spec §4.6, C6).
//!
//! ```text
//! 1. verify task_id exists, status = ready, input + script files present
//! 2. log "Task running..."
//! 3. load args (C1), prepare device args
//! 4. acquire GPU (RAM check, then free-card probe) — resource exhaustion rolls back
//! 5. compile/run kernel, copy result back, release device buffers
//! 6. post-process, write output_args_filename (C1)
//! 7. finalize: output present -> finished, else -> failed; always "Task was closed"
//! ```

use gst_codec::{Array, DelaysFinderParameters};
use gst_core::{TaskId, TaskState, TaskStatus, TaskType};
use gst_gpu::{GpuArg, GpuArray, GpuRig, GpuTask};
use gst_storage::{FileStore, TaskStore};
use tracing::{info, warn};

use crate::error::WorkerError;
use crate::kernel::{DELAYS_KERNEL_FUNCTION, DELAYS_KERNEL_SOURCE};
use crate::reduce::reduce_correlations;

/// Dependencies the worker needs for one task's lifetime.
pub struct WorkerCtx {
    pub store: TaskStore,
    pub files: FileStore,
    pub rig: GpuRig,
}

/// Run the full C6 lifecycle for `task_id`. Never returns an error to the
/// caller for anything the worker itself is supposed to absorb (spec §7:
/// "the worker distinguishes between rollback-eligible ... and fatal"
/// errors and handles both by writing store state) — the `Result` here
/// only reports preconditions that make the task impossible to even start.
pub async fn run_task(ctx: &WorkerCtx, task_id: &TaskId) -> Result<(), WorkerError> {
    let mut state = ctx.store.get_task_state(task_id).await?;
    verify_preconditions(&ctx.files, &state)?;

    ctx.store.add_log_message(task_id, "Task running...").await?;

    let run_result: Result<(), WorkerError> = async {
        let result_bytes = run_inner(ctx, &state).await?;
        ctx.files.save_binary_data(&state.output_args_filename, &result_bytes)?;
        Ok(())
    }
    .await;

    match run_result {
        Ok(()) => {
            finalize(ctx, &mut state, task_id).await?;
        }
        Err(err) if err.is_rollback_eligible() => {
            warn!(task_id = %task_id, error = %err, "Process not run now but will run later");
            ctx.store.add_log_message(task_id, "Process not run now but will run later").await?;
            state.rollback();
            ctx.store.update_task_state(task_id, &state).await?;
        }
        Err(err) => {
            ctx.store.add_log_message(task_id, &err.to_string()).await?;
            state.status = TaskStatus::Failed;
            ctx.store.update_task_state(task_id, &state).await?;
        }
    }

    ctx.store.add_log_message(task_id, "Task was closed").await?;
    Ok(())
}

fn verify_preconditions(files: &FileStore, state: &TaskState) -> Result<(), WorkerError> {
    if state.status != TaskStatus::Ready {
        return Err(WorkerError::NotReady);
    }
    if !files.is_file_exist(&state.input_args_filename)? {
        return Err(WorkerError::NotReady);
    }
    if !files.is_file_exist(&state.script_filename)? {
        return Err(WorkerError::NotReady);
    }
    Ok(())
}

/// Does steps 3-6 and returns the packed result bytes on success. Does not
/// touch the task store's status — the caller decides rollback vs. failed
/// vs. finalize based on what comes back.
async fn run_inner(ctx: &WorkerCtx, state: &TaskState) -> Result<Vec<u8>, WorkerError> {
    match state.type_ {
        TaskType::Delays => run_delays(ctx, state).await,
        other => Err(WorkerError::UnsupportedTaskType(other)),
    }
}

async fn run_delays(ctx: &WorkerCtx, state: &TaskState) -> Result<Vec<u8>, WorkerError> {
    let input_bytes = ctx.files.get_binary_data_from_file(&state.input_args_filename)?;
    let params = DelaysFinderParameters::create_from_bytes(&input_bytes)?;

    let signals = params.signals.as_f32_vec()?;
    let output_len = (params.stations_count() * params.scanner_size).max(0) as usize;
    let required_bytes = args_bytes_size(&params, output_len);

    if !ctx.rig.is_available_ram_memory()? {
        return Err(WorkerError::NoFreeRam { required_bytes: required_bytes as u64 });
    }

    let card = ctx
        .rig
        .get_free_gpu_card(required_bytes as i64)
        .await
        .map_err(|_| WorkerError::NoFreeGpuCard { required_bytes: required_bytes as u64 })?
        .clone();

    let gpu_task = GpuTask::new(card, DELAYS_KERNEL_SOURCE)?;

    let mut signals_arr = GpuArray::new(signals, true);
    let mut output_arr = GpuArray::new(vec![0.0f32; output_len], false);
    signals_arr.load_to_gpu(gpu_task.card())?;
    output_arr.load_to_gpu(gpu_task.card())?;

    let args = [
        GpuArg::Array(&signals_arr),
        GpuArg::Int(params.signals_length()),
        GpuArg::Int(params.window_size),
        GpuArg::Int(params.scanner_size),
        GpuArg::Int(params.base_station_index),
        GpuArg::Array(&output_arr),
    ];
    gpu_task.run(DELAYS_KERNEL_FUNCTION, &args)?;

    let correlations = output_arr.get_from_gpu()?.to_vec();
    signals_arr.release();
    output_arr.release();

    let result: Array = reduce_correlations(&params, &correlations);
    Ok(result.convert_to_bytes()?)
}

/// Sum of `nbytes` for device-bound arrays plus the in-memory size of
/// scalar args (spec §4.6): the size used for both the RAM and GPU
/// admission checks.
fn args_bytes_size(params: &DelaysFinderParameters, output_len: usize) -> usize {
    let scalars = 4 * std::mem::size_of::<i32>() + std::mem::size_of::<f64>();
    params.signals.data.len() + output_len * std::mem::size_of::<f32>() + scalars
}

async fn finalize(ctx: &WorkerCtx, state: &mut TaskState, task_id: &TaskId) -> Result<(), WorkerError> {
    if ctx.files.is_file_exist(&state.output_args_filename)? {
        state.status = TaskStatus::Finished;
        ctx.store.update_task_state(task_id, state).await?;
        info!(task_id = %task_id, "Task successfully completed");
        ctx.store.add_log_message(task_id, "Task successfully completed").await?;
    } else {
        state.status = TaskStatus::Failed;
        ctx.store.update_task_state(task_id, state).await?;
        ctx.store.add_log_message(task_id, "Failed task processing").await?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
