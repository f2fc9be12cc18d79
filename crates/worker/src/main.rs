// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gst-worker`: the per-task GPU worker process (C6). Spawned by the
//! pull's launcher script with the task id as its sole argument; runs the
//! full lifecycle once and exits.

use std::time::Duration;

use gst_core::{AppConfig, TaskId};
use gst_gpu::GpuRig;
use gst_storage::{FileStore, RedisConfig, TaskStore, DEFAULT_TTL};
use gst_worker::{run_task, WorkerCtx};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let task_id = std::env::args().nth(1).ok_or("usage: gst-worker <task_id>")?;
    let task_id = TaskId::new(task_id);

    let config = AppConfig::load().map_err(|e| {
        error!("{e}");
        e
    })?;

    let redis_config = RedisConfig {
        host: config.redis.host.clone(),
        port: config.redis.port,
        password: config.redis.password.clone(),
        db_index: config.redis.db_index,
    };
    let store = TaskStore::connect(&redis_config, ttl(&config)).await?;
    let files = FileStore::new(&config.storage_root)?;

    info!(task_id = %task_id, "discovering GPU rig");
    let rig = GpuRig::discover().await?;

    let ctx = WorkerCtx { store, files, rig };

    info!(task_id = %task_id, "starting worker lifecycle");
    if let Err(e) = run_task(&ctx, &task_id).await {
        error!(task_id = %task_id, error = %e, "worker exited with an unrecoverable precondition error");
        return Err(e.into());
    }

    info!(task_id = %task_id, "worker lifecycle complete");
    Ok(())
}

fn ttl(_config: &AppConfig) -> Duration {
    DEFAULT_TTL
}
