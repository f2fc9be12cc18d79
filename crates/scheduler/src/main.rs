// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gst-pulld`: the task-pull daemon (C7). Runs the six polling loops plus
//! one run loop per task type until terminated, then stops every loop
//! between polls (spec §4.7, "Cancellation").

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use gst_core::AppConfig;
use gst_gpu::GpuRig;
use gst_scheduler::queues::QueueHandles;
use gst_scheduler::{spawn_all, Context};
use gst_storage::{FileStore, RedisConfig, TaskStore, DEFAULT_TTL};
use tracing::info;

/// Log file size above which `rotate_log_if_needed` shifts it out of the way
/// before the next run's `non_blocking` writer opens it.
const MAX_LOG_SIZE: u64 = 10 * 1024 * 1024;

/// Number of rotated log files kept (`pulld.log.1`, `.2`, `.3`).
const MAX_ROTATED_LOGS: u32 = 3;

/// Rotates `log_path` out of the way if it exceeds [`MAX_LOG_SIZE`], shifting
/// `pulld.log` -> `pulld.log.1` -> ... -> `pulld.log.3` (oldest dropped).
/// Best-effort: a failure here must never stop the daemon from starting.
fn rotate_log_if_needed(log_path: &Path) {
    let size = match std::fs::metadata(log_path) {
        Ok(m) => m.len(),
        Err(_) => return,
    };
    if size < MAX_LOG_SIZE {
        return;
    }

    let log_str = log_path.display().to_string();
    for i in (1..MAX_ROTATED_LOGS).rev() {
        let from = format!("{log_str}.{i}");
        let to = format!("{log_str}.{}", i + 1);
        let _ = std::fs::rename(&from, &to);
    }
    let _ = std::fs::rename(log_path, format!("{log_str}.1"));
}

/// Sets up a non-blocking file writer at `config.log_path`. The returned
/// guard must be kept alive for the process's lifetime; dropping it early
/// truncates in-flight log writes.
fn setup_logging(config: &AppConfig) -> std::io::Result<tracing_appender::non_blocking::WorkerGuard> {
    if let Some(parent) = config.log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let dir = config.log_path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = config.log_path.file_name().unwrap_or_else(|| std::ffi::OsStr::new("pulld.log"));
    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(if config.is_debug { "debug" } else { "info" }));

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(non_blocking).init();
    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| {
        eprintln!("{e}");
        e
    })?;

    rotate_log_if_needed(&config.log_path);
    let _log_guard = setup_logging(&config)?;

    let redis_config = RedisConfig {
        host: config.redis.host.clone(),
        port: config.redis.port,
        password: config.redis.password.clone(),
        db_index: config.redis.db_index,
    };
    let store = TaskStore::connect(&redis_config, DEFAULT_TTL).await?;
    let files = FileStore::new(&config.storage_root)?;

    info!("discovering GPU rig");
    let rig = Arc::new(GpuRig::discover().await?);

    let (queues, queue_rx) = QueueHandles::new();
    let ctx = Context {
        store,
        files,
        rig,
        queues,
        cpu_cores: num_cpus(),
        sleep: Duration::from_secs(config.sleep_secs),
    };

    info!(cpu_cores = ctx.cpu_cores, sleep_secs = config.sleep_secs, "starting pull loops");
    let handles = spawn_all(ctx, queue_rx);

    tokio::signal::ctrl_c().await?;
    info!("shutdown signal received, stopping pull loops");
    handles.shutdown().await;
    Ok(())
}

/// The admission gate in L7 is sized to the host's logical core count; the
/// source reads this once at startup, not per cycle.
fn num_cpus() -> usize {
    std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}
