// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gst-api`: the HTTP surface (C8). Binds `APP_HOST:APP_PORT` and serves
//! every endpoint in spec §6 under `/background`.

use gst_api::{build_router, AppState};
use gst_core::AppConfig;
use gst_storage::{FileStore, RedisConfig, TaskStore, DEFAULT_TTL};
use tracing::{error, info};

/// Per-user task cap (spec §9 Open Question, SPEC_FULL.md §C.2).
const PER_USER_TASK_CAP: usize = 200;
/// `/load-args` body size cap in bytes (1024 MiB, SPEC_FULL.md §C.2).
const UPLOAD_CAP_BYTES: usize = 1024 * 1024 * 1024;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

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
    let store = TaskStore::connect(&redis_config, DEFAULT_TTL).await?;
    let files = FileStore::new(&config.storage_root)?;

    let state = AppState {
        store,
        files,
        per_user_task_cap: PER_USER_TASK_CAP,
        upload_cap_bytes: UPLOAD_CAP_BYTES,
    };
    let app = build_router(state);

    let addr = format!("{}:{}", config.app_host, config.app_port);
    info!(%addr, "gst-api listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
