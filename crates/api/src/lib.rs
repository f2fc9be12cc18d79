// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gst-api: the HTTP surface (C8, spec §6), mounted at `/background`.

pub mod error;
pub mod handlers;
pub mod launcher;
pub mod state;

pub use state::AppState;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

/// Builds the full router, nested under `/background` per spec §6.
///
/// `/load-args` disables axum's default 2 MiB body limit: the configured
/// upload cap (default 1024 MiB) is enforced inside the handler itself, so
/// the 413 response carries the same JSON `detail` body as every other
/// rejection rather than axum's bare status line.
pub fn build_router(state: AppState) -> Router {
    let background = Router::new()
        .route("/create", post(handlers::create))
        .route("/state", get(handlers::get_state))
        .route("/load-args", post(handlers::load_args).layer(DefaultBodyLimit::disable()))
        .route("/run", post(handlers::run))
        .route("/kill", post(handlers::kill))
        .route("/accept", post(handlers::accept))
        .route("/log", get(handlers::log))
        .route("/result", get(handlers::result))
        .route("/ping", get(handlers::ping))
        .with_state(state);

    Router::new().nest("/background", background).layer(TraceLayer::new_for_http())
}
