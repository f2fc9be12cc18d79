// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use gst_storage::{FileStore, TaskStore};

/// Shared handler state. Both halves are cheaply clonable, so `AppState`
/// is too, and is plugged in via `axum::Extension`/`State` rather than an
/// `Arc` wrapper.
#[derive(Clone)]
pub struct AppState {
    pub store: TaskStore,
    pub files: FileStore,
    /// Per-user cap on concurrently tracked tasks, checked with strict `>`
    /// against the count *after* the would-be creation (spec §9 Open
    /// Question: preserve the source's off-by-one-looking but intentional
    /// semantics, do not "fix" it to `>=`).
    pub per_user_task_cap: usize,
    /// `/load-args` body size cap in bytes.
    pub upload_cap_bytes: usize,
}
