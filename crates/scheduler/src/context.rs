// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared context every loop is handed a clone of. Cheaply clonable: every
//! field is either already `Clone` (the store) or wrapped in an `Arc`.

use std::sync::Arc;
use std::time::Duration;

use gst_gpu::GpuRig;
use gst_storage::{FileStore, TaskStore};

use crate::queues::QueueHandles;

#[derive(Clone)]
pub struct Context {
    pub store: TaskStore,
    pub files: FileStore,
    pub rig: Arc<GpuRig>,
    pub queues: QueueHandles,
    /// Global admission ceiling on concurrently `running` tasks (spec
    /// §4.7 L7: "`|active_task_ids| < cpu_cores`").
    pub cpu_cores: usize,
    /// Poll cadence shared by every loop (`SLEEP`, spec §4.7, default 10s).
    pub sleep: Duration,
}
