// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The three in-memory pending sets the six loops coordinate through (spec
//! §4.7): `kill_queue`, `accepted_queue`, and `ready_index`. All three are
//! lossy-tolerant — a loop that re-enqueues an id already present is
//! expected and harmless, since consumers re-validate state on dequeue
//! (spec: "consumers are responsible for re-validating state on dequeue").

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use gst_core::{TaskId, TaskType};
use parking_lot::Mutex;
use tokio::sync::mpsc;

/// The producer-facing half: cloned into every scan loop (L2-L4) that
/// enqueues work.
#[derive(Clone)]
pub struct QueueHandles {
    kill_tx: mpsc::UnboundedSender<TaskId>,
    accepted_tx: mpsc::UnboundedSender<TaskId>,
    ready_index: Arc<Mutex<HashMap<TaskType, VecDeque<TaskId>>>>,
}

/// The consumer-facing half: owned exclusively by L5 and L6 respectively.
/// `mpsc::UnboundedReceiver` has a single consumer by construction, so
/// these are not wrapped for sharing.
pub struct QueueReceivers {
    pub kill_rx: mpsc::UnboundedReceiver<TaskId>,
    pub accepted_rx: mpsc::UnboundedReceiver<TaskId>,
}

impl QueueHandles {
    pub fn new() -> (Self, QueueReceivers) {
        let (kill_tx, kill_rx) = mpsc::unbounded_channel();
        let (accepted_tx, accepted_rx) = mpsc::unbounded_channel();
        (
            Self {
                kill_tx,
                accepted_tx,
                ready_index: Arc::new(Mutex::new(HashMap::new())),
            },
            QueueReceivers { kill_rx, accepted_rx },
        )
    }

    /// L2: enqueue a task seen with `is_need_kill = true`. A full channel
    /// never blocks the scan loop (unbounded); a closed receiver (consumer
    /// task died) is silently dropped — the next reconciliation pass will
    /// naturally stop finding anything to do.
    pub fn push_kill(&self, task_id: TaskId) {
        let _ = self.kill_tx.send(task_id);
    }

    /// L4: enqueue a task seen with `is_accepted = true`.
    pub fn push_accepted(&self, task_id: TaskId) {
        let _ = self.accepted_tx.send(task_id);
    }

    /// L3: enqueue a task seen in `ready`, FIFO per type. The per-type
    /// queue is created on first sighting.
    pub fn push_ready(&self, type_: TaskType, task_id: TaskId) {
        self.ready_index.lock().entry(type_).or_default().push_back(task_id);
    }

    /// L7: dequeue the next ready id for one type, FIFO.
    pub fn pop_ready(&self, type_: TaskType) -> Option<TaskId> {
        self.ready_index.lock().get_mut(&type_).and_then(VecDeque::pop_front)
    }

    /// Number of ids currently queued for `type_` (used by tests and
    /// diagnostics).
    pub fn ready_len(&self, type_: TaskType) -> usize {
        self.ready_index.lock().get(&type_).map(VecDeque::len).unwrap_or(0)
    }
}

#[cfg(test)]
#[path = "queues_tests.rs"]
mod tests;
