// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wires the six polling loops and the per-type run loops into independent
//! tasks sharing one `Context` and one shutdown signal (spec §4.7, §9).

use gst_core::TaskType;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::info;

use crate::queues::QueueReceivers;
use crate::{loops, Context};

const ALL_TASK_TYPES: [TaskType; 3] = [TaskType::Delays, TaskType::Location, TaskType::Fault];

/// Handles to every spawned loop, plus the means to stop them. Dropping
/// this without calling [`Handles::shutdown`] leaves the loops running
/// (they are detached tokio tasks) — shutdown is always explicit.
pub struct Handles {
    shutdown_tx: watch::Sender<bool>,
    tasks: Vec<JoinHandle<()>>,
}

impl Handles {
    /// Signals every loop to stop at its next poll boundary and waits for
    /// them to exit. In-flight worker subprocesses are left running (spec
    /// §4.7 "Cancellation").
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(true);
        for task in self.tasks {
            let _ = task.await;
        }
    }
}

/// Runs `tick` on `ctx.sleep` cadence until `shutdown` fires, selecting
/// between the two so the loop always stops between polls, never mid-tick.
async fn poll_loop<F, Fut>(sleep: std::time::Duration, mut shutdown: watch::Receiver<bool>, mut tick: F)
where
    F: FnMut() -> Fut + Send,
    Fut: std::future::Future<Output = ()> + Send,
{
    let mut interval = tokio::time::interval(sleep);
    interval.tick().await; // first tick fires immediately; consume it before the loop
    loop {
        tick().await;
        tokio::select! {
            _ = interval.tick() => {}
            _ = shutdown.changed() => break,
        }
    }
}

pub fn spawn_all(ctx: Context, queue_rx: QueueReceivers) -> Handles {
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let QueueReceivers { mut kill_rx, mut accepted_rx } = queue_rx;
    let mut tasks = Vec::new();

    {
        let ctx = ctx.clone();
        let shutdown_rx = shutdown_rx.clone();
        tasks.push(tokio::spawn(async move {
            poll_loop(ctx.sleep, shutdown_rx, || loops::reconcile::tick(&ctx)).await;
        }));
    }
    {
        let ctx = ctx.clone();
        let shutdown_rx = shutdown_rx.clone();
        tasks.push(tokio::spawn(async move {
            poll_loop(ctx.sleep, shutdown_rx, || loops::scan_kill::tick(&ctx)).await;
        }));
    }
    {
        let ctx = ctx.clone();
        let shutdown_rx = shutdown_rx.clone();
        tasks.push(tokio::spawn(async move {
            poll_loop(ctx.sleep, shutdown_rx, || loops::scan_ready::tick(&ctx)).await;
        }));
    }
    {
        let ctx = ctx.clone();
        let shutdown_rx = shutdown_rx.clone();
        tasks.push(tokio::spawn(async move {
            poll_loop(ctx.sleep, shutdown_rx, || loops::scan_accepted::tick(&ctx)).await;
        }));
    }
    {
        let ctx = ctx.clone();
        let shutdown_rx = shutdown_rx.clone();
        tasks.push(tokio::spawn(async move {
            poll_loop(ctx.sleep, shutdown_rx, || loops::kill::tick(&ctx, &mut kill_rx)).await;
        }));
    }
    {
        let ctx = ctx.clone();
        let shutdown_rx = shutdown_rx.clone();
        tasks.push(tokio::spawn(async move {
            poll_loop(ctx.sleep, shutdown_rx, || loops::remove_accepted::tick(&ctx, &mut accepted_rx)).await;
        }));
    }

    for type_ in ALL_TASK_TYPES {
        let ctx = ctx.clone();
        let shutdown_rx = shutdown_rx.clone();
        tasks.push(tokio::spawn(async move {
            poll_loop(ctx.sleep, shutdown_rx, || loops::run::tick(&ctx, type_)).await;
        }));
    }

    info!(loop_count = tasks.len(), "scheduler: all loops spawned");
    Handles { shutdown_tx, tasks }
}
