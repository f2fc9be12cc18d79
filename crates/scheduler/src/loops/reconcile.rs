// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! L1 — reconcile the file store with the task store (spec §4.7). The only
//! loop that deletes files behind the worker's back; it must never delete a
//! filename still referenced by some task state.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::Context;

/// Filenames present on disk but absent from the union known to the task
/// store. Split out as pure logic so it is unit-testable without a live
/// store.
fn orphans(on_disk: &[String], referenced: &HashSet<String>) -> Vec<String> {
    on_disk.iter().filter(|name| !referenced.contains(*name)).cloned().collect()
}

pub async fn tick(ctx: &Context) {
    let referenced = match ctx.store.all_filenames().await {
        Ok(names) => names,
        Err(err) => {
            warn!(error = %err, "reconcile: failed to enumerate task-store filenames");
            return;
        }
    };

    let on_disk = match ctx.files.all_filenames() {
        Ok(names) => names,
        Err(err) => {
            warn!(error = %err, "reconcile: failed to list file-store contents");
            return;
        }
    };

    for filename in orphans(&on_disk, &referenced) {
        if let Err(err) = ctx.files.remove_file(&filename) {
            warn!(error = %err, filename, "reconcile: failed to remove orphan file");
        } else {
            debug!(filename, "reconcile: removed orphan file");
        }
    }
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;
