// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Launcher-script templating (spec §6, SPEC_FULL.md §C.3). Only
//! `TaskType::Delays` has a template; other task types never acquire a
//! script and so can never reach `ready` — spec's own stated, preserved
//! behavior.

use gst_core::TaskType;

/// `{task_id}` is substituted verbatim; task ids are uuid-simple strings
/// (see `gst_core::TaskState::new`), so no escaping is needed.
const DELAYS_TEMPLATE: &str = "#!/bin/sh\nexec gst-worker {task_id}\n";

pub fn template_for(type_: TaskType) -> Option<&'static str> {
    match type_ {
        TaskType::Delays => Some(DELAYS_TEMPLATE),
        TaskType::Location | TaskType::Fault => None,
    }
}

pub fn render(type_: TaskType, task_id: &str) -> Option<String> {
    template_for(type_).map(|template| template.replace("{task_id}", task_id))
}

#[cfg(test)]
#[path = "launcher_tests.rs"]
mod tests;
