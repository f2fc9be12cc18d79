// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use gst_core::TaskType;

use super::*;

#[test]
fn delays_renders_a_script_with_the_task_id_substituted() {
    let script = render(TaskType::Delays, "abc123").expect("delays has a template");
    assert!(script.contains("abc123"));
    assert!(script.starts_with("#!/bin/sh"));
}

#[test]
fn location_and_fault_have_no_template() {
    assert_eq!(template_for(TaskType::Location), None);
    assert_eq!(template_for(TaskType::Fault), None);
    assert_eq!(render(TaskType::Location, "x"), None);
}
