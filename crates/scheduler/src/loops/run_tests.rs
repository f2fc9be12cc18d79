// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn admission_requires_spare_cpu_concurrency() {
    assert!(!admitted(4, 4, true));
    assert!(admitted(3, 4, true));
}

#[test]
fn admission_requires_ram_headroom() {
    assert!(!admitted(0, 4, false));
    assert!(admitted(0, 4, true));
}
