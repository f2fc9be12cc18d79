// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn display_messages_are_human_readable() {
    let err = CodecError::Truncated { needed: 8, got: 3 };
    assert_eq!(err.to_string(), "truncated input: need at least 8 bytes, got 3");
}
