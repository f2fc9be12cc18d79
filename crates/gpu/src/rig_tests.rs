// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn parses_well_formed_line() {
    let line = "GPU-aaaa, 00000000:17:00.0, 1024, 7168, 8192";
    let info = parse_line(line).expect("should parse");
    assert_eq!(info.uuid, "GPU-aaaa");
    assert_eq!(info.bus_id, 17);
    assert_eq!(info.memory.used_volume, convert_megabytes_to_bytes(1025));
    assert_eq!(info.memory.total_volume, convert_megabytes_to_bytes(8191));
}

#[test]
fn rejects_line_missing_fields() {
    assert!(parse_line("GPU-aaaa, 00000000:17:00.0").is_none());
}

#[test]
fn rejects_line_with_unparseable_bus_id() {
    assert!(parse_line("GPU-aaaa, not-a-bus-id, 1, 2, 3").is_none());
}

#[test]
fn parse_output_skips_blank_lines_and_bad_lines() {
    let stdout = "GPU-aaaa, 00000000:17:00.0, 1024, 7168, 8192\n\nnonsense\n";
    let cards = parse_output(stdout);
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].uuid, "GPU-aaaa");
}

#[test]
fn digits_only_extracts_numeric_run() {
    assert_eq!(digits_only("MemTotal:       16384000 kB"), Some(16384000));
    assert_eq!(digits_only("no digits here"), None);
}

#[test]
fn read_ram_memory_info_parses_meminfo_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("meminfo");
    std::fs::write(
        &path,
        "MemTotal:       16384000 kB\nMemFree:         4096000 kB\n",
    )
    .unwrap();

    let info = read_ram_memory_info(&path).unwrap();
    assert_eq!(info.total_volume, 16384000 * 1024);
    assert_eq!(info.used_volume, (16384000 - 4096000) * 1024);
}

#[test]
fn read_ram_memory_info_errors_when_file_missing() {
    let err = read_ram_memory_info(Path::new("/no/such/meminfo")).unwrap_err();
    assert!(matches!(err, GpuError::MemInfo(_)));
}
