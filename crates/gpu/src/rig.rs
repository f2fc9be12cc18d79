// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! GPU rig inventory (C4): enumerates devices via the vendor CLI tool and
//! reports host RAM, cross-referenced against the OpenCL device list by PCI
//! bus id so [`crate::card::GpuCard`] can own a real context and queue.

use std::path::Path;
use std::time::Duration;

use tokio::process::Command;

use crate::error::GpuError;
use crate::memory::{convert_megabytes_to_bytes, MemoryInfo};

const GPU_QUERY_TIMEOUT: Duration = Duration::from_secs(10);
const MEMORY_FILE_STATS: &str = "/proc/meminfo";
const TOTAL_MEMORY_SIZE_KEY: &str = "MemTotal";
const FREE_MEMORY_SIZE_KEY: &str = "MemFree";
const MEMORY_SIZE_UNIT_IN_BYTES: i64 = 1024;

fn gpu_query_command() -> Command {
    let mut cmd = Command::new("nvidia-smi");
    cmd.args([
        "--query-gpu=uuid,gpu_bus_id,memory.used,memory.free,memory.total",
        "--format=csv,noheader,nounits",
    ]);
    cmd
}

/// One line of `nvidia-smi` output, decoded into a card summary.
#[derive(Debug, Clone, PartialEq)]
pub struct GpuCardInfo {
    pub uuid: String,
    pub bus_id: i64,
    pub memory: MemoryInfo,
}

fn digits_only(s: &str) -> Option<i64> {
    let filtered: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
    if filtered.is_empty() {
        None
    } else {
        filtered.parse().ok()
    }
}

/// Parses one CSV line as `uuid, bus:id, used_MB, free_MB, total_MB`.
/// Malformed lines are skipped rather than treated as fatal, matching the
/// vendor tool's habit of emitting a trailing blank line.
fn parse_line(line: &str) -> Option<GpuCardInfo> {
    let parts: Vec<&str> = line.split(", ").collect();
    if parts.len() < 5 {
        return None;
    }

    let uuid = parts[0].to_string();
    let bus_id: i64 = parts[1].split(':').nth(1)?.parse().ok()?;

    let mut numbers = Vec::with_capacity(3);
    for raw in &parts[2..5] {
        numbers.push(raw.trim().parse::<i64>().ok()?);
    }

    let used_memory = convert_megabytes_to_bytes(numbers[0] + 1);
    let total_memory = convert_megabytes_to_bytes((numbers[2] - 1).max(0));

    Some(GpuCardInfo {
        uuid,
        bus_id,
        memory: MemoryInfo::new(total_memory, used_memory),
    })
}

fn parse_output(stdout: &str) -> Vec<GpuCardInfo> {
    stdout.lines().filter(|l| !l.is_empty()).filter_map(parse_line).collect()
}

/// Snapshot of node-level facts: GPU card inventory, host RAM, CPU count.
pub struct GpuRigInfo;

impl GpuRigInfo {
    pub async fn gpu_cards_info(&self) -> Result<Vec<GpuCardInfo>, GpuError> {
        let output = tokio::time::timeout(GPU_QUERY_TIMEOUT, gpu_query_command().output())
            .await
            .map_err(|_| GpuError::Query("nvidia-smi timed out".to_string()))?
            .map_err(|e| GpuError::Query(e.to_string()))?;

        Ok(parse_output(&String::from_utf8_lossy(&output.stdout)))
    }

    pub fn hostname(&self) -> String {
        gethostname_or_unknown()
    }

    pub fn ram_memory_info(&self) -> Result<MemoryInfo, GpuError> {
        read_ram_memory_info(Path::new(MEMORY_FILE_STATS))
    }

    pub fn cpu_cores_count(&self) -> usize {
        std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
    }

    pub async fn gpu_cards_count(&self) -> Result<usize, GpuError> {
        Ok(self.gpu_cards_info().await?.len())
    }

    pub fn is_available_ram_memory(&self) -> Result<bool, GpuError> {
        Ok(self.ram_memory_info()?.permitted_volume() > 0)
    }
}

fn gethostname_or_unknown() -> String {
    std::env::var("HOSTNAME").unwrap_or_else(|_| "unknown".to_string())
}

fn read_ram_memory_info(path: &Path) -> Result<MemoryInfo, GpuError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| GpuError::MemInfo(format!("{}: {}", path.display(), e)))?;

    let mut total_memory = 0i64;
    let mut free_memory = 0i64;

    for line in contents.lines() {
        if line.contains(TOTAL_MEMORY_SIZE_KEY) {
            if let Some(size) = digits_only(line) {
                total_memory = size * MEMORY_SIZE_UNIT_IN_BYTES;
            }
        }
        if line.contains(FREE_MEMORY_SIZE_KEY) {
            if let Some(size) = digits_only(line) {
                free_memory = size * MEMORY_SIZE_UNIT_IN_BYTES;
            }
        }
        if total_memory != 0 && free_memory != 0 {
            break;
        }
    }

    Ok(MemoryInfo::new(total_memory, total_memory - free_memory))
}

#[cfg(test)]
#[path = "rig_tests.rs"]
mod tests;
