// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! OS process introspection for L5 (spec §4.7). No `nix`/`libc`: the
//! workspace forbids `unsafe_code`, so liveness is read straight out of
//! `/proc` and termination is shelled out to `kill`, mirroring the
//! `gst-gpu` house style of talking to `nvidia-smi`/`/proc/meminfo` as
//! external text rather than FFI.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStatus {
    Running,
    Zombie,
    /// `/proc/{pid}/stat` does not exist, or could not be parsed.
    Dead,
}

/// Reads `/proc/{pid}/stat` and extracts the state character. The comm
/// field (2nd column) is parenthesized and may itself contain spaces or
/// parens, so the state is found by scanning from the *last* `)`.
pub fn process_status(pid: i64) -> ProcessStatus {
    let path = format!("/proc/{pid}/stat");
    let Ok(contents) = std::fs::read_to_string(&path) else {
        return ProcessStatus::Dead;
    };
    let Some(close_paren) = contents.rfind(')') else {
        return ProcessStatus::Dead;
    };
    match contents[close_paren + 1..].trim_start().chars().next() {
        Some('Z') => ProcessStatus::Zombie,
        Some(_) => ProcessStatus::Running,
        None => ProcessStatus::Dead,
    }
}

/// Sends `SIGTERM`. No attempt is made to confirm the process actually
/// exited — L5 only makes one observation per cycle (spec §4.7).
pub async fn kill_process(pid: i64) -> std::io::Result<()> {
    let status = tokio::process::Command::new("kill")
        .arg("-TERM")
        .arg(pid.to_string())
        .status()
        .await?;
    if status.success() {
        Ok(())
    } else {
        Err(std::io::Error::other(format!("kill -TERM {pid} exited with {status}")))
    }
}

#[cfg(test)]
#[path = "os_process_tests.rs"]
mod tests;
