// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised by the GPU rig (C4) and GPU task (C5).

use gst_core::ErrorKind;

#[derive(Debug, thiserror::Error)]
pub enum GpuError {
    #[error("no free GPU card for {required_bytes} bytes")]
    NoFreeGpuCard { required_bytes: u64 },

    #[error("no free RAM for {required_bytes} bytes")]
    NoFreeRam { required_bytes: u64 },

    #[error("bus id {0} not found")]
    BusIdNotFound(i64),

    #[error("uuid {0} not found")]
    UuidNotFound(String),

    #[error("failed to read host memory info: {0}")]
    MemInfo(String),

    #[error("failed to query GPU devices: {0}")]
    Query(String),

    #[error("OpenCL error: {0}")]
    Ocl(#[from] ocl::Error),
}

impl GpuError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GpuError::NoFreeGpuCard { .. } | GpuError::NoFreeRam { .. } => {
                ErrorKind::ResourceExhausted
            }
            GpuError::BusIdNotFound(_) | GpuError::UuidNotFound(_) => ErrorKind::NotFound,
            GpuError::MemInfo(_) | GpuError::Query(_) | GpuError::Ocl(_) => ErrorKind::Internal,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
