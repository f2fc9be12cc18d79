// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised while running a worker process (C6).

#[derive(Debug, thiserror::Error)]
pub enum WorkerError {
    #[error("task is not ready for running")]
    NotReady,

    #[error("no free RAM for {required_bytes} bytes")]
    NoFreeRam { required_bytes: u64 },

    #[error("no free GPU card for {required_bytes} bytes")]
    NoFreeGpuCard { required_bytes: u64 },

    #[error("task type {0:?} has no kernel implementation")]
    UnsupportedTaskType(gst_core::TaskType),

    #[error(transparent)]
    Storage(#[from] gst_storage::StoreError),

    #[error(transparent)]
    Codec(#[from] gst_codec::CodecError),

    #[error(transparent)]
    Gpu(#[from] gst_gpu::GpuError),
}

impl WorkerError {
    /// Resource exhaustion is the only rollback-eligible outcome (spec
    /// §4.6/§7): everything else finalizes the task to `failed`.
    pub fn is_rollback_eligible(&self) -> bool {
        matches!(self, WorkerError::NoFreeRam { .. } | WorkerError::NoFreeGpuCard { .. })
    }
}

impl From<WorkerError> for gst_core::ErrorKind {
    fn from(err: WorkerError) -> Self {
        match err {
            WorkerError::NotReady => gst_core::ErrorKind::Precondition,
            WorkerError::NoFreeRam { .. } | WorkerError::NoFreeGpuCard { .. } => {
                gst_core::ErrorKind::ResourceExhausted
            }
            WorkerError::UnsupportedTaskType(_) => gst_core::ErrorKind::Internal,
            WorkerError::Storage(e) => e.kind(),
            WorkerError::Codec(_) => gst_core::ErrorKind::Codec,
            WorkerError::Gpu(e) => e.kind(),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
