// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! GPU task execution (C5): a compiled kernel bound to one card, and the
//! typed argument handles it accepts.

use ocl::{Buffer, Kernel, Program};

use crate::card::GpuCard;
use crate::error::GpuError;

/// A host array that may be materialized as a device buffer. `is_copy`
/// controls whether the buffer is host-pointer-copied (read-only) or
/// allocated write-only and fetched back after the kernel runs.
pub struct GpuArray {
    host: Vec<f32>,
    is_copy: bool,
    buffer: Option<Buffer<f32>>,
}

impl GpuArray {
    pub fn new(host: Vec<f32>, is_copy: bool) -> Self {
        Self { host, is_copy, buffer: None }
    }

    pub fn bytes_size(&self) -> usize {
        self.host.len() * std::mem::size_of::<f32>()
    }

    pub fn buffer(&self) -> Option<&Buffer<f32>> {
        self.buffer.as_ref()
    }

    /// Creates the device buffer if it has not been created yet. Host→device
    /// copy when `is_copy`, otherwise a write-only buffer sized from the
    /// host array's length.
    pub fn load_to_gpu(&mut self, card: &GpuCard) -> Result<(), GpuError> {
        if self.buffer.is_some() {
            return Ok(());
        }

        let buffer = if self.is_copy {
            Buffer::<f32>::builder()
                .queue(card.queue().clone())
                .len(self.host.len())
                .copy_host_slice(&self.host)
                .build()
                .map_err(|_| GpuError::NoFreeGpuCard { required_bytes: self.bytes_size() as u64 })?
        } else {
            Buffer::<f32>::builder()
                .queue(card.queue().clone())
                .len(self.host.len())
                .build()
                .map_err(|_| GpuError::NoFreeGpuCard { required_bytes: self.bytes_size() as u64 })?
        };

        self.buffer = Some(buffer);
        Ok(())
    }

    /// Copies the device buffer back into the host array and returns it.
    /// Empty if no buffer was ever created.
    pub fn get_from_gpu(&mut self) -> Result<&[f32], GpuError> {
        let Some(buffer) = &self.buffer else {
            return Ok(&[]);
        };
        buffer.read(&mut self.host).enq()?;
        Ok(&self.host)
    }

    /// Drops the device buffer, freeing GPU memory. A no-op if none exists.
    pub fn release(&mut self) {
        self.buffer = None;
    }
}

/// A scalar or array argument to a kernel invocation.
pub enum GpuArg<'a> {
    Int(i32),
    Float(f32),
    Array(&'a GpuArray),
}

impl GpuArg<'_> {
    /// In-memory size contribution to the args-size admission check (spec
    /// §4.6): scalars count their packed size, arrays their host `nbytes`.
    pub fn byte_size(&self) -> usize {
        match self {
            GpuArg::Int(_) => std::mem::size_of::<i32>(),
            GpuArg::Float(_) => std::mem::size_of::<f32>(),
            GpuArg::Array(arr) => arr.bytes_size(),
        }
    }
}

/// A kernel program compiled once for a card, invoked by function name.
pub struct GpuTask {
    card: GpuCard,
    program: Program,
}

impl GpuTask {
    pub fn new(card: GpuCard, source: &str) -> Result<Self, GpuError> {
        let program = Program::builder().src(source).build(card.context())?;
        Ok(Self { card, program })
    }

    pub fn card(&self) -> &GpuCard {
        &self.card
    }

    /// Builds the kernel with the card's maximum grid size as the global
    /// work size and enqueues it. Array arguments must already be resident
    /// on the device via [`GpuArray::load_to_gpu`].
    pub fn run(&self, function_name: &str, args: &[GpuArg<'_>]) -> Result<(), GpuError> {
        let global_work_size = self.card.max_grid_size()?;
        let mut builder = Kernel::builder();
        builder
            .program(&self.program)
            .name(function_name)
            .queue(self.card.queue().clone())
            .global_work_size(global_work_size);

        for arg in args.iter() {
            match arg {
                GpuArg::Int(v) => {
                    builder.arg(*v);
                }
                GpuArg::Float(v) => {
                    builder.arg(*v);
                }
                GpuArg::Array(arr) => {
                    let buffer = arr
                        .buffer()
                        .ok_or(GpuError::NoFreeGpuCard { required_bytes: arr.bytes_size() as u64 })?;
                    builder.arg(buffer);
                }
            }
        }

        let kernel = builder
            .build()
            .map_err(|_| GpuError::NoFreeGpuCard { required_bytes: 0 })?;
        kernel.enq()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
