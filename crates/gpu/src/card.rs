// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A single GPU card (C4): an OpenCL device paired with the vendor-tool
//! memory snapshot for the same physical bus id. Identity is by UUID.

use ocl::enums::DeviceInfo;
use ocl::{Context, Device, Queue};

use crate::error::GpuError;
use crate::memory::MemoryInfo;
use crate::rig::GpuRigInfo;

/// Wraps operations for running compiled CL kernels on one physical card.
///
/// Cheaply clonable: `Context`/`Queue`/`Device` are reference-counted
/// handles in `ocl`, so a clone shares the same underlying OpenCL context
/// rather than reopening it. This lets a [`GpuTask`](crate::task::GpuTask)
/// own a card obtained by reference from [`crate::pool::GpuRig`].
#[derive(Clone)]
pub struct GpuCard {
    device: Device,
    context: Context,
    queue: Queue,
    bus_id: i64,
    uuid: String,
}

impl GpuCard {
    /// Cross-references `device`'s PCI bus id against the vendor tool's
    /// current device listing to recover `{uuid, bus_id}`, then opens a
    /// context and command queue.
    pub async fn new(device: Device) -> Result<Self, GpuError> {
        let cards_info = GpuRigInfo.gpu_cards_info().await?;
        if cards_info.is_empty() {
            return Err(GpuError::BusIdNotFound(-1));
        }

        let cl_bus_id = Self::pci_bus_id(&device)?;
        let matched = cards_info
            .iter()
            .find(|c| c.bus_id == cl_bus_id)
            .ok_or(GpuError::BusIdNotFound(cl_bus_id))?;

        let context = Context::builder().devices(device).build()?;
        let queue = Queue::new(&context, device, None)?;

        Ok(Self {
            device,
            context,
            queue,
            bus_id: matched.bus_id,
            uuid: matched.uuid.clone(),
        })
    }

    fn pci_bus_id(device: &Device) -> Result<i64, GpuError> {
        match device.info(DeviceInfo::PciBusIdNv) {
            Ok(info) => {
                let text = info.to_string();
                digits_only(&text).ok_or(GpuError::BusIdNotFound(-1))
            }
            Err(e) => Err(GpuError::Ocl(e)),
        }
    }

    pub fn device(&self) -> Device {
        self.device
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    pub fn bus_id(&self) -> i64 {
        self.bus_id
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    pub async fn memory_info(&self) -> Result<MemoryInfo, GpuError> {
        for card_info in GpuRigInfo.gpu_cards_info().await? {
            if card_info.bus_id == self.bus_id {
                return Ok(card_info.memory);
            }
        }
        Err(GpuError::BusIdNotFound(self.bus_id))
    }

    pub async fn is_free(&self) -> Result<bool, GpuError> {
        Ok(self.memory_info().await?.permitted_volume() > 0)
    }

    pub fn max_work_group_size(&self) -> Result<usize, GpuError> {
        Ok(self.device.max_wg_size()?)
    }

    /// The single-dimension global work size used as the execution grid for
    /// kernel launches on this card.
    pub fn max_grid_size(&self) -> Result<usize, GpuError> {
        self.max_work_group_size()
    }
}

impl PartialEq for GpuCard {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

fn digits_only(s: &str) -> Option<i64> {
    let filtered: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
    if filtered.is_empty() {
        None
    } else {
        filtered.parse().ok()
    }
}

#[cfg(test)]
#[path = "card_tests.rs"]
mod tests;
