// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The node's GPU card pool (C4): owns every GPU-type OpenCL device found
//! across all platforms, wrapped as [`GpuCard`]s.

use ocl::{DeviceType, Platform};

use crate::card::GpuCard;
use crate::error::GpuError;
use crate::rig::GpuRigInfo;

pub struct GpuRig {
    cards: Vec<GpuCard>,
}

impl GpuRig {
    /// Enumerates GPU devices across every OpenCL platform and opens a
    /// [`GpuCard`] for each.
    pub async fn discover() -> Result<Self, GpuError> {
        let mut cards = Vec::new();
        for platform in Platform::list() {
            let devices = ocl::Device::list(platform, Some(DeviceType::GPU))?;
            for device in devices {
                cards.push(GpuCard::new(device).await?);
            }
        }
        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[GpuCard] {
        &self.cards
    }

    pub fn info(&self) -> GpuRigInfo {
        GpuRigInfo
    }

    pub fn get_gpu_card_by_bus_id(&self, bus_id: i64) -> Result<&GpuCard, GpuError> {
        self.cards
            .iter()
            .find(|c| c.bus_id() == bus_id)
            .ok_or(GpuError::BusIdNotFound(bus_id))
    }

    pub fn get_gpu_card_by_uuid(&self, uuid: &str) -> Result<&GpuCard, GpuError> {
        self.cards
            .iter()
            .find(|c| c.uuid() == uuid)
            .ok_or_else(|| GpuError::UuidNotFound(uuid.to_string()))
    }

    /// First card with `permitted > 0` and `free > required_bytes`.
    pub async fn get_free_gpu_card(&self, required_bytes: i64) -> Result<&GpuCard, GpuError> {
        for card in &self.cards {
            let memory = card.memory_info().await?;
            if memory.permitted_volume() > 0 && memory.free_volume() > required_bytes {
                return Ok(card);
            }
        }
        Err(GpuError::NoFreeGpuCard { required_bytes: required_bytes.max(0) as u64 })
    }

    pub fn is_available_ram_memory(&self) -> Result<bool, GpuError> {
        self.info().is_available_ram_memory()
    }
}

#[cfg(test)]
#[path = "pool_tests.rs"]
mod tests;
