// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `DelaysFinderParameters` (spec §3): the argument envelope for the
//! `delays` kernel. Serialization order is `window_size(int32)` ‖
//! `scanner_size(int32)` ‖ `min_correlation(double)` ‖
//! `base_station_index(int32)` ‖ `signals(float32 array envelope)`.

use crate::array::{Array, ArrayType};
use crate::error::CodecError;
use crate::scalar::{self, DOUBLE_SIZE, INT32_SIZE};

#[derive(Debug, Clone, PartialEq)]
pub struct DelaysFinderParameters {
    pub signals: Array,
    pub window_size: i32,
    pub scanner_size: i32,
    pub min_correlation: f64,
    pub base_station_index: i32,
}

impl DelaysFinderParameters {
    /// Validates `base_station_index < signals.rows` (spec §3 invariant).
    pub fn new(
        signals: Array,
        window_size: i32,
        scanner_size: i32,
        min_correlation: f64,
        base_station_index: i32,
    ) -> Result<Self, CodecError> {
        if signals.type_ != ArrayType::Float32 {
            return Err(CodecError::UnknownType);
        }
        if base_station_index as i64 >= signals.rows as i64 {
            return Err(CodecError::OutOfRange {
                value: base_station_index.to_string(),
                min: "0".to_string(),
                max: (signals.rows - 1).to_string(),
            });
        }
        Ok(Self {
            signals,
            window_size,
            scanner_size,
            min_correlation,
            base_station_index,
        })
    }

    pub fn signals_length(&self) -> i32 {
        self.signals.cols
    }

    pub fn stations_count(&self) -> i32 {
        self.signals.rows
    }

    pub fn buffer(&self) -> i32 {
        self.window_size + self.scanner_size
    }

    pub fn convert_to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        let mut out = scalar::pack_i32_list(&[self.window_size, self.scanner_size])?;
        out.extend(scalar::pack_f64(self.min_correlation)?);
        out.extend(scalar::pack_i32(self.base_station_index)?);
        out.extend(self.signals.convert_to_bytes()?);
        Ok(out)
    }

    pub fn create_from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        let mut cursor = 0usize;

        let need = |cursor: usize, len: usize| -> Result<(), CodecError> {
            if bytes.len() < cursor + len {
                Err(CodecError::Truncated {
                    needed: cursor + len,
                    got: bytes.len(),
                })
            } else {
                Ok(())
            }
        };

        need(cursor, 2 * INT32_SIZE)?;
        let head = scalar::unpack_i32_list(&bytes[cursor..cursor + 2 * INT32_SIZE], 2)?;
        let (window_size, scanner_size) = (head[0], head[1]);
        cursor += 2 * INT32_SIZE;

        need(cursor, DOUBLE_SIZE)?;
        let min_correlation = scalar::unpack_f64(&bytes[cursor..cursor + DOUBLE_SIZE])?;
        cursor += DOUBLE_SIZE;

        need(cursor, INT32_SIZE)?;
        let base_station_index = scalar::unpack_i32(&bytes[cursor..cursor + INT32_SIZE])?;
        cursor += INT32_SIZE;

        let signals = Array::create_from_bytes(&bytes[cursor..])?;

        Self::new(
            signals,
            window_size,
            scanner_size,
            min_correlation,
            base_station_index,
        )
    }
}

#[cfg(test)]
#[path = "delays_tests.rs"]
mod tests;
