// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The 2-D typed array envelope (spec §3, §4.1): `{type, rows, cols, bytes}`.
//!
//! Serialization order is `type-tag(ASCII)` ‖ `rows(int32)` ‖ `cols(int32)`
//! ‖ `data`. Deserialization probes the tag by trying each known tag string
//! in turn, since the tag has no fixed width.

use crate::error::CodecError;
use crate::scalar::{self, INT32_SIZE};

/// Element type of an array envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayType {
    Int32,
    Float32,
}

impl ArrayType {
    pub fn tag(&self) -> &'static str {
        match self {
            ArrayType::Int32 => "int32",
            ArrayType::Float32 => "float32",
        }
    }

    pub fn element_size(&self) -> usize {
        4
    }

    /// All known tags, probed in this fixed order.
    fn known() -> [ArrayType; 2] {
        [ArrayType::Int32, ArrayType::Float32]
    }
}

/// A 2-D typed array. `rows == 0` or `cols == 0` denotes a 1-D view whose
/// length is the other, non-zero dimension (spec §3).
#[derive(Debug, Clone, PartialEq)]
pub struct Array {
    pub type_: ArrayType,
    pub rows: i32,
    pub cols: i32,
    pub data: Vec<u8>,
}

impl Array {
    pub fn new(type_: ArrayType, rows: i32, cols: i32, data: Vec<u8>) -> Self {
        Self {
            type_,
            rows,
            cols,
            data,
        }
    }

    /// Total packed size: tag bytes + two int32s + the data payload.
    pub fn bytes_size(&self) -> usize {
        self.type_.tag().len() + 2 * INT32_SIZE + self.data.len()
    }

    /// Element count implied by the shape (1-D if either dimension is 0).
    pub fn element_count(&self) -> i64 {
        if self.rows == 0 || self.cols == 0 {
            self.rows.max(self.cols) as i64
        } else {
            self.rows as i64 * self.cols as i64
        }
    }

    pub fn convert_to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        let mut out = scalar::pack_str(self.type_.tag())?;
        out.extend(scalar::pack_i32_list(&[self.rows, self.cols])?);
        out.extend_from_slice(&self.data);
        Ok(out)
    }

    /// Probe each known tag at the front of `bytes`, then read `rows`/`cols`
    /// and slice exactly the bytes the shape implies.
    pub fn create_from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        let (type_, tag_len) = Self::probe_type(bytes)?;

        let shape_start = tag_len;
        let shape_end = shape_start + 2 * INT32_SIZE;
        if bytes.len() < shape_end {
            return Err(CodecError::Truncated {
                needed: shape_end,
                got: bytes.len(),
            });
        }
        let shape = scalar::unpack_i32_list(&bytes[shape_start..shape_end], 2)?;
        let (rows, cols) = (shape[0], shape[1]);

        let element_size = type_.element_size();
        let element_count = if rows == 0 || cols == 0 {
            rows.max(cols) as i64
        } else {
            rows as i64 * cols as i64
        };
        let expected_len = (element_count as usize) * element_size;

        let remaining = bytes.len() - shape_end;
        if expected_len > remaining {
            return Err(CodecError::Truncated {
                needed: expected_len,
                got: remaining,
            });
        }

        let data = bytes[shape_end..shape_end + expected_len].to_vec();
        Ok(Array::new(type_, rows, cols, data))
    }

    /// Decode `data` as a flat vector of `float32`s (row-major). Errors if
    /// `type_` is not `Float32` or `data` is not a whole number of elements.
    pub fn as_f32_vec(&self) -> Result<Vec<f32>, CodecError> {
        if self.type_ != ArrayType::Float32 {
            return Err(CodecError::UnknownType);
        }
        if self.data.len() % 4 != 0 {
            return Err(CodecError::Truncated {
                needed: self.data.len() + (4 - self.data.len() % 4),
                got: self.data.len(),
            });
        }
        self.data
            .chunks_exact(4)
            .map(|c| {
                let arr: [u8; 4] = c.try_into().map_err(|_| CodecError::Truncated {
                    needed: 4,
                    got: c.len(),
                })?;
                Ok(f32::from_le_bytes(arr))
            })
            .collect::<Result<Vec<f32>, CodecError>>()
    }

    /// Build a `Float32` array envelope from a flat row-major host buffer.
    pub fn from_f32_slice(values: &[f32], rows: i32, cols: i32) -> Self {
        let data = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        Array::new(ArrayType::Float32, rows, cols, data)
    }

    fn probe_type(bytes: &[u8]) -> Result<(ArrayType, usize), CodecError> {
        for candidate in ArrayType::known() {
            let tag_len = candidate.tag().len();
            if bytes.len() < tag_len {
                continue;
            }
            if let Ok(read) = scalar::unpack_str(&bytes[..tag_len], tag_len) {
                if read == candidate.tag() {
                    return Ok((candidate, tag_len));
                }
            }
        }
        Err(CodecError::UnknownType)
    }
}

#[cfg(test)]
#[path = "array_tests.rs"]
mod tests;
