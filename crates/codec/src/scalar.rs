// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The three packable scalar kinds (spec §4.1): `char` (1 byte per symbol),
//! `int32` (4 bytes, range `[-2e9, 2e9]`) and `double` (8 bytes, range
//! `[-1e14, 1e14]`). Byte order is little-endian throughout — a concrete
//! choice the port makes explicit where the source relied on the host's
//! native `struct` byte order.

use crate::error::CodecError;

pub const CHAR_SIZE: usize = 1;
pub const INT32_SIZE: usize = 4;
pub const DOUBLE_SIZE: usize = 8;

pub const INT32_MIN: i64 = -2_000_000_000;
pub const INT32_MAX: i64 = 2_000_000_000;
pub const DOUBLE_MIN: f64 = -1e14;
pub const DOUBLE_MAX: f64 = 1e14;

fn check_int32_range(v: i32) -> Result<(), CodecError> {
    let v = v as i64;
    if v < INT32_MIN || v > INT32_MAX {
        return Err(CodecError::OutOfRange {
            value: v.to_string(),
            min: INT32_MIN.to_string(),
            max: INT32_MAX.to_string(),
        });
    }
    Ok(())
}

fn check_double_range(v: f64) -> Result<(), CodecError> {
    if v < DOUBLE_MIN || v > DOUBLE_MAX {
        return Err(CodecError::OutOfRange {
            value: v.to_string(),
            min: DOUBLE_MIN.to_string(),
            max: DOUBLE_MAX.to_string(),
        });
    }
    Ok(())
}

/// Pack a single `int32`, validating its range.
pub fn pack_i32(value: i32) -> Result<Vec<u8>, CodecError> {
    check_int32_range(value)?;
    Ok(value.to_le_bytes().to_vec())
}

/// Pack a non-empty list of `int32`s.
pub fn pack_i32_list(values: &[i32]) -> Result<Vec<u8>, CodecError> {
    if values.is_empty() {
        return Err(CodecError::Empty);
    }
    let mut out = Vec::with_capacity(values.len() * INT32_SIZE);
    for &v in values {
        check_int32_range(v)?;
        out.extend_from_slice(&v.to_le_bytes());
    }
    Ok(out)
}

/// Unpack `count` `int32`s from `bytes`.
pub fn unpack_i32_list(bytes: &[u8], count: usize) -> Result<Vec<i32>, CodecError> {
    let needed = count * INT32_SIZE;
    if bytes.len() < needed {
        return Err(CodecError::Truncated {
            needed,
            got: bytes.len(),
        });
    }
    let mut out = Vec::with_capacity(count);
    for chunk in bytes[..needed].chunks_exact(INT32_SIZE) {
        let arr: [u8; INT32_SIZE] = chunk.try_into().map_err(|_| CodecError::Truncated {
            needed: INT32_SIZE,
            got: chunk.len(),
        })?;
        out.push(i32::from_le_bytes(arr));
    }
    Ok(out)
}

/// Unpack a single `int32`.
pub fn unpack_i32(bytes: &[u8]) -> Result<i32, CodecError> {
    Ok(unpack_i32_list(bytes, 1)?[0])
}

/// Pack a single `double`.
pub fn pack_f64(value: f64) -> Result<Vec<u8>, CodecError> {
    check_double_range(value)?;
    Ok(value.to_le_bytes().to_vec())
}

/// Pack a non-empty list of `double`s.
pub fn pack_f64_list(values: &[f64]) -> Result<Vec<u8>, CodecError> {
    if values.is_empty() {
        return Err(CodecError::Empty);
    }
    let mut out = Vec::with_capacity(values.len() * DOUBLE_SIZE);
    for &v in values {
        check_double_range(v)?;
        out.extend_from_slice(&v.to_le_bytes());
    }
    Ok(out)
}

/// Unpack `count` `double`s from `bytes`.
pub fn unpack_f64_list(bytes: &[u8], count: usize) -> Result<Vec<f64>, CodecError> {
    let needed = count * DOUBLE_SIZE;
    if bytes.len() < needed {
        return Err(CodecError::Truncated {
            needed,
            got: bytes.len(),
        });
    }
    let mut out = Vec::with_capacity(count);
    for chunk in bytes[..needed].chunks_exact(DOUBLE_SIZE) {
        let arr: [u8; DOUBLE_SIZE] = chunk.try_into().map_err(|_| CodecError::Truncated {
            needed: DOUBLE_SIZE,
            got: chunk.len(),
        })?;
        out.push(f64::from_le_bytes(arr));
    }
    Ok(out)
}

/// Unpack a single `double`.
pub fn unpack_f64(bytes: &[u8]) -> Result<f64, CodecError> {
    Ok(unpack_f64_list(bytes, 1)?[0])
}

/// Pack an ASCII/UTF-8 tag string, one byte per symbol (`char` kind).
pub fn pack_str(value: &str) -> Result<Vec<u8>, CodecError> {
    if value.is_empty() {
        return Err(CodecError::Empty);
    }
    Ok(value.as_bytes().to_vec())
}

/// Unpack `symbols_count` bytes as a UTF-8 string (`char` kind).
pub fn unpack_str(bytes: &[u8], symbols_count: usize) -> Result<String, CodecError> {
    let needed = symbols_count * CHAR_SIZE;
    if bytes.len() < needed {
        return Err(CodecError::Truncated {
            needed,
            got: bytes.len(),
        });
    }
    String::from_utf8(bytes[..needed].to_vec()).map_err(|_| CodecError::InvalidUtf8)
}

#[cfg(test)]
#[path = "scalar_tests.rs"]
mod tests;
