// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `delays` kernel program source.
//!
//! The actual seismic cross-correlation math is out of this system's scope
//! (spec §1 lists "the domain math (seismic geophysics) computed by
//! kernels" as an external collaborator); this is a representative,
//! simplified windowed dot-product correlation that exercises the same
//! device-buffer shape the real kernel would use, so the rest of the
//! pipeline (marshal args, launch, copy back, reduce) has something real to
//! run against.

/// Per-station windowed correlation against the base station's signal.
///
/// Global work size is one work-item per station. For each of
/// `scanner_size` candidate shifts, it sums `window_size` pointwise
/// products between the base station's signal and the shifted target
/// signal, writing one `float` per `(station, shift)` into `correlations`.
pub const DELAYS_KERNEL_SOURCE: &str = r#"
__kernel void find_delays(
    __global const float* signals,
    const int signal_length,
    const int window_size,
    const int scanner_size,
    const int base_station_index,
    __global float* correlations)
{
    const int station = get_global_id(0);
    __global const float* base = signals + base_station_index * signal_length;
    __global const float* target = signals + station * signal_length;

    for (int shift = 0; shift < scanner_size; shift++) {
        float sum = 0.0f;
        for (int i = 0; i < window_size; i++) {
            int idx = i + shift;
            if (idx < signal_length) {
                sum += base[i] * target[idx];
            }
        }
        correlations[station * scanner_size + shift] = sum;
    }
}
"#;

pub const DELAYS_KERNEL_FUNCTION: &str = "find_delays";
