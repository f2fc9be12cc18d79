// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Post-processing of the `delays` kernel's raw correlation buffer into the
//! result envelope (spec §4.6 step 6). Reduces the device's per-station,
//! per-shift correlation values down to one delay per station: the shift
//! with the strongest correlation, expressed relative to the center of the
//! scanner window.
//!
//! As with `kernel.rs`, this is a representative simplified reduction, not
//! a byte-exact port of the original geophysics algorithm (spec §1
//! Non-goals).

use gst_codec::{Array, DelaysFinderParameters};

/// Reduce a flat `stations_count * scanner_size` correlation buffer to one
/// delay (as `float32`) per station, keeping the shift with the highest
/// correlation and re-centering it so a zero delay means "aligned with the
/// base station".
///
/// Stations below the minimum correlation threshold get a delay of `0.0`
/// rather than being dropped, so the output shape always matches
/// `stations_count` rows.
pub fn reduce_correlations(params: &DelaysFinderParameters, correlations: &[f32]) -> Array {
    let stations = params.stations_count();
    let scanner = params.scanner_size;
    let center = (scanner / 2) as f32;

    let mut delays = Vec::with_capacity(stations as usize);
    for station in 0..stations {
        let start = (station * scanner) as usize;
        let end = start + scanner as usize;
        let row = correlations.get(start..end).unwrap_or(&[]);

        let best = row
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b));

        let delay = match best {
            Some((shift, &value)) if value as f64 >= params.min_correlation => {
                shift as f32 - center
            }
            _ => 0.0,
        };
        delays.push(delay);
    }

    Array::from_f32_slice(&delays, stations, 1)
}

#[cfg(test)]
#[path = "reduce_tests.rs"]
mod tests;
