//! Timestamp reconstruction and uniform resampling
//!
//! Recorded signals carry only a start time and a nominal sampling
//! frequency; this module rebuilds the absolute timestamp of every sample
//! and re-grids the signal onto a uniform target period via linear
//! interpolation, so the downstream spectral analysis sees an evenly
//! sampled signal.

use log::debug;

use crate::error::{Result, SpectralError};

/// Reconstruct per-sample timestamps from a sampling descriptor
///
/// # Arguments
/// * `signal_length` - Number of samples in the signal
/// * `time_start` - Absolute time of the first sample
/// * `frequency` - Sampling frequency in Hz (must be positive)
///
/// # Returns
/// Strictly increasing timestamps starting at `time_start`, spaced by
/// `1/frequency`, one per sample. The stop value
/// `time_start + signal_length/frequency` is excluded.
pub fn build_timestamps(signal_length: usize, time_start: f64, frequency: f64) -> Result<Vec<f64>> {
    if !frequency.is_finite() || frequency <= 0.0 {
        return Err(SpectralError::invalid(
            "frequency",
            format!("must be positive, got {frequency}"),
        ));
    }

    let period = 1.0 / frequency;
    Ok((0..signal_length)
        .map(|i| time_start + i as f64 * period)
        .collect())
}

/// Resample a signal onto a uniform grid via linear interpolation
///
/// Builds a target timestamp grid from the first source timestamp up to
/// (but excluding) the last, stepping by `target_period`, and evaluates the
/// signal at each grid point. Query points outside the source range clamp
/// to the boundary samples.
///
/// # Arguments
/// * `signal` - Source samples
/// * `source_timestamps` - Strictly increasing timestamps, one per sample
/// * `target_period` - Spacing of the output grid, in seconds
///
/// # Returns
/// `(target_timestamps, resampled_signal)`, same length, uniformly spaced
pub fn resample(
    signal: &[f64],
    source_timestamps: &[f64],
    target_period: f64,
) -> Result<(Vec<f64>, Vec<f64>)> {
    if !target_period.is_finite() || target_period <= 0.0 {
        return Err(SpectralError::invalid(
            "target_period",
            format!("must be positive, got {target_period}"),
        ));
    }
    if source_timestamps.len() < 2 {
        return Err(SpectralError::invalid(
            "source_timestamps",
            format!("need at least 2 points, got {}", source_timestamps.len()),
        ));
    }
    if source_timestamps.len() != signal.len() {
        return Err(SpectralError::invalid(
            "source_timestamps",
            format!(
                "length {} does not match signal length {}",
                source_timestamps.len(),
                signal.len()
            ),
        ));
    }

    let first = source_timestamps[0];
    let last = source_timestamps[source_timestamps.len() - 1];
    let count = ((last - first) / target_period).ceil() as usize;

    let target_timestamps: Vec<f64> = (0..count)
        .map(|i| first + i as f64 * target_period)
        .collect();
    let resampled = linear_interp(&target_timestamps, source_timestamps, signal);

    debug!(
        "resampled {} samples onto {} uniform points (period {target_period} s)",
        signal.len(),
        count
    );

    Ok((target_timestamps, resampled))
}

/// Piecewise-linear interpolation of `values` (sampled at `grid`) at the
/// points `queries`
///
/// Both `grid` and `queries` must be increasing. Queries below the grid
/// take the first value, queries above it the last.
fn linear_interp(queries: &[f64], grid: &[f64], values: &[f64]) -> Vec<f64> {
    let last = grid.len() - 1;
    let mut out = Vec::with_capacity(queries.len());
    let mut hi = 1;

    for &t in queries {
        if t <= grid[0] {
            out.push(values[0]);
            continue;
        }
        if t >= grid[last] {
            out.push(values[last]);
            continue;
        }
        // Queries are increasing, so the bracketing index only moves forward
        while grid[hi] < t {
            hi += 1;
        }
        let lo = hi - 1;
        let frac = (t - grid[lo]) / (grid[hi] - grid[lo]);
        out.push(values[lo] + (values[hi] - values[lo]) * frac);
    }

    out
}
