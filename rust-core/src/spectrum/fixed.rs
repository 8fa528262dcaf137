//! Fixed-width sliding-window FFT

use log::debug;

use super::fft::FftEngine;
use super::{ScanResult, ScanStep, WindowRange};
use crate::error::{Result, SpectralError};

/// Fixed scanner configuration
#[derive(Debug, Clone, Copy)]
pub struct FixedWindowConfig {
    /// Window width in samples
    pub window_size: usize,

    /// Start-to-start distance between consecutive windows
    pub step_size: usize,
}

/// Sliding-window FFT with constant width and step
pub struct FixedWindowScanner {
    config: FixedWindowConfig,
    fft: FftEngine,
}

impl FixedWindowScanner {
    pub fn new(config: FixedWindowConfig) -> Self {
        Self {
            config,
            fft: FftEngine::new(),
        }
    }

    /// Scan `signal`, emitting one spectral frame per window position
    ///
    /// Windows start at multiples of `step_size`. The final window is
    /// clipped to `signal.len() - 1` and may be shorter than
    /// `window_size`; the scan stops before emitting any window whose
    /// start lands at or past `signal.len() - 1`, so the last sample is
    /// never analyzed on its own.
    pub fn scan(&mut self, signal: &[f64]) -> Result<ScanResult> {
        if self.config.window_size == 0 {
            return Err(SpectralError::invalid("window_size", "must be positive"));
        }
        if self.config.step_size == 0 {
            return Err(SpectralError::invalid("step_size", "must be positive"));
        }

        let signal_length = signal.len();
        let steps = signal_length.div_ceil(self.config.step_size);
        debug!(
            "fixed scan: {signal_length} samples, window {}, step {}",
            self.config.window_size, self.config.step_size
        );

        let mut result = Vec::with_capacity(steps);
        for i in 0..steps {
            let start = i * self.config.step_size;
            if start >= signal_length.saturating_sub(1) {
                break;
            }
            let end = (start + self.config.window_size).min(signal_length - 1);

            result.push(ScanStep {
                range: WindowRange { start, end },
                frame: self.fft.transform(&signal[start..end]),
            });
        }

        Ok(result)
    }
}
