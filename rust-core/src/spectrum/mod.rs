//! Windowed spectral decomposition
//!
//! Slides an analysis window over a signal and computes the discrete
//! Fourier transform of each window, either with a constant width or with
//! a width adapted step-to-step from the segment energy.

pub mod adaptive;
pub mod energy;
pub mod fft;
pub mod fixed;

use num_complex::Complex;

pub use adaptive::{AdaptiveConfig, AdaptivePolicy, AdaptiveState, AdaptiveWindowScanner};
pub use energy::signal_energy;
pub use fft::{frequency_axis, magnitude, FftEngine};
pub use fixed::{FixedWindowConfig, FixedWindowScanner};

/// Half-open sample range `[start, end)` covered by one analysis window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRange {
    pub start: usize,
    pub end: usize,
}

impl WindowRange {
    /// Number of samples in the window
    pub fn span(&self) -> usize {
        self.end - self.start
    }
}

/// One emitted analysis step: a window range and its spectrum
///
/// Ranges and frames travel together so the pairing cannot desynchronize
/// downstream.
#[derive(Debug, Clone)]
pub struct ScanStep {
    pub range: WindowRange,
    pub frame: Vec<Complex<f64>>,
}

/// Ordered scan output, in increasing start-index order
pub type ScanResult = Vec<ScanStep>;
