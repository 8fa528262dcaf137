//! Discrete Fourier transform primitive
//!
//! Thin wrapper over the rustfft/realfft planners. Window widths vary from
//! step to step in the adaptive scanner, so the engine plans per segment
//! length; both planners cache plans internally, making repeated lengths
//! cheap.

use num_complex::Complex;
use realfft::RealFftPlanner;
use rustfft::FftPlanner;

/// FFT engine shared by the window scanners
pub struct FftEngine {
    planner: FftPlanner<f64>,
    real_planner: RealFftPlanner<f64>,
}

impl FftEngine {
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
            real_planner: RealFftPlanner::new(),
        }
    }

    /// Full complex DFT of a real-valued segment
    ///
    /// # Returns
    /// Complex spectrum with the same length as the input
    pub fn transform(&mut self, segment: &[f64]) -> Vec<Complex<f64>> {
        if segment.is_empty() {
            return Vec::new();
        }

        let fft = self.planner.plan_fft_forward(segment.len());
        let mut buffer: Vec<Complex<f64>> =
            segment.iter().map(|&x| Complex::new(x, 0.0)).collect();
        fft.process(&mut buffer);
        buffer
    }

    /// Inverse DFT, scaled by 1/N so `inverse(transform(x))` recovers `x`
    pub fn inverse(&mut self, frame: &[Complex<f64>]) -> Vec<Complex<f64>> {
        if frame.is_empty() {
            return Vec::new();
        }

        let ifft = self.planner.plan_fft_inverse(frame.len());
        let mut buffer = frame.to_vec();
        ifft.process(&mut buffer);

        let scale = 1.0 / frame.len() as f64;
        for value in buffer.iter_mut() {
            *value *= scale;
        }
        buffer
    }

    /// Positive-frequency half spectrum (N/2 + 1 bins) of a real segment
    ///
    /// Cheaper than `transform` when only the positive frequencies matter,
    /// e.g. for magnitude plots rendered by the visualization layer.
    pub fn real_transform(&mut self, segment: &[f64]) -> Vec<Complex<f64>> {
        if segment.is_empty() {
            return Vec::new();
        }

        let r2c = self.real_planner.plan_fft_forward(segment.len());
        let mut input = segment.to_vec();
        let mut output = r2c.make_output_vec();
        r2c.process(&mut input, &mut output)
            .expect("FFT processing failed");
        output
    }
}

impl Default for FftEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Magnitude |X[k]| of a spectral frame
pub fn magnitude(frame: &[Complex<f64>]) -> Vec<f64> {
    frame.iter().map(|c| c.norm()).collect()
}

/// Frequency in Hz of each bin of an `n`-point DFT at `sample_rate`
pub fn frequency_axis(n: usize, sample_rate: f64) -> Vec<f64> {
    (0..n).map(|k| k as f64 * sample_rate / n as f64).collect()
}
