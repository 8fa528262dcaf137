//! Energy-adaptive sliding-window FFT
//!
//! Window width is driven by proportional feedback on segment energy: a
//! drop in energy widens the next window (frequency resolution while the
//! signal is calm), a rise narrows it (time resolution during transients).
//! The width always stays within the configured `[window_min, window_max]`.

use log::{debug, trace};

use super::energy::signal_energy;
use super::fft::FftEngine;
use super::{ScanResult, ScanStep, WindowRange};
use crate::error::{Result, SpectralError};

/// Width-control thresholds and factors
///
/// Plain data so callers and tests can re-tune the controller without
/// touching the scanner; `Default` carries the production values.
#[derive(Debug, Clone, Copy)]
pub struct AdaptivePolicy {
    /// Energy ratio below which the window grows
    pub grow_threshold: f64,

    /// Energy ratio above which the window shrinks
    pub shrink_threshold: f64,

    /// Width multiplier applied when growing
    pub grow_factor: f64,

    /// Width multiplier applied when shrinking
    pub shrink_factor: f64,
}

impl Default for AdaptivePolicy {
    fn default() -> Self {
        Self {
            grow_threshold: 0.95,
            shrink_threshold: 1.05,
            grow_factor: 1.2,
            shrink_factor: 0.8,
        }
    }
}

/// Adaptive scanner configuration
#[derive(Debug, Clone, Copy)]
pub struct AdaptiveConfig {
    /// Smallest allowed window width in samples
    pub window_min: usize,

    /// Largest allowed window width in samples
    pub window_max: usize,

    /// Start-to-start distance between consecutive windows
    pub step_size: usize,

    /// Width-control policy
    pub policy: AdaptivePolicy,
}

impl AdaptiveConfig {
    fn validate(&self) -> Result<()> {
        if self.window_min == 0 {
            return Err(SpectralError::invalid("window_min", "must be positive"));
        }
        if self.window_max < self.window_min {
            return Err(SpectralError::invalid(
                "window_max",
                format!(
                    "must be >= window_min ({}), got {}",
                    self.window_min, self.window_max
                ),
            ));
        }
        if self.step_size == 0 {
            return Err(SpectralError::invalid("step_size", "must be positive"));
        }
        Ok(())
    }

    /// Initial window width: midpoint of the allowed range
    pub fn initial_window(&self) -> usize {
        (self.window_min + self.window_max) / 2
    }
}

/// Scanner state between two transitions
///
/// `advance` consumes a state and returns the next one plus an optional
/// emission, so a whole scan can be replayed and asserted step by step.
#[derive(Debug, Clone, Copy)]
pub struct AdaptiveState {
    /// Window start of the last transition (the next window starts one
    /// step further)
    pub start_point: usize,

    /// Current window width in samples
    pub window_size: usize,

    /// Energy of the last emitted window, if any
    pub previous_energy: Option<f64>,

    /// Set once no further transition can emit
    pub finished: bool,
}

impl AdaptiveState {
    /// State before the first transition
    pub fn initial(config: &AdaptiveConfig) -> Self {
        Self {
            start_point: 0,
            window_size: config.initial_window(),
            previous_energy: None,
            finished: false,
        }
    }

    /// One transition of the scan state machine
    ///
    /// Advances the window start by one step and, unless the start has
    /// overrun the signal end, emits the spectrum of the new window and
    /// updates the width from the energy feedback. A window reaching the
    /// signal end is clipped to `signal.len() - 1`, still emits, and
    /// marks the returned state finished.
    pub fn advance(
        &self,
        signal: &[f64],
        config: &AdaptiveConfig,
        fft: &mut FftEngine,
    ) -> (AdaptiveState, Option<ScanStep>) {
        let signal_length = signal.len();
        let mut next = *self;

        next.start_point = self.start_point + config.step_size;
        if next.start_point >= signal_length.saturating_sub(1) {
            next.finished = true;
            return (next, None);
        }

        let mut end_point = next.start_point + next.window_size;
        if end_point >= signal_length - 1 {
            end_point = signal_length - 1;
            next.finished = true;
        }

        let segment = &signal[next.start_point..end_point];
        let step = ScanStep {
            range: WindowRange {
                start: next.start_point,
                end: end_point,
            },
            frame: fft.transform(segment),
        };

        let energy = signal_energy(segment);
        // The first window has nothing to compare against and leaves the
        // width alone, so a constant signal holds the initial width
        if let Some(previous) = self.previous_energy {
            let policy = &config.policy;
            if energy < policy.grow_threshold * previous {
                next.window_size = (next.window_size as f64 * policy.grow_factor) as usize;
            } else if energy > policy.shrink_threshold * previous {
                next.window_size = (next.window_size as f64 * policy.shrink_factor) as usize;
            }
        }
        next.window_size = next.window_size.clamp(config.window_min, config.window_max);
        next.previous_energy = Some(energy);

        trace!(
            "adaptive step: range [{}, {}), energy {energy:.3}, next window {}",
            next.start_point,
            end_point,
            next.window_size
        );

        (next, Some(step))
    }
}

/// Sliding-window FFT with energy-feedback width control
pub struct AdaptiveWindowScanner {
    config: AdaptiveConfig,
    fft: FftEngine,
}

impl AdaptiveWindowScanner {
    pub fn new(config: AdaptiveConfig) -> Self {
        Self {
            config,
            fft: FftEngine::new(),
        }
    }

    /// Drive the state machine over `signal` until the end is reached
    pub fn scan(&mut self, signal: &[f64]) -> Result<ScanResult> {
        self.config.validate()?;
        debug!(
            "adaptive scan: {} samples, window [{}, {}], step {}",
            signal.len(),
            self.config.window_min,
            self.config.window_max,
            self.config.step_size
        );

        let mut result = Vec::new();
        let mut state = AdaptiveState::initial(&self.config);
        loop {
            let (next, emitted) = state.advance(signal, &self.config, &mut self.fft);
            if let Some(step) = emitted {
                result.push(step);
            }
            if next.finished {
                break;
            }
            state = next;
        }

        Ok(result)
    }
}
