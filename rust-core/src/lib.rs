//! Physio Spectral - Waveform Spectral Analysis Core
//!
//! Resamples irregularly-timed physiological signals (e.g. intracranial
//! pressure) onto a uniform grid and decomposes them over time with
//! fixed-width and energy-adaptive sliding-window FFTs.

pub mod error;
pub mod record;
pub mod resample;
pub mod spectrum;

pub use error::{Result, SpectralError};
pub use record::SignalRecord;
pub use spectrum::{
    AdaptiveConfig, AdaptivePolicy, AdaptiveState, AdaptiveWindowScanner, FftEngine,
    FixedWindowConfig, FixedWindowScanner, ScanResult, ScanStep, WindowRange,
};
