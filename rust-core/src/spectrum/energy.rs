//! Segment energy estimate
//!
//! Feedback quantity for the adaptive window scanner. Not calibrated to
//! any physical unit; only consecutive values are ever compared.

/// Sum of squared samples over a segment
///
/// Returns 0.0 for an empty segment.
pub fn signal_energy(segment: &[f64]) -> f64 {
    segment.iter().map(|&x| x * x).sum()
}
