//! Serialized signal record
//!
//! The contract between the core and the storage layer that loads recorded
//! signals. The core does no file I/O itself; it only defines the shape of
//! one record and how its timestamps are reconstructed.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::resample::build_timestamps;

/// One recorded signal as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalRecord {
    /// Sampling frequency in Hz
    pub fs: f64,

    /// Raw samples in acquisition order
    pub signal: Vec<f64>,

    /// Absolute time of the first sample, in seconds
    pub time_start: f64,
}

impl SignalRecord {
    /// Reconstruct the absolute timestamp of every sample
    ///
    /// # Returns
    /// Strictly increasing timestamps, one per sample, spaced by `1/fs`
    pub fn timestamps(&self) -> Result<Vec<f64>> {
        build_timestamps(self.signal.len(), self.time_start, self.fs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_round_trip() {
        let record = SignalRecord {
            fs: 125.0,
            signal: vec![10.2, 10.4, 10.1],
            time_start: 1700000000.0,
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: SignalRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(back.fs, record.fs);
        assert_eq!(back.signal, record.signal);
        assert_eq!(back.time_start, record.time_start);
    }

    #[test]
    fn test_record_timestamps() {
        let record = SignalRecord {
            fs: 100.0,
            signal: vec![0.0; 5],
            time_start: 2.0,
        };

        let ts = record.timestamps().unwrap();
        assert_eq!(ts.len(), 5);
        assert!((ts[0] - 2.0).abs() < 1e-12);
        assert!((ts[4] - 2.04).abs() < 1e-12);
    }
}
