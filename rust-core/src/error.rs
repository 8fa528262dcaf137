//! Error taxonomy for the spectral core
//!
//! Every failure in the core is a rejected parameter; a failed call aborts
//! only that analysis, never the process.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SpectralError>;

#[derive(Error, Debug)]
pub enum SpectralError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl SpectralError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
