//! Error taxonomy for the simulation crate.
//!
//! Only caller mistakes and I/O surface as errors. A degenerate operating
//! point (zero linear SNR) is a handled boundary in the evaluator, not an
//! error: noise is treated as infinite and all SINRs collapse to zero.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimulationError {
    /// Rejected before any sampling happens.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SimulationError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }
}
