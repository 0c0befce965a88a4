//! Error types for phasor-solver.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The assembled matrix has no unique solution: a floating node,
    /// a contradictory source constraint, or an empty netlist. For AC
    /// sweeps, carries the frequency at which factorization failed.
    #[error("singular system{}", .frequency.map(|f| format!(" at {f} Hz")).unwrap_or_default())]
    SingularSystem { frequency: Option<f64> },

    #[error("invalid sweep parameters: {0}")]
    InvalidSweepParameters(String),

    #[error("invalid matrix dimensions: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error(transparent)]
    Netlist(#[from] phasor_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
