//! Error types for phasor-core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid element: {0}")]
    InvalidElement(String),
}

pub type Result<T> = std::result::Result<T, Error>;
