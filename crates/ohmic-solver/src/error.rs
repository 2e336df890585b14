//! Error types for ohmic-solver.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("singular system: circuit has no solution")]
    SingularMatrix,

    #[error("invalid matrix dimensions: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
