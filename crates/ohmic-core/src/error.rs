//! Error types for ohmic-core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("node not found: {0}")]
    NodeNotFound(String),

    #[error("resistor {0} has zero resistance")]
    ZeroResistance(String),
}

pub type Result<T> = std::result::Result<T, Error>;
