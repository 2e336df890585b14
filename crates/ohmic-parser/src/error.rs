//! Error types for ohmic-parser.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed circuit file at line {line}: {message}")]
    Grammar { line: usize, message: String },

    #[error("malformed circuit file: no .circuit block")]
    MissingCircuitBlock,

    #[error("only V, I, R elements are permitted: {0}")]
    UnsupportedElement(String),

    #[error("unsupported source form: {0}")]
    UnsupportedSourceForm(String),

    #[error("invalid value: {0}")]
    InvalidValue(String),
}

pub type Result<T> = std::result::Result<T, Error>;
