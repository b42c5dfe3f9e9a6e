//! Epidemic-model error type.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EpidemicError {
    #[error("epidemic configuration error: {0}")]
    Config(String),
}

impl From<cs_core::CoreError> for EpidemicError {
    fn from(e: cs_core::CoreError) -> Self {
        EpidemicError::Config(e.to_string())
    }
}

pub type EpidemicResult<T> = Result<T, EpidemicError>;
