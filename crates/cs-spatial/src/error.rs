//! Spatial-subsystem error type.

use thiserror::Error;

use crate::GridPos;

/// Errors produced by `cs-spatial`.
///
/// `NoPath` is an expected outcome, not a fault: callers turn it into
/// "become idle".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpatialError {
    #[error("no path from {from} to {to}")]
    NoPath { from: GridPos, to: GridPos },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
