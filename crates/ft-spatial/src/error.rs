//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced by `ft-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("{count} points exceed the {max} addressable by TrailId")]
    TooManyPoints { count: usize, max: u32 },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
