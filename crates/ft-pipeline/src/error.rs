use thiserror::Error;

use ft_core::CoreError;
use ft_input::InputError;
use ft_output::OutputError;
use ft_spatial::SpatialError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("input error: {0}")]
    Input(#[from] InputError),

    #[error("spatial index error: {0}")]
    Spatial(#[from] SpatialError),

    #[error("output error: {0}")]
    Output(#[from] OutputError),
}

pub type PipelineResult<T> = Result<T, PipelineError>;
