use std::path::PathBuf;

use thiserror::Error;

use crate::api::ChartStage;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid scale: {0}")]
    InvalidScale(String),

    #[error("degenerate range: min={min}, max={max}")]
    DegenerateRange { min: f64, max: f64 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("data unavailable at `{}`: {source}", .path.display())]
    DataUnavailable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("`{operation}` is not allowed in stage {stage:?}")]
    InvalidStage {
        stage: ChartStage,
        operation: &'static str,
    },

    #[error("render backend failure: {0}")]
    Backend(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
