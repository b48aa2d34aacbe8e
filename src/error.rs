use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("invalid tick count: {count} (at least 2 ticks are required)")]
    InvalidTickCount { count: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
