use thiserror::Error;

#[derive(Error, Debug)]
pub enum PeaktrendError {
    #[error("Data loading error: {0}")]
    DataLoading(String),

    #[error("Insufficient data: {actual} rows, minimum {required} required")]
    InsufficientData { required: usize, actual: usize },

    #[error("Timestamps must be strictly increasing (violated at row {row})")]
    NonMonotonicTimestamps { row: usize },

    #[error("No {0} extremum found in series")]
    NoExtremum(&'static str),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Config source error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, PeaktrendError>;
