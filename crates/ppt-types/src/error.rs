use thiserror::Error;

#[derive(Error, Debug)]
pub enum PptError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Chart rendering error: {0}")]
    Chart(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type PptResult<T> = Result<T, PptError>;
