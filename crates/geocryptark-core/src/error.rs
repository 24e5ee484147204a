use thiserror::Error;

pub type GeoCoreResult<T> = Result<T, GeoCoreError>;

#[derive(Debug, Error)]
pub enum GeoCoreError {
    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
