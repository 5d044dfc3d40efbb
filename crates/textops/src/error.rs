use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextOpsError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, TextOpsError>;
