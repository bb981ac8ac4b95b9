use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Empty sequence: {0}")]
    EmptySequence(String),

    #[error("Unbounded sequence: {0}")]
    UnboundedSequence(String),
}

pub type Result<T> = std::result::Result<T, Error>;
