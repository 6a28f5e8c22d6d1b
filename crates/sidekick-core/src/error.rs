use thiserror::Error;

#[derive(Error, Debug)]
pub enum SidekickError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Empty frame sequence")]
    EmptySequence,
}

pub type Result<T> = std::result::Result<T, SidekickError>;
