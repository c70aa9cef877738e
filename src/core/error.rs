use thiserror::Error;

#[derive(Debug, Error)]
pub enum PadError {
    #[error("grid dimensions must be positive, got {columns}x{rows}")]
    InvalidDimensions { columns: i64, rows: i64 },
    #[error("grid input is not a number: {0:?}")]
    NotANumber(String),
    #[error("invalid color: {0:?}")]
    InvalidColor(String),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("image encode failed: {0}")]
    Encode(#[from] image::ImageError),
}

impl From<serde_json::Error> for PadError {
    fn from(err: serde_json::Error) -> Self {
        PadError::Config(err.to_string())
    }
}
