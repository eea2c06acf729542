//! CLI error type.

use thiserror::Error;

use fourier_draw::FourierError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Fourier(#[from] FourierError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("render error: {0}")]
    Render(String),

    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, CliError>;
