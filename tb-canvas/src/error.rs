//! Error types for tb-canvas.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using CanvasError.
pub type CanvasResult<T> = Result<T, CanvasError>;

/// Errors that can occur while creating or loading a canvas.
///
/// Drawing through a [`Gc`](crate::Gc) never fails; these only surface from
/// construction and encoding.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// Invalid canvas dimensions (must be positive and within limits).
    #[error("Invalid dimensions: width={width}, height={height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// The pixel buffer could not be allocated.
    #[error("Failed to allocate a {width}x{height} surface")]
    Allocation { width: u32, height: u32 },

    /// An image file could not be turned into a canvas.
    #[error("Failed to load {}: {reason}", path.display())]
    Load { path: PathBuf, reason: String },

    /// I/O error while reading an image file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The JPEG decoder rejected the input.
    #[error("JPEG decoding error: {0}")]
    Decode(String),

    /// The decoder produced samples that cannot be stored as RGB24.
    #[error("Unsupported JPEG color type: {0}")]
    UnsupportedColorType(String),

    /// PNG encoding or decoding error.
    #[error("PNG error: {0}")]
    Png(String),

    /// Failed to parse a color value.
    #[error("Failed to parse color: {0}")]
    ColorParseError(String),
}

impl From<image::ImageError> for CanvasError {
    fn from(err: image::ImageError) -> Self {
        CanvasError::Decode(err.to_string())
    }
}

impl From<png::EncodingError> for CanvasError {
    fn from(err: png::EncodingError) -> Self {
        CanvasError::Png(err.to_string())
    }
}

impl From<png::DecodingError> for CanvasError {
    fn from(err: png::DecodingError) -> Self {
        CanvasError::Png(err.to_string())
    }
}
