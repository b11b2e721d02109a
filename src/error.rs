//! Errors

use crate::buffer::ColorMode;

use thiserror::Error;

/// Errors from image construction and image files
///
/// Scanning itself never fails; bad paths produce fewer rows.
#[derive(Debug, Error)]
pub enum ClipError {
    #[error("image has zero width or height ({width}x{height})")]
    ZeroDimension { width: usize, height: usize },
    #[error("image of {width}x{height} pixels does not fit in memory")]
    TooLarge { width: usize, height: usize },
    #[error("pixel buffer is {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
    #[error("color mode {0:?} is not supported")]
    UnsupportedColorMode(ColorMode),
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
