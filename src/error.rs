use crate::image::PixelFormat;
use std::fmt;

/// Failures that abort a conversion.
///
/// A channel without a usable contour is not an error; it is reported per
/// channel through [`crate::diagnostics::ChannelStatus::NoContour`].
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// 16-bit and floating-point layouts cannot be classified into 8-bit roles.
    UnsupportedFormat(PixelFormat),
    /// Raw pixel data does not match `width * height * bytes_per_pixel`.
    SizeMismatch { expected: usize, actual: usize },
    /// Zero-sized input, or a resample target that rounds to nothing.
    EmptyImage,
    /// Field distance must be finite and positive.
    InvalidDistance(f32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFormat(format) => {
                write!(f, "unsupported pixel format {format:?}")
            }
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected} bytes, got {actual}")
            }
            Self::EmptyImage => write!(f, "image has no pixels"),
            Self::InvalidDistance(d) => write!(f, "invalid field distance {d}"),
        }
    }
}

impl std::error::Error for Error {}
