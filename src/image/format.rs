//! Pixel layout tags for interleaved source buffers.
use serde::{Deserialize, Serialize};

/// Pixel layout of a [`super::PixelBuffer`].
///
/// Only the 8-bit layouts can be converted; the wider ones exist so callers
/// can hand over whatever their decoder produced and get a clean
/// [`crate::Error::UnsupportedFormat`] back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PixelFormat {
    /// Single 8-bit channel.
    G8,
    /// 4x8-bit, byte order B, G, R, A.
    Bgra8,
    /// 4x8-bit shared-exponent layout, byte order B, G, R, E.
    Bgre8,
    /// 4x8-bit, byte order R, G, B, A.
    Rgba8,
    /// Single 16-bit channel.
    G16,
    /// 4x16-bit integer.
    Rgba16,
    /// 4x16-bit float.
    Rgba16F,
    /// 4x32-bit float.
    Rgba32F,
}

impl PixelFormat {
    /// Bytes occupied by one pixel.
    #[inline]
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::G8 => 1,
            Self::Bgra8 | Self::Bgre8 | Self::Rgba8 => 4,
            Self::G16 => 2,
            Self::Rgba16 | Self::Rgba16F => 8,
            Self::Rgba32F => 16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PixelFormat;

    #[test]
    fn byte_sizes_match_channel_layout() {
        assert_eq!(PixelFormat::G8.bytes_per_pixel(), 1);
        assert_eq!(PixelFormat::Bgra8.bytes_per_pixel(), 4);
        assert_eq!(PixelFormat::Rgba16F.bytes_per_pixel(), 8);
        assert_eq!(PixelFormat::G16.bytes_per_pixel(), 2);
        assert_eq!(PixelFormat::Rgba32F.bytes_per_pixel(), 16);
    }
}
