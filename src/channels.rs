//! Channel classification: which byte of a pixel plays which colour role.
use crate::image::PixelFormat;
use crate::Error;
use log::error;
use serde::{Deserialize, Serialize};

/// Colour role of one byte within a pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelRole {
    Red,
    Green,
    Blue,
    Alpha,
}

const MAX_CHANNELS: usize = 4;

/// Ordered channel roles of a format, indexed by byte offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelLayout {
    roles: [ChannelRole; MAX_CHANNELS],
    len: usize,
}

impl ChannelLayout {
    fn from_roles(roles: &[ChannelRole]) -> Self {
        debug_assert!(!roles.is_empty() && roles.len() <= MAX_CHANNELS);
        let mut out = [ChannelRole::Alpha; MAX_CHANNELS];
        out[..roles.len()].copy_from_slice(roles);
        Self {
            roles: out,
            len: roles.len(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn roles(&self) -> &[ChannelRole] {
        &self.roles[..self.len]
    }

    /// Role at byte offset `index`.
    pub fn get(&self, index: usize) -> Option<ChannelRole> {
        self.roles().get(index).copied()
    }

    /// Byte offset of the first channel with `role`.
    pub fn position(&self, role: ChannelRole) -> Option<usize> {
        self.roles().iter().position(|&r| r == role)
    }

    /// `(byte offset, role)` pairs in byte order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, ChannelRole)> + '_ {
        self.roles().iter().copied().enumerate()
    }
}

/// Map a pixel format to its channel roles.
///
/// Single-channel 8-bit data is treated as alpha coverage.
pub fn classify_channels(format: PixelFormat) -> Result<ChannelLayout, Error> {
    use ChannelRole::*;
    match format {
        PixelFormat::G8 => Ok(ChannelLayout::from_roles(&[Alpha])),
        PixelFormat::Bgra8 | PixelFormat::Bgre8 => {
            Ok(ChannelLayout::from_roles(&[Blue, Green, Red, Alpha]))
        }
        PixelFormat::Rgba8 => Ok(ChannelLayout::from_roles(&[Red, Green, Blue, Alpha])),
        PixelFormat::G16 | PixelFormat::Rgba16 | PixelFormat::Rgba16F | PixelFormat::Rgba32F => {
            error!("unsupported source format {format:?}: only 8-bit layouts can be converted");
            Err(Error::UnsupportedFormat(format))
        }
    }
}
