//! Owned interleaved pixel buffer handed in by the caller.
//!
//! The buffer is row-major with `format.bytes_per_pixel()` bytes per pixel
//! and no row padding. Channel access goes through [`PixelBuffer::channel_plane`]
//! and [`PixelBuffer::channel_mut`] so no caller computes byte offsets.
use super::{GrayImageU8, PixelFormat};
use crate::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    format: PixelFormat,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Zero-filled buffer of the given size and layout.
    pub fn new(width: usize, height: usize, format: PixelFormat) -> Self {
        Self {
            width,
            height,
            format,
            data: vec![0; width * height * format.bytes_per_pixel()],
        }
    }

    /// Wrap raw bytes, checking that their length matches the layout.
    pub fn from_raw(
        width: usize,
        height: usize,
        format: PixelFormat,
        data: Vec<u8>,
    ) -> Result<Self, Error> {
        let expected = width * height * format.bytes_per_pixel();
        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            format,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    #[inline]
    pub fn bytes_per_pixel(&self) -> usize {
        self.format.bytes_per_pixel()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Read the byte at `channel` of pixel `(x, y)`.
    #[inline]
    pub fn channel_value(&self, x: usize, y: usize, channel: usize) -> u8 {
        self.pixel(x, y)[channel]
    }

    /// All bytes of pixel `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let bpp = self.bytes_per_pixel();
        let start = (y * self.width + x) * bpp;
        &self.data[start..start + bpp]
    }

    /// Copy one channel into a tightly packed plane.
    pub fn channel_plane(&self, channel: usize) -> GrayImageU8 {
        let bpp = self.bytes_per_pixel();
        assert!(channel < bpp, "channel {channel} out of range for {bpp}-byte pixels");
        let data = self.data.chunks_exact(bpp).map(|px| px[channel]).collect();
        GrayImageU8::new(self.width, self.height, data)
    }

    /// Iterate mutably over the `channel` byte of every pixel in row-major order.
    pub fn channel_mut(&mut self, channel: usize) -> impl Iterator<Item = &mut u8> + '_ {
        let bpp = self.bytes_per_pixel();
        assert!(channel < bpp, "channel {channel} out of range for {bpp}-byte pixels");
        self.data.chunks_exact_mut(bpp).map(move |px| &mut px[channel])
    }
}
