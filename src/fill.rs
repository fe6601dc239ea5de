//! Constant fill for channels that are not distance-transformed.
use crate::image::PixelBuffer;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Rows narrower than this are filled sequentially.
pub const PARALLEL_ROW_WIDTH: usize = 1024;

/// Set byte `channel` of every pixel in `buffer` to `value`.
pub fn fill_channel(buffer: &mut PixelBuffer, channel: usize, value: u8) {
    let width = buffer.width();
    if width < PARALLEL_ROW_WIDTH {
        buffer.channel_mut(channel).for_each(|v| *v = value);
        return;
    }
    fill_rows(buffer, channel, value);
}

#[cfg(feature = "parallel")]
fn fill_rows(buffer: &mut PixelBuffer, channel: usize, value: u8) {
    let bpp = buffer.bytes_per_pixel();
    let row_bytes = buffer.width() * bpp;
    buffer
        .as_bytes_mut()
        .par_chunks_mut(row_bytes)
        .for_each(|row| {
            for px in row.chunks_exact_mut(bpp) {
                px[channel] = value;
            }
        });
}

#[cfg(not(feature = "parallel"))]
fn fill_rows(buffer: &mut PixelBuffer, channel: usize, value: u8) {
    buffer.channel_mut(channel).for_each(|v| *v = value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::PixelFormat;

    fn assert_filled(buffer: &PixelBuffer, channel: usize, value: u8) {
        for (i, px) in buffer.as_bytes().chunks_exact(4).enumerate() {
            for (c, &v) in px.iter().enumerate() {
                let expected = if c == channel { value } else { 0 };
                assert_eq!(v, expected, "pixel {i} channel {c}");
            }
        }
    }

    #[test]
    fn narrow_buffer_fills_one_channel() {
        let mut buffer = PixelBuffer::new(5, 3, PixelFormat::Bgra8);
        fill_channel(&mut buffer, 3, 255);
        assert_filled(&buffer, 3, 255);
    }

    #[test]
    fn wide_buffer_takes_row_path() {
        let mut buffer = PixelBuffer::new(PARALLEL_ROW_WIDTH + 3, 4, PixelFormat::Rgba8);
        fill_channel(&mut buffer, 1, 77);
        assert_filled(&buffer, 1, 77);
    }
}
