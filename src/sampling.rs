//! Coordinate mapping between output and source grids, and bilinear sampling.
//!
//! Sampling uses pixel-center coordinates: integer coordinates refer to
//! sample centers, so the center of a `w`-wide grid is `(w - 1) / 2`.
use crate::image::{ImageU8, ImageView};

/// Coordinate mapping from one pixel grid into another.
pub trait ScaleMap {
    fn map(&self, p: [f32; 2]) -> [f32; 2];
}

/// Linear map that keeps the centers of two grids coincident.
///
/// `map(p) = to_center + (p - from_center) * (to_dim / from_dim)` per axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CenterScaleMap {
    from_center: [f32; 2],
    to_center: [f32; 2],
    scale: [f32; 2],
}

impl CenterScaleMap {
    pub fn new(from_w: usize, from_h: usize, to_w: usize, to_h: usize) -> Self {
        let center = |w: usize, h: usize| [(w as f32 - 1.0) * 0.5, (h as f32 - 1.0) * 0.5];
        let ratio = |to: usize, from: usize| {
            if from > 0 {
                to as f32 / from as f32
            } else {
                1.0
            }
        };
        Self {
            from_center: center(from_w, from_h),
            to_center: center(to_w, to_h),
            scale: [ratio(to_w, from_w), ratio(to_h, from_h)],
        }
    }

    pub fn scale(&self) -> [f32; 2] {
        self.scale
    }
}

impl ScaleMap for CenterScaleMap {
    #[inline]
    fn map(&self, p: [f32; 2]) -> [f32; 2] {
        [
            self.to_center[0] + (p[0] - self.from_center[0]) * self.scale[0],
            self.to_center[1] + (p[1] - self.from_center[1]) * self.scale[1],
        ]
    }
}

/// Bilinear sample of an 8-bit plane, rounded to the nearest integer.
///
/// The coordinate is clamped to `[0, w - 1] x [0, h - 1]`; the right and
/// bottom neighbours are clamped to the last column and row.
///
/// # Panics
///
/// Panics when the plane has zero width or height.
pub fn sample_bilinear_u8(img: &ImageU8<'_>, x: f32, y: f32) -> u8 {
    let w = img.width();
    let h = img.height();
    assert!(w > 0 && h > 0, "cannot sample an empty plane");

    let x = x.clamp(0.0, (w - 1) as f32);
    let y = y.clamp(0.0, (h - 1) as f32);
    let left = x.floor() as usize;
    let top = y.floor() as usize;
    let right = (left + 1).min(w - 1);
    let bottom = (top + 1).min(h - 1);
    let dx = x - left as f32;
    let dy = y - top as f32;

    let row_top = img.row(top);
    let row_bottom = img.row(bottom);
    let upper = row_top[left] as f32 * (1.0 - dx) + row_top[right] as f32 * dx;
    let lower = row_bottom[left] as f32 * (1.0 - dx) + row_bottom[right] as f32 * dx;
    (upper * (1.0 - dy) + lower * dy).round() as u8
}
