//! Distance field rendering from extracted contour segments.
//!
//! For every output pixel the renderer:
//!
//! 1. maps the pixel into source space with a [`CenterScaleMap`];
//! 2. takes the minimum distance to every segment whose endpoints both lie
//!    within half the field distance (Chebyshev) of that point, defaulting
//!    to half the field distance when none is closer;
//! 3. signs it by bilinearly sampling the source channel: samples below
//!    [`crate::THRESHOLD`] are outside and get a positive distance, unless
//!    `invert` flips the sign;
//! 4. normalises `signed / field_distance + 0.5` and quantizes to `0..=255`.
//!
//! Pixels are independent; with the `parallel` feature they are rendered
//! with rayon, each task writing only its own pixel.
use crate::contour::EdgeSegment;
use crate::image::{ImageU8, ImageView, PixelBuffer};
use crate::sampling::{sample_bilinear_u8, CenterScaleMap, ScaleMap};
use crate::THRESHOLD;
use nalgebra::Vector2;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Closest point to `p` on the segment `a`-`b` (not the infinite line).
pub fn closest_point_on_segment(
    p: Vector2<f32>,
    a: Vector2<f32>,
    b: Vector2<f32>,
) -> Vector2<f32> {
    let segment = b - a;
    let to_point = p - a;

    let along = to_point.dot(&segment);
    if along <= 0.0 {
        return a;
    }
    let len_sq = segment.dot(&segment);
    if len_sq <= along {
        return b;
    }
    a + segment * (along / len_sq)
}

/// Squared distance from `p` to the segment.
#[inline]
pub fn segment_distance_sq(p: [f32; 2], edge: &EdgeSegment) -> f32 {
    let p = Vector2::from(p);
    let closest = closest_point_on_segment(p, Vector2::from(edge.p0), Vector2::from(edge.p1));
    (p - closest).norm_squared()
}

/// Map a signed distance to an 8-bit value centred on the contour.
#[inline]
pub fn quantize_distance(signed_distance: f32, field_distance: f32) -> u8 {
    let normalized = signed_distance / field_distance + 0.5;
    (normalized * 255.0).floor().clamp(0.0, 255.0) as u8
}

/// Signed distance field evaluator for one source channel.
pub struct DistanceFieldRenderer<'a> {
    source: &'a ImageU8<'a>,
    edges: &'a [EdgeSegment],
    field_distance: f32,
    invert: bool,
}

impl<'a> DistanceFieldRenderer<'a> {
    /// `field_distance` is the full width of the distance ramp in source pixels.
    pub fn new(
        source: &'a ImageU8<'a>,
        edges: &'a [EdgeSegment],
        field_distance: f32,
        invert: bool,
    ) -> Self {
        Self {
            source,
            edges,
            field_distance,
            invert,
        }
    }

    /// Unsigned distance to the nearest segment, capped at half the field distance.
    pub fn nearest_distance(&self, p: [f32; 2]) -> f32 {
        let half = self.field_distance * 0.5;
        let mut best_sq = half * half;
        for edge in self.edges {
            if !edge.within(p, half) {
                continue;
            }
            let d_sq = segment_distance_sq(p, edge);
            if d_sq < best_sq {
                best_sq = d_sq;
            }
        }
        best_sq.sqrt()
    }

    /// Source samples below the threshold are outside the shape.
    pub fn is_outside(&self, p: [f32; 2]) -> bool {
        sample_bilinear_u8(self.source, p[0], p[1]) < THRESHOLD
    }

    /// Quantized field value at source-space point `p`.
    pub fn value_at(&self, p: [f32; 2]) -> u8 {
        let dist = self.nearest_distance(p);
        let signed = if self.is_outside(p) ^ self.invert {
            dist
        } else {
            -dist
        };
        quantize_distance(signed, self.field_distance)
    }

    /// Write the field into byte `channel` of every pixel of `target`.
    ///
    /// `target` may have any size; its grid is mapped onto the source with
    /// coincident centers.
    ///
    /// # Panics
    ///
    /// Panics when `channel` is not a byte offset within one pixel of
    /// `target`, or when the source plane is empty.
    pub fn render_into(&self, target: &mut PixelBuffer, channel: usize) {
        let tw = target.width();
        let map = CenterScaleMap::new(
            tw,
            target.height(),
            self.source.width(),
            self.source.height(),
        );
        let bpp = target.bytes_per_pixel();
        assert!(channel < bpp, "channel {channel} out of range for {bpp}-byte pixels");

        let write = |(i, px): (usize, &mut [u8])| {
            let p = map.map([(i % tw) as f32, (i / tw) as f32]);
            px[channel] = self.value_at(p);
        };

        #[cfg(feature = "parallel")]
        target
            .as_bytes_mut()
            .par_chunks_mut(bpp)
            .enumerate()
            .for_each(write);

        #[cfg(not(feature = "parallel"))]
        target
            .as_bytes_mut()
            .chunks_mut(bpp)
            .enumerate()
            .for_each(write);
    }
}
