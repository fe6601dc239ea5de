#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod converter;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod params;

// Pipeline stages – public for tools and tests.
pub mod channels;
pub mod contour;
pub mod fill;
pub mod intersections;
pub mod render;
pub mod sampling;

/// Intensity separating inside (`>=`) from outside (`<`).
pub const THRESHOLD: u8 = 127;

// --- High-level re-exports -------------------------------------------------

pub use crate::converter::{SdfConverter, SdfOutput};
pub use crate::error::Error;
pub use crate::params::{ChannelSelection, ConversionPlan, DistanceMode, RgbaMode, SdfParams};

pub use crate::diagnostics::{ChannelReport, ChannelStatus, ConversionReport};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use bitmap_sdf::prelude::*;
///
/// # fn main() -> Result<(), Error> {
/// let (w, h) = (64usize, 64usize);
/// let mut image = PixelBuffer::new(w, h, PixelFormat::Rgba8);
///
/// let converter = SdfConverter::new(SdfParams::resample(32));
/// let output = converter.convert(&mut image)?;
/// println!("converted={}", output.report().converted_count());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{PixelBuffer, PixelFormat};
    pub use crate::{DistanceMode, Error, RgbaMode, SdfConverter, SdfOutput, SdfParams};
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    pub use crate::channels::{classify_channels, ChannelLayout, ChannelRole};
    pub use crate::contour::{extract_edges, EdgeSegment};
    pub use crate::fill::fill_channel;
    pub use crate::intersections::{find_intersections, IntersectionMap, Intersections};
    pub use crate::render::DistanceFieldRenderer;
    pub use crate::sampling::{sample_bilinear_u8, CenterScaleMap};
}
