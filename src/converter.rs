//! Conversion entry point: channel classification plus the per-channel
//! intersections → edges → render pipeline.
//!
//! Two paths exist:
//!
//! - **in place** (`RgbaMode::PreserveRgb` on multi-channel images): only the
//!   alpha channel is rewritten, inside the caller's buffer, at the source
//!   resolution. Colour channels are untouched. An alpha channel without a
//!   contour is left as it was and a warning is logged.
//! - **resample**: a new zeroed buffer of the same format is allocated at
//!   `texture_size` (shorter side) and every selected channel is rendered
//!   into it. Alpha channels that are not rendered are filled with 255.
//!
//! The source channel is always copied into its own plane before rendering,
//! so in-place rendering samples original intensities only.
use crate::channels::{classify_channels, ChannelRole};
use crate::contour::{extract_edges, EdgeSegment};
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{
    ChannelReport, ChannelStatus, ConversionReport, InputDescriptor, TimingBreakdown,
};
use crate::fill::fill_channel;
use crate::image::{GrayImageU8, PixelBuffer};
use crate::intersections::{find_intersections, Intersections};
use crate::params::{ConversionPlan, SdfParams};
use crate::render::DistanceFieldRenderer;
use crate::Error;
use log::{debug, info, warn};
use std::time::Instant;

/// Value written to alpha channels that receive no distance field.
pub const OPAQUE: u8 = 255;

/// Result of [`SdfConverter::convert`].
#[derive(Clone, Debug)]
pub enum SdfOutput {
    /// The caller's buffer was rewritten.
    InPlace(ConversionReport),
    /// A new buffer at the planned output size.
    Resampled {
        image: PixelBuffer,
        report: ConversionReport,
    },
}

impl SdfOutput {
    pub fn report(&self) -> &ConversionReport {
        match self {
            Self::InPlace(report) => report,
            Self::Resampled { report, .. } => report,
        }
    }

    /// The resampled image, if this was the resample path.
    pub fn into_image(self) -> Option<PixelBuffer> {
        match self {
            Self::InPlace(_) => None,
            Self::Resampled { image, .. } => Some(image),
        }
    }
}

/// Contour of one channel, ready to render.
struct ChannelContour {
    plane: GrayImageU8,
    intersections: Intersections,
    edges: Vec<EdgeSegment>,
}

pub struct SdfConverter {
    params: SdfParams,
}

impl SdfConverter {
    pub fn new(params: SdfParams) -> Self {
        Self { params }
    }

    /// Convert `image` into a signed distance field.
    ///
    /// Unsupported formats fail before anything is allocated or written.
    pub fn convert(&self, image: &mut PixelBuffer) -> Result<SdfOutput, Error> {
        let start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let layout = timings.measure("classify", || classify_channels(image.format()))?;
        let plan = self
            .params
            .plan(image.width(), image.height(), layout.len())?;
        debug!(
            "SdfConverter::convert {}x{} {:?} -> {}x{} (in_place={}, field_distance={:.3})",
            image.width(),
            image.height(),
            image.format(),
            plan.output_w,
            plan.output_h,
            plan.in_place,
            plan.field_distance
        );

        let input = InputDescriptor {
            width: image.width(),
            height: image.height(),
            format: image.format(),
        };
        let mut channels = Vec::with_capacity(layout.len());

        let output = if plan.in_place {
            for (index, role) in layout.iter() {
                let report = if role == ChannelRole::Alpha {
                    self.convert_in_place(image, index, role, &plan, &mut timings)
                } else {
                    ChannelReport {
                        index,
                        role,
                        status: ChannelStatus::Skipped,
                        intersections: 0,
                        edges: 0,
                    }
                };
                channels.push(report);
            }
            None
        } else {
            let mut target = PixelBuffer::new(plan.output_w, plan.output_h, image.format());
            for (index, role) in layout.iter() {
                let report =
                    self.convert_resampled(image, &mut target, index, role, &plan, &mut timings);
                channels.push(report);
            }
            Some(target)
        };

        timings.total_ms = elapsed_ms(start);
        info!(
            "SdfConverter::convert complete: {} of {} channels converted in {:.2} ms",
            channels
                .iter()
                .filter(|c| c.status == ChannelStatus::Converted)
                .count(),
            channels.len(),
            timings.total_ms
        );

        let report = ConversionReport {
            input,
            plan,
            channels,
            timings,
        };
        Ok(match output {
            None => SdfOutput::InPlace(report),
            Some(image) => SdfOutput::Resampled { image, report },
        })
    }

    fn convert_in_place(
        &self,
        image: &mut PixelBuffer,
        index: usize,
        role: ChannelRole,
        plan: &ConversionPlan,
        timings: &mut TimingBreakdown,
    ) -> ChannelReport {
        let contour = trace_channel(image, index, timings);
        let status = if contour.intersections.has_contour() {
            self.render(&contour, image, index, plan, timings);
            ChannelStatus::Converted
        } else {
            warn!("channel {index} ({role:?}): no contour found, leaving channel unchanged");
            ChannelStatus::NoContour
        };
        contour.report(index, role, status)
    }

    fn convert_resampled(
        &self,
        source: &PixelBuffer,
        target: &mut PixelBuffer,
        index: usize,
        role: ChannelRole,
        plan: &ConversionPlan,
        timings: &mut TimingBreakdown,
    ) -> ChannelReport {
        let contour = self
            .params
            .channels
            .uses(role)
            .then(|| trace_channel(source, index, timings));

        match contour {
            Some(contour) if contour.intersections.has_contour() => {
                self.render(&contour, target, index, plan, timings);
                contour.report(index, role, ChannelStatus::Converted)
            }
            other => {
                let status = if role == ChannelRole::Alpha {
                    timings.measure("fill", || fill_channel(target, index, OPAQUE));
                    ChannelStatus::Filled(OPAQUE)
                } else if other.is_some() {
                    ChannelStatus::NoContour
                } else {
                    ChannelStatus::Skipped
                };
                debug!("channel {index} ({role:?}): {status:?}");
                match other {
                    Some(contour) => contour.report(index, role, status),
                    None => ChannelReport {
                        index,
                        role,
                        status,
                        intersections: 0,
                        edges: 0,
                    },
                }
            }
        }
    }

    fn render(
        &self,
        contour: &ChannelContour,
        target: &mut PixelBuffer,
        index: usize,
        plan: &ConversionPlan,
        timings: &mut TimingBreakdown,
    ) {
        let view = contour.plane.as_view();
        let renderer = DistanceFieldRenderer::new(
            &view,
            &contour.edges,
            plan.field_distance,
            self.params.invert_distance,
        );
        timings.measure("render", || renderer.render_into(target, index));
    }
}

fn trace_channel(
    image: &PixelBuffer,
    index: usize,
    timings: &mut TimingBreakdown,
) -> ChannelContour {
    let plane = image.channel_plane(index);
    let intersections = timings.measure("intersections", || find_intersections(&plane.as_view()));
    let edges = if intersections.has_contour() {
        timings.measure("edges", || extract_edges(&intersections.map))
    } else {
        Vec::new()
    };
    ChannelContour {
        plane,
        intersections,
        edges,
    }
}

impl ChannelContour {
    fn report(&self, index: usize, role: ChannelRole, status: ChannelStatus) -> ChannelReport {
        ChannelReport {
            index,
            role,
            status,
            intersections: self.intersections.count,
            edges: self.edges.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::PixelFormat;
    use crate::params::{ChannelSelection, DistanceMode, RgbaMode};

    /// BGRA image with constant colour and an alpha disc of the given radius.
    fn bgra_disc(size: usize, radius: f32) -> PixelBuffer {
        let c = (size as f32 - 1.0) * 0.5;
        let mut data = Vec::with_capacity(size * size * 4);
        for y in 0..size {
            for x in 0..size {
                let d = ((x as f32 - c).powi(2) + (y as f32 - c).powi(2)).sqrt();
                let coverage = (radius - d + 0.5).clamp(0.0, 1.0);
                data.extend_from_slice(&[10, 20, 30, (coverage * 255.0).round() as u8]);
            }
        }
        PixelBuffer::from_raw(size, size, PixelFormat::Bgra8, data).expect("valid buffer")
    }

    #[test]
    fn preserve_rgb_rewrites_only_alpha() {
        let mut image = bgra_disc(32, 9.0);
        let before = image.clone();
        let output = SdfConverter::new(SdfParams::default())
            .convert(&mut image)
            .expect("conversion succeeds");
        assert!(matches!(output, SdfOutput::InPlace(_)));
        let report = output.report();
        assert_eq!(report.converted_count(), 1);
        assert_eq!(
            report.channel(ChannelRole::Blue).map(|c| c.status),
            Some(ChannelStatus::Skipped)
        );
        for y in 0..32 {
            for x in 0..32 {
                assert_eq!(&image.pixel(x, y)[..3], &before.pixel(x, y)[..3]);
            }
        }
        assert_ne!(image, before, "alpha must change");
        // Far corner is outside the disc, the center is inside.
        assert!(image.channel_value(0, 0, 3) > 200);
        assert!(image.channel_value(16, 16, 3) < 50);
    }

    #[test]
    fn preserve_rgb_without_contour_leaves_alpha() {
        let mut image = PixelBuffer::from_raw(4, 4, PixelFormat::Bgra8, vec![90; 64])
            .expect("valid buffer");
        let before = image.clone();
        let output = SdfConverter::new(SdfParams::default())
            .convert(&mut image)
            .expect("conversion succeeds");
        assert_eq!(image, before);
        assert_eq!(
            output.report().channel(ChannelRole::Alpha).map(|c| c.status),
            Some(ChannelStatus::NoContour)
        );
    }

    #[test]
    fn resample_fills_flat_alpha_and_clears_colour() {
        let mut image = PixelBuffer::from_raw(8, 8, PixelFormat::Rgba8, vec![200; 256])
            .expect("valid buffer");
        let output = SdfConverter::new(SdfParams::resample(16))
            .convert(&mut image)
            .expect("conversion succeeds");
        let report = output.report().clone();
        let image = output.into_image().expect("resample allocates");
        assert_eq!((image.width(), image.height()), (16, 16));
        assert_eq!(image.format(), PixelFormat::Rgba8);
        for px in image.as_bytes().chunks_exact(4) {
            assert_eq!(px, &[0, 0, 0, OPAQUE]);
        }
        assert_eq!(
            report.channel(ChannelRole::Alpha).map(|c| c.status),
            Some(ChannelStatus::Filled(OPAQUE))
        );
        assert_eq!(
            report.channel(ChannelRole::Red).map(|c| c.status),
            Some(ChannelStatus::NoContour)
        );
    }

    #[test]
    fn unselected_channels_are_skipped() {
        let mut image = bgra_disc(16, 5.0);
        let params = SdfParams::resample(16).with_channels(ChannelSelection {
            alpha: false,
            ..ChannelSelection::alpha_only()
        });
        let output = SdfConverter::new(params)
            .convert(&mut image)
            .expect("conversion succeeds");
        let report = output.report();
        assert_eq!(report.converted_count(), 0);
        assert_eq!(
            report.channel(ChannelRole::Green).map(|c| c.status),
            Some(ChannelStatus::Skipped)
        );
        assert_eq!(
            report.channel(ChannelRole::Alpha).map(|c| c.status),
            Some(ChannelStatus::Filled(OPAQUE))
        );
    }

    #[test]
    fn gray_input_always_resamples() {
        let mut image = PixelBuffer::from_raw(
            8,
            4,
            PixelFormat::G8,
            (0..32).map(|i| if i % 8 < 4 { 0 } else { 255 }).collect(),
        )
        .expect("valid buffer");
        let params = SdfParams {
            rgba_mode: RgbaMode::PreserveRgb,
            texture_size: 8,
            distance_mode: DistanceMode::Pixels(4.0),
            ..Default::default()
        };
        let output = SdfConverter::new(params)
            .convert(&mut image)
            .expect("conversion succeeds");
        let report = output.report().clone();
        let sdf = output.into_image().expect("single-channel input resamples");
        assert_eq!((sdf.width(), sdf.height()), (16, 8));
        assert_eq!(report.plan.scale, 2.0);
        assert_eq!(report.plan.field_distance, 2.0);
        assert_eq!(report.converted_count(), 1);
    }

    #[test]
    fn unsupported_format_is_fatal_and_untouched() {
        let mut image = PixelBuffer::new(4, 4, PixelFormat::Rgba16F);
        let before = image.clone();
        let err = SdfConverter::new(SdfParams::default())
            .convert(&mut image)
            .unwrap_err();
        assert_eq!(err, Error::UnsupportedFormat(PixelFormat::Rgba16F));
        assert_eq!(image, before);
    }
}
