use super::TimingBreakdown;
use crate::channels::ChannelRole;
use crate::image::PixelFormat;
use crate::params::ConversionPlan;
use serde::Serialize;

/// Outcome for one channel of the source image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChannelStatus {
    /// Distance field written.
    Converted,
    /// Stamped with a constant value.
    Filled(u8),
    /// Not selected; left as it was (in place) or cleared (resample).
    Skipped,
    /// Fewer than two threshold crossings: nothing to measure against.
    NoContour,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelReport {
    /// Byte offset within a pixel.
    pub index: usize,
    pub role: ChannelRole,
    pub status: ChannelStatus,
    pub intersections: usize,
    pub edges: usize,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub format: PixelFormat,
}

/// Summary of a conversion, suitable for JSON dumps.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionReport {
    pub input: InputDescriptor,
    pub plan: ConversionPlan,
    pub channels: Vec<ChannelReport>,
    pub timings: TimingBreakdown,
}

impl ConversionReport {
    pub fn channel(&self, role: ChannelRole) -> Option<&ChannelReport> {
        self.channels.iter().find(|c| c.role == role)
    }

    pub fn converted_count(&self) -> usize {
        self.channels
            .iter()
            .filter(|c| c.status == ChannelStatus::Converted)
            .count()
    }
}
