//! Parameter types configuring a conversion.
//!
//! Defaults produce an in-place alpha field with an 8 pixel ramp. For the
//! resample path set `rgba_mode` to [`RgbaMode::Resample`] and pick a
//! `texture_size`.

use crate::channels::ChannelRole;
use crate::Error;
use serde::{Deserialize, Serialize};

/// How the width of the distance ramp is specified.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMode {
    /// Fraction of the shorter source dimension.
    Normalized(f32),
    /// Pixels in the output image.
    Pixels(f32),
    /// Source pixels, used as is.
    Absolute(f32),
}

impl Default for DistanceMode {
    fn default() -> Self {
        Self::Pixels(8.0)
    }
}

impl DistanceMode {
    /// Ramp width in source pixels. `scale` is output size over source size.
    pub fn field_distance(&self, source_w: usize, source_h: usize, scale: f32) -> f32 {
        match *self {
            Self::Normalized(fraction) => fraction * source_w.min(source_h) as f32,
            Self::Pixels(count) => count / scale,
            Self::Absolute(distance) => distance,
        }
    }
}

/// What happens to the colour channels of multi-channel images.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RgbaMode {
    /// Convert alpha in place and keep the colour channels untouched.
    #[default]
    PreserveRgb,
    /// Regenerate every selected channel at `texture_size`.
    Resample,
}

/// Channels converted on the resample path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelSelection {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
    pub alpha: bool,
}

impl Default for ChannelSelection {
    fn default() -> Self {
        Self::all()
    }
}

impl ChannelSelection {
    pub fn all() -> Self {
        Self {
            red: true,
            green: true,
            blue: true,
            alpha: true,
        }
    }

    pub fn alpha_only() -> Self {
        Self {
            red: false,
            green: false,
            blue: false,
            alpha: true,
        }
    }

    pub fn uses(&self, role: ChannelRole) -> bool {
        match role {
            ChannelRole::Red => self.red,
            ChannelRole::Green => self.green,
            ChannelRole::Blue => self.blue,
            ChannelRole::Alpha => self.alpha,
        }
    }
}

/// Conversion settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SdfParams {
    pub distance_mode: DistanceMode,
    /// Swap which side of the contour gets the high values.
    pub invert_distance: bool,
    pub rgba_mode: RgbaMode,
    /// Shorter output dimension on the resample path.
    pub texture_size: u32,
    pub channels: ChannelSelection,
    /// Caller wants single-channel output (grayscale or alpha texture).
    /// Forces the resample path.
    pub single_channel: bool,
}

impl Default for SdfParams {
    fn default() -> Self {
        Self {
            distance_mode: DistanceMode::default(),
            invert_distance: false,
            rgba_mode: RgbaMode::default(),
            texture_size: 64,
            channels: ChannelSelection::default(),
            single_channel: false,
        }
    }
}

impl SdfParams {
    /// Parameters for the resample path at `texture_size`.
    pub fn resample(texture_size: u32) -> Self {
        Self {
            rgba_mode: RgbaMode::Resample,
            texture_size,
            ..Default::default()
        }
    }

    pub fn with_distance_mode(mut self, mode: DistanceMode) -> Self {
        self.distance_mode = mode;
        self
    }

    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert_distance = invert;
        self
    }

    pub fn with_channels(mut self, channels: ChannelSelection) -> Self {
        self.channels = channels;
        self
    }

    /// Resolve the settings against a concrete source image.
    pub fn plan(
        &self,
        source_w: usize,
        source_h: usize,
        source_channels: usize,
    ) -> Result<ConversionPlan, Error> {
        if source_w == 0 || source_h == 0 {
            return Err(Error::EmptyImage);
        }
        let num_channels = if self.single_channel {
            1
        } else {
            source_channels
        };
        let in_place = num_channels > 1 && self.rgba_mode == RgbaMode::PreserveRgb;
        let scale = if in_place {
            1.0
        } else {
            self.texture_size as f32 / source_w.min(source_h) as f32
        };
        let (output_w, output_h) = if in_place {
            (source_w, source_h)
        } else {
            (
                (source_w as f32 * scale) as usize,
                (source_h as f32 * scale) as usize,
            )
        };
        if output_w == 0 || output_h == 0 {
            return Err(Error::EmptyImage);
        }
        let field_distance = self.distance_mode.field_distance(source_w, source_h, scale);
        if !field_distance.is_finite() || field_distance <= 0.0 {
            return Err(Error::InvalidDistance(field_distance));
        }
        Ok(ConversionPlan {
            num_channels,
            in_place,
            scale,
            output_w,
            output_h,
            field_distance,
        })
    }
}

/// Derived quantities for one conversion.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionPlan {
    pub num_channels: usize,
    pub in_place: bool,
    /// Output size over source size.
    pub scale: f32,
    pub output_w: usize,
    pub output_h: usize,
    /// Ramp width in source pixels.
    pub field_distance: f32,
}
