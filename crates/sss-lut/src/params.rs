//! Generation parameters and their validation.
//!
//! Every pure routine in this crate takes a validated [`LutParams`] by
//! reference. Validation happens once, before any texel is computed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::profile::ShapeScaling;

/// Default number of ring samples per texel.
pub const DEFAULT_SAMPLES: u32 = 200;
/// Default LUT width (light angle axis).
pub const DEFAULT_LUT_WIDTH: u32 = 128;
/// Default LUT height (radius axis).
pub const DEFAULT_LUT_HEIGHT: u32 = 128;
/// Default smallest object radius.
pub const DEFAULT_MIN_RADIUS: f64 = 0.1;
/// Default largest object radius.
pub const DEFAULT_MAX_RADIUS: f64 = 1.0;

/// Largest dimension a TGA header can describe.
pub const MAX_DIMENSION: u32 = u16::MAX as u32;

/// Errors from parameter validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("samples must be > 0")]
    ZeroSamples,

    #[error("{name} must be in 1..={max}, got {value}")]
    InvalidDimension {
        name: &'static str,
        value: u32,
        max: u32,
    },

    #[error("min_radius must be a finite value > 0, got {0}")]
    InvalidMinRadius(f64),

    #[error("max_radius must be finite and > min_radius ({min}), got {max}")]
    InvertedRadiusRange { min: f64, max: f64 },

    #[error("{name} must be a finite value > 0 (millimeters), got {value}")]
    InvalidMeanFreePath { name: &'static str, value: f64 },

    #[error("{name} must be in (0, 1], got {value}")]
    InvalidAlbedo { name: &'static str, value: f64 },
}

/// Scattering parameters for one color channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelParams {
    /// Mean free path length in millimeters.
    pub mfp: f64,
    /// Single-scattering albedo.
    pub albedo: f64,
}

impl Default for ChannelParams {
    fn default() -> Self {
        Self {
            mfp: 1.0,
            albedo: 1.0,
        }
    }
}

impl ChannelParams {
    pub const fn new(mfp: f64, albedo: f64) -> Self {
        Self { mfp, albedo }
    }
}

/// Per-channel parameters in red, green, blue order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RgbChannels {
    pub red: ChannelParams,
    pub green: ChannelParams,
    pub blue: ChannelParams,
}

impl RgbChannels {
    /// Same parameters on all three channels.
    pub const fn uniform(channel: ChannelParams) -> Self {
        Self {
            red: channel,
            green: channel,
            blue: channel,
        }
    }

    /// Channels as an array in red, green, blue order.
    pub fn as_array(&self) -> [ChannelParams; 3] {
        [self.red, self.green, self.blue]
    }
}

/// Texel-to-physical mapping of the table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableGeometry {
    /// Columns, spanning light-incidence cosines in [-1, 1).
    pub width: u32,
    /// Rows, spanning object radii from `max_radius` downwards.
    pub height: u32,
    pub min_radius: f64,
    pub max_radius: f64,
}

impl Default for TableGeometry {
    fn default() -> Self {
        Self {
            width: DEFAULT_LUT_WIDTH,
            height: DEFAULT_LUT_HEIGHT,
            min_radius: DEFAULT_MIN_RADIUS,
            max_radius: DEFAULT_MAX_RADIUS,
        }
    }
}

impl TableGeometry {
    /// Radius difference between consecutive rows.
    #[inline]
    pub fn radius_step(&self) -> f64 {
        (self.max_radius - self.min_radius) / self.height as f64
    }

    /// Cosine difference between consecutive columns.
    #[inline]
    pub fn cos_step(&self) -> f64 {
        2.0 / self.width as f64
    }

    /// Object radius of an emitted row.
    ///
    /// Rows descend from `max_radius`. The TGA raster origin is bottom-left
    /// and the lookup shader relies on this exact row order, so it must not
    /// be flipped.
    #[inline]
    pub fn row_radius(&self, row: u32) -> f64 {
        self.max_radius - self.radius_step() * row as f64
    }

    /// Cosine of the light-incidence angle of a column.
    #[inline]
    pub fn column_cos_theta(&self, col: u32) -> f64 {
        self.cos_step() * col as f64 - 1.0
    }

    /// Number of texels in the table.
    pub fn texel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Unit the table radii are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    #[default]
    Millimeters,
    Centimeters,
    Meters,
}

impl LengthUnit {
    /// Factor converting this unit to millimeters.
    pub fn to_millimeters(self) -> f64 {
        match self {
            LengthUnit::Millimeters => 1.0,
            LengthUnit::Centimeters => 10.0,
            LengthUnit::Meters => 1000.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LengthUnit::Millimeters => "mm",
            LengthUnit::Centimeters => "cm",
            LengthUnit::Meters => "m",
        }
    }
}

/// Complete, immutable configuration of one LUT generation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LutParams {
    pub geometry: TableGeometry,
    pub samples: u32,
    pub channels: RgbChannels,
    #[serde(default)]
    pub radius_unit: LengthUnit,
    #[serde(default)]
    pub scaling: ShapeScaling,
}

impl Default for LutParams {
    fn default() -> Self {
        Self {
            geometry: TableGeometry::default(),
            samples: DEFAULT_SAMPLES,
            channels: RgbChannels::default(),
            radius_unit: LengthUnit::default(),
            scaling: ShapeScaling::default(),
        }
    }
}

impl LutParams {
    /// Check every parameter against its domain.
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.samples == 0 {
            return Err(ParamError::ZeroSamples);
        }

        validate_dimension("lut_width", self.geometry.width)?;
        validate_dimension("lut_height", self.geometry.height)?;

        let TableGeometry {
            min_radius,
            max_radius,
            ..
        } = self.geometry;
        if !(min_radius.is_finite() && min_radius > 0.0) {
            return Err(ParamError::InvalidMinRadius(min_radius));
        }
        if !(max_radius.is_finite() && max_radius > min_radius) {
            return Err(ParamError::InvertedRadiusRange {
                min: min_radius,
                max: max_radius,
            });
        }

        let names = [
            ("mfp_r", "albedo_r"),
            ("mfp_g", "albedo_g"),
            ("mfp_b", "albedo_b"),
        ];
        for (channel, (mfp_name, albedo_name)) in self.channels.as_array().iter().zip(names) {
            validate_channel(channel, mfp_name, albedo_name)?;
        }

        Ok(())
    }

    /// Radius of `row` converted to millimeters.
    #[inline]
    pub fn row_radius_mm(&self, row: u32) -> f64 {
        self.geometry.row_radius(row) * self.radius_unit.to_millimeters()
    }
}

fn validate_dimension(name: &'static str, value: u32) -> Result<(), ParamError> {
    if value == 0 || value > MAX_DIMENSION {
        return Err(ParamError::InvalidDimension {
            name,
            value,
            max: MAX_DIMENSION,
        });
    }
    Ok(())
}

fn validate_channel(
    channel: &ChannelParams,
    mfp_name: &'static str,
    albedo_name: &'static str,
) -> Result<(), ParamError> {
    if !(channel.mfp.is_finite() && channel.mfp > 0.0) {
        return Err(ParamError::InvalidMeanFreePath {
            name: mfp_name,
            value: channel.mfp,
        });
    }
    // Upper bound is inclusive so the command-line default of 1.0 stays valid.
    if !(channel.albedo > 0.0 && channel.albedo <= 1.0) {
        return Err(ParamError::InvalidAlbedo {
            name: albedo_name,
            value: channel.albedo,
        });
    }
    Ok(())
}
