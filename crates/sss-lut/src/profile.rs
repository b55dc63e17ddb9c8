//! Christensen-Burley diffusion profile and its albedo fits.
//!
//! The profile is evaluated once per channel per ring sample, so everything
//! here is a small pure function on `f64`.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Lower bound for the profile denominator.
///
/// Keeps the evaluation finite at `r = 0`; the result is clamped to 1.0
/// anyway, so the exact value only has to be positive.
pub const ZERO_DISTANCE_GUARD: f64 = f64::MIN_POSITIVE;

const EIGHT_PI: f64 = 8.0 * PI;

/// Shape constant fit for the searchlight configuration (scaled mean free path).
#[inline]
pub fn scale_mfp(albedo: f64) -> f64 {
    1.85 - albedo + 7.0 * (albedo - 0.8).abs().powi(3)
}

/// Shape constant fit for the diffuse surface transmission configuration.
#[inline]
pub fn scale_dmfp(albedo: f64) -> f64 {
    1.9 - albedo + 3.5 * (albedo - 0.8).abs().powi(2)
}

/// Which albedo fit drives the profile shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeScaling {
    /// Use [`scale_dmfp`].
    #[default]
    DiffuseMeanFreePath,
    /// Use [`scale_mfp`].
    MeanFreePath,
}

impl ShapeScaling {
    /// Shape constant `s` for the given albedo.
    #[inline]
    pub fn shape(self, albedo: f64) -> f64 {
        match self {
            ShapeScaling::DiffuseMeanFreePath => scale_dmfp(albedo),
            ShapeScaling::MeanFreePath => scale_mfp(albedo),
        }
    }

    /// Short name used on the command line and in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeScaling::DiffuseMeanFreePath => "dmfp",
            ShapeScaling::MeanFreePath => "mfp",
        }
    }
}

/// Evaluate the single-channel diffusion profile at radial distance `r`.
///
/// `r` and `mfp_length` must share units (millimeters). The result is in
/// `[0, 1]`.
#[inline]
pub fn burley_profile(r: f64, shape: f64, mfp_length: f64) -> f64 {
    let exp3 = (-shape * r / (3.0 * mfp_length)).exp();
    let numerator = shape * (exp3 + exp3 * exp3 * exp3);
    let denominator = (EIGHT_PI * r * mfp_length).max(ZERO_DISTANCE_GUARD);
    (numerator / denominator).min(1.0)
}
