//! Ring integration of the diffusion profile for a single texel.

use std::f64::consts::{PI, TAU};

use crate::params::{ChannelParams, LutParams};
use crate::profile::{burley_profile, ShapeScaling};

/// Precomputed per-channel profile inputs.
#[derive(Debug, Clone, Copy)]
struct ChannelShape {
    shape: f64,
    mfp: f64,
}

impl ChannelShape {
    fn new(channel: &ChannelParams, scaling: ShapeScaling) -> Self {
        Self {
            shape: scaling.shape(channel.albedo),
            mfp: channel.mfp,
        }
    }
}

/// Integrate scattered light around a ring of the given radius.
///
/// `radius` is in millimeters, `cos_theta` is the cosine of the light
/// incidence angle. Samples are spaced uniformly around the full circle,
/// starting at `π` and stepping backwards. Returns linear red, green, blue
/// intensities in `[0, 2π]`.
pub fn integrate_ring(radius: f64, cos_theta: f64, params: &LutParams) -> [f64; 3] {
    let channels = params
        .channels
        .as_array()
        .map(|channel| ChannelShape::new(&channel, params.scaling));

    let theta = cos_theta.acos();
    let step = TAU / params.samples as f64;

    let mut sum = [0.0f64; 3];
    for sample in 0..params.samples {
        let angle = PI - step * sample as f64;
        let distance = (2.0 * radius * (angle / 2.0).sin()).abs();
        let cos_delta = (theta + angle).cos().max(0.0);

        for (acc, channel) in sum.iter_mut().zip(&channels) {
            *acc += cos_delta * burley_profile(distance, channel.shape, channel.mfp);
        }
    }

    sum.map(|v| v * step)
}
