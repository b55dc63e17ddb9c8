//! Subsurface Scattering LUT Generation
//!
//! This crate precomputes a 2D lookup texture approximating subsurface light
//! scattering for real-time shaders. Each texel integrates the
//! Christensen-Burley diffusion profile around a ring of the given object
//! radius, lit from the given incidence angle, and stores the per-channel
//! result as 8-bit sRGB.
//!
//! # Example
//!
//! ```no_run
//! use sss_lut::{generate_lut, save_lut_result, ChannelParams, LutParams, RgbChannels};
//! use std::path::Path;
//!
//! let params = LutParams {
//!     samples: 200,
//!     channels: RgbChannels {
//!         red: ChannelParams::new(3.67, 0.83),
//!         green: ChannelParams::new(1.37, 0.79),
//!         blue: ChannelParams::new(0.68, 0.75),
//!     },
//!     ..Default::default()
//! };
//!
//! let result = generate_lut(&params).unwrap();
//! save_lut_result(&result, Path::new("output"), "skin", "sss").unwrap();
//! ```
//!
//! # Determinism
//!
//! The integration is a fixed-step quadrature, not a random process. The
//! same parameters always produce byte-identical TGA and material files,
//! regardless of how many threads build the table.

pub mod color;
pub mod generate;
pub mod integrate;
pub mod lut;
pub mod material;
pub mod params;
pub mod profile;
pub mod tga;

// Re-export main types for convenience
pub use color::{encode_rgb8, encode_unorm8, linear_to_srgb};
pub use generate::{
    generate_lut, material_for, save_lut_result, GenerateError, LutResult, SavedLut,
};
pub use integrate::integrate_ring;
pub use lut::{build_lut, build_lut_sequential, LutGrid};
pub use material::{MaterialDescriptor, DEFAULT_SHADER};
pub use params::{ChannelParams, LengthUnit, LutParams, ParamError, RgbChannels, TableGeometry};
pub use profile::{burley_profile, scale_dmfp, scale_mfp, ShapeScaling};
pub use tga::TgaError;
