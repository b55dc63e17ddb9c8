//! Material descriptor binding the LUT to the scattering shader.

use std::fmt;

use crate::params::TableGeometry;

/// Default vertex/fragment program name of the scattering shader.
pub const DEFAULT_SHADER: &str = "sss";

/// Placeholder textures for the first three units.
const PLACEHOLDER_UNITS: [&str; 3] = ["$base", "$normal", "$specular"];

/// Text material descriptor for a generated LUT.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialDescriptor {
    /// Customshader program name, used for both the vertex and fragment stage.
    pub shader: String,
    /// File name of the LUT texture, relative to the descriptor.
    pub lut_texture: String,
    pub min_radius: f64,
    pub max_radius: f64,
}

impl MaterialDescriptor {
    pub fn new(
        shader: impl Into<String>,
        lut_texture: impl Into<String>,
        geometry: &TableGeometry,
    ) -> Self {
        Self {
            shader: shader.into(),
            lut_texture: lut_texture.into(),
            min_radius: geometry.min_radius,
            max_radius: geometry.max_radius,
        }
    }

    /// Scale mapping a physical radius onto the table's [0, 1] axis.
    pub fn radius_scale(&self) -> f64 {
        1.0 / (self.max_radius - self.min_radius)
    }

    /// Bias applied after [`Self::radius_scale`].
    pub fn radius_bias(&self) -> f64 {
        -self.min_radius * self.radius_scale()
    }

    /// Write the descriptor text.
    pub fn write_to<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(
            out,
            "// subsurface scattering LUT: min_radius {:.6}, max_radius {:.6}",
            self.min_radius, self.max_radius
        )?;
        writeln!(out, "customshader {0}.vert {0}.frag", self.shader)?;
        for (unit, texture) in PLACEHOLDER_UNITS.iter().enumerate() {
            writeln!(out, "texture{} {}", unit, texture)?;
        }
        writeln!(out, "texture{} {}", PLACEHOLDER_UNITS.len(), self.lut_texture)?;
        writeln!(out, "uniform radiusScale {:.6}", self.radius_scale())?;
        writeln!(out, "uniform radiusBias {:.6}", self.radius_bias())
    }

    /// Render the descriptor text.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MaterialDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}
