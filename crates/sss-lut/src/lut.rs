//! LUT grid construction.
//!
//! Each texel is an independent pure function of the parameters, so rows are
//! built in parallel without affecting the output.

use rayon::prelude::*;

use crate::color::encode_rgb8;
use crate::integrate::integrate_ring;
use crate::params::LutParams;

/// An 8-bit RGB table, rows in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LutGrid {
    width: u32,
    height: u32,
    /// Row-major RGB triples.
    data: Vec<[u8; 3]>,
}

impl LutGrid {
    /// Build a grid from row-major texels.
    ///
    /// Returns `None` if either dimension is zero or `data` does not hold
    /// exactly `width * height` texels.
    pub fn from_texels(width: u32, height: u32, data: Vec<[u8; 3]>) -> Option<Self> {
        if width == 0 || height == 0 || data.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Texel at `(row, col)`, row 0 being the first emitted row.
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> [u8; 3] {
        self.data[(row * self.width + col) as usize]
    }

    /// Iterate rows in emission order.
    pub fn rows(&self) -> impl Iterator<Item = &[[u8; 3]]> {
        // A zero-width grid has no texels, so any non-zero chunk size yields no rows.
        self.data.chunks_exact(self.width.max(1) as usize)
    }

    /// All texels, row-major.
    pub fn texels(&self) -> &[[u8; 3]] {
        &self.data
    }

    /// Per-channel minimum and maximum across the grid.
    pub fn channel_range(&self) -> ([u8; 3], [u8; 3]) {
        let mut min = [u8::MAX; 3];
        let mut max = [u8::MIN; 3];
        for texel in &self.data {
            for c in 0..3 {
                min[c] = min[c].min(texel[c]);
                max[c] = max[c].max(texel[c]);
            }
        }
        (min, max)
    }
}

/// Compute one encoded texel.
#[inline]
pub fn compute_texel(params: &LutParams, row: u32, col: u32) -> [u8; 3] {
    let radius = params.row_radius_mm(row);
    let cos_theta = params.geometry.column_cos_theta(col);
    encode_rgb8(integrate_ring(radius, cos_theta, params))
}

fn compute_row(params: &LutParams, row: u32) -> Vec<[u8; 3]> {
    (0..params.geometry.width)
        .map(|col| compute_texel(params, row, col))
        .collect()
}

/// Build the full table, rows in parallel.
///
/// `params` is expected to be validated.
pub fn build_lut(params: &LutParams) -> LutGrid {
    let rows: Vec<Vec<[u8; 3]>> = (0..params.geometry.height)
        .into_par_iter()
        .map(|row| compute_row(params, row))
        .collect();
    assemble(params, rows)
}

/// Build the full table on the calling thread.
pub fn build_lut_sequential(params: &LutParams) -> LutGrid {
    let rows: Vec<Vec<[u8; 3]>> = (0..params.geometry.height)
        .map(|row| compute_row(params, row))
        .collect();
    assemble(params, rows)
}

fn assemble(params: &LutParams, rows: Vec<Vec<[u8; 3]>>) -> LutGrid {
    let mut data = Vec::with_capacity(params.geometry.texel_count());
    for row in rows {
        data.extend(row);
    }
    LutGrid {
        width: params.geometry.width,
        height: params.geometry.height,
        data,
    }
}
