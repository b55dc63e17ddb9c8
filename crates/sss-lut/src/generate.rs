//! Main entry point for LUT generation.
//!
//! [`generate_lut`] validates parameters and computes everything in memory;
//! [`save_lut_result`] writes the texture and material descriptor afterwards.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

use crate::lut::{build_lut, LutGrid};
use crate::material::MaterialDescriptor;
use crate::params::{LutParams, ParamError};
use crate::tga::{self, TgaError};

/// Errors from LUT generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(#[from] ParamError),

    #[error("Invalid output name: {0}")]
    InvalidName(String),

    #[error("TGA error: {0}")]
    Tga(#[from] TgaError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GenerateError {
    /// Stable error code for reports.
    pub fn code(&self) -> &'static str {
        match self {
            GenerateError::InvalidParameter(_) => "SSS_001",
            GenerateError::InvalidName(_) => "SSS_002",
            GenerateError::Tga(_) => "SSS_003",
            GenerateError::Io(_) => "SSS_004",
        }
    }

    /// Whether the error was raised before any computation started.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            GenerateError::InvalidParameter(_) | GenerateError::InvalidName(_)
        )
    }
}

/// Result of generating a LUT.
#[derive(Debug)]
pub struct LutResult {
    /// Parameters the LUT was built from.
    pub params: LutParams,
    /// The encoded table.
    pub grid: LutGrid,
    /// Encoded TGA file contents.
    pub tga: Vec<u8>,
    /// BLAKE3 hash of the TGA file.
    pub hash: String,
}

/// Paths written by [`save_lut_result`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedLut {
    pub texture: PathBuf,
    pub material: PathBuf,
}

/// File name of the LUT texture for a base name.
pub fn texture_file_name(base_name: &str) -> String {
    format!("{}_lut.tga", base_name)
}

/// File name of the material descriptor for a base name.
pub fn material_file_name(base_name: &str) -> String {
    format!("{}.mtr", base_name)
}

/// Validate an output base name.
pub fn validate_name(base_name: &str) -> Result<(), GenerateError> {
    if base_name.is_empty() {
        return Err(GenerateError::InvalidName("name must not be empty".to_string()));
    }
    if base_name.contains(['/', '\\']) || base_name == "." || base_name == ".." {
        return Err(GenerateError::InvalidName(format!(
            "name must be a plain file name, got '{}'",
            base_name
        )));
    }
    Ok(())
}

/// Generate a LUT from parameters.
pub fn generate_lut(params: &LutParams) -> Result<LutResult, GenerateError> {
    params.validate()?;

    let grid = build_lut(params);
    let tga = tga::encode(&grid)?;
    let hash = tga::hash_tga(&tga);

    Ok(LutResult {
        params: *params,
        grid,
        tga,
        hash,
    })
}

/// Build the material descriptor matching a result.
pub fn material_for(result: &LutResult, base_name: &str, shader: &str) -> MaterialDescriptor {
    MaterialDescriptor::new(shader, texture_file_name(base_name), &result.params.geometry)
}

/// Save the texture and material descriptor to a directory.
///
/// Each file is written to a temporary file in `output_dir` first and only
/// renamed into place once complete.
pub fn save_lut_result(
    result: &LutResult,
    output_dir: &Path,
    base_name: &str,
    shader: &str,
) -> Result<SavedLut, GenerateError> {
    validate_name(base_name)?;
    std::fs::create_dir_all(output_dir)?;

    let texture = output_dir.join(texture_file_name(base_name));
    write_atomic(&texture, &result.tga)?;

    let material = output_dir.join(material_file_name(base_name));
    let text = material_for(result, base_name, shader).render();
    write_atomic(&material, text.as_bytes())?;

    Ok(SavedLut { texture, material })
}

fn write_atomic(path: &Path, data: &[u8]) -> Result<(), GenerateError> {
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(data)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| GenerateError::Io(e.error))?;
    Ok(())
}
