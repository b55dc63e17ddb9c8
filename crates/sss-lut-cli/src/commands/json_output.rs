//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag on `generate` and `inspect`.

use serde::{Deserialize, Serialize};
use sss_lut::LutParams;

/// Error codes for CLI-level failures.
///
/// Library errors pass their own `SSS_XXX` codes through unchanged.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// File is not a supported TGA
    pub const TGA_DECODE: &str = "CLI_002";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "SSS_001", "CLI_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// A file written by `generate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path of the written file
    pub path: String,
    /// "texture" or "material"
    pub kind: String,
    /// Size in bytes
    pub size: u64,
    /// BLAKE3 hash of the contents (texture only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

/// Output of `generate --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateOutput {
    pub success: bool,
    pub name: String,
    /// Parameters the run used (absent when arguments failed to convert)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<LutParams>,
    pub files: Vec<GeneratedFile>,
    pub errors: Vec<JsonError>,
    pub duration_ms: u64,
}

impl GenerateOutput {
    pub fn failure(name: &str, params: LutParams, error: JsonError, duration_ms: u64) -> Self {
        Self {
            success: false,
            name: name.to_string(),
            params: Some(params),
            files: Vec::new(),
            errors: vec![error],
            duration_ms,
        }
    }
}

/// Output of `inspect --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InspectOutput {
    pub success: bool,
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<TextureInfo>,
    pub errors: Vec<JsonError>,
}

/// Summary of a decoded LUT texture.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextureInfo {
    pub width: u32,
    pub height: u32,
    pub size: u64,
    pub hash: String,
    pub has_signature: bool,
    /// Minimum value per channel, red/green/blue
    pub min: [u8; 3],
    /// Maximum value per channel, red/green/blue
    pub max: [u8; 3],
}
