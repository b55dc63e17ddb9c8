//! Inspect command implementation
//!
//! Decodes a generated LUT texture and prints a summary.

use anyhow::Result;
use colored::Colorize;
use sss_lut::tga::{self, DecodedTga};
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{error_codes, InspectOutput, JsonError, TextureInfo};

/// Read and summarize a TGA file.
pub fn inspect_file(path: &Path) -> Result<TextureInfo, JsonError> {
    let bytes = std::fs::read(path).map_err(|e| {
        JsonError::new(
            error_codes::FILE_READ,
            format!("Failed to read {}: {}", path.display(), e),
        )
    })?;
    let DecodedTga {
        header: _,
        grid,
        has_signature,
    } = tga::decode(&bytes)
        .map_err(|e| JsonError::new(error_codes::TGA_DECODE, e.to_string()))?;

    let (min, max) = grid.channel_range();
    Ok(TextureInfo {
        width: grid.width(),
        height: grid.height(),
        size: bytes.len() as u64,
        hash: tga::hash_tga(&bytes),
        has_signature,
        min,
        max,
    })
}

/// Run the inspect command
///
/// # Returns
/// Exit code: 0 success, 1 unreadable or unsupported file
pub fn run(file: &str, json_output: bool) -> Result<ExitCode> {
    let result = inspect_file(Path::new(file));
    let code = if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    };

    if json_output {
        let output = match result {
            Ok(info) => InspectOutput {
                success: true,
                file: file.to_string(),
                info: Some(info),
                errors: Vec::new(),
            },
            Err(error) => InspectOutput {
                success: false,
                file: file.to_string(),
                info: None,
                errors: vec![error],
            },
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(code);
    }

    println!("{} {}", "Inspecting:".cyan().bold(), file);
    match result {
        Ok(info) => {
            println!("  {} {}x{}", "Size:".dimmed(), info.width, info.height);
            println!("  {} {} bytes", "File:".dimmed(), info.size);
            println!("  {} {}", "Hash:".dimmed(), info.hash);
            println!(
                "  {} {}",
                "Signature:".dimmed(),
                if info.has_signature {
                    "present".green()
                } else {
                    "missing".yellow()
                }
            );
            println!(
                "  {} r {}..{}  g {}..{}  b {}..{}",
                "Range:".dimmed(),
                info.min[0],
                info.max[0],
                info.min[1],
                info.max[1],
                info.min[2],
                info.max[2]
            );
        }
        Err(error) => {
            println!("\n{} [{}]: {}", "FAILED".red().bold(), error.code, error.message);
        }
    }
    Ok(code)
}
