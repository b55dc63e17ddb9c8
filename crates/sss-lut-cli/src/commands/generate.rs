//! Generate command implementation
//!
//! Builds the LUT from command-line parameters and writes
//! `<name>_lut.tga` and `<name>.mtr` into the output root.

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use sss_lut::generate::{material_for, validate_name};
use sss_lut::params::{
    DEFAULT_LUT_HEIGHT, DEFAULT_LUT_WIDTH, DEFAULT_MAX_RADIUS, DEFAULT_MIN_RADIUS, DEFAULT_SAMPLES,
};
use sss_lut::{
    generate_lut, save_lut_result, ChannelParams, GenerateError, LengthUnit, LutParams, LutResult,
    RgbChannels, SavedLut, ShapeScaling, TableGeometry, DEFAULT_SHADER,
};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use super::json_output::{GenerateOutput, GeneratedFile, JsonError};

/// Unit of `--min-radius` / `--max-radius`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RadiusUnit {
    Mm,
    Cm,
    M,
}

impl From<RadiusUnit> for LengthUnit {
    fn from(unit: RadiusUnit) -> Self {
        match unit {
            RadiusUnit::Mm => LengthUnit::Millimeters,
            RadiusUnit::Cm => LengthUnit::Centimeters,
            RadiusUnit::M => LengthUnit::Meters,
        }
    }
}

/// Albedo fit driving the profile shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scaling {
    /// Diffuse surface transmission fit
    Dmfp,
    /// Searchlight (mean free path) fit
    Mfp,
}

impl From<Scaling> for ShapeScaling {
    fn from(scaling: Scaling) -> Self {
        match scaling {
            Scaling::Dmfp => ShapeScaling::DiffuseMeanFreePath,
            Scaling::Mfp => ShapeScaling::MeanFreePath,
        }
    }
}

/// Arguments of the `generate` command.
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Output base file name (writes <NAME>_lut.tga and <NAME>.mtr)
    #[arg(short, long)]
    pub name: String,

    /// Output root directory (default: current directory)
    #[arg(short, long)]
    pub out_root: Option<String>,

    /// Scattering samples per texel; more samples take longer but reduce error
    #[arg(long, default_value_t = DEFAULT_SAMPLES)]
    pub samples: u32,

    /// Width of the lookup texture (light angle resolution)
    #[arg(long, alias = "lut_width", default_value_t = DEFAULT_LUT_WIDTH)]
    pub lut_width: u32,

    /// Height of the lookup texture (object radius resolution)
    #[arg(long, alias = "lut_height", default_value_t = DEFAULT_LUT_HEIGHT)]
    pub lut_height: u32,

    /// Smallest object radius to precompute; must be > 0
    #[arg(
        long,
        alias = "min_radius",
        allow_hyphen_values = true,
        default_value_t = DEFAULT_MIN_RADIUS
    )]
    pub min_radius: f64,

    /// Largest object radius to precompute; must be > min radius
    #[arg(
        long,
        alias = "max_radius",
        allow_hyphen_values = true,
        default_value_t = DEFAULT_MAX_RADIUS
    )]
    pub max_radius: f64,

    /// Unit of the radius range
    #[arg(long, value_enum, default_value_t = RadiusUnit::Mm)]
    pub radius_unit: RadiusUnit,

    /// Red mean free path in millimeters
    #[arg(long, alias = "mfp_r", allow_hyphen_values = true, default_value_t = 1.0)]
    pub mfp_r: f64,

    /// Green mean free path in millimeters
    #[arg(long, alias = "mfp_g", allow_hyphen_values = true, default_value_t = 1.0)]
    pub mfp_g: f64,

    /// Blue mean free path in millimeters
    #[arg(long, alias = "mfp_b", allow_hyphen_values = true, default_value_t = 1.0)]
    pub mfp_b: f64,

    /// Red albedo, in (0, 1]
    #[arg(long, alias = "albedo_r", allow_hyphen_values = true, default_value_t = 1.0)]
    pub albedo_r: f64,

    /// Green albedo, in (0, 1]
    #[arg(long, alias = "albedo_g", allow_hyphen_values = true, default_value_t = 1.0)]
    pub albedo_g: f64,

    /// Blue albedo, in (0, 1]
    #[arg(long, alias = "albedo_b", allow_hyphen_values = true, default_value_t = 1.0)]
    pub albedo_b: f64,

    /// Albedo fit used for the profile shape
    #[arg(long, value_enum, default_value_t = Scaling::Dmfp)]
    pub scaling: Scaling,

    /// Customshader program name referenced by the material
    #[arg(long, default_value = DEFAULT_SHADER)]
    pub shader: String,

    /// Output machine-readable JSON diagnostics (no colored output)
    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    /// Arguments with every parameter at its default.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            out_root: None,
            samples: DEFAULT_SAMPLES,
            lut_width: DEFAULT_LUT_WIDTH,
            lut_height: DEFAULT_LUT_HEIGHT,
            min_radius: DEFAULT_MIN_RADIUS,
            max_radius: DEFAULT_MAX_RADIUS,
            radius_unit: RadiusUnit::Mm,
            mfp_r: 1.0,
            mfp_g: 1.0,
            mfp_b: 1.0,
            albedo_r: 1.0,
            albedo_g: 1.0,
            albedo_b: 1.0,
            scaling: Scaling::Dmfp,
            shader: DEFAULT_SHADER.to_string(),
            json: false,
        }
    }

    /// Convert to library parameters. Does not validate.
    pub fn to_params(&self) -> LutParams {
        LutParams {
            geometry: TableGeometry {
                width: self.lut_width,
                height: self.lut_height,
                min_radius: self.min_radius,
                max_radius: self.max_radius,
            },
            samples: self.samples,
            channels: RgbChannels {
                red: ChannelParams::new(self.mfp_r, self.albedo_r),
                green: ChannelParams::new(self.mfp_g, self.albedo_g),
                blue: ChannelParams::new(self.mfp_b, self.albedo_b),
            },
            radius_unit: self.radius_unit.into(),
            scaling: self.scaling.into(),
        }
    }

    fn out_root(&self) -> &str {
        self.out_root.as_deref().unwrap_or(".")
    }
}

/// Run the generate command
///
/// # Returns
/// Exit code: 0 success, 1 invalid parameters, 2 generation or write error
pub fn run(args: &GenerateArgs) -> Result<ExitCode> {
    if args.json {
        run_json(args)
    } else {
        run_human(args)
    }
}

/// Validate, compute, and write. Nothing is written unless validation passes.
fn generate_and_save(
    args: &GenerateArgs,
    params: &LutParams,
) -> Result<(LutResult, SavedLut), GenerateError> {
    validate_name(&args.name)?;
    let result = generate_lut(params)?;
    let saved = save_lut_result(
        &result,
        Path::new(args.out_root()),
        &args.name,
        &args.shader,
    )?;
    Ok((result, saved))
}

fn exit_code_for(error: &GenerateError) -> ExitCode {
    if error.is_validation() {
        ExitCode::from(1)
    } else {
        ExitCode::from(2)
    }
}

/// Run generate with human-readable (colored) output
fn run_human(args: &GenerateArgs) -> Result<ExitCode> {
    let start = Instant::now();
    let params = args.to_params();

    println!("{} {}", "Generating LUT:".cyan().bold(), args.name);
    println!("{} {}", "Output root:".cyan().bold(), args.out_root());
    println!(
        "{} {}x{}, radius {}..{} {}, {} samples, {} scaling",
        "Table:".dimmed(),
        params.geometry.width,
        params.geometry.height,
        params.geometry.min_radius,
        params.geometry.max_radius,
        params.radius_unit.as_str(),
        params.samples,
        params.scaling.as_str()
    );

    match generate_and_save(args, &params) {
        Ok((result, saved)) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            println!(
                "\n{} Generated 2 output(s) in {}ms",
                "SUCCESS".green().bold(),
                duration_ms
            );
            println!(
                "  {} {}",
                saved.texture.display(),
                format!("({})", &result.hash[..16]).dimmed()
            );
            println!("  {}", saved.material.display());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_validation() => {
            println!("\n{} [{}]: {}", "FAILED".red().bold(), e.code(), e);
            Ok(exit_code_for(&e))
        }
        Err(e) => {
            println!("\n{} [{}]: {}", "GENERATION FAILED".red().bold(), e.code(), e);
            Ok(exit_code_for(&e))
        }
    }
}

/// Run generate with JSON output
fn run_json(args: &GenerateArgs) -> Result<ExitCode> {
    let start = Instant::now();
    let params = args.to_params();

    let (output, code) = match generate_and_save(args, &params) {
        Ok((result, saved)) => {
            let material_size = material_for(&result, &args.name, &args.shader)
                .render()
                .len() as u64;
            let output = GenerateOutput {
                success: true,
                name: args.name.clone(),
                params: Some(params),
                files: vec![
                    GeneratedFile {
                        path: saved.texture.to_string_lossy().to_string(),
                        kind: "texture".to_string(),
                        size: result.tga.len() as u64,
                        hash: Some(result.hash.clone()),
                    },
                    GeneratedFile {
                        path: saved.material.to_string_lossy().to_string(),
                        kind: "material".to_string(),
                        size: material_size,
                        hash: None,
                    },
                ],
                errors: Vec::new(),
                duration_ms: start.elapsed().as_millis() as u64,
            };
            (output, ExitCode::SUCCESS)
        }
        Err(e) => {
            let output = GenerateOutput::failure(
                &args.name,
                params,
                JsonError::new(e.code(), e.to_string()),
                start.elapsed().as_millis() as u64,
            );
            (output, exit_code_for(&e))
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(code)
}
