//! SSS LUT CLI - Command-line interface for subsurface scattering lookup textures
//!
//! This binary generates Christensen-Burley scattering LUTs with their
//! material descriptors, and inspects previously generated textures.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use sss_lut_cli::commands;
use sss_lut_cli::commands::generate::GenerateArgs;

/// Generates a lookup table in .tga format for use with the SSS shader
#[derive(Parser)]
#[command(name = "sss-lut")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a LUT texture and its material descriptor
    Generate(GenerateArgs),

    /// Decode a generated LUT texture and print a summary
    Inspect {
        /// Path to the .tga file
        #[arg(short, long)]
        file: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate(args) => commands::generate::run(&args),
        Commands::Inspect { file, json } => commands::inspect::run(&file, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commands::generate::{RadiusUnit, Scaling};

    #[test]
    fn test_cli_parses_generate_defaults() {
        let cli = Cli::try_parse_from(["sss-lut", "generate", "--name", "skin"]).unwrap();
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.name, "skin");
                assert!(args.out_root.is_none());
                assert_eq!(args.samples, 200);
                assert_eq!(args.lut_width, 128);
                assert_eq!(args.lut_height, 128);
                assert_eq!(args.min_radius, 0.1);
                assert_eq!(args.max_radius, 1.0);
                assert_eq!(args.mfp_r, 1.0);
                assert_eq!(args.albedo_b, 1.0);
                assert_eq!(args.radius_unit, RadiusUnit::Mm);
                assert_eq!(args.scaling, Scaling::Dmfp);
                assert_eq!(args.shader, "sss");
                assert!(!args.json);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_parses_generate_overrides() {
        let cli = Cli::try_parse_from([
            "sss-lut",
            "generate",
            "-n",
            "skin",
            "-o",
            "out",
            "--samples",
            "64",
            "--lut-width",
            "32",
            "--lut-height",
            "16",
            "--min-radius",
            "0.5",
            "--max-radius",
            "4",
            "--mfp-r",
            "3.67",
            "--albedo-g",
            "0.79",
            "--radius-unit",
            "cm",
            "--scaling",
            "mfp",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.out_root.as_deref(), Some("out"));
                assert_eq!(args.samples, 64);
                assert_eq!(args.lut_width, 32);
                assert_eq!(args.lut_height, 16);
                assert_eq!(args.min_radius, 0.5);
                assert_eq!(args.max_radius, 4.0);
                assert_eq!(args.mfp_r, 3.67);
                assert_eq!(args.albedo_g, 0.79);
                assert_eq!(args.radius_unit, RadiusUnit::Cm);
                assert_eq!(args.scaling, Scaling::Mfp);
                assert!(args.json);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_accepts_underscore_aliases() {
        let cli = Cli::try_parse_from([
            "sss-lut",
            "generate",
            "--name",
            "skin",
            "--lut_width",
            "8",
            "--mfp_b",
            "0.68",
            "--albedo_r",
            "0.83",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.lut_width, 8);
                assert_eq!(args.mfp_b, 0.68);
                assert_eq!(args.albedo_r, 0.83);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_requires_name() {
        let err = Cli::try_parse_from(["sss-lut", "generate"]).err().unwrap();
        assert!(err.to_string().contains("--name"));
    }

    #[test]
    fn test_cli_rejects_non_numeric_samples() {
        assert!(
            Cli::try_parse_from(["sss-lut", "generate", "-n", "a", "--samples", "many"]).is_err()
        );
        assert!(Cli::try_parse_from(["sss-lut", "generate", "-n", "a", "--samples", "-4"]).is_err());
    }

    #[test]
    fn test_cli_parses_inspect() {
        let cli =
            Cli::try_parse_from(["sss-lut", "inspect", "--file", "skin_lut.tga", "--json"]).unwrap();
        match cli.command {
            Commands::Inspect { file, json } => {
                assert_eq!(file, "skin_lut.tga");
                assert!(json);
            }
            _ => panic!("expected inspect command"),
        }
    }
}
