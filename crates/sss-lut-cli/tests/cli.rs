//! Tests that drive the built `sss-lut` binary.

use pretty_assertions::assert_eq;
use std::path::Path;
use std::process::{Command, Output};

fn sss_lut(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sss-lut"))
        .args(args)
        .output()
        .expect("failed to run sss-lut")
}

fn generate_small(out_root: &Path, name: &str, extra: &[&str]) -> Output {
    let out_root = out_root.to_str().unwrap();
    let mut args = vec![
        "generate",
        "--name",
        name,
        "--out-root",
        out_root,
        "--lut_width",
        "4",
        "--lut_height",
        "2",
        "--samples",
        "8",
    ];
    args.extend_from_slice(extra);
    sss_lut(&args)
}

#[test]
fn test_generate_small_scenario() {
    let tmp = tempfile::tempdir().unwrap();
    let output = generate_small(tmp.path(), "scenario", &[]);
    assert!(output.status.success(), "{:?}", output);

    let tga = std::fs::read(tmp.path().join("scenario_lut.tga")).unwrap();
    assert_eq!(tga.len(), 60);

    let mtr = std::fs::read_to_string(tmp.path().join("scenario.mtr")).unwrap();
    assert!(mtr.contains("radiusScale 1.111111"));
    assert!(mtr.contains("radiusBias -0.111111"));
}

#[test]
fn test_generate_json_output() {
    let tmp = tempfile::tempdir().unwrap();
    let output = generate_small(tmp.path(), "skin", &["--json"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["name"], "skin");
    assert_eq!(json["files"].as_array().unwrap().len(), 2);
    assert_eq!(json["files"][0]["kind"], "texture");
    assert_eq!(json["files"][0]["size"], 60);
    assert_eq!(json["params"]["geometry"]["width"], 4);

    let mtr_len = std::fs::metadata(tmp.path().join("skin.mtr")).unwrap().len();
    assert_eq!(json["files"][1]["kind"], "material");
    assert_eq!(json["files"][1]["size"], mtr_len);
}

#[test]
fn test_generate_invalid_radius_range_exits_one() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("out");
    let output = generate_small(&out, "skin", &["--min-radius", "5", "--json"]);
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["errors"][0]["code"], "SSS_001");
    assert!(!out.exists());
}

#[test]
fn test_generate_negative_mfp_is_a_validation_error() {
    let tmp = tempfile::tempdir().unwrap();
    let output = generate_small(tmp.path(), "skin", &["--mfp-g", "-1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!tmp.path().join("skin_lut.tga").exists());
}

#[test]
fn test_inspect_generated_texture() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(generate_small(tmp.path(), "skin", &[]).status.success());

    let file = tmp.path().join("skin_lut.tga");
    let output = sss_lut(&["inspect", "--file", file.to_str().unwrap(), "--json"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["info"]["width"], 4);
    assert_eq!(json["info"]["height"], 2);
    assert_eq!(json["info"]["has_signature"], true);
}
