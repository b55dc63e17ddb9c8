//! End-to-end tests: parameters in, TGA and material files out.

use pretty_assertions::assert_eq;
use sss_lut::params::TableGeometry;
use sss_lut::tga::{self, FOOTER_SIGNATURE, HEADER_LEN};
use sss_lut::{
    build_lut_sequential, generate_lut, save_lut_result, ChannelParams, LengthUnit, LutParams,
    RgbChannels,
};

// ============================================================================
// Fixtures
// ============================================================================

fn scenario_params() -> LutParams {
    LutParams {
        geometry: TableGeometry {
            width: 4,
            height: 2,
            min_radius: 0.1,
            max_radius: 1.0,
        },
        samples: 8,
        channels: RgbChannels::uniform(ChannelParams::new(1.0, 1.0)),
        ..Default::default()
    }
}

fn skin_params() -> LutParams {
    LutParams {
        geometry: TableGeometry {
            width: 32,
            height: 16,
            min_radius: 0.5,
            max_radius: 8.0,
        },
        samples: 64,
        channels: RgbChannels {
            red: ChannelParams::new(3.67, 0.83),
            green: ChannelParams::new(1.37, 0.79),
            blue: ChannelParams::new(0.68, 0.75),
        },
        ..Default::default()
    }
}

// ============================================================================
// Scenario
// ============================================================================

/// The small reference scenario writes a 4x2 texture and matching uniforms.
#[test]
fn test_small_scenario_files() {
    let tmp = tempfile::tempdir().unwrap();
    let result = generate_lut(&scenario_params()).unwrap();
    let saved = save_lut_result(&result, tmp.path(), "scenario", "sss").unwrap();

    let tga_bytes = std::fs::read(&saved.texture).unwrap();
    assert_eq!(tga_bytes.len(), HEADER_LEN + 4 * 2 * 3 + FOOTER_SIGNATURE.len());
    // 18-byte header + 24-byte raster + 18-byte footer: the TGA 2.0
    // signature "TRUEVISION-XFILE." is 17 characters plus its NUL.
    assert_eq!(FOOTER_SIGNATURE.len(), 18);
    assert_eq!(tga_bytes.len(), 60);
    assert_eq!(tga_bytes[2], 2);
    assert_eq!(&tga_bytes[12..18], &[4, 0, 2, 0, 24, 0]);
    assert!(tga_bytes.ends_with(b"TRUEVISION-XFILE.\0"));

    let mtr = std::fs::read_to_string(&saved.material).unwrap();
    assert!(mtr.contains("radiusScale 1.111111"), "{}", mtr);
    assert!(mtr.contains("radiusBias -0.111111"), "{}", mtr);
    assert!(mtr.contains("scenario_lut.tga"));
}

/// Changing only the name changes file names and the LUT reference line.
#[test]
fn test_name_only_affects_names() {
    let tmp = tempfile::tempdir().unwrap();
    let result = generate_lut(&scenario_params()).unwrap();
    let a = save_lut_result(&result, tmp.path(), "alpha", "sss").unwrap();
    let b = save_lut_result(&result, tmp.path(), "beta", "sss").unwrap();

    assert_eq!(
        std::fs::read(&a.texture).unwrap(),
        std::fs::read(&b.texture).unwrap()
    );

    let mtr_a = std::fs::read_to_string(&a.material).unwrap();
    let mtr_b = std::fs::read_to_string(&b.material).unwrap();
    let differing: Vec<(&str, &str)> = mtr_a
        .lines()
        .zip(mtr_b.lines())
        .filter(|(x, y)| x != y)
        .collect();
    assert_eq!(
        differing,
        vec![("texture3 alpha_lut.tga", "texture3 beta_lut.tga")]
    );
}

/// Running twice gives byte-identical outputs.
#[test]
fn test_outputs_are_idempotent() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let params = skin_params();

    let a = save_lut_result(&generate_lut(&params).unwrap(), first.path(), "skin", "sss").unwrap();
    let b = save_lut_result(&generate_lut(&params).unwrap(), second.path(), "skin", "sss").unwrap();

    assert_eq!(
        std::fs::read(&a.texture).unwrap(),
        std::fs::read(&b.texture).unwrap()
    );
    assert_eq!(
        std::fs::read_to_string(&a.material).unwrap(),
        std::fs::read_to_string(&b.material).unwrap()
    );
}

// ============================================================================
// Table layout
// ============================================================================

/// Decoding the file restores the grid, rows in emission order.
#[test]
fn test_written_texture_decodes_to_grid() {
    let tmp = tempfile::tempdir().unwrap();
    let result = generate_lut(&skin_params()).unwrap();
    let saved = save_lut_result(&result, tmp.path(), "skin", "sss").unwrap();

    let decoded = tga::read(&saved.texture).unwrap();
    assert_eq!(decoded.grid, result.grid);
    assert_eq!(decoded.grid, build_lut_sequential(&skin_params()));
    assert!(decoded.has_signature);
}

/// Small radii scatter more light to the unlit side than large radii.
#[test]
fn test_first_row_is_largest_radius() {
    let result = generate_lut(&skin_params()).unwrap();
    let grid = &result.grid;
    let last_row = grid.height() - 1;

    // Column 0 is fully back-lit (cos_theta = -1).
    let large = grid.get(0, 0);
    let small = grid.get(last_row, 0);
    assert!(
        small[0] > large[0],
        "small radius {:?} should be brighter than large radius {:?} when back-lit",
        small,
        large
    );
}

/// Radii given in centimeters are ten times larger physically.
#[test]
fn test_radius_unit_scales_physical_radius() {
    let mut cm = skin_params();
    cm.radius_unit = LengthUnit::Centimeters;
    let mut mm = skin_params();
    mm.geometry.min_radius *= 10.0;
    mm.geometry.max_radius *= 10.0;

    let grid_cm = generate_lut(&cm).unwrap().grid;
    let grid_mm = generate_lut(&mm).unwrap().grid;
    let mut mismatches = 0;
    for (a, b) in grid_cm.texels().iter().zip(grid_mm.texels()) {
        for c in 0..3 {
            // Conversion rounding may move a value across a quantization step.
            assert!((a[c] as i16 - b[c] as i16).abs() <= 1);
            if a[c] != b[c] {
                mismatches += 1;
            }
        }
    }
    assert!(mismatches < grid_cm.texels().len());
}
