//! Linear to sRGB 8-bit encoding.

/// Apply the sRGB transfer function to a linear value.
#[inline]
pub fn linear_to_srgb(value: f64) -> f64 {
    if value <= 0.0031308 {
        12.92 * value
    } else {
        1.055 * value.powf(1.0 / 2.4) - 0.055
    }
}

/// Encode a linear intensity as an 8-bit sRGB unorm.
///
/// Quantizes with `floor`, so only values whose encoded result reaches 1.0
/// map to 255. Anything above saturates.
#[inline]
pub fn encode_unorm8(value: f64) -> u8 {
    (linear_to_srgb(value) * 255.0).floor().clamp(0.0, 255.0) as u8
}

/// Encode a linear RGB triple.
#[inline]
pub fn encode_rgb8(rgb: [f64; 3]) -> [u8; 3] {
    rgb.map(encode_unorm8)
}
