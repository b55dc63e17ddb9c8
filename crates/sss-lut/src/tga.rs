//! Uncompressed truecolor TGA writer and reader.
//!
//! Only the subset the LUT needs is supported: image type 2, 24 bits per
//! pixel, bottom-left origin, no colormap and no image ID. The writer emits
//! no timestamps or other variable metadata, so identical grids always
//! produce identical bytes.

use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::lut::LutGrid;

/// Size of the fixed header.
pub const HEADER_LEN: usize = 18;

/// Footer signature, including its terminating NUL.
pub const FOOTER_SIGNATURE: &[u8] = b"TRUEVISION-XFILE.\0";

/// Uncompressed truecolor image type code.
pub const IMAGE_TYPE_TRUECOLOR: u8 = 2;

const BITS_PER_PIXEL: u8 = 24;
const BYTES_PER_PIXEL: usize = 3;

/// Errors from TGA operations.
#[derive(Debug, Error)]
pub enum TgaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    #[error("Unsupported TGA: {0}")]
    Unsupported(String),

    #[error("Truncated TGA: expected at least {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },
}

/// Fields of the fixed header that matter for this format subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TgaHeader {
    pub image_type: u8,
    pub width: u16,
    pub height: u16,
    pub bits_per_pixel: u8,
    pub descriptor: u8,
}

impl TgaHeader {
    fn for_grid(grid: &LutGrid) -> Result<Self, TgaError> {
        if grid.width() == 0 || grid.height() == 0 {
            return Err(TgaError::InvalidDimensions(format!(
                "{}x{}",
                grid.width(),
                grid.height()
            )));
        }
        let width = u16::try_from(grid.width()).map_err(|_| {
            TgaError::InvalidDimensions(format!("width {} exceeds {}", grid.width(), u16::MAX))
        })?;
        let height = u16::try_from(grid.height()).map_err(|_| {
            TgaError::InvalidDimensions(format!("height {} exceeds {}", grid.height(), u16::MAX))
        })?;
        Ok(Self {
            image_type: IMAGE_TYPE_TRUECOLOR,
            width,
            height,
            bits_per_pixel: BITS_PER_PIXEL,
            descriptor: 0,
        })
    }

    /// Serialize to the 18-byte on-disk layout.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut bytes = [0u8; HEADER_LEN];
        // [0] id length, [1] colormap type, [3..8] colormap specification: all zero.
        bytes[2] = self.image_type;
        // [8..12] x and y origin: zero.
        bytes[12..14].copy_from_slice(&self.width.to_le_bytes());
        bytes[14..16].copy_from_slice(&self.height.to_le_bytes());
        bytes[16] = self.bits_per_pixel;
        bytes[17] = self.descriptor;
        bytes
    }

    fn parse(bytes: &[u8]) -> Result<Self, TgaError> {
        if bytes.len() < HEADER_LEN {
            return Err(TgaError::Truncated {
                expected: HEADER_LEN,
                actual: bytes.len(),
            });
        }
        if bytes[0] != 0 || bytes[1] != 0 {
            return Err(TgaError::Unsupported(
                "image ID and colormap are not supported".to_string(),
            ));
        }
        let header = Self {
            image_type: bytes[2],
            width: u16::from_le_bytes([bytes[12], bytes[13]]),
            height: u16::from_le_bytes([bytes[14], bytes[15]]),
            bits_per_pixel: bytes[16],
            descriptor: bytes[17],
        };
        if header.image_type != IMAGE_TYPE_TRUECOLOR {
            return Err(TgaError::Unsupported(format!(
                "image type {} (expected {})",
                header.image_type, IMAGE_TYPE_TRUECOLOR
            )));
        }
        if header.bits_per_pixel != BITS_PER_PIXEL {
            return Err(TgaError::Unsupported(format!(
                "{} bits per pixel (expected {})",
                header.bits_per_pixel, BITS_PER_PIXEL
            )));
        }
        Ok(header)
    }
}

/// A decoded TGA image.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedTga {
    pub header: TgaHeader,
    /// RGB texels in raster order.
    pub grid: LutGrid,
    /// Whether the file ends with the TGA 2.0 signature.
    pub has_signature: bool,
}

/// Total encoded size for a grid of the given dimensions.
pub fn encoded_len(width: u32, height: u32) -> usize {
    HEADER_LEN + width as usize * height as usize * BYTES_PER_PIXEL + FOOTER_SIGNATURE.len()
}

/// Write a LUT grid as TGA to any writer.
pub fn write_to_writer<W: Write>(grid: &LutGrid, mut writer: W) -> Result<(), TgaError> {
    let header = TgaHeader::for_grid(grid)?;
    writer.write_all(&header.to_bytes())?;

    let mut row_bytes = Vec::with_capacity(grid.width() as usize * BYTES_PER_PIXEL);
    for row in grid.rows() {
        row_bytes.clear();
        for &[r, g, b] in row {
            row_bytes.extend_from_slice(&[b, g, r]);
        }
        writer.write_all(&row_bytes)?;
    }

    writer.write_all(FOOTER_SIGNATURE)?;
    writer.flush()?;
    Ok(())
}

/// Encode a LUT grid to an in-memory TGA.
pub fn encode(grid: &LutGrid) -> Result<Vec<u8>, TgaError> {
    let mut data = Vec::with_capacity(encoded_len(grid.width(), grid.height()));
    write_to_writer(grid, &mut data)?;
    Ok(data)
}

/// Decode a TGA produced by [`encode`] (or any file of the same subset).
pub fn decode(bytes: &[u8]) -> Result<DecodedTga, TgaError> {
    let header = TgaHeader::parse(bytes)?;
    let width = header.width as u32;
    let height = header.height as u32;
    if width == 0 || height == 0 {
        return Err(TgaError::InvalidDimensions(format!("{}x{}", width, height)));
    }

    let raster_len = width as usize * height as usize * BYTES_PER_PIXEL;
    let raster_end = HEADER_LEN + raster_len;
    if bytes.len() < raster_end {
        return Err(TgaError::Truncated {
            expected: raster_end,
            actual: bytes.len(),
        });
    }

    let texels = bytes[HEADER_LEN..raster_end]
        .chunks_exact(BYTES_PER_PIXEL)
        .map(|bgr| [bgr[2], bgr[1], bgr[0]])
        .collect();
    let grid = LutGrid::from_texels(width, height, texels)
        .ok_or_else(|| TgaError::InvalidDimensions(format!("{}x{}", width, height)))?;

    Ok(DecodedTga {
        header,
        grid,
        has_signature: bytes.ends_with(FOOTER_SIGNATURE),
    })
}

/// Read and decode a TGA file.
pub fn read(path: &Path) -> Result<DecodedTga, TgaError> {
    let bytes = std::fs::read(path)?;
    decode(&bytes)
}

/// Compute the BLAKE3 hash of encoded TGA data.
pub fn hash_tga(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}
