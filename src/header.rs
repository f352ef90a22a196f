//! Fixed-layout codec for the BMP file + info header.

use alloc::vec::Vec;

use crate::error::BmpError;
use crate::source::Cursor;

/// Combined length of the file header (14 bytes) and the
/// BITMAPINFOHEADER (40 bytes).
pub const HEADER_LEN: usize = 54;

/// The 54-byte BMP header, one field per wire slot.
///
/// Parsing is pure extraction: no field value is checked here, not even the
/// magic bytes. Whether a header describes something decodable is the pixel
/// stage's call, which rejects compressed data and unsupported color depths
/// before touching the stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpHeader {
    /// Magic identifier bytes, `b"BM"` for standard bitmaps.
    pub file_type: [u8; 2],
    /// Whole-file size in bytes, as recorded by the writer.
    pub file_size: u32,
    /// Reserved, preserved verbatim for round-tripping.
    pub reserved1: u16,
    /// Reserved, preserved verbatim for round-tripping.
    pub reserved2: u16,
    /// Byte distance from the start of the stream to the pixel data.
    pub data_offset: u32,
    /// DIB header size; 40 for the BITMAPINFOHEADER variant handled here.
    pub dib_header_size: u32,
    pub width_px: i32,
    /// Positive for bottom-up row storage. Top-down (negative) values are
    /// rejected by the pixel stage.
    pub height_px: i32,
    /// Color plane count; 1 in well-formed files.
    pub planes: u16,
    /// Color depth; the pixel stage accepts 24 and 32.
    pub bits_per_pixel: u16,
    /// Compression method; 0 means uncompressed (BI_RGB).
    pub compression: u32,
    /// Pixel data size in bytes, informational.
    pub image_size_bytes: u32,
    pub x_resolution_ppm: i32,
    pub y_resolution_ppm: i32,
    /// Palette entry count, informational for non-palette images.
    pub colors_used: u32,
    pub important_colors: u32,
}

impl BmpHeader {
    /// Parse the leading [`HEADER_LEN`] bytes of `data`.
    ///
    /// Fails with [`BmpError::TruncatedHeader`] when fewer bytes are
    /// available. Multi-byte fields are little-endian regardless of host
    /// byte order.
    pub fn parse(data: &[u8]) -> Result<Self, BmpError> {
        let mut bytes = Cursor::new(data);
        if bytes.len() < HEADER_LEN {
            return Err(BmpError::TruncatedHeader {
                needed: HEADER_LEN,
                actual: bytes.len(),
            });
        }

        let file_type = bytes.read_fixed_bytes::<2>()?;
        let file_size = bytes.get_u32_le()?;
        let reserved1 = bytes.get_u16_le()?;
        let reserved2 = bytes.get_u16_le()?;
        let data_offset = bytes.get_u32_le()?;
        let dib_header_size = bytes.get_u32_le()?;
        let width_px = bytes.get_i32_le()?;
        let height_px = bytes.get_i32_le()?;
        let planes = bytes.get_u16_le()?;
        let bits_per_pixel = bytes.get_u16_le()?;
        let compression = bytes.get_u32_le()?;
        let image_size_bytes = bytes.get_u32_le()?;
        let x_resolution_ppm = bytes.get_i32_le()?;
        let y_resolution_ppm = bytes.get_i32_le()?;
        let colors_used = bytes.get_u32_le()?;
        let important_colors = bytes.get_u32_le()?;

        Ok(Self {
            file_type,
            file_size,
            reserved1,
            reserved2,
            data_offset,
            dib_header_size,
            width_px,
            height_px,
            planes,
            bits_per_pixel,
            compression,
            image_size_bytes,
            x_resolution_ppm,
            y_resolution_ppm,
            colors_used,
            important_colors,
        })
    }

    /// Re-encode the header in its wire layout.
    ///
    /// Emits the [`HEADER_LEN`] field bytes, then zero-padding out to
    /// `data_offset` so the result can directly precede a pixel stream.
    /// A `data_offset` below [`HEADER_LEN`] yields no padding; the stored
    /// offset is not otherwise sanity-checked, matching the parse side.
    pub fn to_bytes(&self) -> Vec<u8> {
        let total = (self.data_offset as usize).max(HEADER_LEN);
        let mut out = Vec::with_capacity(total);
        out.extend_from_slice(&self.file_type);
        out.extend_from_slice(&self.file_size.to_le_bytes());
        out.extend_from_slice(&self.reserved1.to_le_bytes());
        out.extend_from_slice(&self.reserved2.to_le_bytes());
        out.extend_from_slice(&self.data_offset.to_le_bytes());
        out.extend_from_slice(&self.dib_header_size.to_le_bytes());
        out.extend_from_slice(&self.width_px.to_le_bytes());
        out.extend_from_slice(&self.height_px.to_le_bytes());
        out.extend_from_slice(&self.planes.to_le_bytes());
        out.extend_from_slice(&self.bits_per_pixel.to_le_bytes());
        out.extend_from_slice(&self.compression.to_le_bytes());
        out.extend_from_slice(&self.image_size_bytes.to_le_bytes());
        out.extend_from_slice(&self.x_resolution_ppm.to_le_bytes());
        out.extend_from_slice(&self.y_resolution_ppm.to_le_bytes());
        out.extend_from_slice(&self.colors_used.to_le_bytes());
        out.extend_from_slice(&self.important_colors.to_le_bytes());
        out.resize(total, 0);
        out
    }

    /// The magic identifier as a little-endian `u16` (0x4D42 for `b"BM"`).
    pub fn numeric_type(&self) -> u16 {
        u16::from_le_bytes(self.file_type)
    }

    /// Filler bytes consumed after each group of `height_px` pixels.
    ///
    /// Zero for 32-bit data, otherwise `width_px % 4`. This mirrors the
    /// writer this decoder is paired with; it is not the canonical BMP rule
    /// of rounding each scanline's byte length up to a multiple of 4.
    pub fn padding_after_each_line(&self) -> i32 {
        if self.bits_per_pixel == 32 {
            0
        } else {
            self.width_px % 4
        }
    }
}
