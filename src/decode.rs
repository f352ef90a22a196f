//! Pixel extraction for uncompressed 24-bit and 32-bit BMP data.

use alloc::vec::Vec;

use enough::Stop;

use crate::error::BmpError;
use crate::header::BmpHeader;
use crate::limits::Limits;
use crate::pixel::Pixel;
use crate::source::Cursor;

/// A decoded bitmap: exactly one header and one flat pixel array.
///
/// Constructed only by [`decode`] / [`DecodeRequest::decode`]; both parts
/// are read-only afterwards.
#[derive(Clone, Debug)]
pub struct Bitmap {
    header: BmpHeader,
    pixels: Vec<Pixel>,
}

impl Bitmap {
    /// The header the pixel data was decoded against.
    pub fn header(&self) -> &BmpHeader {
        &self.header
    }

    /// Decoded pixels, in stream order (see [`DecodeRequest::decode`]).
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Split into the header and the owned pixel buffer.
    pub fn into_parts(self) -> (BmpHeader, Vec<Pixel>) {
        (self.header, self.pixels)
    }
}

/// Builder for one decode call.
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Apply resource limits to this decode.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode the header and the pixel grid.
    ///
    /// Pixels come back in the order the stream stores them: `width_px`
    /// groups of `height_px` pixels each (channel bytes B, G, R, then A
    /// when `bits_per_pixel` is 32, else A fixed to 0), with
    /// [`BmpHeader::padding_after_each_line`] filler bytes skipped after
    /// every group. This group traversal differs from the
    /// scanline-per-row order most BMP readers use; it is kept as-is so
    /// existing consumers of this layout see identical output, and no
    /// bottom-up row flip is applied.
    pub fn decode(self, stop: impl Stop) -> Result<Bitmap, BmpError> {
        decode_impl(self.data, self.limits, &stop)
    }
}

/// Decode `data` with no resource limits.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<Bitmap, BmpError> {
    decode_impl(data, None, &stop)
}

fn decode_impl(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Bitmap, BmpError> {
    let header = BmpHeader::parse(data)?;
    validate(&header)?;

    let pixel_count = output_len(&header)?;
    if let Some(limits) = limits {
        limits.check(header.width_px as u32, header.height_px as u32)?;
        let out_bytes = pixel_count
            .checked_mul(core::mem::size_of::<Pixel>())
            .ok_or(BmpError::DimensionsTooLarge {
                width: header.width_px,
                height: header.height_px,
            })?;
        limits.check_memory(out_bytes)?;
    }

    stop.check()?;
    let pixels = decode_pixels(data, &header, pixel_count, stop)?;
    Ok(Bitmap { header, pixels })
}

/// Reject headers the pixel stage cannot handle, before any pixel byte is
/// read. Each condition is a distinct failure.
fn validate(header: &BmpHeader) -> Result<(), BmpError> {
    if header.compression != 0 {
        return Err(BmpError::Unsupported(
            "compressed images are not supported".into(),
        ));
    }
    if header.bits_per_pixel != 24 && header.bits_per_pixel != 32 {
        return Err(BmpError::Unsupported(alloc::format!(
            "color depth {} is not supported, only 24 and 32 bit",
            header.bits_per_pixel
        )));
    }
    if header.width_px < 0 || header.height_px < 0 {
        return Err(BmpError::Unsupported(alloc::format!(
            "negative dimensions {}x{} (top-down row order) are not supported",
            header.width_px, header.height_px
        )));
    }
    Ok(())
}

fn output_len(header: &BmpHeader) -> Result<usize, BmpError> {
    (header.width_px as usize)
        .checked_mul(header.height_px as usize)
        .ok_or(BmpError::DimensionsTooLarge {
            width: header.width_px,
            height: header.height_px,
        })
}

/// Single linear pass over the pixel region: two nested counters, no
/// backtracking. The first short read aborts the whole decode.
fn decode_pixels(
    data: &[u8],
    header: &BmpHeader,
    pixel_count: usize,
    stop: &dyn Stop,
) -> Result<Vec<Pixel>, BmpError> {
    let mut bytes = Cursor::new(data);
    bytes.set_position(header.data_offset as usize)?;

    let width = header.width_px as usize;
    let height = header.height_px as usize;
    let has_alpha = header.bits_per_pixel == 32;
    let padding = header.padding_after_each_line() as usize;
    let channel_bytes: usize = if has_alpha { 4 } else { 3 };

    // Account for the whole data region up front so a truncated source
    // fails before the output buffer is allocated.
    let group_bytes = height
        .checked_mul(channel_bytes)
        .and_then(|n| n.checked_add(padding))
        .ok_or(BmpError::DimensionsTooLarge {
            width: header.width_px,
            height: header.height_px,
        })?;
    let needed = width
        .checked_mul(group_bytes)
        .ok_or(BmpError::DimensionsTooLarge {
            width: header.width_px,
            height: header.height_px,
        })?;
    if needed > bytes.remaining() {
        return Err(BmpError::TruncatedData);
    }

    let mut pixels = Vec::with_capacity(pixel_count);
    for group_idx in 0..width {
        if group_idx % 16 == 0 {
            stop.check()?;
        }
        for _ in 0..height {
            let b = bytes.read_u8()?;
            let g = bytes.read_u8()?;
            let r = bytes.read_u8()?;
            let a = if has_alpha { bytes.read_u8()? } else { 0 };
            pixels.push(Pixel { r, g, b, a });
        }
        bytes.skip(padding)?;
    }

    Ok(pixels)
}
