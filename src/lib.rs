//! # bmplite
//!
//! Decoder for uncompressed Windows bitmap (BMP/DIB) images.
//!
//! Parses the fixed 54-byte file + info header into a [`BmpHeader`], then
//! extracts the pixel grid into a flat [`Pixel`] array. The header can be
//! re-serialized with [`BmpHeader::to_bytes`], zero-padded out to its stored
//! pixel-data offset.
//!
//! ## Supported input
//!
//! - Uncompressed (BI_RGB) data only
//! - 24-bit BGR and 32-bit BGRA color depths
//! - Bottom-up row order (positive height)
//!
//! ## Non-Goals
//!
//! - RLE and JPEG/PNG-in-DIB compressed variants
//! - Palette/indexed color and bit depths other than 24 and 32
//! - Top-down (negative height) bitmaps
//! - Color management (use a full imaging stack for that)
//!
//! ## Pixel order
//!
//! Pixels are returned in the order the stream stores them: `width_px`
//! groups of `height_px` pixels each, with the per-group filler bytes
//! skipped in between and no bottom-up row flip applied. See
//! [`DecodeRequest::decode`] for the details of this traversal.
//!
//! ## Usage
//!
//! ```
//! use bmplite::{decode, Pixel, Unstoppable};
//!
//! // A 1x1, 24-bit image: 54-byte header, one B,G,R pixel, one filler byte.
//! let mut data = Vec::new();
//! data.extend_from_slice(b"BM");
//! data.extend_from_slice(&58u32.to_le_bytes()); // file size
//! data.extend_from_slice(&[0; 4]); // reserved
//! data.extend_from_slice(&54u32.to_le_bytes()); // pixel data offset
//! data.extend_from_slice(&40u32.to_le_bytes()); // DIB header size
//! data.extend_from_slice(&1i32.to_le_bytes()); // width
//! data.extend_from_slice(&1i32.to_le_bytes()); // height
//! data.extend_from_slice(&1u16.to_le_bytes()); // planes
//! data.extend_from_slice(&24u16.to_le_bytes()); // bits per pixel
//! data.extend_from_slice(&[0; 24]); // compression + informational fields
//! data.extend_from_slice(&[16, 32, 64, 0]); // pixel bytes + filler
//!
//! let image = decode(&data, Unstoppable)?;
//! assert_eq!(image.header().width_px, 1);
//! assert_eq!(image.pixels(), &[Pixel { r: 64, g: 32, b: 16, a: 0 }]);
//! # Ok::<(), bmplite::BmpError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod decode;
mod error;
mod header;
mod limits;
mod pixel;
mod source;

#[cfg(feature = "std")]
mod fs;

// Re-exports
pub use decode::{Bitmap, DecodeRequest, decode};
pub use enough::{Stop, Unstoppable};
pub use error::BmpError;
pub use header::{BmpHeader, HEADER_LEN};
pub use limits::Limits;
pub use pixel::Pixel;

#[cfg(feature = "std")]
pub use fs::decode_file;
