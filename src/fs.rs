//! File-backed decoding: path checks plus a scoped read of the byte source.

use std::path::Path;

use enough::Stop;

use crate::decode::{Bitmap, decode};
use crate::error::BmpError;

/// Decode a `.bmp` or `.dib` file from disk.
///
/// The path must exist and carry exactly a `bmp` or `dib` extension
/// (matched case-sensitively). The file handle is released before this
/// returns, on success and on every failure path.
pub fn decode_file(path: impl AsRef<Path>, stop: impl Stop) -> Result<Bitmap, BmpError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(BmpError::NotFound(path.display().to_string()));
    }

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if extension != "bmp" && extension != "dib" {
        return Err(BmpError::UnrecognizedExtension(extension.to_string()));
    }

    // fs::read opens, reads, and drops the handle in one scope.
    let data = std::fs::read(path)?;
    decode(&data, stop)
}
