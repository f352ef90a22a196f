use crate::error::BmpError;

/// Resource limits for a decode call.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum memory bytes for the decoded pixel buffer.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check image dimensions against the configured ceilings.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), BmpError> {
        if let Some(max) = self.max_width {
            if width > max {
                return Err(BmpError::LimitExceeded(alloc::format!(
                    "width {width} exceeds limit {max}"
                )));
            }
        }
        if let Some(max) = self.max_height {
            if height > max {
                return Err(BmpError::LimitExceeded(alloc::format!(
                    "height {height} exceeds limit {max}"
                )));
            }
        }
        if let Some(max) = self.max_pixels {
            let pixels = u64::from(width) * u64::from(height);
            if pixels > max {
                return Err(BmpError::LimitExceeded(alloc::format!(
                    "pixel count {pixels} exceeds limit {max}"
                )));
            }
        }
        Ok(())
    }

    /// Check that the output allocation stays within the memory ceiling.
    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), BmpError> {
        if let Some(max) = self.max_memory_bytes {
            if bytes as u64 > max {
                return Err(BmpError::LimitExceeded(alloc::format!(
                    "allocation of {bytes} bytes exceeds memory limit {max}"
                )));
            }
        }
        Ok(())
    }
}
