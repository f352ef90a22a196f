//! Byte-source cursor shared by the header and pixel stages.

use crate::error::BmpError;

/// Sequential reader over an in-memory byte source, with absolute seek and
/// a known total length.
///
/// Every read or seek past end-of-input is a hard
/// [`BmpError::TruncatedData`] failure; no sentinel byte is ever
/// substituted for missing data.
pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Total length of the underlying source.
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    /// Bytes left between the current position and end-of-input.
    pub(crate) fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Set the absolute read position.
    pub(crate) fn set_position(&mut self, pos: usize) -> Result<(), BmpError> {
        if pos > self.data.len() {
            return Err(BmpError::TruncatedData);
        }
        self.pos = pos;
        Ok(())
    }

    /// Consume `n` bytes without looking at them.
    pub(crate) fn skip(&mut self, n: usize) -> Result<(), BmpError> {
        let new_pos = self.pos.checked_add(n).ok_or(BmpError::TruncatedData)?;
        if new_pos > self.data.len() {
            return Err(BmpError::TruncatedData);
        }
        self.pos = new_pos;
        Ok(())
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8, BmpError> {
        if self.pos < self.data.len() {
            let b = self.data[self.pos];
            self.pos += 1;
            Ok(b)
        } else {
            Err(BmpError::TruncatedData)
        }
    }

    pub(crate) fn get_u16_le(&mut self) -> Result<u16, BmpError> {
        Ok(u16::from_le_bytes(self.read_fixed_bytes::<2>()?))
    }

    pub(crate) fn get_u32_le(&mut self) -> Result<u32, BmpError> {
        Ok(u32::from_le_bytes(self.read_fixed_bytes::<4>()?))
    }

    pub(crate) fn get_i32_le(&mut self) -> Result<i32, BmpError> {
        Ok(i32::from_le_bytes(self.read_fixed_bytes::<4>()?))
    }

    pub(crate) fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], BmpError> {
        if self.remaining() < N {
            return Err(BmpError::TruncatedData);
        }
        let mut buf = [0u8; N];
        buf.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(buf)
    }
}
