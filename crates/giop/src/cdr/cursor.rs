// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Read/write cursors for CDR streams.
//!
//! Primitives are aligned to their natural size relative to the start of the
//! stream, which for an encapsulation is its byte order octet.

use super::{ByteOrder, CdrError, CdrResult};

/// Generate aligned write methods for primitive types.
macro_rules! impl_write {
    ($name:ident, $type:ty, $size:expr) => {
        pub fn $name(&mut self, value: $type) -> CdrResult<()> {
            self.align($size);
            let bytes = match self.order {
                ByteOrder::BigEndian => value.to_be_bytes(),
                ByteOrder::LittleEndian => value.to_le_bytes(),
            };
            self.buffer.extend_from_slice(&bytes);
            Ok(())
        }
    };
}

/// Generate aligned read methods for primitive types.
macro_rules! impl_read {
    ($name:ident, $type:ty, $size:expr) => {
        pub fn $name(&mut self) -> CdrResult<$type> {
            self.align($size)?;
            if self.remaining() < $size {
                return Err(self.eof());
            }
            let mut bytes = [0u8; $size];
            bytes.copy_from_slice(&self.buffer[self.offset..self.offset + $size]);
            self.offset += $size;
            Ok(match self.order {
                ByteOrder::BigEndian => <$type>::from_be_bytes(bytes),
                ByteOrder::LittleEndian => <$type>::from_le_bytes(bytes),
            })
        }
    };
}

/// Growable CDR output stream.
#[derive(Debug, Clone, Default)]
pub struct CdrWriter {
    buffer: Vec<u8>,
    order: ByteOrder,
}

impl CdrWriter {
    pub fn new(order: ByteOrder) -> Self {
        Self {
            buffer: Vec::new(),
            order,
        }
    }

    /// Writer for a new encapsulation; the byte order flag is already written.
    pub fn encapsulation(order: ByteOrder) -> Self {
        Self {
            buffer: vec![order.flag()],
            order,
        }
    }

    pub fn order(&self) -> ByteOrder {
        self.order
    }

    pub fn offset(&self) -> usize {
        self.buffer.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    /// Zero-pad up to the next multiple of `alignment`.
    pub fn align(&mut self, alignment: usize) {
        if alignment <= 1 {
            return;
        }
        let mask = alignment - 1;
        let aligned = (self.buffer.len() + mask) & !mask;
        self.buffer.resize(aligned, 0);
    }

    impl_write!(write_u16, u16, 2);
    impl_write!(write_u32, u32, 4);
    impl_write!(write_i32, i32, 4);
    impl_write!(write_u64, u64, 8);

    pub fn write_u8(&mut self, value: u8) -> CdrResult<()> {
        self.buffer.push(value);
        Ok(())
    }

    pub fn write_bool(&mut self, value: bool) -> CdrResult<()> {
        self.write_u8(u8::from(value))
    }

    /// Raw bytes, no length prefix.
    pub fn write_bytes(&mut self, data: &[u8]) -> CdrResult<()> {
        self.buffer.extend_from_slice(data);
        Ok(())
    }

    /// Element count of a sequence; fails instead of truncating past u32.
    pub fn write_sequence_len(&mut self, len: usize) -> CdrResult<()> {
        let len = self.length_prefix(len)?;
        self.write_u32(len)
    }

    /// `sequence<octet>`: u32 length followed by the bytes.
    pub fn write_octets(&mut self, data: &[u8]) -> CdrResult<()> {
        self.write_sequence_len(data.len())?;
        self.write_bytes(data)
    }

    /// CDR string: u32 length including the NUL terminator, bytes, NUL.
    pub fn write_string(&mut self, value: &str) -> CdrResult<()> {
        self.write_sequence_len(value.len() + 1)?;
        self.write_bytes(value.as_bytes())?;
        self.write_u8(0)
    }

    /// `sequence<unsigned long>`.
    pub fn write_u32_sequence(&mut self, values: &[u32]) -> CdrResult<()> {
        self.write_sequence_len(values.len())?;
        for value in values {
            self.write_u32(*value)?;
        }
        Ok(())
    }

    fn length_prefix(&self, len: usize) -> CdrResult<u32> {
        u32::try_from(len).map_err(|_| CdrError::WriteFailed {
            offset: self.buffer.len(),
            reason: "length exceeds u32".into(),
        })
    }
}

/// Bounds-checked CDR input cursor.
#[derive(Debug, Clone)]
pub struct CdrReader<'a> {
    buffer: &'a [u8],
    offset: usize,
    order: ByteOrder,
}

impl<'a> CdrReader<'a> {
    pub fn new(buffer: &'a [u8], order: ByteOrder) -> Self {
        Self {
            buffer,
            offset: 0,
            order,
        }
    }

    /// Cursor starting at `offset`; alignment stays relative to `buffer[0]`.
    pub(crate) fn at(buffer: &'a [u8], offset: usize, order: ByteOrder) -> Self {
        Self {
            buffer,
            offset,
            order,
        }
    }

    pub fn order(&self) -> ByteOrder {
        self.order
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.offset)
    }

    pub fn is_eof(&self) -> bool {
        self.offset >= self.buffer.len()
    }

    pub fn align(&mut self, alignment: usize) -> CdrResult<()> {
        if alignment <= 1 {
            return Ok(());
        }
        let mask = alignment - 1;
        let aligned = (self.offset + mask) & !mask;
        if aligned > self.buffer.len() {
            return Err(CdrError::ReadFailed {
                offset: aligned,
                reason: "unexpected end of buffer".into(),
            });
        }
        self.offset = aligned;
        Ok(())
    }

    impl_read!(read_u16, u16, 2);
    impl_read!(read_u32, u32, 4);
    impl_read!(read_i32, i32, 4);
    impl_read!(read_u64, u64, 8);

    pub fn read_u8(&mut self) -> CdrResult<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_bool(&mut self) -> CdrResult<bool> {
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(CdrError::InvalidData {
                reason: format!("boolean octet {:#04x}", other),
            }),
        }
    }

    pub fn read_bytes(&mut self, len: usize) -> CdrResult<&'a [u8]> {
        if self.remaining() < len {
            return Err(self.eof());
        }
        let slice = &self.buffer[self.offset..self.offset + len];
        self.offset += len;
        Ok(slice)
    }

    /// Everything left in the stream.
    pub fn read_rest(&mut self) -> &'a [u8] {
        let start = self.offset.min(self.buffer.len());
        self.offset = self.buffer.len();
        &self.buffer[start..]
    }

    /// `sequence<octet>`, borrowed from the input.
    pub fn read_octets(&mut self) -> CdrResult<&'a [u8]> {
        let len = self.read_u32()? as usize;
        self.read_bytes(len)
    }

    /// CDR string. The length counts the NUL terminator; a zero length and a
    /// missing terminator are both tolerated.
    pub fn read_string(&mut self) -> CdrResult<String> {
        let start = self.offset;
        let raw = self.read_octets()?;
        let text = match raw.split_last() {
            Some((0, head)) => head,
            _ => raw,
        };
        String::from_utf8(text.to_vec()).map_err(|_| CdrError::InvalidData {
            reason: format!("string at offset {} is not UTF-8", start),
        })
    }

    /// `sequence<unsigned long>`.
    pub fn read_u32_sequence(&mut self) -> CdrResult<Vec<u32>> {
        let count = self.read_u32()? as usize;
        // Reject counts the buffer cannot hold before allocating.
        if count > self.remaining() / 4 {
            return Err(self.eof());
        }
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            values.push(self.read_u32()?);
        }
        Ok(values)
    }

    /// Element count of a sequence, checked against the bytes left assuming
    /// each element takes at least `min_element_size` bytes.
    pub fn read_sequence_len(&mut self, min_element_size: usize) -> CdrResult<usize> {
        let count = self.read_u32()? as usize;
        if count.saturating_mul(min_element_size.max(1)) > self.remaining() {
            return Err(CdrError::ReadFailed {
                offset: self.offset,
                reason: format!("sequence length {} exceeds buffer", count),
            });
        }
        Ok(count)
    }

    fn eof(&self) -> CdrError {
        CdrError::ReadFailed {
            offset: self.offset,
            reason: "unexpected end of buffer".into(),
        }
    }
}
