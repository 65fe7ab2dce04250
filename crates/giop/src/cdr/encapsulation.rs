// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! CDR encapsulations.
//!
//! An encapsulation is an octet sequence whose first byte is a byte order
//! flag. Alignment inside it restarts at that flag, so a nested reader is
//! positioned at offset 1 of its own buffer.

use super::{ByteOrder, CdrError, CdrReader, CdrResult, CdrWriter};

/// Open an encapsulation and return a reader positioned after the flag octet.
pub fn open(data: &[u8]) -> CdrResult<CdrReader<'_>> {
    let Some(&flag) = data.first() else {
        return Err(CdrError::ReadFailed {
            offset: 0,
            reason: "empty encapsulation".into(),
        });
    };
    Ok(CdrReader::at(data, 1, ByteOrder::from_flag(flag)))
}

/// Build a standalone encapsulation in `order`.
pub fn encapsulate<F>(order: ByteOrder, body: F) -> CdrResult<Vec<u8>>
where
    F: FnOnce(&mut CdrWriter) -> CdrResult<()>,
{
    let mut writer = CdrWriter::encapsulation(order);
    body(&mut writer)?;
    Ok(writer.into_bytes())
}

impl CdrWriter {
    /// Nested encapsulation written as a `sequence<octet>`, using this
    /// stream's byte order.
    pub fn write_encapsulation<F>(&mut self, body: F) -> CdrResult<()>
    where
        F: FnOnce(&mut CdrWriter) -> CdrResult<()>,
    {
        let inner = encapsulate(self.order(), body)?;
        self.write_octets(&inner)
    }
}

impl<'a> CdrReader<'a> {
    /// Read a `sequence<octet>` and open it as an encapsulation.
    pub fn read_encapsulation(&mut self) -> CdrResult<CdrReader<'a>> {
        let data = self.read_octets()?;
        open(data)
    }
}
