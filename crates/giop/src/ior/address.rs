// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! IIOP endpoint address (`string host; unsigned short port`).

use crate::cdr::{CdrReader, CdrResult, CdrWriter};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IiopAddress {
    host: String,
    port: u16,
}

impl IiopAddress {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn read(input: &mut CdrReader<'_>) -> CdrResult<Self> {
        let host = input.read_string()?;
        let port = input.read_u16()?;
        Ok(Self { host, port })
    }

    pub fn write(&self, out: &mut CdrWriter) -> CdrResult<()> {
        out.write_string(&self.host)?;
        out.write_u16(self.port)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for IiopAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

/// Direct-construction form.
pub fn make_iiop_address(host: impl Into<String>, port: u16) -> IiopAddress {
    IiopAddress::new(host, port)
}

/// Decode-from-stream form.
pub fn read_iiop_address(input: &mut CdrReader<'_>) -> CdrResult<IiopAddress> {
    IiopAddress::read(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cdr::ByteOrder;

    #[test]
    fn test_address_layout() {
        let addr = make_iiop_address("h", 1050);
        let mut w = CdrWriter::new(ByteOrder::BigEndian);
        addr.write(&mut w).expect("write");
        // len=2, 'h', NUL, then port aligned to 2
        assert_eq!(w.as_bytes(), &[0, 0, 0, 2, b'h', 0, 0x04, 0x1A]);

        let bytes = w.into_bytes();
        let mut r = CdrReader::new(&bytes, ByteOrder::BigEndian);
        assert_eq!(read_iiop_address(&mut r).expect("read"), addr);
    }

    #[test]
    fn test_display_brackets_ipv6() {
        assert_eq!(IiopAddress::new("::1", 900).to_string(), "[::1]:900");
        assert_eq!(IiopAddress::new("orb.local", 900).to_string(), "orb.local:900");
    }
}
