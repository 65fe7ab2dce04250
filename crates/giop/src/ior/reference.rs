// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Interoperable Object Reference.
//!
//! `struct IOR { string type_id; sequence<TaggedProfile> profiles; }`
//!
//! The stringified form is `IOR:` followed by the hex dump of the IOR
//! written as a CDR encapsulation.

use super::profile::{IiopProfile, TaggedProfile};
use super::registry::Registries;
use crate::cdr::{encapsulation, ByteOrder, CdrReader, CdrResult, CdrWriter};
use crate::error::{Error, Result};

const IOR_PREFIX: &str = "IOR:";
const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Ior {
    type_id: String,
    profiles: Vec<TaggedProfile>,
}

impl Ior {
    pub fn new(type_id: impl Into<String>, profiles: Vec<TaggedProfile>) -> Self {
        Self {
            type_id: type_id.into(),
            profiles,
        }
    }

    /// The nil reference: empty type id, no profiles.
    pub fn nil() -> Self {
        Self::default()
    }

    pub fn is_nil(&self) -> bool {
        self.type_id.is_empty() && self.profiles.is_empty()
    }

    pub fn type_id(&self) -> &str {
        &self.type_id
    }

    pub fn profiles(&self) -> &[TaggedProfile] {
        &self.profiles
    }

    /// First IIOP profile, the one used for invocations.
    pub fn iiop_profile(&self) -> Option<&IiopProfile> {
        self.profiles.iter().find_map(TaggedProfile::as_iiop)
    }

    pub fn read(input: &mut CdrReader<'_>, registries: &Registries) -> CdrResult<Self> {
        let type_id = input.read_string()?;
        // tag + length prefix
        let count = input.read_sequence_len(8)?;
        let mut profiles = Vec::with_capacity(count);
        for _ in 0..count {
            let tag = input.read_u32()?;
            let data = input.read_octets()?;
            profiles.push(registries.profiles.decode(tag, data, &registries.components)?);
        }
        Ok(Self { type_id, profiles })
    }

    pub fn write(&self, out: &mut CdrWriter) -> CdrResult<()> {
        out.write_string(&self.type_id)?;
        out.write_sequence_len(self.profiles.len())?;
        for profile in &self.profiles {
            profile.write(out)?;
        }
        Ok(())
    }

    /// `IOR:` + lowercase hex of a big-endian encapsulation.
    pub fn to_ior_string(&self) -> Result<String> {
        let bytes = encapsulation::encapsulate(ByteOrder::BigEndian, |w| self.write(w))?;
        let mut out = String::with_capacity(IOR_PREFIX.len() + bytes.len() * 2);
        out.push_str(IOR_PREFIX);
        for b in &bytes {
            out.push(char::from(HEX_DIGITS[usize::from(b >> 4)]));
            out.push(char::from(HEX_DIGITS[usize::from(b & 0x0F)]));
        }
        Ok(out)
    }

    /// Parse a stringified reference; prefix and hex digits are case
    /// insensitive.
    pub fn from_ior_string(s: &str, registries: &Registries) -> Result<Self> {
        let s = s.trim();
        let hex = match s.get(..IOR_PREFIX.len()) {
            Some(prefix) if prefix.eq_ignore_ascii_case(IOR_PREFIX) => &s[IOR_PREFIX.len()..],
            _ => return Err(Error::InvalidIorString("missing IOR: prefix".into())),
        };
        let bytes = decode_hex(hex)?;
        let mut input = encapsulation::open(&bytes)?;
        Ok(Self::read(&mut input, registries)?)
    }
}

fn decode_hex(hex: &str) -> Result<Vec<u8>> {
    let digits = hex.as_bytes();
    if digits.len() % 2 != 0 {
        return Err(Error::InvalidIorString(format!(
            "odd number of hex digits ({})",
            digits.len()
        )));
    }
    digits
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| match (hex_value(pair[0]), hex_value(pair[1])) {
            (Some(hi), Some(lo)) => Ok((hi << 4) | lo),
            _ => Err(Error::InvalidIorString(format!(
                "invalid hex digit near position {}",
                i * 2
            ))),
        })
        .collect()
}

fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nil_reference_string() {
        let nil = Ior::nil();
        assert!(nil.is_nil());
        // flag + pad, type_id len=1, "\0" + pad, profile count 0
        let s = nil.to_ior_string().expect("stringify");
        assert_eq!(s, "IOR:00000000000000010000000000000000");

        let parsed = Ior::from_ior_string(&s, &Registries::standard()).expect("parse");
        assert!(parsed.is_nil());
    }

    #[test]
    fn test_rejects_missing_prefix_and_bad_hex() {
        let regs = Registries::standard();
        assert!(matches!(
            Ior::from_ior_string("corbaloc::host/key", &regs),
            Err(Error::InvalidIorString(_))
        ));
        assert!(matches!(
            Ior::from_ior_string("IOR:000", &regs),
            Err(Error::InvalidIorString(_))
        ));
        assert!(matches!(
            Ior::from_ior_string("IOR:zz", &regs),
            Err(Error::InvalidIorString(_))
        ));
        assert!(matches!(
            Ior::from_ior_string("IOR:", &regs),
            Err(Error::Marshal(_))
        ));
    }

    #[test]
    fn test_hex_is_case_insensitive() {
        assert_eq!(decode_hex("aBcD").expect("hex"), vec![0xAB, 0xCD]);
    }
}
