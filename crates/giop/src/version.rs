// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! GIOP protocol version and request version negotiation.
//!
//! | Version | Notes |
//! |---------|-------|
//! | 1.0 | Baseline, IIOP profiles carry no tagged components |
//! | 1.1 | Tagged components, fragmentation |
//! | 1.2 | Bidirectional GIOP, default for this crate |
//! | 1.3 | Value type extensions |
//! | 13.1 | Java serialization marker (not a real GIOP revision) |
//!
//! Equality and ordering are structural on `(major, minor)`. The shared
//! constants exist only so that callers can name the well-known versions.

use crate::cdr::{CdrReader, CdrResult, CdrWriter};
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Encoding version byte paired with major 13 for Java serialization.
pub const JAVA_ENC_VERSION: u8 = 1;

/// Major number reserved for the Java serialization marker.
pub const JAVA_SERIALIZATION_MAJOR: u8 = 13;

/// GIOP `(major, minor)` version tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GiopVersion {
    major: u8,
    minor: u8,
}

impl GiopVersion {
    pub const V1_0: GiopVersion = GiopVersion::new(1, 0);
    pub const V1_1: GiopVersion = GiopVersion::new(1, 1);
    pub const V1_2: GiopVersion = GiopVersion::new(1, 2);
    pub const V1_3: GiopVersion = GiopVersion::new(1, 3);
    pub const V13_XX: GiopVersion = GiopVersion::new(JAVA_SERIALIZATION_MAJOR, JAVA_ENC_VERSION);

    pub const DEFAULT_VERSION: GiopVersion = GiopVersion::V1_2;

    const CANONICAL: [GiopVersion; 5] = [
        GiopVersion::V1_0,
        GiopVersion::V1_1,
        GiopVersion::V1_2,
        GiopVersion::V1_3,
        GiopVersion::V13_XX,
    ];

    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }

    /// Shared constant for a known version, otherwise a fresh value.
    pub fn get_instance(major: u8, minor: u8) -> Self {
        Self::CANONICAL
            .iter()
            .copied()
            .find(|v| v.equals(major, minor))
            .unwrap_or_else(|| Self::new(major, minor))
    }

    /// Parse `"major.minor"`.
    ///
    /// The string is split on the first dot; the dot must be neither the
    /// first nor the last character.
    pub fn parse_version(s: &str) -> Result<Self> {
        let dot = match s.find('.') {
            None => return Err(Error::Format(format!("no '.' in {:?}", s))),
            Some(0) => return Err(Error::Format(format!("missing major in {:?}", s))),
            Some(i) if i == s.len() - 1 => {
                return Err(Error::Format(format!("missing minor in {:?}", s)))
            }
            Some(i) => i,
        };

        let major = parse_octet(&s[..dot])?;
        let minor = parse_octet(&s[dot + 1..])?;
        Ok(Self::get_instance(major, minor))
    }

    pub fn major(&self) -> u8 {
        self.major
    }

    pub fn minor(&self) -> u8 {
        self.minor
    }

    pub fn equals(&self, major: u8, minor: u8) -> bool {
        self.major == major && self.minor == minor
    }

    /// Strict lexicographic order on `(major, minor)`.
    pub fn less_than(&self, other: &GiopVersion) -> bool {
        self.major < other.major || (self.major == other.major && self.minor < other.minor)
    }

    /// `(major << 8) | minor`.
    pub fn as_u16(&self) -> u16 {
        (u16::from(self.major) << 8) | u16::from(self.minor)
    }

    /// Any version past 1.0 may carry tagged components in its IIOP profile.
    pub fn supports_ior_iiop_profile_components(&self) -> bool {
        self.minor > 0 || self.major > 1
    }

    pub fn is_java_serialization(&self) -> bool {
        self.major == JAVA_SERIALIZATION_MAJOR
    }

    /// Two octets, major then minor, no alignment.
    pub fn write(&self, out: &mut CdrWriter) -> CdrResult<()> {
        out.write_u8(self.major)?;
        out.write_u8(self.minor)
    }

    pub fn read(input: &mut CdrReader<'_>) -> CdrResult<Self> {
        let major = input.read_u8()?;
        let minor = input.read_u8()?;
        Ok(Self::get_instance(major, minor))
    }
}

impl Default for GiopVersion {
    fn default() -> Self {
        Self::DEFAULT_VERSION
    }
}

impl fmt::Display for GiopVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for GiopVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_version(s)
    }
}

fn parse_octet(digits: &str) -> Result<u8> {
    digits
        .parse::<u8>()
        .map_err(|e| Error::NumberFormat(format!("{:?}: {}", digits, e)))
}

/// Pick the GIOP version for an outgoing request.
///
/// `target_is_legacy` marks a peer ORB known to advertise 1.1 in its IOR
/// while only speaking 1.0; such peers always get 1.0. Otherwise the lower
/// of the two versions wins, with ties going to `local`.
pub fn choose_request_version(
    local: &GiopVersion,
    target: &GiopVersion,
    target_is_legacy: bool,
) -> GiopVersion {
    if target_is_legacy {
        log::debug!(
            "[giop] legacy peer advertising {}, forcing {}",
            target,
            GiopVersion::V1_0
        );
        return GiopVersion::V1_0;
    }

    if local.major < target.major {
        *local
    } else if local.major > target.major {
        *target
    } else if local.minor <= target.minor {
        *local
    } else {
        *target
    }
}
