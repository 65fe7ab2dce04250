// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! CDR (Common Data Representation) helpers for GIOP/IIOP structures.
//!
//! Only the subset needed by IORs and their tagged components is covered:
//! primitives, octet sequences, strings and nested encapsulations, in either
//! byte order.

pub mod cursor;
pub mod encapsulation;

pub use cursor::{CdrReader, CdrWriter};

use std::fmt;

/// Byte order flag octet: big-endian.
pub const FLAG_BIG_ENDIAN: u8 = 0x00;
/// Byte order flag octet: little-endian.
pub const FLAG_LITTLE_ENDIAN: u8 = 0x01;

/// Byte order of a CDR stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    #[default]
    BigEndian,
    LittleEndian,
}

impl ByteOrder {
    /// Decode the byte order flag of an encapsulation.
    ///
    /// Only the low bit is significant; the remaining bits are reserved.
    pub fn from_flag(flag: u8) -> Self {
        if flag & FLAG_LITTLE_ENDIAN != 0 {
            ByteOrder::LittleEndian
        } else {
            ByteOrder::BigEndian
        }
    }

    pub fn flag(self) -> u8 {
        match self {
            ByteOrder::BigEndian => FLAG_BIG_ENDIAN,
            ByteOrder::LittleEndian => FLAG_LITTLE_ENDIAN,
        }
    }
}

/// Marshalling error raised by the CDR reader/writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CdrError {
    WriteFailed { offset: usize, reason: String },
    ReadFailed { offset: usize, reason: String },
    InvalidData { reason: String },
}

impl fmt::Display for CdrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CdrError::WriteFailed { offset, reason } => {
                write!(f, "write failed at offset {}: {}", offset, reason)
            }
            CdrError::ReadFailed { offset, reason } => {
                write!(f, "read failed at offset {}: {}", offset, reason)
            }
            CdrError::InvalidData { reason } => write!(f, "invalid data: {}", reason),
        }
    }
}

impl std::error::Error for CdrError {}

pub type CdrResult<T> = core::result::Result<T, CdrError>;
