// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Tagged components of an IIOP profile.
//!
//! On the wire a component is `[tag: u32][component_data: sequence<octet>]`.
//! Every kind known here stores its payload as a CDR encapsulation.
//! Components with an unrecognized tag are kept as raw bytes and written back
//! unchanged.

use super::address::IiopAddress;
use super::code_sets::CodeSetComponentInfo;
use super::tags::*;
use crate::cdr::{encapsulation, ByteOrder, CdrReader, CdrResult, CdrWriter};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TaggedComponent {
    AlternateIiopAddress(IiopAddress),
    CodeSets(CodeSetComponentInfo),
    JavaCodebase(String),
    OrbType(u32),
    MaxStreamFormatVersion(u8),
    JavaSerialization(u8),
    RequestPartitioning(u32),
    /// Tag with no registered factory; `data` is the untouched component data.
    Unknown { tag: u32, data: Vec<u8> },
}

impl TaggedComponent {
    pub fn tag(&self) -> u32 {
        match self {
            Self::AlternateIiopAddress(_) => TAG_ALTERNATE_IIOP_ADDRESS,
            Self::CodeSets(_) => TAG_CODE_SETS,
            Self::JavaCodebase(_) => TAG_JAVA_CODEBASE,
            Self::OrbType(_) => TAG_ORB_TYPE,
            Self::MaxStreamFormatVersion(_) => TAG_RMI_CUSTOM_MAX_STREAM_FORMAT,
            Self::JavaSerialization(_) => TAG_JAVA_SERIALIZATION_ID,
            Self::RequestPartitioning(_) => TAG_REQUEST_PARTITIONING_ID,
            Self::Unknown { tag, .. } => *tag,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown { .. })
    }

    /// Payload of a known component, written inside an open encapsulation.
    ///
    /// `Unknown` has no typed body; its bytes are emitted by
    /// [`to_component_data`](Self::to_component_data) as-is.
    pub fn write_body(&self, out: &mut CdrWriter) -> CdrResult<()> {
        match self {
            Self::AlternateIiopAddress(addr) => addr.write(out),
            Self::CodeSets(info) => info.write(out),
            Self::JavaCodebase(url) => out.write_string(url),
            Self::OrbType(orb_type) => out.write_u32(*orb_type),
            Self::MaxStreamFormatVersion(version) => out.write_u8(*version),
            Self::JavaSerialization(version) => out.write_u8(*version),
            Self::RequestPartitioning(id) => out.write_u32(*id),
            Self::Unknown { data, .. } => out.write_bytes(data),
        }
    }

    /// The `component_data` octets.
    pub fn to_component_data(&self, order: ByteOrder) -> CdrResult<Vec<u8>> {
        match self {
            Self::Unknown { data, .. } => Ok(data.clone()),
            known => encapsulation::encapsulate(order, |w| known.write_body(w)),
        }
    }

    /// `[tag][component_data]`, nested data in the writer's byte order.
    pub fn write(&self, out: &mut CdrWriter) -> CdrResult<()> {
        out.write_u32(self.tag())?;
        let data = self.to_component_data(out.order())?;
        out.write_octets(&data)
    }
}

/// Raw `(tag, component_data)` pair as found on the wire.
pub(crate) fn read_raw<'a>(input: &mut CdrReader<'a>) -> CdrResult<(u32, &'a [u8])> {
    let tag = input.read_u32()?;
    let data = input.read_octets()?;
    Ok((tag, data))
}
