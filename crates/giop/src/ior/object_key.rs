// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Object keys.
//!
//! Keys minted by this ORB family start with [`OBJECT_KEY_MAGIC`] and carry a
//! server-side template (subcontract id, server id, ORB id, adapter path)
//! followed by the object id. Any other key is foreign: it is kept whole as
//! the object id of a [`ObjectKeyTemplate::Wire`] template.
//!
//! Keys are always big-endian and not encapsulated.

use crate::cdr::{ByteOrder, CdrError, CdrReader, CdrResult, CdrWriter};
use std::fmt;

pub const OBJECT_KEY_MAGIC: u32 = 0xAFAB_CAFE;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObjectKeyTemplate {
    Structured {
        scid: u32,
        server_id: u32,
        orb_id: String,
        adapter_id: Vec<String>,
    },
    /// Opaque key from another ORB.
    Wire,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ObjectId(Vec<u8>);

impl ObjectId {
    pub fn new(id: impl Into<Vec<u8>>) -> Self {
        Self(id.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl ObjectKeyTemplate {
    pub fn structured(
        scid: u32,
        server_id: u32,
        orb_id: impl Into<String>,
        adapter_id: Vec<String>,
    ) -> Self {
        Self::Structured {
            scid,
            server_id,
            orb_id: orb_id.into(),
            adapter_id,
        }
    }

    pub fn is_wire(&self) -> bool {
        matches!(self, Self::Wire)
    }

    /// Split an object key into template and object id. Never fails: a key
    /// that does not parse as a structured key is treated as foreign.
    pub fn read_key(key: &[u8]) -> (ObjectKeyTemplate, ObjectId) {
        if key.len() >= 4 && key[..4] == OBJECT_KEY_MAGIC.to_be_bytes() {
            match Self::read_structured(key) {
                Ok(parsed) => return parsed,
                Err(err) => {
                    log::debug!(
                        "[ior] object key has magic but is malformed ({}), keeping opaque",
                        err
                    );
                }
            }
        }
        (ObjectKeyTemplate::Wire, ObjectId::new(key))
    }

    fn read_structured(key: &[u8]) -> CdrResult<(ObjectKeyTemplate, ObjectId)> {
        let mut r = CdrReader::new(key, ByteOrder::BigEndian);
        r.read_u32()?; // magic
        let scid = r.read_u32()?;
        let server_id = r.read_u32()?;
        let orb_id = r.read_string()?;
        let count = r.read_sequence_len(4)?;
        let mut adapter_id = Vec::with_capacity(count);
        for _ in 0..count {
            adapter_id.push(r.read_string()?);
        }
        let oid = ObjectId::new(r.read_octets()?);
        let oktemp = ObjectKeyTemplate::Structured {
            scid,
            server_id,
            orb_id,
            adapter_id,
        };
        // Only keys this ORB would have written itself are structured; the
        // reader tolerates forms (empty or unterminated strings, dirty
        // padding, trailing bytes) that write_key would not reproduce.
        if oktemp.write_key(&oid)? != key {
            return Err(CdrError::InvalidData {
                reason: "structured key is not in canonical form".into(),
            });
        }
        Ok((oktemp, oid))
    }

    /// Inverse of [`read_key`](Self::read_key).
    pub fn write_key(&self, oid: &ObjectId) -> CdrResult<Vec<u8>> {
        match self {
            Self::Wire => Ok(oid.as_bytes().to_vec()),
            Self::Structured {
                scid,
                server_id,
                orb_id,
                adapter_id,
            } => {
                let mut w = CdrWriter::new(ByteOrder::BigEndian);
                w.write_u32(OBJECT_KEY_MAGIC)?;
                w.write_u32(*scid)?;
                w.write_u32(*server_id)?;
                w.write_string(orb_id)?;
                w.write_sequence_len(adapter_id.len())?;
                for name in adapter_id {
                    w.write_string(name)?;
                }
                w.write_octets(oid.as_bytes())?;
                Ok(w.into_bytes())
            }
        }
    }
}
