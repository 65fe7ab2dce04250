// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! IIOP profile and profile template.
//!
//! ProfileBody layout (inside an encapsulation):
//!
//! ```text
//! +---------+---------+------+------------+------------------------------+
//! | version | host    | port | object_key | components                   |
//! | 2 octet | string  | u16  | seq<octet> | seq<TaggedComponent> (>=1.1) |
//! +---------+---------+------+------------+------------------------------+
//! ```
//!
//! The profile template is the same minus the object key; it is what a
//! server shares between all objects exported on one endpoint.

use super::address::IiopAddress;
use super::code_sets::CodeSetComponentInfo;
use super::components::TaggedComponent;
use super::object_key::{ObjectId, ObjectKeyTemplate};
use super::registry::{self, ComponentRegistry};
use super::tags::*;
use crate::cdr::{encapsulation, ByteOrder, CdrReader, CdrResult, CdrWriter};
use crate::version::{self, GiopVersion};

/// Endpoint, GIOP version and components shared by a family of profiles.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IiopProfileTemplate {
    version: GiopVersion,
    primary_address: IiopAddress,
    components: Vec<TaggedComponent>,
}

impl IiopProfileTemplate {
    pub fn new(version: GiopVersion, primary_address: IiopAddress) -> Self {
        Self {
            version,
            primary_address,
            components: Vec::new(),
        }
    }

    pub fn with_components(
        version: GiopVersion,
        primary_address: IiopAddress,
        components: Vec<TaggedComponent>,
    ) -> Self {
        Self {
            version,
            primary_address,
            components,
        }
    }

    pub fn version(&self) -> GiopVersion {
        self.version
    }

    pub fn primary_address(&self) -> &IiopAddress {
        &self.primary_address
    }

    pub fn components(&self) -> &[TaggedComponent] {
        &self.components
    }

    pub fn add_component(&mut self, component: TaggedComponent) {
        self.components.push(component);
    }

    pub fn components_with_tag(&self, tag: u32) -> impl Iterator<Item = &TaggedComponent> {
        self.components.iter().filter(move |c| c.tag() == tag)
    }

    pub fn alternate_addresses(&self) -> Vec<&IiopAddress> {
        self.components
            .iter()
            .filter_map(|c| match c {
                TaggedComponent::AlternateIiopAddress(addr) => Some(addr),
                _ => None,
            })
            .collect()
    }

    /// Template encapsulation: version, address, then components when the
    /// version allows them.
    pub fn write_template(&self, order: ByteOrder) -> CdrResult<Vec<u8>> {
        encapsulation::encapsulate(order, |w| {
            self.version.write(w)?;
            self.primary_address.write(w)?;
            self.write_components(w)
        })
    }

    pub fn read_template(data: &[u8], registry: &ComponentRegistry) -> CdrResult<Self> {
        let mut r = encapsulation::open(data)?;
        let version = GiopVersion::read(&mut r)?;
        let primary_address = IiopAddress::read(&mut r)?;
        let components = Self::read_components(&mut r, version, registry)?;
        Ok(Self {
            version,
            primary_address,
            components,
        })
    }

    fn write_components(&self, w: &mut CdrWriter) -> CdrResult<()> {
        if !self.version.supports_ior_iiop_profile_components() {
            if !self.components.is_empty() {
                log::debug!(
                    "[ior] dropping {} component(s) from IIOP {} profile",
                    self.components.len(),
                    self.version
                );
            }
            return Ok(());
        }
        registry::write_components(w, &self.components)
    }

    fn read_components(
        r: &mut CdrReader<'_>,
        version: GiopVersion,
        registry: &ComponentRegistry,
    ) -> CdrResult<Vec<TaggedComponent>> {
        if version.supports_ior_iiop_profile_components() {
            registry.read_components(r)
        } else {
            Ok(Vec::new())
        }
    }
}

/// Direct construction of a profile template.
pub fn make_iiop_profile_template(
    version: GiopVersion,
    primary_address: IiopAddress,
) -> IiopProfileTemplate {
    IiopProfileTemplate::new(version, primary_address)
}

/// A decoded `TAG_INTERNET_IOP` profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IiopProfile {
    oktemp: ObjectKeyTemplate,
    object_id: ObjectId,
    template: IiopProfileTemplate,
}

impl IiopProfile {
    pub fn new(oktemp: ObjectKeyTemplate, object_id: ObjectId, template: IiopProfileTemplate) -> Self {
        Self {
            oktemp,
            object_id,
            template,
        }
    }

    pub fn object_key_template(&self) -> &ObjectKeyTemplate {
        &self.oktemp
    }

    pub fn object_id(&self) -> &ObjectId {
        &self.object_id
    }

    pub fn template(&self) -> &IiopProfileTemplate {
        &self.template
    }

    pub fn giop_version(&self) -> GiopVersion {
        self.template.version()
    }

    pub fn primary_address(&self) -> &IiopAddress {
        self.template.primary_address()
    }

    pub fn components(&self) -> &[TaggedComponent] {
        self.template.components()
    }

    pub fn object_key(&self) -> CdrResult<Vec<u8>> {
        self.oktemp.write_key(&self.object_id)
    }

    pub fn orb_type(&self) -> Option<u32> {
        self.components().iter().find_map(|c| match c {
            TaggedComponent::OrbType(t) => Some(*t),
            _ => None,
        })
    }

    pub fn code_sets(&self) -> Option<&CodeSetComponentInfo> {
        self.components().iter().find_map(|c| match c {
            TaggedComponent::CodeSets(info) => Some(info),
            _ => None,
        })
    }

    pub fn codebase(&self) -> Option<&str> {
        self.components().iter().find_map(|c| match c {
            TaggedComponent::JavaCodebase(url) => Some(url.as_str()),
            _ => None,
        })
    }

    pub fn max_stream_format_version(&self) -> Option<u8> {
        self.components().iter().find_map(|c| match c {
            TaggedComponent::MaxStreamFormatVersion(v) => Some(*v),
            _ => None,
        })
    }

    pub fn java_serialization_version(&self) -> Option<u8> {
        self.components().iter().find_map(|c| match c {
            TaggedComponent::JavaSerialization(v) => Some(*v),
            _ => None,
        })
    }

    pub fn request_partitioning_id(&self) -> Option<u32> {
        self.components().iter().find_map(|c| match c {
            TaggedComponent::RequestPartitioning(id) => Some(*id),
            _ => None,
        })
    }

    /// Request version to use against this profile; see
    /// [`version::choose_request_version`].
    pub fn choose_request_version(&self, local: &GiopVersion, target_is_legacy: bool) -> GiopVersion {
        version::choose_request_version(local, &self.giop_version(), target_is_legacy)
    }

    /// ProfileBody encapsulation (the `profile_data` of a tagged profile).
    pub fn write_body(&self, order: ByteOrder) -> CdrResult<Vec<u8>> {
        let key = self.object_key()?;
        encapsulation::encapsulate(order, |w| {
            self.template.version.write(w)?;
            self.template.primary_address.write(w)?;
            w.write_octets(&key)?;
            self.template.write_components(w)
        })
    }

    pub fn read_body(data: &[u8], registry: &ComponentRegistry) -> CdrResult<Self> {
        let mut r = encapsulation::open(data)?;
        let version = GiopVersion::read(&mut r)?;
        let primary_address = IiopAddress::read(&mut r)?;
        let key = r.read_octets()?;
        let (oktemp, object_id) = ObjectKeyTemplate::read_key(key);
        let components = IiopProfileTemplate::read_components(&mut r, version, registry)?;
        Ok(Self {
            oktemp,
            object_id,
            template: IiopProfileTemplate {
                version,
                primary_address,
                components,
            },
        })
    }
}

/// Direct construction of a profile.
pub fn make_iiop_profile(
    oktemp: ObjectKeyTemplate,
    object_id: ObjectId,
    template: IiopProfileTemplate,
) -> IiopProfile {
    IiopProfile::new(oktemp, object_id, template)
}

/// One entry of an IOR's profile list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TaggedProfile {
    Iiop(IiopProfile),
    /// Profile tag with no registered factory, kept verbatim.
    Unknown { tag: u32, data: Vec<u8> },
}

impl TaggedProfile {
    pub fn tag(&self) -> u32 {
        match self {
            Self::Iiop(_) => TAG_INTERNET_IOP,
            Self::Unknown { tag, .. } => *tag,
        }
    }

    pub fn as_iiop(&self) -> Option<&IiopProfile> {
        match self {
            Self::Iiop(profile) => Some(profile),
            Self::Unknown { .. } => None,
        }
    }

    pub fn write(&self, out: &mut CdrWriter) -> CdrResult<()> {
        out.write_u32(self.tag())?;
        match self {
            Self::Iiop(profile) => {
                let body = profile.write_body(out.order())?;
                out.write_octets(&body)
            }
            Self::Unknown { data, .. } => out.write_octets(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_template(version: GiopVersion) -> IiopProfileTemplate {
        let mut template = make_iiop_profile_template(version, IiopAddress::new("10.0.0.5", 3700));
        template.add_component(TaggedComponent::OrbType(SUN_ORB_TYPE));
        template.add_component(TaggedComponent::AlternateIiopAddress(IiopAddress::new(
            "10.0.0.6", 3701,
        )));
        template
    }

    #[test]
    fn test_body_roundtrip_keeps_components() {
        let registry = ComponentRegistry::standard();
        let profile = make_iiop_profile(
            ObjectKeyTemplate::structured(32, 1, "orb", vec!["RootPOA".into()]),
            ObjectId::new(b"obj".to_vec()),
            sample_template(GiopVersion::V1_2),
        );
        for order in [ByteOrder::BigEndian, ByteOrder::LittleEndian] {
            let body = profile.write_body(order).expect("write body");
            assert_eq!(body[0], order.flag());
            let decoded = IiopProfile::read_body(&body, &registry).expect("read body");
            assert_eq!(decoded, profile);
            assert_eq!(decoded.orb_type(), Some(SUN_ORB_TYPE));
            assert_eq!(decoded.template().alternate_addresses().len(), 1);
        }
    }

    #[test]
    fn test_iiop_1_0_body_has_no_components() {
        let registry = ComponentRegistry::standard();
        let profile = make_iiop_profile(
            ObjectKeyTemplate::Wire,
            ObjectId::new(vec![1, 2, 3]),
            sample_template(GiopVersion::V1_0),
        );
        let body = profile.write_body(ByteOrder::BigEndian).expect("write body");
        // flag, version, pad, host(4+9), port, key(4+3)
        assert_eq!(body.len(), 1 + 2 + 1 + 13 + 1 + 2 + 7);

        let decoded = IiopProfile::read_body(&body, &registry).expect("read body");
        assert!(decoded.components().is_empty());
        assert_eq!(decoded.giop_version(), GiopVersion::V1_0);
        assert_eq!(decoded.object_id().as_bytes(), &[1, 2, 3]);
    }

    #[test]
    fn test_non_canonical_key_survives_body_reencode() {
        // magic-prefixed key whose orb_id has length 0 (no NUL)
        let mut key = Vec::new();
        key.extend_from_slice(&crate::ior::object_key::OBJECT_KEY_MAGIC.to_be_bytes());
        key.extend_from_slice(&[0, 0, 0, 32, 0, 0, 0, 1]);
        key.extend_from_slice(&[0, 0, 0, 0, 0, 0, 0, 0]);
        key.extend_from_slice(&[0, 0, 0, 2, b'i', b'd']);

        let body = encapsulation::encapsulate(ByteOrder::BigEndian, |w| {
            GiopVersion::V1_0.write(w)?;
            IiopAddress::new("h", 1).write(w)?;
            w.write_octets(&key)
        })
        .expect("encapsulate");

        let registry = ComponentRegistry::standard();
        let profile = IiopProfile::read_body(&body, &registry).expect("read body");
        assert_eq!(profile.object_key().expect("object key"), key);
        assert_eq!(profile.write_body(ByteOrder::BigEndian).expect("write body"), body);
    }

    #[test]
    fn test_template_roundtrip() {
        let registry = ComponentRegistry::standard();
        let template = sample_template(GiopVersion::V1_1);
        let bytes = template.write_template(ByteOrder::BigEndian).expect("write");
        let decoded = IiopProfileTemplate::read_template(&bytes, &registry).expect("read");
        assert_eq!(decoded, template);
        assert_eq!(decoded.components_with_tag(TAG_ORB_TYPE).count(), 1);
    }

    #[test]
    fn test_truncated_body_is_marshal_error() {
        let registry = ComponentRegistry::standard();
        let profile = make_iiop_profile(
            ObjectKeyTemplate::Wire,
            ObjectId::new(vec![9]),
            sample_template(GiopVersion::V1_2),
        );
        let body = profile.write_body(ByteOrder::BigEndian).expect("write body");
        assert!(IiopProfile::read_body(&body[..body.len() - 3], &registry).is_err());
    }

    #[test]
    fn test_profile_negotiates_against_advertised_version() {
        let profile = make_iiop_profile(
            ObjectKeyTemplate::Wire,
            ObjectId::default(),
            make_iiop_profile_template(GiopVersion::V1_1, IiopAddress::new("h", 1)),
        );
        assert_eq!(
            profile.choose_request_version(&GiopVersion::V1_2, false),
            GiopVersion::V1_1
        );
        assert_eq!(
            profile.choose_request_version(&GiopVersion::V1_2, true),
            GiopVersion::V1_0
        );
    }
}
