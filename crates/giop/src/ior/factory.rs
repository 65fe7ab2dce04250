// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Component and profile factories.
//!
//! Each `make_*_factory()` binds a fixed tag to the decode routine for that
//! tag's payload layout. Factories are registered into a
//! [`ComponentRegistry`] / [`ProfileRegistry`](super::registry::ProfileRegistry)
//! once at startup.
//!
//! | Factory | Tag | Payload |
//! |---------|-----|---------|
//! | alternate IIOP address | 3 | `string host, u16 port` |
//! | code sets | 1 | char + wchar `{u32 native, seq<u32>}` |
//! | Java codebase | 25 | `string` |
//! | ORB type | 0 | `u32` |
//! | max stream format | 38 | `octet` |
//! | Java serialization | 0x53550002 | `octet` |
//! | request partitioning | 0x53550001 | `u32` |

use super::address::IiopAddress;
use super::code_sets::CodeSetComponentInfo;
use super::components::TaggedComponent;
use super::profile::{IiopProfile, IiopProfileTemplate, TaggedProfile};
use super::registry::ComponentRegistry;
use super::tags::*;
use crate::cdr::{encapsulation, CdrReader, CdrResult};

/// Decoder for one component tag.
pub trait ComponentFactory: Send + Sync {
    fn tag(&self) -> u32;

    /// Decode from the complete `component_data` octets.
    fn create(&self, data: &[u8]) -> CdrResult<TaggedComponent>;
}

/// Decoder for one profile tag.
pub trait ProfileFactory: Send + Sync {
    fn tag(&self) -> u32;

    /// Decode from the complete `profile_data` octets.
    fn create(&self, data: &[u8], components: &ComponentRegistry) -> CdrResult<TaggedProfile>;
}

/// Decoder for a profile template (a profile body without its object key).
///
/// Templates are not IOR entries, so these factories are used directly by
/// servers and are not registered in a [`ProfileRegistry`](super::registry::ProfileRegistry).
pub trait ProfileTemplateFactory: Send + Sync {
    fn tag(&self) -> u32;

    fn create(
        &self,
        data: &[u8],
        components: &ComponentRegistry,
    ) -> CdrResult<IiopProfileTemplate>;
}

/// Reads a payload from a reader positioned just after the byte order flag.
pub type DecodeFn = fn(&mut CdrReader<'_>) -> CdrResult<TaggedComponent>;

/// Component factory whose payload is a CDR encapsulation.
#[derive(Clone, Copy)]
pub struct EncapsulationFactory {
    tag: u32,
    decode: DecodeFn,
}

impl EncapsulationFactory {
    pub const fn new(tag: u32, decode: DecodeFn) -> Self {
        Self { tag, decode }
    }

    /// Run the decode routine on an already opened encapsulation.
    pub fn read_contents(&self, input: &mut CdrReader<'_>) -> CdrResult<TaggedComponent> {
        (self.decode)(input)
    }
}

impl std::fmt::Debug for EncapsulationFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncapsulationFactory")
            .field("tag", &format_args!("{:#x}", self.tag))
            .finish()
    }
}

impl ComponentFactory for EncapsulationFactory {
    fn tag(&self) -> u32 {
        self.tag
    }

    fn create(&self, data: &[u8]) -> CdrResult<TaggedComponent> {
        let mut input = encapsulation::open(data)?;
        self.read_contents(&mut input)
    }
}

pub fn make_alternate_iiop_address_component_factory() -> EncapsulationFactory {
    EncapsulationFactory::new(TAG_ALTERNATE_IIOP_ADDRESS, |input| {
        IiopAddress::read(input).map(TaggedComponent::AlternateIiopAddress)
    })
}

pub fn make_code_sets_component_factory() -> EncapsulationFactory {
    EncapsulationFactory::new(TAG_CODE_SETS, |input| {
        CodeSetComponentInfo::read(input).map(TaggedComponent::CodeSets)
    })
}

pub fn make_java_codebase_component_factory() -> EncapsulationFactory {
    EncapsulationFactory::new(TAG_JAVA_CODEBASE, |input| {
        input.read_string().map(TaggedComponent::JavaCodebase)
    })
}

pub fn make_orb_type_component_factory() -> EncapsulationFactory {
    EncapsulationFactory::new(TAG_ORB_TYPE, |input| {
        input.read_u32().map(TaggedComponent::OrbType)
    })
}

pub fn make_max_stream_format_version_component_factory() -> EncapsulationFactory {
    EncapsulationFactory::new(TAG_RMI_CUSTOM_MAX_STREAM_FORMAT, |input| {
        input.read_u8().map(TaggedComponent::MaxStreamFormatVersion)
    })
}

pub fn make_java_serialization_component_factory() -> EncapsulationFactory {
    EncapsulationFactory::new(TAG_JAVA_SERIALIZATION_ID, |input| {
        input.read_u8().map(TaggedComponent::JavaSerialization)
    })
}

pub fn make_request_partitioning_component_factory() -> EncapsulationFactory {
    EncapsulationFactory::new(TAG_REQUEST_PARTITIONING_ID, |input| {
        input.read_u32().map(TaggedComponent::RequestPartitioning)
    })
}

/// All component factories this ORB understands.
pub fn standard_component_factories() -> [EncapsulationFactory; 7] {
    [
        make_alternate_iiop_address_component_factory(),
        make_code_sets_component_factory(),
        make_java_codebase_component_factory(),
        make_orb_type_component_factory(),
        make_max_stream_format_version_component_factory(),
        make_java_serialization_component_factory(),
        make_request_partitioning_component_factory(),
    ]
}

/// Decodes `TAG_INTERNET_IOP` profile bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct IiopProfileFactory;

impl ProfileFactory for IiopProfileFactory {
    fn tag(&self) -> u32 {
        TAG_INTERNET_IOP
    }

    fn create(&self, data: &[u8], components: &ComponentRegistry) -> CdrResult<TaggedProfile> {
        IiopProfile::read_body(data, components).map(TaggedProfile::Iiop)
    }
}

pub fn make_iiop_profile_factory() -> IiopProfileFactory {
    IiopProfileFactory
}

/// Decodes IIOP profile templates (body without object key).
#[derive(Debug, Clone, Copy, Default)]
pub struct IiopProfileTemplateFactory;

impl ProfileTemplateFactory for IiopProfileTemplateFactory {
    fn tag(&self) -> u32 {
        TAG_INTERNET_IOP
    }

    fn create(
        &self,
        data: &[u8],
        components: &ComponentRegistry,
    ) -> CdrResult<IiopProfileTemplate> {
        IiopProfileTemplate::read_template(data, components)
    }
}

pub fn make_iiop_profile_template_factory() -> IiopProfileTemplateFactory {
    IiopProfileTemplateFactory
}
