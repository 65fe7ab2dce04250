// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Tag -> factory dispatch tables.
//!
//! Registries are assembled with a builder during ORB initialization and are
//! immutable afterwards, so a built registry can be shared across threads
//! (`&` or `Arc`) without locking.
//!
//! A tag with no registered factory is never an error: the payload is kept as
//! [`TaggedComponent::Unknown`] / [`TaggedProfile::Unknown`] and survives
//! re-encoding untouched.

use super::components::{self, TaggedComponent};
use super::factory::{
    make_iiop_profile_factory, standard_component_factories, ComponentFactory, ProfileFactory,
};
use super::profile::TaggedProfile;
use crate::cdr::{CdrReader, CdrResult, CdrWriter};
use std::collections::HashMap;
use std::fmt;

/// Frozen map from component tag to factory.
pub struct ComponentRegistry {
    factories: HashMap<u32, Box<dyn ComponentFactory>>,
}

impl ComponentRegistry {
    pub fn builder() -> ComponentRegistryBuilder {
        ComponentRegistryBuilder::default()
    }

    /// Registry with every component kind this ORB understands.
    pub fn standard() -> Self {
        standard_component_factories()
            .into_iter()
            .fold(Self::builder(), |b, f| b.register(f))
            .build()
    }

    pub fn is_registered(&self, tag: u32) -> bool {
        self.factories.contains_key(&tag)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Decode one component. Unknown tags pass through as opaque data;
    /// malformed payloads of known tags return the marshal error unchanged.
    pub fn decode(&self, tag: u32, data: &[u8]) -> CdrResult<TaggedComponent> {
        match self.factories.get(&tag) {
            Some(factory) => factory.create(data),
            None => {
                log::debug!(
                    "[registry] no factory for component tag {:#x}, keeping {} byte(s)",
                    tag,
                    data.len()
                );
                Ok(TaggedComponent::Unknown {
                    tag,
                    data: data.to_vec(),
                })
            }
        }
    }

    /// Decode a `sequence<TaggedComponent>`.
    pub fn read_components(&self, input: &mut CdrReader<'_>) -> CdrResult<Vec<TaggedComponent>> {
        // tag + length prefix
        let count = input.read_sequence_len(8)?;
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            let (tag, data) = components::read_raw(input)?;
            out.push(self.decode(tag, data)?);
        }
        Ok(out)
    }
}

impl fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<_> = self.factories.keys().copied().collect();
        tags.sort_unstable();
        f.debug_struct("ComponentRegistry").field("tags", &tags).finish()
    }
}

#[derive(Default)]
pub struct ComponentRegistryBuilder {
    factories: HashMap<u32, Box<dyn ComponentFactory>>,
}

impl ComponentRegistryBuilder {
    /// Add a factory; a later registration for the same tag replaces the
    /// earlier one.
    pub fn register<F: ComponentFactory + 'static>(mut self, factory: F) -> Self {
        let tag = factory.tag();
        if self.factories.insert(tag, Box::new(factory)).is_some() {
            log::warn!("[registry] component factory for tag {:#x} replaced", tag);
        }
        self
    }

    pub fn build(self) -> ComponentRegistry {
        ComponentRegistry {
            factories: self.factories,
        }
    }
}

/// Frozen map from profile tag to factory.
pub struct ProfileRegistry {
    factories: HashMap<u32, Box<dyn ProfileFactory>>,
}

impl ProfileRegistry {
    pub fn builder() -> ProfileRegistryBuilder {
        ProfileRegistryBuilder::default()
    }

    pub fn standard() -> Self {
        Self::builder().register(make_iiop_profile_factory()).build()
    }

    pub fn is_registered(&self, tag: u32) -> bool {
        self.factories.contains_key(&tag)
    }

    pub fn decode(
        &self,
        tag: u32,
        data: &[u8],
        components: &ComponentRegistry,
    ) -> CdrResult<TaggedProfile> {
        match self.factories.get(&tag) {
            Some(factory) => factory.create(data, components),
            None => {
                log::debug!(
                    "[registry] no factory for profile tag {:#x}, keeping {} byte(s)",
                    tag,
                    data.len()
                );
                Ok(TaggedProfile::Unknown {
                    tag,
                    data: data.to_vec(),
                })
            }
        }
    }
}

impl fmt::Debug for ProfileRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<_> = self.factories.keys().copied().collect();
        tags.sort_unstable();
        f.debug_struct("ProfileRegistry").field("tags", &tags).finish()
    }
}

#[derive(Default)]
pub struct ProfileRegistryBuilder {
    factories: HashMap<u32, Box<dyn ProfileFactory>>,
}

impl ProfileRegistryBuilder {
    pub fn register<F: ProfileFactory + 'static>(mut self, factory: F) -> Self {
        let tag = factory.tag();
        if self.factories.insert(tag, Box::new(factory)).is_some() {
            log::warn!("[registry] profile factory for tag {:#x} replaced", tag);
        }
        self
    }

    pub fn build(self) -> ProfileRegistry {
        ProfileRegistry {
            factories: self.factories,
        }
    }
}

/// Component and profile registries used together to decode IORs.
#[derive(Debug)]
pub struct Registries {
    pub components: ComponentRegistry,
    pub profiles: ProfileRegistry,
}

impl Registries {
    pub fn new(components: ComponentRegistry, profiles: ProfileRegistry) -> Self {
        Self {
            components,
            profiles,
        }
    }

    pub fn standard() -> Self {
        Self::new(ComponentRegistry::standard(), ProfileRegistry::standard())
    }
}

/// Encode a `sequence<TaggedComponent>`.
pub fn write_components(out: &mut CdrWriter, components: &[TaggedComponent]) -> CdrResult<()> {
    out.write_sequence_len(components.len())?;
    for component in components {
        component.write(out)?;
    }
    Ok(())
}
