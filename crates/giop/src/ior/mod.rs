// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! IOR, IIOP profiles and their tagged components.
//!
//! ```text
//! Ior
//!  +-- type_id
//!  +-- TaggedProfile*  --(ProfileRegistry)-->  IiopProfile | Unknown
//!        +-- ObjectKeyTemplate + ObjectId
//!        +-- IiopProfileTemplate
//!              +-- GiopVersion, IiopAddress
//!              +-- TaggedComponent*  --(ComponentRegistry)-->  typed | Unknown
//! ```

pub mod address;
pub mod code_sets;
pub mod components;
pub mod factory;
pub mod object_key;
pub mod profile;
pub mod reference;
pub mod registry;
pub mod tags;

pub use address::{make_iiop_address, read_iiop_address, IiopAddress};
pub use code_sets::{CodeSetComponent, CodeSetComponentInfo};
pub use components::TaggedComponent;
pub use factory::{
    make_alternate_iiop_address_component_factory, make_code_sets_component_factory,
    make_iiop_profile_factory, make_iiop_profile_template_factory,
    make_java_codebase_component_factory, make_java_serialization_component_factory,
    make_max_stream_format_version_component_factory, make_orb_type_component_factory,
    make_request_partitioning_component_factory, ComponentFactory, EncapsulationFactory,
    ProfileFactory, ProfileTemplateFactory,
};
pub use object_key::{ObjectId, ObjectKeyTemplate};
pub use profile::{
    make_iiop_profile, make_iiop_profile_template, IiopProfile, IiopProfileTemplate,
    TaggedProfile,
};
pub use reference::Ior;
pub use registry::{ComponentRegistry, ProfileRegistry, Registries};
