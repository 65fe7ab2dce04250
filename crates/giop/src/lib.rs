// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # giop - GIOP versioning and IIOP profile decoding
//!
//! The IOR-facing half of a CORBA ORB: GIOP version values and request
//! version negotiation, plus the tagged-component machinery that turns the
//! octets of an Interoperable Object Reference into typed IIOP profiles.
//!
//! ## Quick Start
//!
//! ```rust
//! use giop::{GiopVersion, Ior, OrbConfig, Registries};
//! use giop::ior::{make_iiop_profile, IiopAddress, ObjectId, ObjectKeyTemplate, TaggedProfile};
//!
//! fn main() -> giop::Result<()> {
//!     let config = OrbConfig::default();
//!     let template = config.profile_template(IiopAddress::new("localhost", 1050));
//!     let profile = make_iiop_profile(ObjectKeyTemplate::Wire, ObjectId::new(b"hello".to_vec()), template);
//!     let ior = Ior::new("IDL:Hello:1.0", vec![TaggedProfile::Iiop(profile)]);
//!
//!     let text = ior.to_ior_string()?;
//!     let decoded = Ior::from_ior_string(&text, &Registries::standard())?;
//!     let target = decoded.iiop_profile().expect("IIOP profile");
//!
//!     let version = config.request_version_for(target, false);
//!     assert_eq!(version, GiopVersion::V1_2);
//!     Ok(())
//! }
//! ```
//!
//! ## Layers
//!
//! ```text
//! +---------------------------------------------------------------+
//! |  OrbConfig            local version, advertised components    |
//! +---------------------------------------------------------------+
//! |  Ior / TaggedProfile  IOR container, stringified IOR: form    |
//! |  IiopProfile          object key + profile template           |
//! |  Registries           tag -> factory dispatch, unknown kept   |
//! +---------------------------------------------------------------+
//! |  GiopVersion          ordering, parsing, negotiation          |
//! +---------------------------------------------------------------+
//! |  cdr                  CDR reader/writer, encapsulations       |
//! +---------------------------------------------------------------+
//! ```

/// CDR reader/writer and encapsulations.
pub mod cdr;
/// ORB configuration (defaults, environment, YAML).
pub mod config;
pub mod error;
/// IOR, IIOP profiles, tagged components and their factories.
pub mod ior;
/// GIOP version value and request version negotiation.
pub mod version;

pub use cdr::{ByteOrder, CdrError, CdrReader, CdrResult, CdrWriter};
pub use config::OrbConfig;
pub use error::{Error, Result};
pub use ior::{
    ComponentRegistry, IiopProfile, IiopProfileTemplate, Ior, ProfileRegistry, Registries,
    TaggedComponent, TaggedProfile,
};
pub use version::{choose_request_version, GiopVersion};
