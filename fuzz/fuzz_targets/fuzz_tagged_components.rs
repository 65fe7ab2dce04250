// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use giop::ior::{IiopProfile, IiopProfileTemplate, ObjectKeyTemplate};
use giop::{ByteOrder, ComponentRegistry};
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

static COMPONENTS: OnceLock<ComponentRegistry> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    let registry = COMPONENTS.get_or_init(ComponentRegistry::standard);

    // First four bytes pick the tag, the rest is component data
    if data.len() >= 4 {
        let tag = u32::from_be_bytes([data[0], data[1], data[2], data[3]]);
        let _ = registry.decode(tag, &data[4..]);
    }

    let _ = IiopProfileTemplate::read_template(data, registry);

    // Object keys must come back byte for byte, structured or not
    let (oktemp, oid) = ObjectKeyTemplate::read_key(data);
    assert_eq!(oktemp.write_key(&oid).ok().as_deref(), Some(data));

    if let Ok(profile) = IiopProfile::read_body(data, registry) {
        let key = profile.object_key().ok();
        let order = ByteOrder::from_flag(data[0]);
        if let Ok(body) = profile.write_body(order) {
            let again = IiopProfile::read_body(&body, registry).ok();
            assert_eq!(again.as_ref().and_then(|p| p.object_key().ok()), key);
        }
    }
});
