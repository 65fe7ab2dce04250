// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use giop::cdr::encapsulation;
use giop::{Ior, Registries};
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

static REGISTRIES: OnceLock<Registries> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    let regs = REGISTRIES.get_or_init(Registries::standard);

    // Raw encapsulated IOR
    if let Ok(mut input) = encapsulation::open(data) {
        if let Ok(ior) = Ior::read(&mut input, regs) {
            // Anything that decodes must stringify and decode to the same value
            if let Ok(text) = ior.to_ior_string() {
                let again = Ior::from_ior_string(&text, regs).ok();
                assert_eq!(again.as_ref(), Some(&ior));

                // Object keys re-encode to the same bytes
                if let Some(again) = again {
                    for (before, after) in ior.profiles().iter().zip(again.profiles()) {
                        if let (Some(before), Some(after)) = (before.as_iiop(), after.as_iiop()) {
                            assert_eq!(before.object_key().ok(), after.object_key().ok());
                        }
                    }
                }
            }
        }
    }

    // Stringified form
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = Ior::from_ior_string(text, regs);
    }
});
