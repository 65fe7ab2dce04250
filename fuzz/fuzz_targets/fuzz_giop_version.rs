// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use giop::GiopVersion;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(version) = GiopVersion::parse_version(text) {
            assert_eq!(GiopVersion::parse_version(&version.to_string()).ok(), Some(version));
        }
    }
});
