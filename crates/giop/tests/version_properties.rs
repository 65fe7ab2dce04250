// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::uninlined_format_args)] // Test readability
#![allow(clippy::cast_possible_truncation)] // Random test data

//! Property sweeps over GIOP version values and negotiation.
//!
//! # Test Coverage
//!
//! - get_instance over the full (major, minor) space
//! - Display / parse_version round trip
//! - less_than as a strict total order
//! - negotiation picks the lexicographic minimum unless the peer is legacy

use giop::{choose_request_version, Error, GiopVersion};

const RANDOM_ROUNDS: usize = 2_000;

fn random_version(rng: &mut fastrand::Rng) -> GiopVersion {
    GiopVersion::get_instance(rng.u8(..), rng.u8(..))
}

#[test]
fn test_get_instance_preserves_fields_for_all_pairs() {
    for major in 0..=u8::MAX {
        for minor in 0..=u8::MAX {
            let v = GiopVersion::get_instance(major, minor);
            assert_eq!(v.major(), major);
            assert_eq!(v.minor(), minor);
            assert!(v.equals(major, minor));
        }
    }
}

#[test]
fn test_parse_display_roundtrip() {
    let mut rng = fastrand::Rng::with_seed(0x6109);
    for _ in 0..RANDOM_ROUNDS {
        let v = random_version(&mut rng);
        let parsed = GiopVersion::parse_version(&v.to_string()).expect("display output parses");
        assert_eq!(parsed, v);
    }
    for v in [
        GiopVersion::V1_0,
        GiopVersion::V1_1,
        GiopVersion::V1_2,
        GiopVersion::V1_3,
        GiopVersion::V13_XX,
    ] {
        assert_eq!(v.to_string().parse::<GiopVersion>().expect("parse"), v);
    }
}

#[test]
fn test_malformed_strings() {
    for input in ["1", ".5", "1."] {
        assert!(
            matches!(GiopVersion::parse_version(input), Err(Error::Format(_))),
            "{:?}",
            input
        );
    }
    for input in ["x.1", "1.y", "999.0", "1. 2"] {
        assert!(
            matches!(GiopVersion::parse_version(input), Err(Error::NumberFormat(_))),
            "{:?}",
            input
        );
    }
}

#[test]
fn test_less_than_is_strict_total_order() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..RANDOM_ROUNDS {
        let a = random_version(&mut rng);
        let b = random_version(&mut rng);
        assert!(!a.less_than(&a));
        if a == b {
            assert!(!a.less_than(&b) && !b.less_than(&a));
        } else {
            assert!(a.less_than(&b) ^ b.less_than(&a), "a={} b={}", a, b);
        }
        // agrees with the derived Ord
        assert_eq!(a.less_than(&b), a < b);
    }
}

#[test]
fn test_negotiation_is_minimum_unless_legacy() {
    let mut rng = fastrand::Rng::with_seed(42);
    for _ in 0..RANDOM_ROUNDS {
        let local = random_version(&mut rng);
        let target = random_version(&mut rng);
        assert_eq!(
            choose_request_version(&local, &target, false),
            std::cmp::min(local, target),
            "local={} target={}",
            local,
            target
        );
        assert_eq!(
            choose_request_version(&local, &target, true),
            GiopVersion::V1_0
        );
    }
}

#[test]
fn test_negotiation_examples() {
    let v = |s: &str| GiopVersion::parse_version(s).expect("valid version");
    assert_eq!(choose_request_version(&v("1.2"), &v("1.1"), false), v("1.1"));
    assert_eq!(choose_request_version(&v("1.1"), &v("1.2"), false), v("1.1"));
    assert_eq!(choose_request_version(&v("2.0"), &v("1.3"), false), v("1.3"));
    assert_eq!(choose_request_version(&v("1.0"), &v("2.0"), false), v("1.0"));
    assert_eq!(choose_request_version(&v("1.2"), &v("1.1"), true), v("1.0"));
}

#[test]
fn test_supports_components_past_1_0() {
    for major in 0..=u8::MAX {
        for minor in 0..=u8::MAX {
            let v = GiopVersion::new(major, minor);
            let expected = !(major <= 1 && minor == 0);
            assert_eq!(v.supports_ior_iiop_profile_components(), expected, "{}", v);
        }
    }
    assert!(!GiopVersion::V1_0.supports_ior_iiop_profile_components());
    assert!(GiopVersion::V13_XX.supports_ior_iiop_profile_components());
}
