// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! IOP profile and component tags.
//!
//! Profile and component tags live in separate namespaces, so
//! `TAG_INTERNET_IOP` and `TAG_ORB_TYPE` may share the value 0.

// =======================================================================
// Profile tags (OMG IOP module)
// =======================================================================

/// IIOP profile body.
pub const TAG_INTERNET_IOP: u32 = 0;

/// Multiple-components profile (decoded opaquely).
pub const TAG_MULTIPLE_COMPONENTS: u32 = 1;

// =======================================================================
// Component tags (OMG-assigned)
// =======================================================================

pub const TAG_ORB_TYPE: u32 = 0;
pub const TAG_CODE_SETS: u32 = 1;
pub const TAG_ALTERNATE_IIOP_ADDRESS: u32 = 3;
pub const TAG_JAVA_CODEBASE: u32 = 25;
pub const TAG_RMI_CUSTOM_MAX_STREAM_FORMAT: u32 = 38;

// =======================================================================
// Vendor-private component tags
// =======================================================================

/// Vendor minor code set id ("SU" in the upper 16 bits).
pub const SUN_VMCID: u32 = 0x5355_0000;

pub const TAG_REQUEST_PARTITIONING_ID: u32 = SUN_VMCID | 0x1;
pub const TAG_JAVA_SERIALIZATION_ID: u32 = SUN_VMCID | 0x2;

/// ORB type advertised by this ORB family ("SUN\0").
pub const SUN_ORB_TYPE: u32 = 0x5355_4E00;

/// Human-readable name for a component tag, used by diagnostics.
pub fn component_tag_name(tag: u32) -> Option<&'static str> {
    match tag {
        TAG_ORB_TYPE => Some("ORB_TYPE"),
        TAG_CODE_SETS => Some("CODE_SETS"),
        TAG_ALTERNATE_IIOP_ADDRESS => Some("ALTERNATE_IIOP_ADDRESS"),
        TAG_JAVA_CODEBASE => Some("JAVA_CODEBASE"),
        TAG_RMI_CUSTOM_MAX_STREAM_FORMAT => Some("RMI_CUSTOM_MAX_STREAM_FORMAT"),
        TAG_REQUEST_PARTITIONING_ID => Some("REQUEST_PARTITIONING_ID"),
        TAG_JAVA_SERIALIZATION_ID => Some("JAVA_SERIALIZATION_ID"),
        _ => None,
    }
}

pub fn profile_tag_name(tag: u32) -> Option<&'static str> {
    match tag {
        TAG_INTERNET_IOP => Some("INTERNET_IOP"),
        TAG_MULTIPLE_COMPONENTS => Some("MULTIPLE_COMPONENTS"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_tags() {
        assert_eq!(TAG_REQUEST_PARTITIONING_ID, 0x5355_0001);
        assert_eq!(TAG_JAVA_SERIALIZATION_ID, 0x5355_0002);
        assert_eq!(component_tag_name(0x5355_0002), Some("JAVA_SERIALIZATION_ID"));
        assert_eq!(component_tag_name(0xFFFF_FFF0), None);
        assert_eq!(profile_tag_name(TAG_INTERNET_IOP), Some("INTERNET_IOP"));
    }
}
