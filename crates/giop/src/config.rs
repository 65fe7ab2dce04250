// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! ORB-side configuration for the profile layer.
//!
//! Sources, lowest to highest precedence:
//!
//! - built-in defaults (`OrbConfig::default()`)
//! - YAML document (`config-loaders` feature)
//! - environment variables (`OrbConfig::apply_env`)
//!
//! # Environment
//!
//! | Variable | Example | Field |
//! |----------|---------|-------|
//! | `GIOP_VERSION` | `1.2` | `giop_version` |
//! | `GIOP_ORB_TYPE` | `0x53554E00` | `orb_type` |
//! | `GIOP_CODEBASE` | `http://host/classes` | `codebase` |
//! | `GIOP_MAX_STREAM_FORMAT` | `2` | `max_stream_format_version` |
//! | `GIOP_JAVA_SERIALIZATION` | `1` / `true` | `java_serialization` |
//! | `GIOP_REQUEST_PARTITION` | `7` | `request_partitioning_id` |

use crate::error::{Error, Result};
use crate::ior::code_sets::CodeSetComponentInfo;
use crate::ior::tags::SUN_ORB_TYPE;
use crate::ior::{IiopAddress, IiopProfile, IiopProfileTemplate, TaggedComponent};
use crate::version::{choose_request_version, GiopVersion, JAVA_ENC_VERSION};

/// Default RMI-IIOP custom stream format version.
pub const DEFAULT_MAX_STREAM_FORMAT_VERSION: u8 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrbConfig {
    pub giop_version: GiopVersion,
    pub orb_type: u32,
    pub code_sets: CodeSetComponentInfo,
    pub codebase: Option<String>,
    pub max_stream_format_version: u8,
    pub java_serialization: bool,
    pub request_partitioning_id: Option<u32>,
}

impl Default for OrbConfig {
    fn default() -> Self {
        Self {
            giop_version: GiopVersion::DEFAULT_VERSION,
            orb_type: SUN_ORB_TYPE,
            code_sets: CodeSetComponentInfo::default(),
            codebase: None,
            max_stream_format_version: DEFAULT_MAX_STREAM_FORMAT_VERSION,
            java_serialization: false,
            request_partitioning_id: None,
        }
    }
}

impl OrbConfig {
    pub fn with_giop_version(mut self, version: GiopVersion) -> Self {
        self.giop_version = version;
        self
    }

    pub fn with_codebase(mut self, codebase: impl Into<String>) -> Self {
        self.codebase = Some(codebase.into());
        self
    }

    pub fn with_request_partitioning_id(mut self, id: u32) -> Self {
        self.request_partitioning_id = Some(id);
        self
    }

    pub fn with_java_serialization(mut self, enabled: bool) -> Self {
        self.java_serialization = enabled;
        self
    }

    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self> {
        Self::default().apply_env(|key| std::env::var(key).ok())
    }

    /// Apply `GIOP_*` overrides read through `lookup`.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("GIOP_VERSION") {
            self.giop_version = GiopVersion::parse_version(v.trim())
                .map_err(|e| Error::Config(format!("GIOP_VERSION: {}", e)))?;
        }
        if let Some(v) = lookup("GIOP_ORB_TYPE") {
            self.orb_type = parse_u32("GIOP_ORB_TYPE", &v)?;
        }
        if let Some(v) = lookup("GIOP_CODEBASE") {
            let v = v.trim();
            self.codebase = (!v.is_empty()).then(|| v.to_string());
        }
        if let Some(v) = lookup("GIOP_MAX_STREAM_FORMAT") {
            self.max_stream_format_version = v
                .trim()
                .parse()
                .map_err(|e| Error::Config(format!("GIOP_MAX_STREAM_FORMAT: {}", e)))?;
        }
        if let Some(v) = lookup("GIOP_JAVA_SERIALIZATION") {
            self.java_serialization = parse_bool("GIOP_JAVA_SERIALIZATION", &v)?;
        }
        if let Some(v) = lookup("GIOP_REQUEST_PARTITION") {
            self.request_partitioning_id = Some(parse_u32("GIOP_REQUEST_PARTITION", &v)?);
        }
        Ok(self)
    }

    /// Profile template advertising this ORB's components on `address`.
    pub fn profile_template(&self, address: IiopAddress) -> IiopProfileTemplate {
        let mut template = IiopProfileTemplate::new(self.giop_version, address);
        template.add_component(TaggedComponent::OrbType(self.orb_type));
        template.add_component(TaggedComponent::CodeSets(self.code_sets.clone()));
        template.add_component(TaggedComponent::MaxStreamFormatVersion(
            self.max_stream_format_version,
        ));
        if let Some(codebase) = &self.codebase {
            template.add_component(TaggedComponent::JavaCodebase(codebase.clone()));
        }
        if let Some(id) = self.request_partitioning_id {
            template.add_component(TaggedComponent::RequestPartitioning(id));
        }
        if self.java_serialization {
            template.add_component(TaggedComponent::JavaSerialization(JAVA_ENC_VERSION));
        }
        template
    }

    /// GIOP version for a request sent to `profile`.
    pub fn request_version_for(&self, profile: &IiopProfile, target_is_legacy: bool) -> GiopVersion {
        choose_request_version(&self.giop_version, &profile.giop_version(), target_is_legacy)
    }
}

fn parse_u32(key: &str, raw: &str) -> Result<u32> {
    let raw = raw.trim();
    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => raw.parse(),
    };
    parsed.map_err(|e| Error::Config(format!("{}: {:?}: {}", key, raw, e)))
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::Config(format!("{}: not a boolean: {:?}", key, other))),
    }
}

#[cfg(feature = "config-loaders")]
pub use yaml::{YamlCodeSet, YamlCodeSets, YamlOrbConfig};

#[cfg(feature = "config-loaders")]
mod yaml {
    //! YAML configuration document.
    //!
    //! ```yaml
    //! giop_version: "1.2"
    //! orb_type: 0x53554E00
    //! codebase: http://build.local/classes
    //! max_stream_format_version: 2
    //! java_serialization: false
    //! request_partitioning_id: 4
    //! code_sets:
    //!   char: { native: 0x00010001, conversion: [0x05010001] }
    //!   wchar: { native: 0x00010109, conversion: [0x00010100] }
    //! ```

    use super::OrbConfig;
    use crate::error::{Error, Result};
    use crate::ior::code_sets::CodeSetComponent;
    use crate::version::GiopVersion;
    use serde::Deserialize;
    use std::fs;
    use std::path::Path;

    /// Every field is optional; missing fields keep their defaults.
    #[derive(Debug, Deserialize, Default)]
    #[serde(default, deny_unknown_fields)]
    pub struct YamlOrbConfig {
        pub giop_version: Option<String>,
        pub orb_type: Option<u32>,
        pub codebase: Option<String>,
        pub max_stream_format_version: Option<u8>,
        pub java_serialization: Option<bool>,
        pub request_partitioning_id: Option<u32>,
        pub code_sets: Option<YamlCodeSets>,
    }

    #[derive(Debug, Deserialize, Default)]
    #[serde(default)]
    pub struct YamlCodeSets {
        pub char: Option<YamlCodeSet>,
        pub wchar: Option<YamlCodeSet>,
    }

    #[derive(Debug, Deserialize)]
    pub struct YamlCodeSet {
        pub native: u32,
        #[serde(default)]
        pub conversion: Vec<u32>,
    }

    impl YamlCodeSet {
        fn into_component(self) -> CodeSetComponent {
            CodeSetComponent::new(self.native, self.conversion)
        }
    }

    impl OrbConfig {
        pub fn from_yaml_str(content: &str) -> Result<Self> {
            let doc: YamlOrbConfig = serde_yaml::from_str(content)
                .map_err(|e| Error::Config(format!("Failed to parse YAML: {}", e)))?;
            doc.into_config()
        }

        pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
            let content = fs::read_to_string(path.as_ref()).map_err(|e| {
                Error::Config(format!(
                    "Failed to read {}: {}",
                    path.as_ref().display(),
                    e
                ))
            })?;
            Self::from_yaml_str(&content)
        }
    }

    impl YamlOrbConfig {
        pub fn into_config(self) -> Result<OrbConfig> {
            let mut config = OrbConfig::default();
            if let Some(v) = self.giop_version {
                config.giop_version = GiopVersion::parse_version(v.trim())
                    .map_err(|e| Error::Config(format!("giop_version: {}", e)))?;
            }
            if let Some(v) = self.orb_type {
                config.orb_type = v;
            }
            if self.codebase.is_some() {
                config.codebase = self.codebase;
            }
            if let Some(v) = self.max_stream_format_version {
                config.max_stream_format_version = v;
            }
            if let Some(v) = self.java_serialization {
                config.java_serialization = v;
            }
            if let Some(v) = self.request_partitioning_id {
                config.request_partitioning_id = Some(v);
            }
            if let Some(sets) = self.code_sets {
                if let Some(c) = sets.char {
                    config.code_sets.for_char_data = c.into_component();
                }
                if let Some(w) = sets.wchar {
                    config.code_sets.for_wchar_data = w.into_component();
                }
            }
            Ok(config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ior::tags::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = OrbConfig::default();
        assert_eq!(config.giop_version, GiopVersion::V1_2);
        assert_eq!(config.orb_type, SUN_ORB_TYPE);
        assert_eq!(config.max_stream_format_version, 2);
        assert!(!config.java_serialization);
        assert!(config.codebase.is_none());
    }

    #[test]
    fn test_env_overrides() {
        let config = OrbConfig::default()
            .apply_env(env(&[
                ("GIOP_VERSION", "1.1"),
                ("GIOP_ORB_TYPE", "0x4F424200"),
                ("GIOP_CODEBASE", "http://h/c"),
                ("GIOP_JAVA_SERIALIZATION", "true"),
                ("GIOP_REQUEST_PARTITION", "12"),
            ]))
            .expect("valid env");
        assert_eq!(config.giop_version, GiopVersion::V1_1);
        assert_eq!(config.orb_type, 0x4F42_4200);
        assert_eq!(config.codebase.as_deref(), Some("http://h/c"));
        assert!(config.java_serialization);
        assert_eq!(config.request_partitioning_id, Some(12));
    }

    #[test]
    fn test_env_rejects_malformed_values() {
        for (key, value) in [
            ("GIOP_VERSION", "12"),
            ("GIOP_ORB_TYPE", "sun"),
            ("GIOP_MAX_STREAM_FORMAT", "300"),
            ("GIOP_JAVA_SERIALIZATION", "maybe"),
        ] {
            match OrbConfig::default().apply_env(env(&[(key, value)])) {
                Err(Error::Config(msg)) => assert!(msg.contains(key), "{}", msg),
                other => panic!("{}={} gave {:?}", key, value, other),
            }
        }
    }

    #[test]
    fn test_profile_template_components() {
        let config = OrbConfig::default()
            .with_codebase("http://h/c")
            .with_request_partitioning_id(3)
            .with_java_serialization(true);
        let template = config.profile_template(IiopAddress::new("localhost", 1050));
        let tags: Vec<u32> = template.components().iter().map(|c| c.tag()).collect();
        assert_eq!(
            tags,
            vec![
                TAG_ORB_TYPE,
                TAG_CODE_SETS,
                TAG_RMI_CUSTOM_MAX_STREAM_FORMAT,
                TAG_JAVA_CODEBASE,
                TAG_REQUEST_PARTITIONING_ID,
                TAG_JAVA_SERIALIZATION_ID,
            ]
        );
        assert_eq!(template.version(), GiopVersion::V1_2);
    }

    #[cfg(feature = "config-loaders")]
    #[test]
    fn test_yaml_document() {
        let config = OrbConfig::from_yaml_str(
            r#"
giop_version: "1.1"
codebase: http://build.local/classes
code_sets:
  char: { native: 83951617 }
"#,
        )
        .expect("valid yaml");
        assert_eq!(config.giop_version, GiopVersion::V1_1);
        assert_eq!(config.codebase.as_deref(), Some("http://build.local/classes"));
        assert_eq!(config.code_sets.for_char_data.native_set, 0x0501_0001);
        assert!(config.code_sets.for_char_data.conversion_sets.is_empty());
        // untouched
        assert_eq!(config.orb_type, SUN_ORB_TYPE);
    }

    #[cfg(feature = "config-loaders")]
    #[test]
    fn test_yaml_errors() {
        assert!(matches!(
            OrbConfig::from_yaml_str("giop_version: \"1.\""),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            OrbConfig::from_yaml_str("no_such_field: 1"),
            Err(Error::Config(_))
        ));
    }
}
