// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![cfg(feature = "config-loaders")]

//! YAML configuration loading from disk, layered with environment overrides.

use giop::ior::code_sets::{UTF_16, UTF_8};
use giop::ior::IiopAddress;
use giop::{Error, GiopVersion, OrbConfig};
use std::io::Write;

const ORB_YAML: &str = r#"
giop_version: "1.1"
orb_type: 1330660608
codebase: http://build.local/classes
max_stream_format_version: 1
java_serialization: true
code_sets:
  char:
    native: 83951617
  wchar:
    native: 65801
    conversion: []
"#;

fn write_yaml(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write yaml");
    file
}

#[test]
fn test_load_from_file() {
    let file = write_yaml(ORB_YAML);
    let config = OrbConfig::from_yaml_file(file.path()).expect("load yaml");

    assert_eq!(config.giop_version, GiopVersion::V1_1);
    assert_eq!(config.orb_type, 0x4F50_4500);
    assert_eq!(config.codebase.as_deref(), Some("http://build.local/classes"));
    assert_eq!(config.max_stream_format_version, 1);
    assert!(config.java_serialization);
    assert_eq!(config.code_sets.for_char_data.native_set, UTF_8);
    assert_eq!(config.code_sets.for_wchar_data.native_set, UTF_16);
    assert!(config.code_sets.for_wchar_data.conversion_sets.is_empty());
}

#[test]
fn test_env_overrides_yaml() {
    let file = write_yaml(ORB_YAML);
    let config = OrbConfig::from_yaml_file(file.path())
        .and_then(|c| {
            c.apply_env(|key| match key {
                "GIOP_VERSION" => Some("1.3".to_string()),
                "GIOP_JAVA_SERIALIZATION" => Some("off".to_string()),
                _ => None,
            })
        })
        .expect("layered config");
    assert_eq!(config.giop_version, GiopVersion::V1_3);
    assert!(!config.java_serialization);
    assert_eq!(config.max_stream_format_version, 1);

    let template = config.profile_template(IiopAddress::new("localhost", 2809));
    assert_eq!(template.version(), GiopVersion::V1_3);
    assert_eq!(template.components().len(), 4);
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("orb.yaml");
    match OrbConfig::from_yaml_file(&missing) {
        Err(Error::Config(msg)) => assert!(msg.contains("orb.yaml"), "{}", msg),
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_empty_document_keeps_defaults() {
    let file = write_yaml("{}\n");
    let config = OrbConfig::from_yaml_file(file.path()).expect("load yaml");
    assert_eq!(config, OrbConfig::default());
}
