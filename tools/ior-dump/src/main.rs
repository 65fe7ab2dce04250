// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! ior-dump - Decode a stringified IOR
//!
//! Shows the repository type id, every tagged profile and, for IIOP
//! profiles, the object key and tagged components. Optionally prints the
//! GIOP version a client at `--local-version` would use for requests.

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use giop::ior::tags::{component_tag_name, profile_tag_name};
use giop::ior::{IiopProfile, ObjectKeyTemplate};
use giop::{GiopVersion, Ior, Registries, TaggedComponent, TaggedProfile};
use serde_json::{json, Value};
use std::io::Read;

/// Decode a stringified IOR
#[derive(Parser, Debug)]
#[command(name = "ior-dump")]
#[command(version)]
#[command(about = "Decode a stringified IOR (IIOP profiles, tagged components)")]
struct Args {
    /// Stringified reference ("IOR:..."), or "-" to read it from stdin
    ior: String,

    /// Local GIOP version used to negotiate the request version
    #[arg(short = 'l', long)]
    local_version: Option<GiopVersion>,

    /// Treat the target ORB as a legacy peer (forces GIOP 1.0)
    #[arg(long)]
    legacy: bool,

    /// Output format: pretty, json
    #[arg(short, long, default_value = "pretty")]
    format: OutputFormat,
}

#[derive(Clone, Debug)]
enum OutputFormat {
    Pretty,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "p" => Ok(OutputFormat::Pretty),
            "json" | "j" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let text = if args.ior == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading IOR from stdin")?;
        buf
    } else {
        args.ior.clone()
    };

    let registries = Registries::standard();
    let ior = Ior::from_ior_string(&text, &registries).context("decoding IOR")?;
    log::debug!(
        "[ior-dump] decoded {} profile(s) for {:?}",
        ior.profiles().len(),
        ior.type_id()
    );

    match args.format {
        OutputFormat::Pretty => print_pretty(&ior, args),
        OutputFormat::Json => {
            let doc = ior_json(&ior, args);
            println!(
                "{}",
                serde_json::to_string_pretty(&doc).context("encoding JSON")?
            );
        }
    }
    Ok(())
}

fn negotiated(profile: &IiopProfile, args: &Args) -> Option<GiopVersion> {
    args.local_version
        .map(|local| profile.choose_request_version(&local, args.legacy))
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

fn tag_label(tag: u32, name: Option<&'static str>) -> String {
    match name {
        Some(name) => format!("{} ({})", name, tag),
        None => format!("0x{:08x}", tag),
    }
}

// ============================================================================
// Pretty output
// ============================================================================

fn print_pretty(ior: &Ior, args: &Args) {
    if ior.is_nil() {
        println!("{}", "nil object reference".yellow());
        return;
    }

    println!("{} {}", "Type:".bold(), ior.type_id().cyan());
    println!("{} {}", "Profiles:".bold(), ior.profiles().len());

    for (i, profile) in ior.profiles().iter().enumerate() {
        println!();
        let label = tag_label(profile.tag(), profile_tag_name(profile.tag()));
        println!("  {} #{} {}", ">>>".green().bold(), i, label);
        match profile {
            TaggedProfile::Iiop(iiop) => print_iiop(iiop, args),
            TaggedProfile::Unknown { data, .. } => {
                println!("    {} {}", "data:".dimmed(), hex(data));
            }
        }
    }
}

fn print_iiop(profile: &IiopProfile, args: &Args) {
    println!("    {:<12} {}", "version:", profile.giop_version());
    println!("    {:<12} {}", "address:", profile.primary_address());

    match profile.object_key_template() {
        ObjectKeyTemplate::Structured {
            scid,
            server_id,
            orb_id,
            adapter_id,
        } => {
            println!(
                "    {:<12} scid={} server={} orb={:?} adapter={}",
                "key:",
                scid,
                server_id,
                orb_id,
                adapter_id.join("/")
            );
        }
        ObjectKeyTemplate::Wire => println!("    {:<12} {}", "key:", "wire".dimmed()),
    }
    println!("    {:<12} {}", "object id:", profile.object_id());

    if profile.components().is_empty() {
        println!("    {:<12} {}", "components:", "none".dimmed());
    } else {
        println!("    components:");
        for component in profile.components() {
            let label = tag_label(component.tag(), component_tag_name(component.tag()));
            let value = describe_component(component);
            if component.is_unknown() {
                println!("      - {} {}", label.yellow(), value);
            } else {
                println!("      - {} {}", label, value);
            }
        }
    }

    if let Some(version) = negotiated(profile, args) {
        println!(
            "    {:<12} {}",
            "request:",
            version.to_string().green().bold()
        );
    }
}

fn describe_component(component: &TaggedComponent) -> String {
    match component {
        TaggedComponent::AlternateIiopAddress(addr) => addr.to_string(),
        TaggedComponent::CodeSets(info) => format!(
            "char=0x{:08x} {:x?} wchar=0x{:08x} {:x?}",
            info.for_char_data.native_set,
            info.for_char_data.conversion_sets,
            info.for_wchar_data.native_set,
            info.for_wchar_data.conversion_sets
        ),
        TaggedComponent::JavaCodebase(codebase) => codebase.clone(),
        TaggedComponent::OrbType(orb_type) => format!("0x{:08x}", orb_type),
        TaggedComponent::MaxStreamFormatVersion(v) | TaggedComponent::JavaSerialization(v) => {
            v.to_string()
        }
        TaggedComponent::RequestPartitioning(id) => id.to_string(),
        TaggedComponent::Unknown { data, .. } => hex(data),
    }
}

// ============================================================================
// JSON output
// ============================================================================

fn ior_json(ior: &Ior, args: &Args) -> Value {
    let profiles: Vec<Value> = ior
        .profiles()
        .iter()
        .map(|profile| match profile {
            TaggedProfile::Iiop(iiop) => iiop_json(iiop, args),
            TaggedProfile::Unknown { tag, data } => json!({
                "tag": tag,
                "data": hex(data),
            }),
        })
        .collect();

    json!({
        "type_id": ior.type_id(),
        "nil": ior.is_nil(),
        "profiles": profiles,
    })
}

fn iiop_json(profile: &IiopProfile, args: &Args) -> Value {
    let key = match profile.object_key_template() {
        ObjectKeyTemplate::Structured {
            scid,
            server_id,
            orb_id,
            adapter_id,
        } => json!({
            "kind": "structured",
            "scid": scid,
            "server_id": server_id,
            "orb_id": orb_id,
            "adapter_id": adapter_id,
        }),
        ObjectKeyTemplate::Wire => json!({ "kind": "wire" }),
    };

    let components: Vec<Value> = profile
        .components()
        .iter()
        .map(|c| {
            json!({
                "tag": c.tag(),
                "name": component_tag_name(c.tag()),
                "known": !c.is_unknown(),
                "value": describe_component(c),
            })
        })
        .collect();

    json!({
        "tag": profile_tag_name(giop::ior::tags::TAG_INTERNET_IOP),
        "version": profile.giop_version().to_string(),
        "host": profile.primary_address().host(),
        "port": profile.primary_address().port(),
        "object_key": key,
        "object_id": profile.object_id().to_string(),
        "components": components,
        "request_version": negotiated(profile, args).map(|v| v.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert!(matches!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json)));
        assert!(matches!("p".parse::<OutputFormat>(), Ok(OutputFormat::Pretty)));
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_unknown_tag_label_is_hex() {
        assert_eq!(tag_label(0xFFFF_FFF0, None), "0xfffffff0");
        assert_eq!(tag_label(25, Some("JAVA_CODEBASE")), "JAVA_CODEBASE (25)");
    }

    #[test]
    fn test_json_reports_negotiated_version() {
        let regs = Registries::standard();
        let config = giop::OrbConfig::default();
        let template = config.profile_template(giop::ior::IiopAddress::new("h", 1));
        let profile = giop::ior::make_iiop_profile(
            ObjectKeyTemplate::Wire,
            giop::ior::ObjectId::new(b"k".to_vec()),
            template,
        );
        let text = Ior::new("IDL:A:1.0", vec![TaggedProfile::Iiop(profile)])
            .to_ior_string()
            .unwrap();
        let ior = Ior::from_ior_string(&text, &regs).unwrap();
        let args = Args::parse_from(["ior-dump", "IOR:00", "--local-version", "1.1"]);

        let doc = ior_json(&ior, &args);
        assert_eq!(doc["type_id"], "IDL:A:1.0");
        assert_eq!(doc["profiles"][0]["request_version"], "1.1");
        assert_eq!(doc["profiles"][0]["port"], 1);
    }
}
