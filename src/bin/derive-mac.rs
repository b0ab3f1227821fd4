// Copyright (c) 2025 - Cowboy AI, Inc.
//! Derive MAC addresses for resource names
//!
//! Prints the locally administered address each name maps to, in the order
//! given, registering them together so duplicates and collisions surface.
//!
//! Run with: cargo run --bin derive-mac -- web01 db01=192.168.10.21
//!
//! Configuration comes from `--config FILE` (JSON) or the `MAC_IDENTITY_*`
//! environment variables; flags override either.

use anyhow::{Context, Result};
use clap::Parser;
use infra_identity::domain::{parse_fixed_ip, MacFormat, VlanId};
use infra_identity::{fingerprint, CollisionPolicy, IdentityConfig, NetworkClient};
use serde::Serialize;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "derive-mac")]
#[command(about = "Derive stable locally administered MAC addresses from names", long_about = None)]
struct Cli {
    /// Names to derive, optionally with a fixed IP (NAME or NAME=IP)
    #[arg(required = true)]
    names: Vec<String>,

    /// JSON configuration file (defaults to MAC_IDENTITY_* environment variables)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output shape: colon or bare
    #[arg(short, long)]
    format: Option<MacFormat>,

    /// Template filler digit (2, 6, a or e)
    #[arg(long)]
    filler: Option<char>,

    /// Collision handling: allow, warn or reject
    #[arg(long)]
    collisions: Option<CollisionPolicy>,

    /// VLAN tag recorded for every client
    #[arg(long)]
    vlan: Option<u16>,

    /// Also print the raw hex fingerprint
    #[arg(long)]
    fingerprint: bool,

    /// Emit JSON instead of tab-separated lines
    #[arg(long)]
    json: bool,
}

/// One output row
#[derive(Debug, Serialize)]
struct Row {
    #[serde(flatten)]
    client: NetworkClient,
    #[serde(skip_serializing_if = "Option::is_none")]
    fingerprint: Option<String>,
}

fn load_config(cli: &Cli) -> Result<IdentityConfig> {
    let mut config = match &cli.config {
        Some(path) => IdentityConfig::from_json_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => IdentityConfig::from_env().context("Invalid MAC_IDENTITY_* environment")?,
    };

    if let Some(filler) = cli.filler {
        config = config.with_filler(filler);
    }
    if let Some(format) = cli.format {
        config = config.with_format(format);
    }
    if let Some(policy) = cli.collisions {
        config = config.with_collision_policy(policy);
    }

    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    info!(
        filler = %config.filler,
        format = %config.format,
        collisions = %config.collision_policy,
        "configuration loaded"
    );

    let vlan = cli
        .vlan
        .map(VlanId::new)
        .transpose()
        .context("Invalid --vlan")?;

    let mut registry = config.registry()?;
    let mut rows = Vec::with_capacity(cli.names.len());

    for entry in &cli.names {
        // IPs never contain '=', names may
        let (name, fixed_ip) = match entry.rsplit_once('=') {
            Some((name, ip)) => {
                let ip = parse_fixed_ip(ip)
                    .with_context(|| format!("Invalid fixed IP for {name:?}"))?;
                (name, Some(ip))
            }
            None => (entry.as_str(), None),
        };

        let client = registry
            .register_client(name, fixed_ip, vlan)
            .with_context(|| format!("Cannot assign an address to {name:?}"))?;

        rows.push(Row {
            fingerprint: cli.fingerprint.then(|| fingerprint(name).to_hex()),
            client,
        });
    }

    let collisions = registry.collisions();
    if !collisions.is_empty() {
        warn!("{} address(es) shared by more than one name", collisions.len());
    }
    info!("derived {} address(es)", registry.len());

    if cli.json {
        let json: Vec<serde_json::Value> = rows
            .iter()
            .map(|row| render_json(row, config.format))
            .collect::<Result<_>>()?;
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        for row in &rows {
            let mac = row.client.mac_string(config.format);
            match &row.fingerprint {
                Some(hex) => println!("{}\t{}\t{}", row.client.name, mac, hex),
                None => println!("{}\t{}", row.client.name, mac),
            }
        }
    }

    Ok(())
}

/// Serialize a row, rendering the address in the configured shape
fn render_json(row: &Row, format: MacFormat) -> Result<serde_json::Value> {
    let mut value = serde_json::to_value(row)?;
    if let Some(object) = value.as_object_mut() {
        object.insert("mac".to_string(), row.client.mac_string(format).into());
    }
    Ok(value)
}
