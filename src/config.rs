// Copyright (c) 2025 - Cowboy AI, Inc.
//! Identity configuration
//!
//! Covers only what surrounds the hash: template filler, output shape and
//! collision handling. The fingerprint itself has no options.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::domain::{MacFormat, MacTemplate};
use crate::errors::{IdentityError, IdentityResult};
use crate::registry::{CollisionPolicy, MacRegistry};

/// Environment variable for the template filler digit
pub const ENV_FILLER: &str = "MAC_IDENTITY_FILLER";

/// Environment variable for the output shape (`colon` or `bare`)
pub const ENV_FORMAT: &str = "MAC_IDENTITY_FORMAT";

/// Environment variable for the collision policy (`allow`, `warn`, `reject`)
pub const ENV_COLLISIONS: &str = "MAC_IDENTITY_COLLISIONS";

/// Identity configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Template filler digit
    pub filler: char,

    /// Output shape
    pub format: MacFormat,

    /// Collision handling in the registry
    pub collision_policy: CollisionPolicy,
}

impl IdentityConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> IdentityResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup, falling back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> IdentityResult<Self> {
        let mut config = Self::default();

        if let Some(filler) = lookup(ENV_FILLER) {
            config.filler = single_char(&filler).ok_or_else(|| {
                IdentityError::Configuration(format!(
                    "{ENV_FILLER} must be a single hex digit, got {filler:?}"
                ))
            })?;
        }

        if let Some(format) = lookup(ENV_FORMAT) {
            config.format = format
                .parse()
                .map_err(|e| IdentityError::Configuration(format!("{ENV_FORMAT}: {e}")))?;
        }

        if let Some(policy) = lookup(ENV_COLLISIONS) {
            config.collision_policy = policy
                .parse()
                .map_err(|e| IdentityError::Configuration(format!("{ENV_COLLISIONS}: {e}")))?;
        }

        config.template()?;
        debug!(?config, "identity configuration loaded");
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> IdentityResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Parse configuration from JSON; missing fields take defaults
    pub fn from_json_str(json: &str) -> IdentityResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.template()?;
        Ok(config)
    }

    /// Set the filler digit
    pub fn with_filler(mut self, filler: char) -> Self {
        self.filler = filler;
        self
    }

    /// Set the output shape
    pub fn with_format(mut self, format: MacFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the collision policy
    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }

    /// Validated template for this configuration
    pub fn template(&self) -> IdentityResult<MacTemplate> {
        Ok(MacTemplate::new(self.filler)?)
    }

    /// Empty registry for this configuration
    pub fn registry(&self) -> IdentityResult<MacRegistry> {
        Ok(MacRegistry::with_template(
            self.template()?,
            self.collision_policy,
        ))
    }
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            filler: MacTemplate::DEFAULT_FILLER,
            format: MacFormat::default(),
            collision_policy: CollisionPolicy::default(),
        }
    }
}

fn single_char(value: &str) -> Option<char> {
    let mut chars = value.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
