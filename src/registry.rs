// Copyright (c) 2025 - Cowboy AI, Inc.
//! Name Registry
//!
//! Tracks which names have been given which derived address within one
//! deployment. Derivation itself stays stateless; the registry only adds
//! bookkeeping on top:
//!
//! - a name can be registered once
//! - an address shared by two names is handled per [`CollisionPolicy`]
//!
//! # Examples
//!
//! ```rust
//! use infra_identity::registry::{CollisionPolicy, MacRegistry, RegistryError};
//!
//! let mut registry = MacRegistry::new(CollisionPolicy::Reject);
//! let mac = registry.register("Mac1").unwrap();
//! assert_eq!(mac.to_string(), "AA:AA:53:6E:B4:6D");
//!
//! assert!(matches!(
//!     registry.register("Mac1"),
//!     Err(RegistryError::DuplicateName(_))
//! ));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{MacAddress, MacTemplate, NetworkClient, VlanId};

/// Registry error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Name already registered: {0}")]
    DuplicateName(String),

    #[error("Address {mac} for {name:?} is already assigned to {existing:?}")]
    Collision {
        name: String,
        existing: String,
        mac: MacAddress,
    },

    #[error("Invalid collision policy: {0} (expected 'allow', 'warn' or 'reject')")]
    InvalidPolicy(String),
}

/// What to do when two names derive the same address
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Accept silently, matching the stateless derivation
    Allow,
    /// Accept and log a warning
    #[default]
    Warn,
    /// Refuse the second name
    Reject,
}

impl fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollisionPolicy::Allow => write!(f, "allow"),
            CollisionPolicy::Warn => write!(f, "warn"),
            CollisionPolicy::Reject => write!(f, "reject"),
        }
    }
}

impl FromStr for CollisionPolicy {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "allow" => Ok(CollisionPolicy::Allow),
            "warn" => Ok(CollisionPolicy::Warn),
            "reject" => Ok(CollisionPolicy::Reject),
            _ => Err(RegistryError::InvalidPolicy(s.to_string())),
        }
    }
}

/// Name to address bookkeeping for one deployment
#[derive(Debug, Clone, Default)]
pub struct MacRegistry {
    template: MacTemplate,
    policy: CollisionPolicy,
    by_name: BTreeMap<String, MacAddress>,
    /// Owners per address in registration order
    by_mac: BTreeMap<MacAddress, Vec<String>>,
}

impl MacRegistry {
    /// Registry with the default template
    pub fn new(policy: CollisionPolicy) -> Self {
        Self::with_template(MacTemplate::default(), policy)
    }

    /// Registry with a custom template
    pub fn with_template(template: MacTemplate, policy: CollisionPolicy) -> Self {
        Self {
            template,
            policy,
            by_name: BTreeMap::new(),
            by_mac: BTreeMap::new(),
        }
    }

    /// Derive and record the address for a name
    ///
    /// # Errors
    /// - [`RegistryError::DuplicateName`] if the name is already registered
    /// - [`RegistryError::Collision`] if the address is taken and the policy
    ///   is [`CollisionPolicy::Reject`]; the registry is left unchanged
    pub fn register(&mut self, name: impl Into<String>) -> Result<MacAddress, RegistryError> {
        let name = name.into();

        if self.by_name.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        let mac = self.template.derive(&name);
        debug!(name = %name, mac = %mac, "derived address");

        if let Some(existing) = self.by_mac.get(&mac).and_then(|owners| owners.first()) {
            match self.policy {
                CollisionPolicy::Allow => {}
                CollisionPolicy::Warn => {
                    warn!(
                        name = %name,
                        existing = %existing,
                        mac = %mac,
                        "address collision, both names share one address"
                    );
                }
                CollisionPolicy::Reject => {
                    return Err(RegistryError::Collision {
                        existing: existing.clone(),
                        name,
                        mac,
                    });
                }
            }
        }

        self.by_mac.entry(mac).or_default().push(name.clone());
        self.by_name.insert(name, mac);

        Ok(mac)
    }

    /// Register a name and build its network client record
    pub fn register_client(
        &mut self,
        name: impl Into<String>,
        fixed_ip: Option<IpAddr>,
        vlan: Option<VlanId>,
    ) -> Result<NetworkClient, RegistryError> {
        let name = name.into();
        let mac = self.register(name.clone())?;

        Ok(NetworkClient {
            name,
            mac,
            fixed_ip,
            vlan,
        })
    }

    /// Address registered for a name
    pub fn lookup(&self, name: &str) -> Option<MacAddress> {
        self.by_name.get(name).copied()
    }

    /// Names sharing an address, in registration order
    pub fn owners(&self, mac: &MacAddress) -> &[String] {
        self.by_mac.get(mac).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Addresses held by more than one name, ordered by address
    pub fn collisions(&self) -> Vec<(MacAddress, &[String])> {
        self.by_mac
            .iter()
            .filter(|(_, owners)| owners.len() > 1)
            .map(|(mac, owners)| (*mac, owners.as_slice()))
            .collect()
    }

    /// Registered names and addresses, ordered by name
    pub fn iter(&self) -> impl Iterator<Item = (&str, MacAddress)> {
        self.by_name.iter().map(|(name, mac)| (name.as_str(), *mac))
    }

    /// Number of registered names
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Check if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Active collision policy
    pub fn policy(&self) -> CollisionPolicy {
        self.policy
    }

    /// Template used for derivation
    pub fn template(&self) -> &MacTemplate {
        &self.template
    }
}
