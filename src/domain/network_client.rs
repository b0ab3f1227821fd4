// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network Client Record
//!
//! What a virtual machine hands to its network when it is declared: its
//! name, the address derived from that name, and an optional fixed lease
//! and VLAN tag.

use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use super::{MacAddress, MacFormat, MacTemplate, VlanId};

/// A named network client with a derived hardware address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkClient {
    /// Name the address was derived from
    pub name: String,

    /// Derived locally administered address
    pub mac: MacAddress,

    /// Fixed lease, if any
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fixed_ip: Option<IpAddr>,

    /// VLAN tag, if any
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub vlan: Option<VlanId>,
}

impl NetworkClient {
    /// Derive a client from its name with the given template
    pub fn derive(template: &MacTemplate, name: impl Into<String>) -> Self {
        let name = name.into();
        let mac = template.derive(&name);

        Self {
            name,
            mac,
            fixed_ip: None,
            vlan: None,
        }
    }

    /// Set the fixed lease
    pub fn with_fixed_ip(mut self, ip: IpAddr) -> Self {
        self.fixed_ip = Some(ip);
        self
    }

    /// Set the VLAN tag
    pub fn with_vlan(mut self, vlan: VlanId) -> Self {
        self.vlan = Some(vlan);
        self
    }

    /// Address in the requested shape
    pub fn mac_string(&self, format: MacFormat) -> String {
        self.mac.format(format)
    }
}
