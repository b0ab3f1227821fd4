// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network Identity Domain Models
//!
//! Value objects for deriving and carrying stable hardware addresses for
//! virtual machines, without a name-to-address registry.
//!
//! # Value Objects with Invariants
//!
//! - [`MacAddress`] - 48-bit MAC address, uppercase canonical form
//! - [`MacFormat`] - colon-separated or bare output
//! - [`MacTemplate`] - fixed filler around a fingerprint, locally administered unicast
//! - [`VlanId`] - IEEE 802.1Q VLAN ID (1-4094)
//!
//! # Entities
//!
//! - [`NetworkClient`] - name, derived address, optional fixed lease and VLAN

pub mod invariants;
pub mod local_mac;
pub mod network;
pub mod network_client;

pub use invariants::{ValidationError, ValidationResult};
pub use local_mac::{to_local_mac, to_local_mac_string, MacTemplate};
pub use network::{parse_fixed_ip, MacAddress, MacFormat, NetworkError, VlanId};
pub use network_client::NetworkClient;
