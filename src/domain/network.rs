// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network Value Objects with Validation Invariants

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;
use thiserror::Error;

/// Network validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Invalid IP address format: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid MAC address format: {0}")]
    InvalidMacAddress(String),

    #[error("Invalid MAC format: {0} (expected 'colon' or 'bare')")]
    InvalidMacFormat(String),

    #[error("Invalid VLAN ID: {0} (must be 1-4094)")]
    InvalidVlanId(u16),
}

/// Text shape of a rendered MAC address
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MacFormat {
    /// `AA:AA:53:6E:B4:6D`, for network APIs
    #[default]
    Colon,
    /// `AAAA536EB46D`, for systems wanting a raw token
    Bare,
}

impl fmt::Display for MacFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MacFormat::Colon => write!(f, "colon"),
            MacFormat::Bare => write!(f, "bare"),
        }
    }
}

impl FromStr for MacFormat {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "colon" => Ok(MacFormat::Colon),
            "bare" => Ok(MacFormat::Bare),
            _ => Err(NetworkError::InvalidMacFormat(s.to_string())),
        }
    }
}

/// MAC Address value object
///
/// Represents a 48-bit MAC address.
/// Invariants:
/// - Exactly 6 octets
/// - Canonical representation is uppercase and colon-separated
///
/// Serialized as the canonical string; deserialized from any form
/// [`MacAddress::new`] accepts.
///
/// # Examples
///
/// ```rust
/// use infra_identity::domain::{MacAddress, MacFormat};
///
/// let mac = MacAddress::new("aa-aa-53-6e-b4-6d").unwrap();
/// assert_eq!(mac.to_string(), "AA:AA:53:6E:B4:6D");
/// assert_eq!(mac.format(MacFormat::Bare), "AAAA536EB46D");
/// assert!(mac.is_locally_administered());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    /// Parse a MAC address
    ///
    /// Accepts colon, dash or unseparated forms in either case.
    pub fn new(mac: impl AsRef<str>) -> Result<Self, NetworkError> {
        let mac = mac.as_ref();
        let invalid = || NetworkError::InvalidMacAddress(mac.to_string());
        let digits = mac.replace([':', '-'], "");

        // Invariant: exactly 12 hex digits (6 octets)
        if digits.len() != 12 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let mut octets = [0u8; 6];
        for (octet, pair) in octets.iter_mut().zip(digits.as_bytes().chunks(2)) {
            let pair = std::str::from_utf8(pair).map_err(|_| invalid())?;
            *octet = u8::from_str_radix(pair, 16).map_err(|_| invalid())?;
        }

        Ok(Self(octets))
    }

    /// Create from raw octets
    pub fn from_octets(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    /// Get the octets
    pub fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// Canonical form: `XX:XX:XX:XX:XX:XX`
    pub fn to_colon_string(&self) -> String {
        let [a, b, c, d, e, f] = self.0;
        format!("{a:02X}:{b:02X}:{c:02X}:{d:02X}:{e:02X}:{f:02X}")
    }

    /// Twelve uppercase hex digits, no separators
    pub fn to_bare_string(&self) -> String {
        self.0.iter().map(|octet| format!("{octet:02X}")).collect()
    }

    /// Render in the requested shape
    pub fn format(&self, format: MacFormat) -> String {
        match format {
            MacFormat::Colon => self.to_colon_string(),
            MacFormat::Bare => self.to_bare_string(),
        }
    }

    /// Check if this is the broadcast address
    pub fn is_broadcast(&self) -> bool {
        self.0 == [0xff; 6]
    }

    /// Check if the I/G bit is set
    pub fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 != 0
    }

    /// Check if this is a unicast MAC address
    pub fn is_unicast(&self) -> bool {
        !self.is_multicast()
    }

    /// Check if the U/L bit is set
    pub fn is_locally_administered(&self) -> bool {
        self.0[0] & 0x02 != 0
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_colon_string())
    }
}

impl FromStr for MacAddress {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<MacAddress> for String {
    fn from(mac: MacAddress) -> Self {
        mac.to_colon_string()
    }
}

impl TryFrom<String> for MacAddress {
    type Error = NetworkError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// VLAN ID value object
///
/// Represents a VLAN ID (IEEE 802.1Q) with validation.
/// Invariants:
/// - Valid VLAN ID range (1-4094)
/// - VLAN 0 and 4095 are reserved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct VlanId(u16);

impl VlanId {
    /// Minimum valid VLAN ID
    pub const MIN: u16 = 1;

    /// Maximum valid VLAN ID
    pub const MAX: u16 = 4094;

    /// Create a new VLAN ID with validation
    pub fn new(id: u16) -> Result<Self, NetworkError> {
        if !(Self::MIN..=Self::MAX).contains(&id) {
            return Err(NetworkError::InvalidVlanId(id));
        }

        Ok(Self(id))
    }

    /// Get the VLAN ID value
    pub fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for VlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u16> for VlanId {
    type Error = NetworkError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<VlanId> for u16 {
    fn from(vlan: VlanId) -> Self {
        vlan.0
    }
}

/// Parse a fixed client address, plain IPv4 or IPv6 without prefix
pub fn parse_fixed_ip(ip: &str) -> Result<IpAddr, NetworkError> {
    IpAddr::from_str(ip.trim()).map_err(|_| NetworkError::InvalidIpAddress(ip.to_string()))
}
