// Copyright (c) 2025 - Cowboy AI, Inc.
//! Locally Administered MAC Derivation
//!
//! Renders a name's fingerprint into a fixed 12-digit template:
//!
//! ```text
//! F F F F h h h h h h h h F F F F     (F = filler, h = fingerprint hex)
//! └──────────── first 12 ───────┘
//! ```
//!
//! The fingerprint hex has no leading zeros, so it takes 1 to 8 digits. The
//! first 12 template digits are kept; when the hex is shorter than 4 digits
//! the remainder is padded with the filler. Addresses with a fingerprint of
//! 4 or more hex digits are identical to the ones previously deployed.
//!
//! With the default filler `a` the first octet is always `0xAA`:
//! locally administered, unicast.
//!
//! # Collisions
//!
//! Two names with the same fingerprint get the same address. Nothing here
//! detects that; use [`MacRegistry`](crate::registry::MacRegistry) when
//! uniqueness matters.

use serde::{Deserialize, Serialize};

use super::invariants::{validate_filler, ValidationError};
use super::{MacAddress, MacFormat};
use crate::fingerprint::{fingerprint, Fingerprint};

/// Hex digits in a MAC address
const MAC_DIGITS: usize = 12;

/// Filler digits before and after the fingerprint
const FILLER_RUN: usize = 4;

/// Fixed template around the fingerprint hex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct MacTemplate {
    filler: char,
    nibble: u8,
}

impl MacTemplate {
    /// Filler used by every previously deployed address
    pub const DEFAULT_FILLER: char = 'a';

    /// Create a template with a validated filler digit
    ///
    /// # Invariants
    /// - Filler is a hex digit
    /// - Filler doubled into an octet is locally administered unicast
    pub fn new(filler: char) -> Result<Self, ValidationError> {
        let nibble = validate_filler(filler)?;

        Ok(Self {
            filler: filler.to_ascii_lowercase(),
            nibble,
        })
    }

    /// Lowercase filler digit
    pub fn filler(&self) -> char {
        self.filler
    }

    /// Render a fingerprint into an address
    pub fn render(&self, fp: &Fingerprint) -> MacAddress {
        let filler = std::iter::repeat(self.nibble);
        let mut nibbles = filler
            .clone()
            .take(FILLER_RUN)
            .chain(fp.nibbles())
            .chain(filler)
            .take(MAC_DIGITS);

        let mut octets = [0u8; 6];
        for octet in octets.iter_mut() {
            let high = nibbles.next().unwrap_or(self.nibble);
            let low = nibbles.next().unwrap_or(self.nibble);
            *octet = (high << 4) | low;
        }

        MacAddress::from_octets(octets)
    }

    /// Derive the address for a name
    pub fn derive(&self, name: &str) -> MacAddress {
        self.render(&fingerprint(name))
    }

    /// Derive and render in the requested shape
    pub fn derive_string(&self, name: &str, format: MacFormat) -> String {
        self.derive(name).format(format)
    }
}

impl Default for MacTemplate {
    fn default() -> Self {
        Self {
            filler: Self::DEFAULT_FILLER,
            nibble: 0xa,
        }
    }
}

impl TryFrom<char> for MacTemplate {
    type Error = ValidationError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MacTemplate> for char {
    fn from(template: MacTemplate) -> Self {
        template.filler
    }
}

/// Derive the locally administered address for a name
///
/// # Examples
///
/// ```rust
/// use infra_identity::domain::to_local_mac;
///
/// assert_eq!(to_local_mac("Mac1").to_string(), "AA:AA:53:6E:B4:6D");
/// ```
pub fn to_local_mac(name: &str) -> MacAddress {
    MacTemplate::default().derive(name)
}

/// Derive the address for a name as colon or bare text
///
/// # Examples
///
/// ```rust
/// use infra_identity::domain::{to_local_mac_string, MacFormat};
///
/// assert_eq!(to_local_mac_string("Mac1", MacFormat::Bare), "AAAA536EB46D");
/// ```
pub fn to_local_mac_string(name: &str, format: MacFormat) -> String {
    to_local_mac(name).format(format)
}
