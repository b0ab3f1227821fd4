// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Validation Functions - Address Invariants
//!
//! Rules every derived address must satisfy so that it can never be confused
//! with a vendor-assigned (globally administered) or group address.
//!
//! # Invariant Categories
//!
//! 1. **Unicast**: the I/G bit (LSB of the first octet) is clear
//! 2. **Locally administered**: the U/L bit (second LSB of the first octet) is set
//! 3. **Template filler**: a filler digit doubled into the first octet must
//!    satisfy both of the above
//!
//! All functions are pure and deterministic.

use crate::domain::MacAddress;

/// Validation result with detailed error information
pub type ValidationResult = Result<(), ValidationError>;

/// Validation error with context
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Group bit set on an address meant for a single interface
    #[error("Address {0} is multicast, expected unicast")]
    Multicast(MacAddress),

    /// Address falls in the vendor-assigned space
    #[error("Address {0} is globally administered, expected locally administered")]
    GloballyAdministered(MacAddress),

    /// Filler is not a hex digit
    #[error("Template filler must be a single hex digit, got {0:?}")]
    FillerNotHex(char),

    /// Filler produces an unusable first octet
    #[error("Template filler {filler:?} yields first octet {octet:#04X}, which is not locally administered unicast")]
    FillerNotLocalUnicast { filler: char, octet: u8 },
}

/// Validate the address targets a single interface
pub fn validate_unicast(mac: &MacAddress) -> ValidationResult {
    if mac.is_multicast() {
        return Err(ValidationError::Multicast(*mac));
    }
    Ok(())
}

/// Validate the address is outside the vendor-assigned space
pub fn validate_locally_administered(mac: &MacAddress) -> ValidationResult {
    if !mac.is_locally_administered() {
        return Err(ValidationError::GloballyAdministered(*mac));
    }
    Ok(())
}

/// Validate the first octet's low two bits are `10`
///
/// # Rules
/// - Unicast (I/G clear)
/// - Locally administered (U/L set)
pub fn validate_local_unicast(mac: &MacAddress) -> ValidationResult {
    validate_unicast(mac)?;
    validate_locally_administered(mac)
}

/// Validate a template filler digit and return its nibble value
///
/// The first octet of every derived address is the filler repeated twice,
/// so only `2`, `6`, `A` and `E` are accepted.
pub fn validate_filler(filler: char) -> Result<u8, ValidationError> {
    let nibble = filler
        .to_digit(16)
        .ok_or(ValidationError::FillerNotHex(filler))? as u8;
    let octet = (nibble << 4) | nibble;

    let probe = MacAddress::from_octets([octet, 0, 0, 0, 0, 0]);
    if validate_local_unicast(&probe).is_err() {
        return Err(ValidationError::FillerNotLocalUnicast { filler, octet });
    }

    Ok(nibble)
}
