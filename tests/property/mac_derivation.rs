// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Address Derivation
//!
//! Determinism, fixed width and the local/unicast first octet, for arbitrary
//! Unicode names of any length.

use infra_identity::domain::invariants::validate_local_unicast;
use infra_identity::{fingerprint, to_local_mac, MacAddress, MacFormat, MacTemplate};
use proptest::prelude::*;

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Arbitrary Unicode names, including empty and non-BMP characters
fn any_name() -> impl Strategy<Value = String> {
    prop_oneof![
        ".{0,64}",
        "[a-z0-9-]{1,32}",
        prop::collection::vec(any::<char>(), 0..16).prop_map(|chars| chars.into_iter().collect()),
    ]
}

/// Accepted filler digits
fn any_filler() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['2', '6', 'a', 'e', 'A', 'E'])
}

fn is_colon_shaped(s: &str) -> bool {
    let octets: Vec<&str> = s.split(':').collect();
    octets.len() == 6
        && octets
            .iter()
            .all(|o| o.len() == 2 && o.bytes().all(|b| matches!(b, b'0'..=b'9' | b'A'..=b'F')))
}

fn is_bare_shaped(s: &str) -> bool {
    s.len() == 12 && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'A'..=b'F'))
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: same name, same address
    #[test]
    fn prop_derivation_is_deterministic(name in any_name()) {
        prop_assert_eq!(fingerprint(&name), fingerprint(&name));
        prop_assert_eq!(to_local_mac(&name), to_local_mac(&name));
    }

    /// Property: the normalized fingerprint is the magnitude of the folded value
    #[test]
    fn prop_value_is_magnitude(name in any_name()) {
        let fp = fingerprint(&name);
        prop_assert_eq!(i64::from(fp.value()), i64::from(fp.folded()).abs());
    }

    /// Property: both output shapes are always exactly 12 uppercase hex digits
    #[test]
    fn prop_fixed_format(name in any_name()) {
        let mac = to_local_mac(&name);
        let colon = mac.format(MacFormat::Colon);
        let bare = mac.format(MacFormat::Bare);

        prop_assert!(is_colon_shaped(&colon), "bad colon form {}", colon);
        prop_assert!(is_bare_shaped(&bare), "bad bare form {}", bare);
        prop_assert_eq!(colon.replace(':', ""), bare);
    }

    /// Property: first octet low bits are 10 (locally administered, unicast)
    #[test]
    fn prop_prefix_validity(name in any_name(), filler in any_filler()) {
        let template = MacTemplate::new(filler).unwrap();
        let text = template.derive_string(&name, MacFormat::Colon);

        let first = u8::from_str_radix(&text[..2], 16).unwrap();
        prop_assert_eq!(first & 0b11, 0b10);
        prop_assert!(validate_local_unicast(&template.derive(&name)).is_ok());
    }

    /// Property: the fingerprint hex appears right after the 4-digit prefix
    #[test]
    fn prop_fingerprint_embedded(name in any_name()) {
        let hex = fingerprint(&name).to_hex().to_uppercase();
        let bare = to_local_mac(&name).to_bare_string();

        prop_assert!(bare.starts_with("AAAA"));
        let embedded = &bare[4..(4 + hex.len()).min(12)];
        prop_assert_eq!(embedded, &hex[..embedded.len()]);
    }

    /// Property: rendered text parses back to the same address
    #[test]
    fn prop_formatting_is_stable(name in any_name()) {
        let mac = to_local_mac(&name);
        let colon = mac.to_colon_string();

        prop_assert_eq!(&colon, &mac.to_colon_string());
        prop_assert_eq!(MacAddress::new(&colon).unwrap(), mac);
        prop_assert_eq!(MacAddress::new(mac.to_bare_string()).unwrap(), mac);
    }
}
