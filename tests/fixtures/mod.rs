// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for infra-identity
//!
//! Reference vectors computed once with the legacy derivation and pinned
//! here. Every test that needs a known name/address pair takes it from this
//! module.
//!
//! Most vectors match addresses the legacy derivation already produced.
//! [`EMPTY`] and [`SHORT_HEX`] have fingerprints under four hex digits, for
//! which the legacy output was malformed; they pin the filler padding that
//! replaces it.

#![allow(dead_code)]

/// Pinned derivation result
pub struct Vector {
    pub name: &'static str,
    pub hex: &'static str,
    pub colon: &'static str,
    pub bare: &'static str,
}

/// Pinned by the first deployment's own test suite
pub const MAC1: Vector = Vector {
    name: "Mac1",
    hex: "536eb46d",
    colon: "AA:AA:53:6E:B4:6D",
    bare: "AAAA536EB46D",
};

/// Seed only, no folding applied
pub const EMPTY: Vector = Vector {
    name: "",
    hex: "9",
    colon: "AA:AA:9A:AA:AA:AA",
    bare: "AAAA9AAAAAAA",
};

/// Seven hex digits, one suffix filler digit shows
pub const TALOS_WORKER: Vector = Vector {
    name: "talos-worker-01",
    hex: "c21be6d",
    colon: "AA:AA:C2:1B:E6:DA",
    bare: "AAAAC21BE6DA",
};

/// Three hex digits, needs padding past the suffix
pub const SHORT_HEX: Vector = Vector {
    name: "072e",
    hex: "1fa",
    colon: "AA:AA:1F:AA:AA:AA",
    bare: "AAAA1FAAAAAA",
};

/// Non-BMP character, hashed as a surrogate pair
pub const EMOJI: Vector = Vector {
    name: "😀",
    hex: "572012",
    colon: "AA:AA:57:20:12:AA",
    bare: "AAAA572012AA",
};

/// Two names sharing one address
pub const COLLIDING_NAMES: [&str; 2] = ["vm-24386", "vm-31785"];

/// Address shared by [`COLLIDING_NAMES`]
pub const COLLIDING_MAC: &str = "AA:AA:5B:F7:89:A6";

/// Lab machines with distinct addresses
pub const LAB_MACHINES: [(&str, &str); 5] = [
    ("Mac2", "AA:AA:67:B3:B4:16"),
    ("a", "AA:AA:61:A3:CC:2A"),
    ("adguard", "AA:AA:52:D4:C8:E2"),
    ("talos-cp-01", "AA:AA:14:E8:E0:3E"),
    ("k8s-node-1", "AA:AA:13:08:FC:76"),
];
