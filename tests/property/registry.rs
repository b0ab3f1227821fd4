// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for the Name Registry

use infra_identity::{to_local_mac, CollisionPolicy, MacRegistry};
use proptest::prelude::*;
use std::collections::BTreeSet;

proptest! {
    /// Property: registry addresses equal the stateless derivation
    #[test]
    fn prop_registry_matches_derivation(names in prop::collection::btree_set("[a-z0-9-]{1,16}", 0..40)) {
        let mut registry = MacRegistry::new(CollisionPolicy::Allow);

        for name in &names {
            let mac = registry.register(name.as_str()).unwrap();
            prop_assert_eq!(mac, to_local_mac(name));
        }

        prop_assert_eq!(registry.len(), names.len());
        let listed: BTreeSet<String> = registry.iter().map(|(name, _)| name.to_string()).collect();
        prop_assert_eq!(listed, names);
    }

    /// Property: a rejected registration never changes the registry
    #[test]
    fn prop_reject_keeps_addresses_unique(names in prop::collection::vec("[a-z0-9]{1,6}", 0..60)) {
        let mut registry = MacRegistry::new(CollisionPolicy::Reject);

        for name in &names {
            let before = registry.len();
            if registry.register(name.as_str()).is_err() {
                prop_assert_eq!(registry.len(), before);
            }
        }

        prop_assert!(registry.collisions().is_empty());
        let unique: BTreeSet<_> = registry.iter().map(|(_, mac)| mac).collect();
        prop_assert_eq!(unique.len(), registry.len());
    }
}
