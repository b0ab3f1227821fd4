//! Deterministic network identities for virtual infrastructure
//!
//! Derives a stable, locally administered MAC address from a resource name,
//! so virtual machines keep the same hardware address across repeated
//! deployments without any persisted name-to-address state.
//!
//! ```rust
//! use infra_identity::{to_local_mac, to_local_mac_string, MacFormat};
//!
//! assert_eq!(to_local_mac("Mac1").to_string(), "AA:AA:53:6E:B4:6D");
//! assert_eq!(to_local_mac_string("Mac1", MacFormat::Bare), "AAAA536EB46D");
//! ```
//!
//! Distinct names can collide. [`registry::MacRegistry`] detects that and
//! applies a configurable [`registry::CollisionPolicy`].

pub mod config;
pub mod domain;
pub mod errors;
pub mod fingerprint;
pub mod registry;

// Re-export commonly used types
pub use config::IdentityConfig;
pub use domain::{to_local_mac, to_local_mac_string, MacAddress, MacFormat, MacTemplate, NetworkClient};
pub use errors::{IdentityError, IdentityResult};
pub use fingerprint::{fingerprint, hash, Fingerprint};
pub use registry::{CollisionPolicy, MacRegistry, RegistryError};
