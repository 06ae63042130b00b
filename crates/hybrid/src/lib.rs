//! Hybrid encryption for the kemseal library
//!
//! A message is sealed once per recipient: RSA-KEM produces a fresh
//! AES-128-GCM key for that recipient's public key and the message is
//! encrypted under it. Each result is a self-contained
//! [`CiphertextBundle`] that only the matching private key can open.
//!
//! ```no_run
//! use kemseal_hybrid::{CiphertextBundle, HybridEncryptor, Identity};
//! use kemseal_kem::KeyGenConfig;
//!
//! # fn main() -> kemseal_api::Result<()> {
//! let alice = Identity::from_seed(&[7u8; 64], &KeyGenConfig::default())?;
//!
//! let bundles = HybridEncryptor::new()
//!     .encrypt_for_recipients(b"hi there", &[alice.public_key_hex()])?;
//!
//! let wire = bundles[0].to_bytes();
//! let received = CiphertextBundle::from_bytes(&wire)?;
//! assert_eq!(alice.decrypt(&received)?, b"hi there");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod bundle;
pub mod config;
pub mod decrypt;
pub mod encrypt;
pub mod identity;

pub use bundle::{CiphertextBundle, BUNDLE_VERSION};
pub use config::HybridConfig;
pub use decrypt::HybridDecryptor;
pub use encrypt::HybridEncryptor;
pub use identity::Identity;

pub use kemseal_api::{Error, Result};
