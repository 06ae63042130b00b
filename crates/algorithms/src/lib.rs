//! Symmetric building blocks for the kemseal library
//!
//! - [`drbg`] - seed-keyed deterministic random stream used for key generation
//! - [`kdf`] - KDF1 and KDF2 counter-mode key derivation
//! - [`aead`] - AES-GCM behind the [`Aead`](kemseal_api::Aead) trait

#![forbid(unsafe_code)]

pub mod aead;
pub mod drbg;
pub mod kdf;

pub use aead::{Aes128Gcm, Aes256Gcm};
pub use drbg::DeterministicRandom;
pub use kdf::{Kdf1, Kdf2};

pub use kemseal_api::{Error, Result};
