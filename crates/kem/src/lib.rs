//! Key Encapsulation Mechanisms for the kemseal library
//!
//! This crate provides RSA key generation from seed material and the
//! RSA-KEM construction used by the hybrid encryptor.

#![forbid(unsafe_code)]

pub mod rsa;

// Re-exports
pub use rsa::{
    CancellationToken, KeyGenConfig, KeyPair, KeyPairGenerator, RsaKem, RsaPrivateKey,
    RsaPublicKey,
};

pub use kemseal_api::{Error, Result};
