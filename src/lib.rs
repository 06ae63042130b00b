//! # kemseal
//!
//! Hybrid public-key encryption: an RSA key-encapsulation mechanism feeds a
//! fresh AES-128-GCM key to every recipient of a message, and RSA key pairs
//! can be regenerated bit-for-bit from the seed material they came from.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! kemseal = "0.3"
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for public keys, bundles and configs
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`kemseal-api`]: Error type, traits and key-carrying types
//! - [`kemseal-algorithms`]: DRBG, KDF1/KDF2, AES-GCM
//! - [`kemseal-kem`]: Seeded RSA key generation and RSA-KEM
//! - [`kemseal-hybrid`]: Multi-recipient hybrid encryption and bundles

#![forbid(unsafe_code)]

pub use kemseal_algorithms as algorithms;
pub use kemseal_api as api;
pub use kemseal_hybrid as hybrid;
pub use kemseal_internal as internal;
pub use kemseal_kem as kem;
pub use kemseal_params as params;

/// Common imports for kemseal users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Aead, Kem, KeyDerivation, PublicKeyEncoding, Serialize};

    // Re-export key-carrying types
    pub use crate::api::{EncapsulatedKey, SymmetricKey};

    pub use crate::algorithms::{Aes128Gcm, Aes256Gcm, DeterministicRandom, Kdf1, Kdf2};

    pub use crate::kem::{
        CancellationToken, KeyGenConfig, KeyPair, KeyPairGenerator, RsaKem, RsaPrivateKey,
        RsaPublicKey,
    };

    pub use crate::hybrid::{
        CiphertextBundle, HybridConfig, HybridDecryptor, HybridEncryptor, Identity,
    };
}
