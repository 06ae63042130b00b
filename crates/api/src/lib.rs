//! Public API traits and types for the kemseal library
//!
//! This crate provides the public API surface for the kemseal crates: the
//! error type, the primitive traits the hybrid scheme is written against,
//! and the secret-carrying types passed between them.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;

pub use traits::{Aead, Kem, KeyDerivation, PublicKeyEncoding, Serialize};

// Re-export trait modules for direct access
pub use traits::{aead, encoding, kdf, kem, serialize};
