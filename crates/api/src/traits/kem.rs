//! Trait definition for Key Encapsulation Mechanisms (KEM)
//!
//! A KEM turns a recipient public key into a fresh symmetric key plus an
//! encapsulation that only the matching private key can open.

use super::encoding::PublicKeyEncoding;
use crate::types::{EncapsulatedKey, SymmetricKey};
use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for Key Encapsulation Mechanism (KEM) with domain-specific types.
///
/// Implementations are values rather than bare type-level markers so they
/// can carry a configured key-derivation function. They must be shareable
/// across the worker threads used for multi-recipient encryption.
pub trait Kem: Send + Sync {
    /// Public key type.
    ///
    /// Implements `PublicKeyEncoding` so recipients can be named by a
    /// transportable string.
    type PublicKey: Clone + PublicKeyEncoding + Send + Sync;

    /// Secret key type.
    ///
    /// # Security Note
    /// Implements `Zeroize` for secure memory cleanup.
    type SecretKey: Zeroize + Send + Sync;

    /// Returns the KEM algorithm name.
    fn name(&self) -> &'static str;

    /// Encapsulate a fresh `key_len`-byte key for `public_key`.
    ///
    /// # Security Requirements
    /// - Must use fresh randomness from the provided RNG on every call.
    /// - The returned key must never be reused for a second message.
    fn encapsulate<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        public_key: &Self::PublicKey,
        key_len: usize,
    ) -> Result<(SymmetricKey, EncapsulatedKey)>;

    /// Recover the key from an encapsulation using the private key.
    ///
    /// Fails with [`Error::DecapsulationFailed`](crate::Error::DecapsulationFailed)
    /// when the encapsulation is malformed for this key.
    fn decapsulate(
        &self,
        secret_key: &Self::SecretKey,
        encapsulation: &EncapsulatedKey,
        key_len: usize,
    ) -> Result<SymmetricKey>;
}
