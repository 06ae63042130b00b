//! Authenticated encryption with associated data

use crate::types::SymmetricKey;
use crate::Result;

/// An AEAD cipher keyed once and used for a single message.
///
/// Tags are detached so the hybrid bundle can carry them as a separate field.
pub trait Aead: Sized {
    /// Key size in bytes
    const KEY_LEN: usize;
    /// Nonce size in bytes
    const NONCE_LEN: usize;
    /// Tag size in bytes
    const TAG_LEN: usize;

    /// Returns the AEAD algorithm name.
    fn name() -> &'static str;

    /// Creates a cipher instance from a key of exactly `KEY_LEN` bytes.
    fn new(key: &SymmetricKey) -> Result<Self>;

    /// Encrypts `plaintext`, returning the ciphertext and detached tag.
    fn encrypt_detached(
        &self,
        nonce: &[u8],
        plaintext: &[u8],
        aad: &[u8],
    ) -> Result<(Vec<u8>, Vec<u8>)>;

    /// Verifies `tag` and decrypts `ciphertext`.
    ///
    /// Any mismatch, including a nonce or tag of the wrong length, fails with
    /// [`Error::AuthenticationFailed`](crate::Error::AuthenticationFailed)
    /// and returns no plaintext.
    fn decrypt_detached(
        &self,
        nonce: &[u8],
        ciphertext: &[u8],
        tag: &[u8],
        aad: &[u8],
    ) -> Result<Vec<u8>>;
}
