//! Key derivation from a KEM shared value

use crate::types::SymmetricKey;
use crate::Result;

/// Derives symmetric keys of a requested length from secret input.
pub trait KeyDerivation: Send + Sync {
    /// Returns the KDF name.
    fn name(&self) -> &'static str;

    /// Largest output length this KDF supports.
    fn max_output_len(&self) -> usize;

    /// Derives `len` bytes from `secret`.
    ///
    /// Fails with `InvalidParameter` when `len` is zero or above
    /// [`max_output_len`](Self::max_output_len).
    fn derive(&self, secret: &[u8], len: usize) -> Result<SymmetricKey>;
}
