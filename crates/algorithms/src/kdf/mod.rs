//! Counter-mode key derivation functions from ISO/IEC 18033-2
//!
//! Both functions hash the shared secret followed by a 32-bit big-endian
//! counter and concatenate the blocks until the requested length is
//! reached:
//!
//! ```text
//! KDF(Z, L) = H(Z || I2OSP(c0, 4)) || H(Z || I2OSP(c0 + 1, 4)) || ...
//! ```
//!
//! [`Kdf1`] starts the counter at 0 and [`Kdf2`] at 1.

use core::fmt;
use core::marker::PhantomData;

use kemseal_api::error::validate;
use kemseal_api::{KeyDerivation, Result, SymmetricKey};
use kemseal_internal::endian::u32_to_be_bytes;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

fn derive_counter_mode<D: Digest>(
    secret: &[u8],
    len: usize,
    first_counter: u32,
    max_len: usize,
) -> Result<SymmetricKey> {
    validate::parameter(len > 0, "kdf output length", "must be non-zero")?;
    validate::parameter(len <= max_len, "kdf output length", "exceeds the counter range")?;

    let block_len = <D as Digest>::output_size();
    let mut okm = Zeroizing::new(Vec::with_capacity(len + block_len));
    let mut counter = first_counter;

    while okm.len() < len {
        let mut hasher = D::new();
        hasher.update(secret);
        hasher.update(u32_to_be_bytes(counter));
        let block = Zeroizing::new(hasher.finalize().to_vec());
        okm.extend_from_slice(&block);
        counter = counter.wrapping_add(1);
    }

    okm.truncate(len);
    Ok(SymmetricKey::from_slice(&okm))
}

fn max_counter_output<D: Digest>(first_counter: u32) -> usize {
    let blocks = (u32::MAX - first_counter) as usize + 1;
    blocks.saturating_mul(<D as Digest>::output_size())
}

/// KDF1: counter starting at zero
pub struct Kdf1<D = Sha256> {
    _digest: PhantomData<fn() -> D>,
}

/// KDF2: counter starting at one
pub struct Kdf2<D = Sha256> {
    _digest: PhantomData<fn() -> D>,
}

impl<D> Kdf1<D> {
    /// Creates the KDF
    pub const fn new() -> Self {
        Self {
            _digest: PhantomData,
        }
    }
}

impl<D> Kdf2<D> {
    /// Creates the KDF
    pub const fn new() -> Self {
        Self {
            _digest: PhantomData,
        }
    }
}

impl<D: Digest> KeyDerivation for Kdf1<D> {
    fn name(&self) -> &'static str {
        "KDF1"
    }

    fn max_output_len(&self) -> usize {
        max_counter_output::<D>(0)
    }

    fn derive(&self, secret: &[u8], len: usize) -> Result<SymmetricKey> {
        derive_counter_mode::<D>(secret, len, 0, self.max_output_len())
    }
}

impl<D: Digest> KeyDerivation for Kdf2<D> {
    fn name(&self) -> &'static str {
        "KDF2"
    }

    fn max_output_len(&self) -> usize {
        max_counter_output::<D>(1)
    }

    fn derive(&self, secret: &[u8], len: usize) -> Result<SymmetricKey> {
        derive_counter_mode::<D>(secret, len, 1, self.max_output_len())
    }
}

// Manual impls so the digest parameter does not need to be Clone or Debug

impl<D> Default for Kdf1<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Default for Kdf2<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for Kdf1<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Kdf1<D> {}

impl<D> Clone for Kdf2<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Kdf2<D> {}

impl<D> fmt::Debug for Kdf1<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Kdf1")
    }
}

impl<D> fmt::Debug for Kdf2<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Kdf2")
    }
}
