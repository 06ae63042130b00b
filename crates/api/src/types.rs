//! Core types with security guarantees for the kemseal library
//!
//! Key material moves between the KEM, the KDF and the AEAD only inside
//! these wrappers, so it is zeroized when dropped and never printed.

use core::fmt;
use kemseal_internal::constant_time::ct_eq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A derived symmetric key that is securely zeroed when dropped
///
/// This type provides:
/// - Secure zeroing when dropped
/// - Constant-time equality comparison
/// - Debug implementation that hides the actual bytes
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKey {
    data: Vec<u8>,
}

impl SymmetricKey {
    /// Create a key by taking ownership of `data`
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Create by copying from a slice
    pub fn from_slice(slice: &[u8]) -> Self {
        Self {
            data: slice.to_vec(),
        }
    }

    /// Create an all-zero key of `len` bytes
    pub fn zeroed(len: usize) -> Self {
        Self {
            data: vec![0u8; len],
        }
    }

    /// Get the length of the key
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the key is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl AsRef<[u8]> for SymmetricKey {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl PartialEq for SymmetricKey {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&self.data, &other.data)
    }
}

impl Eq for SymmetricKey {}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymmetricKey({})[REDACTED]", self.data.len())
    }
}

/// Opaque output of a KEM encapsulation
///
/// Public data: it travels in the clear inside a ciphertext bundle.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct EncapsulatedKey {
    data: Vec<u8>,
}

impl EncapsulatedKey {
    /// Create a new encapsulation from raw bytes
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Get the length of the encapsulation
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the encapsulation is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Consume the wrapper and return the bytes
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl AsRef<[u8]> for EncapsulatedKey {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<Vec<u8>> for EncapsulatedKey {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl fmt::Debug for EncapsulatedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncapsulatedKey({} bytes)", self.data.len())
    }
}
