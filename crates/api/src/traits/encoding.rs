//! Text encoding of public keys for out-of-band distribution

use crate::Result;

/// A public key with a canonical string form.
pub trait PublicKeyEncoding: Sized {
    /// Canonical encoding. Parsing it back yields an equal key.
    fn to_encoded(&self) -> String;

    /// Parses and validates an encoded key.
    fn from_encoded(encoded: &str) -> Result<Self>;
}
