//! RSA-based Key Encapsulation Mechanism (RSA-KEM)
//!
//! Key generation is deterministic in its seed (see [`KeyPairGenerator`]);
//! the KEM follows ISO/IEC 18033-2: a uniformly random integer `r` is
//! encrypted with textbook RSA and the symmetric key is derived from `r`.

mod kem;
mod keygen;
mod keys;

pub use kem::RsaKem;
pub use keygen::{CancellationToken, KeyGenConfig, KeyPairGenerator};
pub use keys::{KeyPair, RsaPrivateKey, RsaPublicKey};

#[cfg(test)]
mod tests;
