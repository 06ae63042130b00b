//! Trait definitions for the primitives the hybrid scheme is built from

pub mod aead;
pub mod encoding;
pub mod kdf;
pub mod kem;
pub mod serialize;

pub use aead::Aead;
pub use encoding::PublicKeyEncoding;
pub use kdf::KeyDerivation;
pub use kem::Kem;
pub use serialize::Serialize;
