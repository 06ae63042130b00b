//! Error type definitions for cryptographic operations

use thiserror::Error;

/// Result type for kemseal operations
pub type Result<T> = core::result::Result<T, Error>;

/// Primary error type for kemseal operations
///
/// The two decryption failures (`DecapsulationFailed` and
/// `AuthenticationFailed`) render the same message and carry no context, so
/// that neither the text nor its length tells a caller which stage rejected
/// a bundle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Seed material unusable for deterministic generation
    #[error("Invalid seed: {context}")]
    InvalidSeed {
        context: &'static str,
    },

    /// Key generation did not produce a key pair
    #[error("Key generation failed: {context}: {message}")]
    KeyGenerationFailed {
        context: &'static str,
        message: String,
    },

    /// Public key could not be parsed or is not usable
    #[error("Invalid public key: {context}: {message}")]
    InvalidPublicKey {
        context: &'static str,
        message: String,
    },

    /// Encapsulated key was malformed or out of range for the private key
    #[error("decryption failed")]
    DecapsulationFailed,

    /// Authentication tag did not verify
    #[error("decryption failed")]
    AuthenticationFailed,

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Wire-format encoding or decoding error
    #[error("Serialization error: {context}: {message}")]
    Serialization {
        context: &'static str,
        message: String,
    },

    /// Operation stopped through its cancellation token
    #[error("Operation cancelled: {context}")]
    Cancelled {
        context: &'static str,
    },
}

impl Error {
    /// Shorthand for an [`Error::InvalidParameter`]
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for an [`Error::InvalidPublicKey`]
    pub fn public_key(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidPublicKey {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for an [`Error::KeyGenerationFailed`]
    pub fn key_generation(context: &'static str, message: impl Into<String>) -> Self {
        Self::KeyGenerationFailed {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for an [`Error::Serialization`]
    pub fn serialization(context: &'static str, message: impl Into<String>) -> Self {
        Self::Serialization {
            context,
            message: message.into(),
        }
    }

    /// True for the errors a decryptor may return for a rejected bundle
    pub fn is_decryption_failure(&self) -> bool {
        matches!(self, Self::DecapsulationFailed | Self::AuthenticationFailed)
    }
}
