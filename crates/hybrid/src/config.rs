//! Runtime configuration for the hybrid scheme

use kemseal_api::Result;
use kemseal_kem::KeyGenConfig;

/// Settings for key generation and multi-recipient encryption
///
/// With the `serde` feature this loads from any self-describing format;
/// missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HybridConfig {
    /// Key generation settings used by [`Identity`](crate::Identity)
    pub keygen: KeyGenConfig,
    /// Seal recipients on the rayon thread pool
    pub parallel: bool,
}

impl Default for HybridConfig {
    fn default() -> Self {
        Self {
            keygen: KeyGenConfig::default(),
            parallel: true,
        }
    }
}

impl HybridConfig {
    /// Default settings: 1024-bit keys, parallel sealing
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the key generation settings
    pub fn with_keygen(mut self, keygen: KeyGenConfig) -> Self {
        self.keygen = keygen;
        self
    }

    /// Seal recipients on the rayon pool (`true`) or the calling thread
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check the key generation settings
    pub fn validate(&self) -> Result<()> {
        self.keygen.validate()
    }
}
