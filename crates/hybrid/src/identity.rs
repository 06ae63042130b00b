//! A key pair owned by one party
//!
//! Generate the identity from seed material once, publish
//! [`public_key_hex`](Identity::public_key_hex), and open incoming bundles
//! with [`decrypt`](Identity::decrypt).

use kemseal_api::Result;
use kemseal_kem::{CancellationToken, KeyGenConfig, KeyPair, KeyPairGenerator, RsaPublicKey};

use crate::bundle::CiphertextBundle;
use crate::config::HybridConfig;
use crate::decrypt::HybridDecryptor;

/// A party's RSA key pair together with the operations that need it
///
/// The value is owned by the caller; nothing is stored globally.
#[derive(Debug)]
pub struct Identity {
    keypair: KeyPair,
}

impl Identity {
    /// Derive the identity determined by `seed`. Blocks for the duration
    /// of key generation.
    pub fn from_seed(seed: &[u8], config: &KeyGenConfig) -> Result<Self> {
        Self::from_seed_cancellable(seed, config, &CancellationToken::new())
    }

    /// Derive the identity with the key generation settings of `config`.
    pub fn from_config(seed: &[u8], config: &HybridConfig) -> Result<Self> {
        config.validate()?;
        Self::from_seed(seed, &config.keygen)
    }

    /// Like [`from_seed`](Self::from_seed), stoppable through `token`.
    pub fn from_seed_cancellable(
        seed: &[u8],
        config: &KeyGenConfig,
        token: &CancellationToken,
    ) -> Result<Self> {
        let generator = KeyPairGenerator::new(config.clone())?;
        let keypair = generator.generate_cancellable(seed, token)?;
        Ok(Self { keypair })
    }

    /// Wrap an existing key pair
    pub fn from_keypair(keypair: KeyPair) -> Self {
        Self { keypair }
    }

    /// The underlying key pair
    pub fn keypair(&self) -> &KeyPair {
        &self.keypair
    }

    /// Public half of the key pair
    pub fn public_key(&self) -> &RsaPublicKey {
        self.keypair.public()
    }

    /// Hex modulus to hand to senders
    pub fn public_key_hex(&self) -> String {
        self.keypair.public_key_hex()
    }

    /// Open a bundle addressed to this identity
    pub fn decrypt(&self, bundle: &CiphertextBundle) -> Result<Vec<u8>> {
        HybridDecryptor::new().decrypt(self.keypair.private(), bundle)
    }

    /// Open a bundle sealed with associated data `aad`
    pub fn decrypt_with_aad(&self, bundle: &CiphertextBundle, aad: &[u8]) -> Result<Vec<u8>> {
        HybridDecryptor::new().decrypt_with_aad(self.keypair.private(), bundle, aad)
    }
}
