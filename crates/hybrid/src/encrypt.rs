//! Multi-recipient encryption

use core::marker::PhantomData;

use kemseal_algorithms::Aes128Gcm;
use kemseal_api::{Aead, Kem, PublicKeyEncoding, Result};
use kemseal_kem::RsaKem;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::bundle::{bound_associated_data, CiphertextBundle};
use crate::config::HybridConfig;

/// Seals one plaintext for any number of recipients
///
/// Every recipient gets an independent encapsulated key and nonce, so the
/// bundles share nothing but the plaintext length.
pub struct HybridEncryptor<K: Kem = RsaKem, A: Aead = Aes128Gcm> {
    kem: K,
    parallel: bool,
    _aead: PhantomData<fn() -> A>,
}

impl HybridEncryptor {
    /// RSA-KEM with AES-128-GCM, sealing recipients in parallel
    pub fn new() -> Self {
        Self::with_kem(RsaKem::new())
    }

    /// Default primitives with the settings from `config`
    pub fn from_config(config: &HybridConfig) -> Self {
        Self::new().with_parallel(config.parallel)
    }
}

impl Default for HybridEncryptor {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Kem, A: Aead> HybridEncryptor<K, A> {
    /// Encryptor over a caller-supplied KEM
    pub fn with_kem(kem: K) -> Self {
        Self {
            kem,
            parallel: true,
            _aead: PhantomData,
        }
    }

    /// Choose between the rayon pool and the calling thread
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The KEM used to encapsulate bundle keys
    pub fn kem(&self) -> &K {
        &self.kem
    }

    /// Encrypt `plaintext` for each encoded public key in `recipients`.
    ///
    /// All keys are parsed before anything is encrypted: one malformed key
    /// fails the whole call with `InvalidPublicKey` and no bundle is
    /// produced. The result holds one bundle per recipient, in input order.
    pub fn encrypt_for_recipients<S: AsRef<str>>(
        &self,
        plaintext: &[u8],
        recipients: &[S],
    ) -> Result<Vec<CiphertextBundle>> {
        self.encrypt_for_recipients_with_aad(plaintext, &[], recipients)
    }

    /// [`encrypt_for_recipients`](Self::encrypt_for_recipients) binding
    /// `aad` into every bundle's authentication tag.
    pub fn encrypt_for_recipients_with_aad<S: AsRef<str>>(
        &self,
        plaintext: &[u8],
        aad: &[u8],
        recipients: &[S],
    ) -> Result<Vec<CiphertextBundle>> {
        let keys = recipients
            .iter()
            .map(|encoded| K::PublicKey::from_encoded(encoded.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        self.encrypt_for_keys_with_aad(plaintext, aad, &keys)
    }

    /// Encrypt `plaintext` for already parsed public keys.
    pub fn encrypt_for_keys(
        &self,
        plaintext: &[u8],
        keys: &[K::PublicKey],
    ) -> Result<Vec<CiphertextBundle>> {
        self.encrypt_for_keys_with_aad(plaintext, &[], keys)
    }

    /// [`encrypt_for_keys`](Self::encrypt_for_keys) with associated data.
    ///
    /// Each recipient draws from its own OS RNG handle.
    pub fn encrypt_for_keys_with_aad(
        &self,
        plaintext: &[u8],
        aad: &[u8],
        keys: &[K::PublicKey],
    ) -> Result<Vec<CiphertextBundle>> {
        debug!(
            recipients = keys.len(),
            parallel = self.parallel,
            kem = self.kem.name(),
            aead = A::name(),
            "encrypting for recipients"
        );

        if self.parallel {
            keys.par_iter()
                .enumerate()
                .map(|(index, key)| self.seal_indexed(&mut OsRng, plaintext, aad, key, index))
                .collect()
        } else {
            keys.iter()
                .enumerate()
                .map(|(index, key)| self.seal_indexed(&mut OsRng, plaintext, aad, key, index))
                .collect()
        }
    }

    /// Sequential encryption drawing all randomness from `rng`.
    ///
    /// With a seeded RNG the output is reproducible.
    pub fn encrypt_with_rng<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        plaintext: &[u8],
        keys: &[K::PublicKey],
    ) -> Result<Vec<CiphertextBundle>> {
        self.encrypt_with_rng_and_aad(rng, plaintext, &[], keys)
    }

    /// [`encrypt_with_rng`](Self::encrypt_with_rng) with associated data.
    pub fn encrypt_with_rng_and_aad<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        plaintext: &[u8],
        aad: &[u8],
        keys: &[K::PublicKey],
    ) -> Result<Vec<CiphertextBundle>> {
        debug!(recipients = keys.len(), "encrypting for recipients with caller RNG");
        keys.iter()
            .enumerate()
            .map(|(index, key)| self.seal_indexed(rng, plaintext, aad, key, index))
            .collect()
    }

    fn seal_indexed<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        plaintext: &[u8],
        aad: &[u8],
        public_key: &K::PublicKey,
        index: usize,
    ) -> Result<CiphertextBundle> {
        let bundle = self.seal(rng, plaintext, aad, public_key)?;
        trace!(index, "recipient sealed");
        Ok(bundle)
    }

    fn seal<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        plaintext: &[u8],
        aad: &[u8],
        public_key: &K::PublicKey,
    ) -> Result<CiphertextBundle> {
        let (key, encapsulation) = self.kem.encapsulate(rng, public_key, A::KEY_LEN)?;
        let cipher = A::new(&key)?;

        let mut nonce = vec![0u8; A::NONCE_LEN];
        rng.fill_bytes(&mut nonce);

        let bound = bound_associated_data(encapsulation.as_ref(), aad);
        let (ciphertext, tag) = cipher.encrypt_detached(&nonce, plaintext, &bound)?;

        CiphertextBundle::from_parts(ciphertext, nonce, tag, encapsulation.into_vec())
    }
}
