//! Bundle decryption

use core::marker::PhantomData;

use kemseal_algorithms::Aes128Gcm;
use kemseal_api::{Aead, EncapsulatedKey, Error, Kem, Result, SymmetricKey};
use kemseal_kem::RsaKem;
use tracing::debug;
use zeroize::Zeroize;

use crate::bundle::{bound_associated_data, CiphertextBundle};

/// Opens bundles addressed to a private key
///
/// Every rejected bundle ends in `DecapsulationFailed` or
/// `AuthenticationFailed`. Both print the same message. A bad encapsulation
/// still pays for the RSA private-key operation and the KDF inside the KEM,
/// then runs the AEAD under a zero key, so the work performed is the same
/// whichever stage fails.
pub struct HybridDecryptor<K: Kem = RsaKem, A: Aead = Aes128Gcm> {
    kem: K,
    _aead: PhantomData<fn() -> A>,
}

impl HybridDecryptor {
    /// RSA-KEM with AES-128-GCM
    pub fn new() -> Self {
        Self::with_kem(RsaKem::new())
    }
}

impl Default for HybridDecryptor {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Kem, A: Aead> HybridDecryptor<K, A> {
    /// Decryptor over a caller-supplied KEM
    pub fn with_kem(kem: K) -> Self {
        Self {
            kem,
            _aead: PhantomData,
        }
    }

    /// The KEM used to recover bundle keys
    pub fn kem(&self) -> &K {
        &self.kem
    }

    /// Recover the plaintext of `bundle`.
    pub fn decrypt(&self, private_key: &K::SecretKey, bundle: &CiphertextBundle) -> Result<Vec<u8>> {
        self.decrypt_with_aad(private_key, bundle, &[])
    }

    /// Recover the plaintext of a bundle sealed with associated data `aad`.
    pub fn decrypt_with_aad(
        &self,
        private_key: &K::SecretKey,
        bundle: &CiphertextBundle,
        aad: &[u8],
    ) -> Result<Vec<u8>> {
        let result = self.open(private_key, bundle, aad);
        if result.is_err() {
            debug!("bundle rejected");
        }
        result
    }

    fn open(
        &self,
        private_key: &K::SecretKey,
        bundle: &CiphertextBundle,
        aad: &[u8],
    ) -> Result<Vec<u8>> {
        let encapsulation = EncapsulatedKey::new(bundle.encapsulation().to_vec());
        let (key, decapsulated) = match self.kem.decapsulate(private_key, &encapsulation, A::KEY_LEN)
        {
            Ok(key) => (key, true),
            Err(Error::DecapsulationFailed) => (SymmetricKey::zeroed(A::KEY_LEN), false),
            Err(other) => return Err(other),
        };

        let cipher = A::new(&key)?;
        let bound = bound_associated_data(bundle.encapsulation(), aad);
        let opened = cipher.decrypt_detached(bundle.nonce(), bundle.ciphertext(), bundle.tag(), &bound);

        match opened {
            Ok(plaintext) if decapsulated => Ok(plaintext),
            Ok(mut plaintext) => {
                plaintext.zeroize();
                Err(Error::DecapsulationFailed)
            }
            Err(_) if !decapsulated => Err(Error::DecapsulationFailed),
            Err(_) => Err(Error::AuthenticationFailed),
        }
    }
}
