//! RSA-KEM over a pluggable key-derivation function

use kemseal_algorithms::Kdf1;
use kemseal_api::error::validate;
use kemseal_api::{EncapsulatedKey, Kem, KeyDerivation, Result, SymmetricKey};
use kemseal_internal::endian::copy_be_padded;
use num_bigint_dig::{BigUint, RandBigInt};
use rand::{CryptoRng, RngCore};
use sha2::Sha256;
use zeroize::{Zeroize, Zeroizing};

use super::keys::{RsaPrivateKey, RsaPublicKey};

/// RSA-KEM with KDF1 over SHA-256 unless another KDF is supplied
///
/// Encapsulation draws `r` uniformly from `[2, n)`, sends `r^e mod n` as a
/// big-endian integer of exactly the modulus byte length, and derives the
/// symmetric key from `r` encoded the same way.
#[derive(Debug, Clone, Copy, Default)]
pub struct RsaKem<K = Kdf1<Sha256>> {
    kdf: K,
}

impl RsaKem {
    /// RSA-KEM with the default KDF
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K: KeyDerivation> RsaKem<K> {
    /// RSA-KEM with a caller-chosen KDF
    pub fn with_kdf(kdf: K) -> Self {
        Self { kdf }
    }

    /// The configured KDF
    pub fn kdf(&self) -> &K {
        &self.kdf
    }

    fn check_key_len(&self, key_len: usize) -> Result<()> {
        validate::parameter(key_len > 0, "RSA-KEM key length", "must be non-zero")?;
        validate::parameter(
            key_len <= self.kdf.max_output_len(),
            "RSA-KEM key length",
            "exceeds the KDF output limit",
        )
    }

    fn derive_from(&self, r: &BigUint, modulus_len: usize, key_len: usize) -> Result<SymmetricKey> {
        let raw = Zeroizing::new(r.to_bytes_be());
        let mut encoded = Zeroizing::new(vec![0u8; modulus_len]);
        validate::parameter(
            copy_be_padded(&raw, &mut encoded),
            "RSA-KEM",
            "integer wider than the modulus",
        )?;
        self.kdf.derive(&encoded, key_len)
    }
}

impl<K: KeyDerivation> Kem for RsaKem<K> {
    type PublicKey = RsaPublicKey;
    type SecretKey = RsaPrivateKey;

    fn name(&self) -> &'static str {
        "RSA-KEM"
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        public_key: &RsaPublicKey,
        key_len: usize,
    ) -> Result<(SymmetricKey, EncapsulatedKey)> {
        self.check_key_len(key_len)?;

        let modulus_len = public_key.modulus_len();
        let mut r = rng.gen_biguint_range(&BigUint::from(2u32), public_key.n());
        let c = r.modpow(public_key.e(), public_key.n());

        let key = self.derive_from(&r, modulus_len, key_len);
        r.zeroize();
        let key = key?;

        let mut encapsulation = vec![0u8; modulus_len];
        validate::parameter(
            copy_be_padded(&c.to_bytes_be(), &mut encapsulation),
            "RSA-KEM",
            "ciphertext wider than the modulus",
        )?;

        Ok((key, EncapsulatedKey::new(encapsulation)))
    }

    fn decapsulate(
        &self,
        secret_key: &RsaPrivateKey,
        encapsulation: &EncapsulatedKey,
        key_len: usize,
    ) -> Result<SymmetricKey> {
        self.check_key_len(key_len)?;

        let modulus_len = secret_key.modulus_len();
        let c = BigUint::from_bytes_be(encapsulation.as_ref());
        let well_formed = encapsulation.len() == modulus_len && &c < secret_key.n();

        // Rejected inputs are decrypted as `c mod n`; the error is raised
        // only after the KDF has run.
        let c = if well_formed { c } else { c % secret_key.n() };
        let mut r = secret_key.decrypt_raw(&c);
        let key = self.derive_from(&r, modulus_len, key_len);
        r.zeroize();

        validate::decapsulation(well_formed)?;
        key
    }
}
