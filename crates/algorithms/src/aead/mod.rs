//! AES-GCM adapters for the [`Aead`] trait
//!
//! The cipher itself comes from the `aes-gcm` crate; this module fixes the
//! nonce and tag sizes, detaches the tag, and maps every failure onto the
//! kemseal error type.

use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::{Nonce, Tag};
use kemseal_api::error::validate;
use kemseal_api::{Aead, Error, Result, SymmetricKey};
use kemseal_params::{AES128_KEY_LEN, AES256_KEY_LEN, AES_GCM_NONCE_LEN, AES_GCM_TAG_LEN};
use zeroize::Zeroize;

macro_rules! impl_aes_gcm_variant {
    ($(#[$meta:meta])* $name:ident, $inner:ty, $key_len:expr, $alg:literal) => {
        $(#[$meta])*
        pub struct $name {
            cipher: $inner,
        }

        impl Aead for $name {
            const KEY_LEN: usize = $key_len;
            const NONCE_LEN: usize = AES_GCM_NONCE_LEN;
            const TAG_LEN: usize = AES_GCM_TAG_LEN;

            fn name() -> &'static str {
                $alg
            }

            fn new(key: &SymmetricKey) -> Result<Self> {
                validate::length(concat!($alg, " key"), key.len(), Self::KEY_LEN)?;
                let cipher = <$inner>::new_from_slice(key.as_ref()).map_err(|_| {
                    Error::InvalidLength {
                        context: concat!($alg, " key"),
                        expected: Self::KEY_LEN,
                        actual: key.len(),
                    }
                })?;
                Ok(Self { cipher })
            }

            fn encrypt_detached(
                &self,
                nonce: &[u8],
                plaintext: &[u8],
                aad: &[u8],
            ) -> Result<(Vec<u8>, Vec<u8>)> {
                validate::length(concat!($alg, " nonce"), nonce.len(), Self::NONCE_LEN)?;

                let mut buffer = plaintext.to_vec();
                match self
                    .cipher
                    .encrypt_in_place_detached(Nonce::from_slice(nonce), aad, &mut buffer)
                {
                    Ok(tag) => Ok((buffer, tag.to_vec())),
                    Err(_) => {
                        buffer.zeroize();
                        Err(Error::param($alg, "encryption failed"))
                    }
                }
            }

            fn decrypt_detached(
                &self,
                nonce: &[u8],
                ciphertext: &[u8],
                tag: &[u8],
                aad: &[u8],
            ) -> Result<Vec<u8>> {
                validate::authentication(
                    nonce.len() == Self::NONCE_LEN && tag.len() == Self::TAG_LEN,
                )?;

                let mut buffer = ciphertext.to_vec();
                match self.cipher.decrypt_in_place_detached(
                    Nonce::from_slice(nonce),
                    aad,
                    &mut buffer,
                    Tag::from_slice(tag),
                ) {
                    Ok(()) => Ok(buffer),
                    Err(_) => {
                        buffer.zeroize();
                        Err(Error::AuthenticationFailed)
                    }
                }
            }
        }
    };
}

impl_aes_gcm_variant!(
    /// AES-128 in Galois/Counter Mode with a 96-bit nonce and 128-bit tag
    Aes128Gcm,
    aes_gcm::Aes128Gcm,
    AES128_KEY_LEN,
    "AES-128-GCM"
);

impl_aes_gcm_variant!(
    /// AES-256 in Galois/Counter Mode with a 96-bit nonce and 128-bit tag
    Aes256Gcm,
    aes_gcm::Aes256Gcm,
    AES256_KEY_LEN,
    "AES-256-GCM"
);
