//! Deterministic random byte stream keyed by caller seed material
//!
//! The seed is condensed with HKDF-SHA256 into a ChaCha20 key, so seeds of
//! any length map to a full-strength stream and no seed byte pattern is
//! repeated in the output. Two instances built from the same seed produce
//! the same stream forever.

use hkdf::Hkdf;
use kemseal_api::error::validate;
use kemseal_api::{Error, Result};
use kemseal_params::{CHACHA20_SEED_LEN, DEFAULT_MIN_SEED_LEN};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sha2::Sha256;
use zeroize::Zeroizing;

use core::fmt;

/// HKDF salt for the seed condensation step
pub const DRBG_SALT: &[u8] = b"kemseal-drbg-salt-v1";

/// HKDF info string binding the stream to key generation
pub const DRBG_INFO: &[u8] = b"kemseal-keygen-drbg-v1";

/// Seed-keyed CSPRNG implementing [`RngCore`] and [`CryptoRng`]
pub struct DeterministicRandom {
    rng: ChaCha20Rng,
}

impl DeterministicRandom {
    /// Build a stream from `seed`, requiring the default minimum length.
    pub fn new(seed: &[u8]) -> Result<Self> {
        Self::with_min_seed_len(seed, DEFAULT_MIN_SEED_LEN)
    }

    /// Build a stream from `seed`, rejecting seeds shorter than `min_seed_len`.
    ///
    /// An empty seed is always rejected.
    pub fn with_min_seed_len(seed: &[u8], min_seed_len: usize) -> Result<Self> {
        validate::seed(!seed.is_empty(), "seed is empty")?;
        validate::seed(seed.len() >= min_seed_len, "seed is shorter than the minimum length")?;

        let hk = Hkdf::<Sha256>::new(Some(DRBG_SALT), seed);
        let mut key = Zeroizing::new([0u8; CHACHA20_SEED_LEN]);
        hk.expand(DRBG_INFO, key.as_mut())
            .map_err(|_| Error::param("DeterministicRandom", "HKDF output length rejected"))?;

        Ok(Self {
            rng: ChaCha20Rng::from_seed(*key),
        })
    }

    /// Return the next `n` bytes of the stream.
    pub fn next_bytes(&mut self, n: usize) -> Vec<u8> {
        let mut out = vec![0u8; n];
        self.rng.fill_bytes(&mut out);
        out
    }
}

impl RngCore for DeterministicRandom {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

impl CryptoRng for DeterministicRandom {}

impl fmt::Debug for DeterministicRandom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DeterministicRandom[REDACTED]")
    }
}
