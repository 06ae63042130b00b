//! Deterministic RSA key generation
//!
//! Primes are found by incremental search: a random odd start point with
//! its two top bits set is stepped by 2 until a candidate survives trial
//! division by small primes, a Miller-Rabin test and `gcd(p - 1, e) == 1`.
//! Setting the two top bits of both primes guarantees the product has the
//! full requested length.
//!
//! All randomness comes from a [`DeterministicRandom`] keyed by the caller's
//! seed, so the same seed and configuration always yield the same key pair.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use kemseal_algorithms::DeterministicRandom;
use kemseal_api::error::validate;
use kemseal_api::{Error, Result};
use kemseal_params::{
    DEFAULT_MAX_PRIME_CANDIDATES, DEFAULT_MIN_SEED_LEN, DEFAULT_MODULUS_BITS, MAX_MODULUS_BITS,
    MIN_MODULUS_BITS, RSA_PUBLIC_EXPONENT,
};
use num_bigint_dig::prime::probably_prime;
use num_bigint_dig::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use tracing::{debug, trace};

use super::keys::{KeyPair, RsaPrivateKey};

/// Odd primes below 256 used to discard candidates before primality testing
const SIEVE_PRIMES: &[u32] = &[
    3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193,
    197, 199, 211, 223, 227, 229, 233, 239, 241, 251,
];

/// Key generation settings
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KeyGenConfig {
    /// Modulus length in bits
    pub modulus_bits: usize,
    /// Candidates tested per prime before giving up
    pub max_prime_candidates: usize,
    /// Shortest accepted seed in bytes
    pub min_seed_len: usize,
}

impl Default for KeyGenConfig {
    fn default() -> Self {
        Self {
            modulus_bits: DEFAULT_MODULUS_BITS,
            max_prime_candidates: DEFAULT_MAX_PRIME_CANDIDATES,
            min_seed_len: DEFAULT_MIN_SEED_LEN,
        }
    }
}

impl KeyGenConfig {
    /// Default configuration: 1024-bit modulus
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the modulus length
    pub fn with_modulus_bits(mut self, bits: usize) -> Self {
        self.modulus_bits = bits;
        self
    }

    /// Set the per-prime candidate budget
    pub fn with_max_prime_candidates(mut self, candidates: usize) -> Self {
        self.max_prime_candidates = candidates;
        self
    }

    /// Set the minimum seed length
    pub fn with_min_seed_len(mut self, len: usize) -> Self {
        self.min_seed_len = len;
        self
    }

    /// Check that every setting is usable
    pub fn validate(&self) -> Result<()> {
        validate::parameter(
            self.modulus_bits >= MIN_MODULUS_BITS,
            "modulus_bits",
            "below the minimum modulus size",
        )?;
        validate::parameter(
            self.modulus_bits <= MAX_MODULUS_BITS,
            "modulus_bits",
            "above the maximum modulus size",
        )?;
        validate::parameter(
            self.max_prime_candidates > 0,
            "max_prime_candidates",
            "must be at least 1",
        )?;
        Ok(())
    }
}

/// Shared flag for stopping a running key generation from another thread
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// A token that has not been cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Every clone of the token observes it.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Whether cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Generates RSA key pairs from seed material
///
/// Generation is CPU-bound and blocks the calling thread; a 1024-bit key
/// typically tests a few hundred candidates.
#[derive(Debug, Clone, Default)]
pub struct KeyPairGenerator {
    config: KeyGenConfig,
}

impl KeyPairGenerator {
    /// Creates a generator after validating `config`
    pub fn new(config: KeyGenConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration
    pub fn config(&self) -> &KeyGenConfig {
        &self.config
    }

    /// Generate the key pair determined by `seed`.
    pub fn generate(&self, seed: &[u8]) -> Result<KeyPair> {
        self.generate_cancellable(seed, &CancellationToken::new())
    }

    /// Like [`generate`](Self::generate), checking `token` before every
    /// prime candidate.
    pub fn generate_cancellable(
        &self,
        seed: &[u8],
        token: &CancellationToken,
    ) -> Result<KeyPair> {
        let mut rng = DeterministicRandom::with_min_seed_len(seed, self.config.min_seed_len)?;
        self.generate_with_rng(&mut rng, token)
    }

    /// Generate a key pair from an arbitrary CSPRNG.
    ///
    /// The result is deterministic only if `rng` is.
    pub fn generate_with_rng<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        token: &CancellationToken,
    ) -> Result<KeyPair> {
        self.config.validate()?;

        let bits = self.config.modulus_bits;
        let budget = self.config.max_prime_candidates;
        let e = BigUint::from(RSA_PUBLIC_EXPONENT);

        debug!(modulus_bits = bits, "starting RSA key generation");

        let q_bits = bits / 2;
        let p_bits = bits - q_bits;
        let (p, p_tested) = search_prime(rng, p_bits, &e, budget, token)?;
        let (q, q_tested) = search_prime(rng, q_bits, &e, budget, token)?;

        let private = RsaPrivateKey::from_primes(p, q, e)?;
        validate::key_generation(
            private.modulus_bits() == bits,
            "RSA modulus",
            "modulus does not have the requested size",
        )?;

        debug!(
            modulus_bits = bits,
            candidates = p_tested + q_tested,
            "RSA key generation finished"
        );
        Ok(KeyPair::from_private(private))
    }
}

/// Number of Miller-Rabin rounds for a prime of `bits` bits
const fn miller_rabin_rounds(bits: usize) -> usize {
    match bits {
        0..=256 => 40,
        257..=512 => 15,
        513..=1024 => 10,
        1025..=2048 => 6,
        _ => 4,
    }
}

/// Random odd value of exactly `bits` bits with the two top bits set
fn random_start<R: RngCore + ?Sized>(rng: &mut R, bits: usize) -> BigUint {
    let mut candidate = rng.gen_biguint(bits);
    candidate |= BigUint::one() << (bits - 1);
    candidate |= BigUint::one() << (bits - 2);
    candidate |= BigUint::one();
    candidate
}

fn has_small_factor(candidate: &BigUint) -> bool {
    SIEVE_PRIMES
        .iter()
        .any(|&prime| (candidate % prime).is_zero())
}

/// Incremental prime search. Returns the prime and the number of
/// candidates tested.
fn search_prime<R: RngCore + ?Sized>(
    rng: &mut R,
    bits: usize,
    e: &BigUint,
    budget: usize,
    token: &CancellationToken,
) -> Result<(BigUint, usize)> {
    let rounds = miller_rabin_rounds(bits);
    let mut candidate = random_start(rng, bits);
    let mut tested = 0usize;

    while tested < budget {
        if token.is_cancelled() {
            debug!(bits, tested, "RSA key generation cancelled");
            return Err(Error::Cancelled {
                context: "RSA prime search",
            });
        }
        tested += 1;

        if candidate.bits() > bits {
            trace!(bits, "prime candidate outgrew its length, restarting");
            candidate = random_start(rng, bits);
        }

        if !has_small_factor(&candidate)
            && probably_prime(&candidate, rounds)
            && (&candidate - 1u32).gcd(e).is_one()
        {
            trace!(bits, tested, "prime found");
            return Ok((candidate, tested));
        }

        candidate += 2u32;
    }

    debug!(bits, budget, "prime candidate budget exhausted");
    Err(Error::key_generation(
        "RSA prime search",
        "candidate budget exhausted",
    ))
}
