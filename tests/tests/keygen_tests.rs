//! Seeded key generation through the public API

use std::thread;
use std::time::Duration;

use kemseal::prelude::*;
use kemseal_tests::{init_tracing, small_config, SEED_S};

#[test]
fn test_same_seed_regenerates_identical_keys() {
    init_tracing();
    let generator = KeyPairGenerator::new(small_config()).unwrap();
    let first = generator.generate(SEED_S).unwrap();
    let second = generator.generate(SEED_S).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.private().primes(), second.private().primes());
}

#[test]
fn test_seed_sensitivity() {
    let generator = KeyPairGenerator::new(small_config()).unwrap();
    let mut flipped = *SEED_S;
    flipped[63] ^= 1;
    let a = generator.generate(SEED_S).unwrap();
    let b = generator.generate(&flipped).unwrap();
    assert_ne!(a.public_key_hex(), b.public_key_hex());
}

#[test]
fn test_drbg_stream_is_seed_determined() {
    let mut a = DeterministicRandom::new(SEED_S).unwrap();
    let mut b = DeterministicRandom::new(SEED_S).unwrap();
    assert_eq!(a.next_bytes(96), b.next_bytes(96));
    assert!(DeterministicRandom::new(&[]).is_err());
}

#[test]
fn test_cancel_from_another_thread() {
    init_tracing();
    // 4096-bit generation takes long enough for the cancel to land
    let generator =
        KeyPairGenerator::new(KeyGenConfig::new().with_modulus_bits(4096)).unwrap();
    let token = CancellationToken::new();

    let worker = {
        let token = token.clone();
        thread::spawn(move || generator.generate_cancellable(SEED_S, &token))
    };
    thread::sleep(Duration::from_millis(5));
    token.cancel();

    match worker.join().unwrap() {
        Err(Error::Cancelled { .. }) => {}
        // The search may still win the race on a fast machine
        Ok(kp) => assert_eq!(kp.public().modulus_bits(), 4096),
        Err(other) => panic!("unexpected error {:?}", other),
    }
    assert!(token.is_cancelled());
}

#[test]
fn test_candidate_budget_is_enforced() {
    let generator = KeyPairGenerator::new(small_config().with_max_prime_candidates(1)).unwrap();
    let outcomes: Vec<_> = (0u8..8)
        .map(|i| generator.generate(&[i; 16]))
        .collect();
    assert!(outcomes
        .iter()
        .any(|r| matches!(r, Err(Error::KeyGenerationFailed { .. }))));
}

#[test]
fn test_invalid_configs_rejected() {
    for config in [
        KeyGenConfig::new().with_modulus_bits(256),
        KeyGenConfig::new().with_modulus_bits(16384),
        KeyGenConfig::new().with_max_prime_candidates(0),
    ] {
        assert!(matches!(
            KeyPairGenerator::new(config),
            Err(Error::InvalidParameter { .. })
        ));
    }
}
