//! Unit tests for RSA key generation and RSA-KEM

use std::cell::Cell;

use kemseal_api::{Error, Kem, PublicKeyEncoding};
use num_bigint_dig::BigUint;
use num_traits::One;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use super::*;

thread_local! {
    /// Private-key operations run on this thread
    pub(crate) static DECRYPT_RAW_CALLS: Cell<usize> = const { Cell::new(0) };
}

fn decrypt_raw_calls() -> usize {
    DECRYPT_RAW_CALLS.with(Cell::get)
}

/// 512-bit keys keep the suite fast; the code paths are size-independent.
fn small_generator() -> KeyPairGenerator {
    KeyPairGenerator::new(KeyGenConfig::new().with_modulus_bits(512)).unwrap()
}

fn small_keypair(seed: &[u8]) -> KeyPair {
    small_generator().generate(seed).unwrap()
}

mod keygen_tests {
    use super::*;

    #[test]
    fn test_same_seed_same_keypair() {
        let a = small_keypair(b"deterministic seed");
        let b = small_keypair(b"deterministic seed");
        assert_eq!(a, b);
        assert_eq!(a.public_key_hex(), b.public_key_hex());
    }

    #[test]
    fn test_different_seeds_different_keypairs() {
        let a = small_keypair(b"seed one");
        let b = small_keypair(b"seed two");
        assert_ne!(a.public(), b.public());
        assert_ne!(a, b);
    }

    #[test]
    fn test_key_structure() {
        let kp = small_keypair(b"structure");
        let sk = kp.private();
        let (p, q) = sk.primes();

        assert_eq!(kp.public().modulus_bits(), 512);
        assert_eq!(sk.modulus_bits(), 512);
        assert_eq!(kp.public().e(), &BigUint::from(65537u32));
        assert!(p > q);
        assert_eq!(&(p * q), kp.public().n());

        let phi = (p - 1u32) * (q - 1u32);
        assert!(((sk.d() * sk.e()) % &phi).is_one());
    }

    #[test]
    fn test_default_size_is_1024_bits() {
        let kp = KeyPairGenerator::default().generate(&[0x42; 64]).unwrap();
        assert_eq!(kp.public().modulus_bits(), 1024);
        assert_eq!(kp.public().modulus_len(), 128);
    }

    #[test]
    fn test_odd_modulus_size() {
        let generator =
            KeyPairGenerator::new(KeyGenConfig::new().with_modulus_bits(521)).unwrap();
        let kp = generator.generate(b"odd size").unwrap();
        assert_eq!(kp.public().modulus_bits(), 521);
        assert_eq!(kp.public().modulus_len(), 66);
    }

    #[test]
    fn test_empty_seed_rejected() {
        assert!(matches!(
            small_generator().generate(&[]),
            Err(Error::InvalidSeed { .. })
        ));
    }

    #[test]
    fn test_min_seed_len_from_config() {
        let generator = KeyPairGenerator::new(
            KeyGenConfig::new()
                .with_modulus_bits(512)
                .with_min_seed_len(32),
        )
        .unwrap();
        assert!(matches!(
            generator.generate(&[1u8; 31]),
            Err(Error::InvalidSeed { .. })
        ));
        assert!(generator.generate(&[1u8; 32]).is_ok());
    }

    #[test]
    fn test_cancelled_before_start() {
        let token = CancellationToken::new();
        token.cancel();
        assert!(matches!(
            small_generator().generate_cancellable(b"seed", &token),
            Err(Error::Cancelled { .. })
        ));
    }

    #[test]
    fn test_candidate_budget_exhaustion() {
        // With one candidate per prime almost every seed fails
        let generator = KeyPairGenerator::new(
            KeyGenConfig::new()
                .with_modulus_bits(512)
                .with_max_prime_candidates(1),
        )
        .unwrap();

        let failures = [b"s1", b"s2", b"s3", b"s4"]
            .iter()
            .map(|seed| generator.generate(*seed))
            .filter(|r| matches!(r, Err(Error::KeyGenerationFailed { .. })))
            .count();
        assert!(failures >= 1);
    }

    #[test]
    fn test_generate_with_rng() {
        let generator = small_generator();
        let token = CancellationToken::new();
        let a = generator
            .generate_with_rng(&mut ChaCha20Rng::seed_from_u64(9), &token)
            .unwrap();
        let b = generator
            .generate_with_rng(&mut ChaCha20Rng::seed_from_u64(9), &token)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_private_key_debug_is_redacted() {
        let kp = small_keypair(b"debug");
        let rendered = format!("{:?}", kp.private());
        assert_eq!(rendered, "RsaPrivateKey(512 bits)[REDACTED]");
        assert!(!format!("{:?}", kp).contains(&kp.private().d().to_str_radix(16)));
    }
}

mod public_key_tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let kp = small_keypair(b"hex");
        let hex = kp.public_key_hex();

        assert!(hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
        assert!(!hex.starts_with('0'));
        assert_eq!(hex.len(), 128);

        let parsed = RsaPublicKey::from_hex(&hex).unwrap();
        assert_eq!(&parsed, kp.public());
        assert_eq!(RsaPublicKey::from_encoded(&hex.to_uppercase()).unwrap(), parsed);
        assert_eq!(parsed.to_encoded(), hex);
    }

    #[test]
    fn test_leading_zeros_accepted() {
        let kp = small_keypair(b"zeros");
        let padded = format!("000{}", kp.public_key_hex());
        assert_eq!(&RsaPublicKey::from_hex(&padded).unwrap(), kp.public());
    }

    #[test]
    fn test_malformed_hex_rejected() {
        let valid = small_keypair(b"malformed").public_key_hex();
        let cases = [
            String::new(),
            "xyz".to_string(),
            format!("0x{}", valid),
            format!("+{}", valid),
            format!("{}_", valid),
            format!(" {}", valid),
        ];
        for case in &cases {
            assert!(
                matches!(RsaPublicKey::from_hex(case), Err(Error::InvalidPublicKey { .. })),
                "accepted {:?}",
                case
            );
        }
    }

    #[test]
    fn test_unusable_modulus_rejected() {
        // zero
        assert!(RsaPublicKey::from_hex("0").is_err());
        // even
        let even = format!("{}0", "f".repeat(130));
        assert!(matches!(
            RsaPublicKey::from_hex(&even),
            Err(Error::InvalidPublicKey { .. })
        ));
        // 256 bits is below the minimum
        let small = "f".repeat(64);
        assert!(RsaPublicKey::from_hex(&small).is_err());
        // 8196 bits is above the maximum
        let large = "f".repeat(2049);
        assert!(RsaPublicKey::from_hex(&large).is_err());
        // 512-bit odd value is structurally fine
        assert!(RsaPublicKey::from_hex(&"f".repeat(128)).is_ok());
    }

    #[test]
    fn test_new_checks_modulus() {
        assert!(RsaPublicKey::new(BigUint::from(0u32)).is_err());
        assert!(RsaPublicKey::new(BigUint::one() << 600).is_err());
        let odd = (BigUint::one() << 600) + 1u32;
        assert_eq!(RsaPublicKey::new(odd).unwrap().modulus_bits(), 601);
    }
}

mod kem_tests {
    use super::*;
    use kemseal_algorithms::Kdf2;
    use kemseal_api::EncapsulatedKey;
    use sha2::Sha256;

    #[test]
    fn test_encapsulate_decapsulate() {
        let kp = small_keypair(b"kem");
        let kem = RsaKem::new();
        let mut rng = ChaCha20Rng::seed_from_u64(1);

        let (key, enc) = kem.encapsulate(&mut rng, kp.public(), 16).unwrap();
        assert_eq!(key.len(), 16);
        assert_eq!(enc.len(), kp.public().modulus_len());

        let recovered = kem.decapsulate(kp.private(), &enc, 16).unwrap();
        assert_eq!(key, recovered);
    }

    #[test]
    fn test_fresh_randomness_per_call() {
        let kp = small_keypair(b"fresh");
        let kem = RsaKem::new();
        let mut rng = ChaCha20Rng::seed_from_u64(2);

        let (k1, e1) = kem.encapsulate(&mut rng, kp.public(), 16).unwrap();
        let (k2, e2) = kem.encapsulate(&mut rng, kp.public(), 16).unwrap();
        assert_ne!(e1, e2);
        assert_ne!(k1, k2);
    }

    #[test]
    fn test_kdf2_variant() {
        let kp = small_keypair(b"kdf2");
        let kem = RsaKem::with_kdf(Kdf2::<Sha256>::new());
        let default_kem = RsaKem::new();
        let mut rng = ChaCha20Rng::seed_from_u64(3);

        let (key, enc) = kem.encapsulate(&mut rng, kp.public(), 32).unwrap();
        assert_eq!(kem.decapsulate(kp.private(), &enc, 32).unwrap(), key);
        // Same encapsulation, different KDF, different key
        assert_ne!(default_kem.decapsulate(kp.private(), &enc, 32).unwrap(), key);
    }

    #[test]
    fn test_crt_matches_plain_exponentiation() {
        let kp = small_keypair(b"crt");
        let sk = kp.private();
        for x in [2u32, 3, 65537, 123_456_789] {
            let c = BigUint::from(x).modpow(sk.e(), sk.n());
            assert_eq!(sk.decrypt_raw(&c), BigUint::from(x));
            assert_eq!(sk.decrypt_raw(&c), c.modpow(sk.d(), sk.n()));
        }
    }

    #[test]
    fn test_wrong_length_rejected() {
        let kp = small_keypair(b"length");
        let kem = RsaKem::new();
        let mut rng = ChaCha20Rng::seed_from_u64(4);
        let (_, enc) = kem.encapsulate(&mut rng, kp.public(), 16).unwrap();

        let mut short = enc.as_ref().to_vec();
        short.pop();
        assert_eq!(
            kem.decapsulate(kp.private(), &EncapsulatedKey::new(short), 16),
            Err(Error::DecapsulationFailed)
        );

        let mut long = enc.as_ref().to_vec();
        long.push(0);
        assert_eq!(
            kem.decapsulate(kp.private(), &EncapsulatedKey::new(long), 16),
            Err(Error::DecapsulationFailed)
        );
    }

    #[test]
    fn test_out_of_range_rejected() {
        let kp = small_keypair(b"range");
        let kem = RsaKem::new();
        let n_bytes = kp.public().n().to_bytes_be();
        assert_eq!(
            kem.decapsulate(kp.private(), &EncapsulatedKey::new(n_bytes), 16),
            Err(Error::DecapsulationFailed)
        );
        let all_ones = vec![0xff; kp.public().modulus_len()];
        assert_eq!(
            kem.decapsulate(kp.private(), &EncapsulatedKey::new(all_ones), 16),
            Err(Error::DecapsulationFailed)
        );
    }

    #[test]
    fn test_rejected_encapsulations_run_private_key_operation() {
        let kp = small_keypair(b"uniform");
        let kem = RsaKem::new();
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let (_, enc) = kem.encapsulate(&mut rng, kp.public(), 16).unwrap();

        let mut short = enc.as_ref().to_vec();
        short.pop();
        let cases = [
            (enc.clone(), true),
            (EncapsulatedKey::new(short), false),
            (EncapsulatedKey::new(vec![0xff; kp.public().modulus_len()]), false),
            (EncapsulatedKey::new(kp.public().n().to_bytes_be()), false),
            (EncapsulatedKey::new(vec![0xff; 3 * kp.public().modulus_len()]), false),
        ];

        for (encapsulation, accepted) in cases {
            let before = decrypt_raw_calls();
            let result = kem.decapsulate(kp.private(), &encapsulation, 16);
            assert_eq!(decrypt_raw_calls(), before + 1, "{:?}", encapsulation);
            assert_eq!(result.is_ok(), accepted, "{:?}", encapsulation);
            if !accepted {
                assert_eq!(result, Err(Error::DecapsulationFailed));
            }
        }
    }

    #[test]
    fn test_wrong_private_key() {
        let alice = small_keypair(b"alice");
        let bob = small_keypair(b"bob");
        let kem = RsaKem::new();
        let mut rng = ChaCha20Rng::seed_from_u64(5);

        let (key, enc) = kem.encapsulate(&mut rng, alice.public(), 16).unwrap();
        match kem.decapsulate(bob.private(), &enc, 16) {
            Ok(other) => assert_ne!(other, key),
            Err(e) => assert_eq!(e, Error::DecapsulationFailed),
        }
    }

    #[test]
    fn test_invalid_key_len() {
        let kp = small_keypair(b"keylen");
        let kem = RsaKem::new();
        let mut rng = ChaCha20Rng::seed_from_u64(6);
        assert!(matches!(
            kem.encapsulate(&mut rng, kp.public(), 0),
            Err(Error::InvalidParameter { .. })
        ));
        let enc = EncapsulatedKey::new(vec![0u8; kp.public().modulus_len()]);
        assert!(matches!(
            kem.decapsulate(kp.private(), &enc, 0),
            Err(Error::InvalidParameter { .. })
        ));
    }
}
