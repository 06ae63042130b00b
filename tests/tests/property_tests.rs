//! Property-based tests for hybrid encryption and the bundle encoding

use std::sync::OnceLock;

use kemseal::prelude::*;
use kemseal_tests::small_identity;
use proptest::prelude::*;

fn recipient() -> &'static Identity {
    static IDENTITY: OnceLock<Identity> = OnceLock::new();
    IDENTITY.get_or_init(|| small_identity(b"property recipient"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn hybrid_round_trip(
        plaintext in prop::collection::vec(any::<u8>(), 0..2048),
        aad in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let alice = recipient();
        let bundles = HybridEncryptor::new()
            .encrypt_for_recipients_with_aad(&plaintext, &aad, &[alice.public_key_hex()])
            .unwrap();
        prop_assert_eq!(bundles[0].ciphertext().len(), plaintext.len());
        prop_assert_eq!(alice.decrypt_with_aad(&bundles[0], &aad).unwrap(), plaintext);
    }

    #[test]
    fn any_single_bit_flip_is_detected(
        plaintext in prop::collection::vec(any::<u8>(), 1..256),
        position in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let alice = recipient();
        let bundle = HybridEncryptor::new()
            .encrypt_for_recipients(&plaintext, &[alice.public_key_hex()])
            .unwrap()
            .remove(0);

        let (mut ct, mut nonce, mut tag, enc) = bundle.into_parts();
        let total = ct.len() + nonce.len() + tag.len();
        let i = position.index(total);
        if i < ct.len() {
            ct[i] ^= 1 << bit;
        } else if i < ct.len() + nonce.len() {
            nonce[i - ct.len()] ^= 1 << bit;
        } else {
            tag[i - ct.len() - nonce.len()] ^= 1 << bit;
        }

        let tampered = CiphertextBundle::from_parts(ct, nonce, tag, enc).unwrap();
        prop_assert_eq!(alice.decrypt(&tampered), Err(Error::AuthenticationFailed));
    }

    #[test]
    fn decoder_never_panics_on_garbage(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let _ = CiphertextBundle::from_bytes(&bytes);
    }

    #[test]
    fn kdf_outputs_are_prefix_stable(
        secret in prop::collection::vec(any::<u8>(), 1..64),
        short in 1usize..64,
        extra in 0usize..64,
    ) {
        let kdf: Kdf2 = Kdf2::new();
        let a = kdf.derive(&secret, short).unwrap();
        let b = kdf.derive(&secret, short + extra).unwrap();
        prop_assert_eq!(a.as_ref(), &b.as_ref()[..short]);
    }
}
