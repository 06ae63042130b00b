//! Shared fixtures for the kemseal integration tests

use std::sync::Once;

use kemseal::hybrid::Identity;
use kemseal::kem::KeyGenConfig;
use tracing_subscriber::EnvFilter;

/// The fixed 64-byte seed used by the end-to-end scenario
pub const SEED_S: &[u8; 64] = b"S-kemseal-integration-seed-0123456789abcdefghijklmnopqrstuvwxyz!";

static TRACING: Once = Once::new();

/// Route library logs to the test harness. Filter with `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// 512-bit keys; large enough for AES-128 key transport, fast to generate
pub fn small_config() -> KeyGenConfig {
    KeyGenConfig::new().with_modulus_bits(512)
}

pub fn small_identity(seed: &[u8]) -> Identity {
    match Identity::from_seed(seed, &small_config()) {
        Ok(identity) => identity,
        Err(e) => panic!("key generation failed for {:?}: {}", seed, e),
    }
}
