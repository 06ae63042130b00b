//! Constants for symmetric encryption algorithms

/// AES-128 key size in bytes
pub const AES128_KEY_LEN: usize = 16;

/// AES-256 key size in bytes
pub const AES256_KEY_LEN: usize = 32;

/// AES-GCM nonce size in bytes
pub const AES_GCM_NONCE_LEN: usize = 12;

/// AES-GCM authentication tag size in bytes
pub const AES_GCM_TAG_LEN: usize = 16;

/// ChaCha20 seed size in bytes
pub const CHACHA20_SEED_LEN: usize = 32;
