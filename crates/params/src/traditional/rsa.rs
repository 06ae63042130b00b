//! Constants for RSA algorithm

/// RSA with 1024-bit modulus
pub const RSA_MODULUS_1024: usize = 1024;

/// Modulus size used when none is configured
pub const DEFAULT_MODULUS_BITS: usize = RSA_MODULUS_1024;

/// Smallest modulus accepted for generation or encapsulation
pub const MIN_MODULUS_BITS: usize = 512;

/// Largest modulus accepted for generation or encapsulation
pub const MAX_MODULUS_BITS: usize = 8192;

/// Common RSA public exponent (65537)
pub const RSA_PUBLIC_EXPONENT: u32 = 65537;

/// Number of prime candidates examined per prime before key generation gives up
pub const DEFAULT_MAX_PRIME_CANDIDATES: usize = 100_000;

/// Minimum seed length accepted by the deterministic generator
pub const DEFAULT_MIN_SEED_LEN: usize = 1;
