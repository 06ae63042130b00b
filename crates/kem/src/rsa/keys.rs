//! RSA key types

use core::fmt;

use kemseal_api::error::validate;
use kemseal_api::{Error, PublicKeyEncoding, Result};
use kemseal_internal::constant_time::ct_eq;
use kemseal_params::{MAX_MODULUS_BITS, MIN_MODULUS_BITS, RSA_PUBLIC_EXPONENT};
use num_bigint_dig::{BigUint, ModInverse};
use num_integer::Integer;
use num_traits::{One, Zero};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// RSA public key `(n, e)`
///
/// The exponent is always [`RSA_PUBLIC_EXPONENT`]; only the modulus travels
/// in the encoded form.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct RsaPublicKey {
    n: BigUint,
    e: BigUint,
}

impl RsaPublicKey {
    /// Builds a public key from a modulus, using the fixed public exponent.
    ///
    /// The modulus must be odd and between [`MIN_MODULUS_BITS`] and
    /// [`MAX_MODULUS_BITS`] bits long.
    pub fn new(n: BigUint) -> Result<Self> {
        validate::public_key(!n.is_zero(), "RSA modulus", "modulus is zero")?;
        validate::public_key(n.is_odd(), "RSA modulus", "modulus is even")?;
        validate::public_key(
            n.bits() >= MIN_MODULUS_BITS,
            "RSA modulus",
            "modulus is too small",
        )?;
        validate::public_key(
            n.bits() <= MAX_MODULUS_BITS,
            "RSA modulus",
            "modulus is too large",
        )?;

        Ok(Self {
            n,
            e: BigUint::from(RSA_PUBLIC_EXPONENT),
        })
    }

    /// Parses a hexadecimal modulus as produced by [`to_hex`](Self::to_hex).
    ///
    /// Upper- and lowercase digits are accepted, as are leading zeros.
    /// Prefixes, signs, separators and whitespace are not.
    pub fn from_hex(hex: &str) -> Result<Self> {
        validate::public_key(!hex.is_empty(), "hex modulus", "empty string")?;
        validate::public_key(
            hex.bytes().all(|b| b.is_ascii_hexdigit()),
            "hex modulus",
            "not hexadecimal",
        )?;

        let n = BigUint::parse_bytes(hex.as_bytes(), 16)
            .ok_or_else(|| Error::public_key("hex modulus", "not hexadecimal"))?;
        Self::new(n)
    }

    /// Lowercase hexadecimal modulus without prefix or leading zeros
    pub fn to_hex(&self) -> String {
        self.n.to_str_radix(16)
    }

    /// The modulus `n`
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// The public exponent `e`
    pub fn e(&self) -> &BigUint {
        &self.e
    }

    /// Bit length of the modulus
    pub fn modulus_bits(&self) -> usize {
        self.n.bits()
    }

    /// Byte length of the modulus, which is also the encapsulation length
    pub fn modulus_len(&self) -> usize {
        (self.n.bits() + 7) / 8
    }
}

impl PublicKeyEncoding for RsaPublicKey {
    fn to_encoded(&self) -> String {
        self.to_hex()
    }

    fn from_encoded(encoded: &str) -> Result<Self> {
        Self::from_hex(encoded)
    }
}

impl fmt::Debug for RsaPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaPublicKey")
            .field("bits", &self.n.bits())
            .field("n", &self.to_hex())
            .finish()
    }
}

impl fmt::Display for RsaPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for RsaPublicKey {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<RsaPublicKey> for String {
    fn from(key: RsaPublicKey) -> Self {
        key.to_hex()
    }
}

/// RSA private key with CRT parameters
///
/// Zeroized on drop. Never serialized and never printed.
#[derive(Clone)]
pub struct RsaPrivateKey {
    n: BigUint,
    e: BigUint,
    d: BigUint,
    p: BigUint,
    q: BigUint,
    dp: BigUint,
    dq: BigUint,
    qinv: BigUint,
}

impl RsaPrivateKey {
    /// Derives the full private key from two distinct primes and `e`.
    ///
    /// The primes are ordered so that `p > q`.
    pub fn from_primes(p: BigUint, q: BigUint, e: BigUint) -> Result<Self> {
        validate::key_generation(p != q, "RSA primes", "primes are equal")?;
        let (p, q) = if p > q { (p, q) } else { (q, p) };

        let one = BigUint::one();
        let p1 = Zeroizing::new(&p - &one);
        let q1 = Zeroizing::new(&q - &one);
        let phi = Zeroizing::new(&*p1 * &*q1);

        let d = e
            .clone()
            .mod_inverse(&*phi)
            .and_then(|d| d.to_biguint())
            .ok_or_else(|| {
                Error::key_generation("RSA private exponent", "exponent is not invertible")
            })?;
        let qinv = q
            .clone()
            .mod_inverse(&p)
            .and_then(|v| v.to_biguint())
            .ok_or_else(|| Error::key_generation("RSA CRT coefficient", "q is not invertible"))?;

        let dp = &d % &*p1;
        let dq = &d % &*q1;
        let n = &p * &q;

        Ok(Self {
            n,
            e,
            d,
            p,
            q,
            dp,
            dq,
            qinv,
        })
    }

    /// The matching public key
    pub fn to_public_key(&self) -> RsaPublicKey {
        RsaPublicKey {
            n: self.n.clone(),
            e: self.e.clone(),
        }
    }

    /// The modulus `n`
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// The public exponent `e`
    pub fn e(&self) -> &BigUint {
        &self.e
    }

    /// The private exponent `d`
    pub fn d(&self) -> &BigUint {
        &self.d
    }

    /// The prime factors `(p, q)` with `p > q`
    pub fn primes(&self) -> (&BigUint, &BigUint) {
        (&self.p, &self.q)
    }

    /// Bit length of the modulus
    pub fn modulus_bits(&self) -> usize {
        self.n.bits()
    }

    /// Byte length of the modulus
    pub fn modulus_len(&self) -> usize {
        (self.n.bits() + 7) / 8
    }

    /// Computes `c^d mod n` with the Chinese remainder theorem.
    ///
    /// `c` must already be reduced below `n`.
    pub(crate) fn decrypt_raw(&self, c: &BigUint) -> BigUint {
        #[cfg(test)]
        super::tests::DECRYPT_RAW_CALLS.with(|calls| calls.set(calls.get() + 1));

        let mut m1 = c.modpow(&self.dp, &self.p);
        let mut m2 = c.modpow(&self.dq, &self.q);

        // h = qinv * (m1 - m2) mod p, with m2 < q < p
        let mut diff = (&m1 + &self.p - &m2) % &self.p;
        let mut h = (&self.qinv * &diff) % &self.p;
        let m = &m2 + &h * &self.q;

        m1.zeroize();
        m2.zeroize();
        diff.zeroize();
        h.zeroize();
        m
    }
}

impl Zeroize for RsaPrivateKey {
    fn zeroize(&mut self) {
        self.n.zeroize();
        self.e.zeroize();
        self.d.zeroize();
        self.p.zeroize();
        self.q.zeroize();
        self.dp.zeroize();
        self.dq.zeroize();
        self.qinv.zeroize();
    }
}

impl Drop for RsaPrivateKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for RsaPrivateKey {}

impl PartialEq for RsaPrivateKey {
    fn eq(&self, other: &Self) -> bool {
        let a = Zeroizing::new([self.n.to_bytes_be(), self.d.to_bytes_be()].concat());
        let b = Zeroizing::new([other.n.to_bytes_be(), other.d.to_bytes_be()].concat());
        ct_eq(&*a, &*b)
    }
}

impl Eq for RsaPrivateKey {}

impl fmt::Debug for RsaPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RsaPrivateKey({} bits)[REDACTED]", self.n.bits())
    }
}

/// A public key together with its private key
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    public: RsaPublicKey,
    private: RsaPrivateKey,
}

impl KeyPair {
    /// Pairs a private key with its public half
    pub fn from_private(private: RsaPrivateKey) -> Self {
        Self {
            public: private.to_public_key(),
            private,
        }
    }

    /// The public key
    pub fn public(&self) -> &RsaPublicKey {
        &self.public
    }

    /// The private key
    pub fn private(&self) -> &RsaPrivateKey {
        &self.private
    }

    /// Hex modulus of the public key, for out-of-band distribution
    pub fn public_key_hex(&self) -> String {
        self.public.to_hex()
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &self.public)
            .field("private", &self.private)
            .finish()
    }
}
