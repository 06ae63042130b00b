//! Ciphertext bundle and its binary transport encoding
//!
//! ```text
//! version:u8 (=1) || nonce_len:u8 || nonce || tag_len:u8 || tag
//!                 || enc_len:u16be || encapsulation || ct_len:u32be || ciphertext
//! ```
//!
//! Every field is length-prefixed, so bundles can be written back to back on
//! one stream and read off again with [`CiphertextBundle::read_from`].

use std::io::{Read, Write};

use kemseal_api::error::validate;
use kemseal_api::{Error, Result, Serialize};

/// Current encoding version
pub const BUNDLE_VERSION: u8 = 1;

/// Output of encrypting one message for one recipient
///
/// Immutable once built; the fields are only reachable through accessors.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "BundleRepr", into = "BundleRepr")
)]
pub struct CiphertextBundle {
    ciphertext: Vec<u8>,
    nonce: Vec<u8>,
    tag: Vec<u8>,
    encapsulation: Vec<u8>,
}

impl CiphertextBundle {
    /// Assembles a bundle, checking every field fits its length prefix.
    pub fn from_parts(
        ciphertext: Vec<u8>,
        nonce: Vec<u8>,
        tag: Vec<u8>,
        encapsulation: Vec<u8>,
    ) -> Result<Self> {
        validate::serialization(
            nonce.len() <= u8::MAX as usize,
            "CiphertextBundle",
            "nonce longer than 255 bytes",
        )?;
        validate::serialization(
            tag.len() <= u8::MAX as usize,
            "CiphertextBundle",
            "tag longer than 255 bytes",
        )?;
        validate::serialization(
            encapsulation.len() <= u16::MAX as usize,
            "CiphertextBundle",
            "encapsulation longer than 65535 bytes",
        )?;
        validate::serialization(
            ciphertext.len() <= u32::MAX as usize,
            "CiphertextBundle",
            "ciphertext longer than 4 GiB",
        )?;

        Ok(Self {
            ciphertext,
            nonce,
            tag,
            encapsulation,
        })
    }

    /// Splits the bundle into `(ciphertext, nonce, tag, encapsulation)`.
    pub fn into_parts(self) -> (Vec<u8>, Vec<u8>, Vec<u8>, Vec<u8>) {
        (self.ciphertext, self.nonce, self.tag, self.encapsulation)
    }

    /// AEAD ciphertext, the same length as the plaintext
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Nonce the ciphertext was sealed under
    pub fn nonce(&self) -> &[u8] {
        &self.nonce
    }

    /// Detached authentication tag
    pub fn tag(&self) -> &[u8] {
        &self.tag
    }

    /// KEM encapsulation of the bundle key
    pub fn encapsulation(&self) -> &[u8] {
        &self.encapsulation
    }

    /// Length of the binary encoding
    pub fn encoded_len(&self) -> usize {
        1 + 1
            + self.nonce.len()
            + 1
            + self.tag.len()
            + 2
            + self.encapsulation.len()
            + 4
            + self.ciphertext.len()
    }

    /// Binary encoding
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        out.push(BUNDLE_VERSION);
        // Lengths were bounded in from_parts
        out.push(self.nonce.len() as u8);
        out.extend_from_slice(&self.nonce);
        out.push(self.tag.len() as u8);
        out.extend_from_slice(&self.tag);
        out.extend_from_slice(&(self.encapsulation.len() as u16).to_be_bytes());
        out.extend_from_slice(&self.encapsulation);
        out.extend_from_slice(&(self.ciphertext.len() as u32).to_be_bytes());
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Decodes exactly one bundle, rejecting trailing bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut cursor = bytes;
        let bundle = Self::read_from(&mut cursor)?;
        validate::serialization(cursor.is_empty(), "CiphertextBundle", "trailing data")?;
        Ok(bundle)
    }

    /// Writes the binary encoding to `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.to_bytes())?;
        Ok(())
    }

    /// Reads one bundle from `reader`, leaving any following bytes unread.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let version = read_u8(reader)?;
        if version != BUNDLE_VERSION {
            return Err(Error::serialization(
                "CiphertextBundle",
                format!("unsupported version {}", version),
            ));
        }

        let nonce_len = read_u8(reader)? as usize;
        let nonce = read_exact_vec(reader, nonce_len)?;
        let tag_len = read_u8(reader)? as usize;
        let tag = read_exact_vec(reader, tag_len)?;

        let mut enc_len = [0u8; 2];
        reader.read_exact(&mut enc_len)?;
        let encapsulation = read_exact_vec(reader, u16::from_be_bytes(enc_len) as usize)?;

        let mut ct_len = [0u8; 4];
        reader.read_exact(&mut ct_len)?;
        let ciphertext = read_exact_vec(reader, u32::from_be_bytes(ct_len) as usize)?;

        Self::from_parts(ciphertext, nonce, tag, encapsulation)
    }
}

impl Serialize for CiphertextBundle {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        CiphertextBundle::from_bytes(bytes)
    }

    fn to_bytes(&self) -> Vec<u8> {
        CiphertextBundle::to_bytes(self)
    }
}

impl core::fmt::Debug for CiphertextBundle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CiphertextBundle")
            .field("ciphertext_len", &self.ciphertext.len())
            .field("nonce_len", &self.nonce.len())
            .field("tag_len", &self.tag.len())
            .field("encapsulation_len", &self.encapsulation.len())
            .finish()
    }
}

/// The associated data authenticated with every bundle: the encapsulation
/// followed by the caller's context bytes.
pub(crate) fn bound_associated_data(encapsulation: &[u8], aad: &[u8]) -> Vec<u8> {
    let mut bound = Vec::with_capacity(encapsulation.len() + aad.len());
    bound.extend_from_slice(encapsulation);
    bound.extend_from_slice(aad);
    bound
}

fn read_u8<R: Read>(reader: &mut R) -> Result<u8> {
    let mut byte = [0u8; 1];
    reader.read_exact(&mut byte)?;
    Ok(byte[0])
}

/// Reads `len` bytes without trusting `len` for the allocation size.
fn read_exact_vec<R: Read>(reader: &mut R, len: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.take(len as u64).read_to_end(&mut buf)?;
    validate::serialization(buf.len() == len, "CiphertextBundle", "truncated input")?;
    Ok(buf)
}

#[cfg(feature = "serde")]
#[derive(Clone, serde::Serialize, serde::Deserialize)]
struct BundleRepr {
    #[serde(with = "hex::serde")]
    ciphertext: Vec<u8>,
    #[serde(with = "hex::serde")]
    nonce: Vec<u8>,
    #[serde(with = "hex::serde")]
    tag: Vec<u8>,
    #[serde(with = "hex::serde")]
    encapsulation: Vec<u8>,
}

#[cfg(feature = "serde")]
impl TryFrom<BundleRepr> for CiphertextBundle {
    type Error = Error;

    fn try_from(repr: BundleRepr) -> Result<Self> {
        Self::from_parts(repr.ciphertext, repr.nonce, repr.tag, repr.encapsulation)
    }
}

#[cfg(feature = "serde")]
impl From<CiphertextBundle> for BundleRepr {
    fn from(bundle: CiphertextBundle) -> Self {
        let (ciphertext, nonce, tag, encapsulation) = bundle.into_parts();
        Self {
            ciphertext,
            nonce,
            tag,
            encapsulation,
        }
    }
}
