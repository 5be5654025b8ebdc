//! The [`Md5Digest`] value type and its string and integer projections.

use std::fmt::{Debug, Display, Formatter, LowerHex};
use std::str::FromStr;

use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use base64::Engine as _;
use log::debug;

use crate::codec::TextCodec;
use crate::error::{Error, Result};
use crate::strong_hash::md5::Md5Sum;
use crate::strong_hash::StrongHash;

pub const DIGEST_SIZE: usize = 16;

/// A 128-bit MD5 message digest.
///
/// The all-zero value doubles as "empty": it is the [`Default`], the result of
/// [`Md5Digest::clear`] and the fallback of the `*_or_empty` constructors.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Md5Digest([u8; DIGEST_SIZE]);

impl Md5Digest {
    /// Size of the digest in bytes.
    pub const SIZE: usize = DIGEST_SIZE;
    /// Length of the hex projection.
    pub const HEX_SIZE: usize = 2 * Self::SIZE;
    /// Length of both unpadded base64 projections.
    pub const TEXT_SIZE: usize = 22;
    /// Length of the quoted structured-data form.
    pub const JSON_SIZE: usize = Self::TEXT_SIZE + 2;

    pub const EMPTY: Md5Digest = Md5Digest([0; DIGEST_SIZE]);

    /// Wraps an already computed checksum.
    pub const fn from_checksum(checksum: [u8; DIGEST_SIZE]) -> Self {
        Self(checksum)
    }

    pub fn set_checksum(&mut self, checksum: &[u8; DIGEST_SIZE]) {
        self.0 = *checksum;
    }

    /// Computes the MD5 digest of `data`.
    ///
    /// ```
    /// use md5_digest::Md5Digest;
    ///
    /// assert_eq!(Md5Digest::sum_of("HelloWorld.\n"), Md5Digest::sum_of(b"HelloWorld.\n"));
    /// assert_eq!(Md5Digest::sum_of("").to_hex(), "d41d8cd98f00b204e9800998ecf8427e");
    /// ```
    pub fn sum_of(data: impl AsRef<[u8]>) -> Self {
        Md5Sum::hash(data.as_ref())
    }

    pub fn sum_bytes(&mut self, data: &[u8]) {
        *self = Md5Sum::hash(data);
    }

    pub fn sum_str(&mut self, data: &str) {
        self.sum_bytes(data.as_bytes());
    }

    pub fn from_i64_pair(d0: i64, d1: i64) -> Self {
        Self::from_u64_pair(d0 as u64, d1 as u64)
    }

    pub fn from_u64_pair(d0: u64, d1: u64) -> Self {
        let mut digest = Self::EMPTY;
        digest.set_u64_pair(d0, d1);
        digest
    }

    /// Stores both halves little-endian; the two's-complement bit pattern is kept as is.
    pub fn set_i64_pair(&mut self, d0: i64, d1: i64) {
        self.set_u64_pair(d0 as u64, d1 as u64);
    }

    pub fn set_u64_pair(&mut self, d0: u64, d1: u64) {
        let (lo, hi) = self.0.split_at_mut(Self::SIZE / 2);
        lo.copy_from_slice(&d0.to_le_bytes());
        hi.copy_from_slice(&d1.to_le_bytes());
    }

    pub fn as_i64_pair(&self) -> (i64, i64) {
        let (d0, d1) = self.as_u64_pair();
        (d0 as i64, d1 as i64)
    }

    /// Reads bytes 0..8 and 8..16 as little-endian integers.
    ///
    /// ```
    /// use md5_digest::Md5Digest;
    ///
    /// let digest = Md5Digest::sum_of("HelloWorld.\n");
    /// assert_eq!(digest.as_u64_pair(), (0x98b36899782e2f90, 0xe0e7c86bb6d2fd4e));
    /// ```
    pub fn as_u64_pair(&self) -> (u64, u64) {
        let mut lo = [0; 8];
        let mut hi = [0; 8];
        lo.copy_from_slice(&self.0[..Self::SIZE / 2]);
        hi.copy_from_slice(&self.0[Self::SIZE / 2..]);
        (u64::from_le_bytes(lo), u64::from_le_bytes(hi))
    }

    pub fn clear(&mut self) {
        self.0 = [0; DIGEST_SIZE];
    }

    /// `true` for the all-zero value. A real checksum that happens to be all
    /// zero is indistinguishable from a digest that was never set.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    pub fn to_bytes(self) -> [u8; DIGEST_SIZE] {
        self.0
    }

    /// Accepts exactly [`Md5Digest::SIZE`] bytes.
    pub fn from_slice(buf: &[u8]) -> Result<Self> {
        let checksum: [u8; DIGEST_SIZE] = buf
            .try_into()
            .map_err(|_| Error::incorrect_size(Self::SIZE, buf.len()))?;
        Ok(Self(checksum))
    }

    /// Like [`Md5Digest::from_slice`], leaving `self` untouched on failure.
    pub fn set_from_slice(&mut self, buf: &[u8]) -> Result<()> {
        *self = Self::from_slice(buf)?;
        Ok(())
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn from_hex(s: &str) -> Result<Self> {
        Self::from_slice(&hex::decode(s)?)
    }

    pub fn set_hex(&mut self, s: &str) -> Result<()> {
        *self = Self::from_hex(s)?;
        Ok(())
    }

    /// Decodes a hex digest, falling back to [`Md5Digest::EMPTY`] on any error.
    pub fn from_hex_or_empty(s: &str) -> Self {
        Self::from_hex(s).unwrap_or_else(|e| {
            debug!("discarding malformed hex digest {:?}: {}", s, e);
            Self::EMPTY
        })
    }

    pub fn to_base64_url(&self) -> String {
        URL_SAFE_NO_PAD.encode(self.0)
    }

    pub fn from_base64_url(s: &str) -> Result<Self> {
        Self::from_slice(&URL_SAFE_NO_PAD.decode(s)?)
    }

    pub fn set_base64_url(&mut self, s: &str) -> Result<()> {
        *self = Self::from_base64_url(s)?;
        Ok(())
    }

    /// Decodes a URL-safe base64 digest, falling back to [`Md5Digest::EMPTY`] on any error.
    ///
    /// ```
    /// use md5_digest::Md5Digest;
    ///
    /// assert!(!Md5Digest::from_base64_url_or_empty("kC8ueJlos5hO_dK2a8jn4A").is_empty());
    /// assert!(Md5Digest::from_base64_url_or_empty("kC8ueJlos5hO/dK2a8jn4A").is_empty());
    /// ```
    pub fn from_base64_url_or_empty(s: &str) -> Self {
        Self::from_base64_url(s).unwrap_or_else(|e| {
            debug!("discarding malformed base64url digest {:?}: {}", s, e);
            Self::EMPTY
        })
    }

    pub fn to_base64_std(&self) -> String {
        STANDARD_NO_PAD.encode(self.0)
    }

    pub fn from_base64_std(s: &str) -> Result<Self> {
        Self::from_slice(&STANDARD_NO_PAD.decode(s)?)
    }

    pub fn set_base64_std(&mut self, s: &str) -> Result<()> {
        *self = Self::from_base64_std(s)?;
        Ok(())
    }

    pub fn from_base64_std_or_empty(s: &str) -> Self {
        Self::from_base64_std(s).unwrap_or_else(|e| {
            debug!("discarding malformed base64 digest {:?}: {}", s, e);
            Self::EMPTY
        })
    }
}

impl From<[u8; DIGEST_SIZE]> for Md5Digest {
    fn from(checksum: [u8; DIGEST_SIZE]) -> Self {
        Self::from_checksum(checksum)
    }
}

impl From<md5::Digest> for Md5Digest {
    fn from(digest: md5::Digest) -> Self {
        Self::from_checksum(digest.into())
    }
}

impl From<Md5Digest> for [u8; DIGEST_SIZE] {
    fn from(digest: Md5Digest) -> Self {
        digest.0
    }
}

impl TryFrom<&[u8]> for Md5Digest {
    type Error = Error;

    fn try_from(buf: &[u8]) -> Result<Self> {
        Self::from_slice(buf)
    }
}

impl AsRef<[u8]> for Md5Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for Md5Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_base64_url())
    }
}

impl LowerHex for Md5Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Debug for Md5Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Md5Digest({})", self.to_hex())
    }
}

impl FromStr for Md5Digest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut digest = Self::EMPTY;
        digest.unmarshal_text(s.as_bytes())?;
        Ok(digest)
    }
}
