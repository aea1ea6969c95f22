//! Message digests selectable by name
//!
//! Covers the algorithms a text converter is commonly asked for: the MD5 and
//! SHA-1 legacy digests, the SHA-2 family and SHA-3.

use std::{fmt, str::FromStr};

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};

use crate::error::Error;

// ============================================================================
// Hash Algorithm Selection
// ============================================================================

/// Supported hash algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha224,
    #[default]
    Sha256,
    Sha384,
    Sha512,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 10] = [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha224,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha3_224,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Sha3_384,
        HashAlgorithm::Sha3_512,
    ];

    /// Canonical lower-case name
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha224 => "sha224",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
            HashAlgorithm::Sha3_224 => "sha3_224",
            HashAlgorithm::Sha3_256 => "sha3_256",
            HashAlgorithm::Sha3_384 => "sha3_384",
            HashAlgorithm::Sha3_512 => "sha3_512",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    /// Case-insensitive; `-` and `_` separators are ignored (`SHA-256`, `sha3_256`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let algorithm = match normalized.as_str() {
            "md5" => HashAlgorithm::Md5,
            "sha1" => HashAlgorithm::Sha1,
            "sha224" => HashAlgorithm::Sha224,
            "sha256" => HashAlgorithm::Sha256,
            "sha384" => HashAlgorithm::Sha384,
            "sha512" => HashAlgorithm::Sha512,
            "sha3224" => HashAlgorithm::Sha3_224,
            "sha3256" => HashAlgorithm::Sha3_256,
            "sha3384" => HashAlgorithm::Sha3_384,
            "sha3512" => HashAlgorithm::Sha3_512,
            _ => return Err(Error::UnsupportedAlgorithm(s.trim().to_string())),
        };
        Ok(algorithm)
    }
}

// ============================================================================
// Hash Functions
// ============================================================================

fn digest<D: Digest>(data: &[u8]) -> Vec<u8> {
    D::digest(data).to_vec()
}

/// Compute the digest of `data` with `algorithm`
pub fn hash(data: &[u8], algorithm: HashAlgorithm) -> Vec<u8> {
    match algorithm {
        HashAlgorithm::Md5 => digest::<Md5>(data),
        HashAlgorithm::Sha1 => digest::<Sha1>(data),
        HashAlgorithm::Sha224 => digest::<Sha224>(data),
        HashAlgorithm::Sha256 => digest::<Sha256>(data),
        HashAlgorithm::Sha384 => digest::<Sha384>(data),
        HashAlgorithm::Sha512 => digest::<Sha512>(data),
        HashAlgorithm::Sha3_224 => digest::<Sha3_224>(data),
        HashAlgorithm::Sha3_256 => digest::<Sha3_256>(data),
        HashAlgorithm::Sha3_384 => digest::<Sha3_384>(data),
        HashAlgorithm::Sha3_512 => digest::<Sha3_512>(data),
    }
}

/// Compute the digest and return it as lower-case hex
pub fn hash_hex(data: &[u8], algorithm: HashAlgorithm) -> String {
    hex::encode(hash(data, algorithm))
}

/// Compute SHA-256 of data
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}
