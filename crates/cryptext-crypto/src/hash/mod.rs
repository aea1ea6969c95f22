//! Digests and Base64 encoding

pub mod base64;
pub mod digest;

pub use digest::{hash, hash_hex, sha256, HashAlgorithm};
