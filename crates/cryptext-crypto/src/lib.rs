//! Cryptext Cryptography Library
//!
//! Primitives behind the cryptext conversions: AES-256-CBC, passphrase key
//! derivation, RSA-OAEP key wrapping, digests, Base64 and the hybrid
//! AES+RSA envelope that ties them together.
//!
//! Every function is a pure transform of its arguments, apart from the
//! secure random draws made while sealing an envelope. Nothing is cached and
//! no key material outlives the call that uses it.

pub mod error;

// Cryptographic algorithm modules
pub mod asymmetric;
pub mod envelope;
pub mod hash;
pub mod kdf;
pub mod symmetric;

// Re-export commonly used types for convenience
pub use asymmetric::Rsa;
pub use envelope::{open, seal, seal_with_rng, Envelope, ALGORITHM_ID};
pub use error::{Error, Result};
pub use hash::{base64, hash, hash_hex, HashAlgorithm};
pub use kdf::derive_key32;
pub use symmetric::{Aes256Cbc, Iv, SymmetricKey};

#[cfg(test)]
pub(crate) mod test_keys {
    pub const PUBLIC_A: &str = include_str!("../../../testdata/rsa2048_a_public.pem");
    pub const PRIVATE_A: &str = include_str!("../../../testdata/rsa2048_a_private.pem");
    pub const PUBLIC_A_PKCS1: &str = include_str!("../../../testdata/rsa2048_a_public_pkcs1.pem");
    pub const PRIVATE_A_PKCS1: &str =
        include_str!("../../../testdata/rsa2048_a_private_pkcs1.pem");
    pub const PRIVATE_B: &str = include_str!("../../../testdata/rsa2048_b_private.pem");
    pub const PUBLIC_SMALL: &str = include_str!("../../../testdata/rsa768_public.pem");
}
