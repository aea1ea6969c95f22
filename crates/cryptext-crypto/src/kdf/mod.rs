//! Passphrase key derivation
//!
//! Maps an arbitrary passphrase to an AES-256 key with a single SHA-256 pass.
//!
//! There is no salt and no work factor, so equal passphrases always produce
//! equal keys and offline guessing is cheap. The derivation is kept as is so
//! that ciphertexts produced by earlier deployments still decrypt; switching
//! to a salted, iterated KDF would need a new wire format.

use crate::{hash::sha256, symmetric::SymmetricKey};

/// Derive a 32-byte AES key as `SHA-256(passphrase)`
pub fn derive_key32(passphrase: &[u8]) -> SymmetricKey {
    SymmetricKey::from_bytes(sha256(passphrase))
}
