//! RSA-OAEP key wrapping
//!
//! Wraps a 256-bit symmetric key under an RSA public key with OAEP padding,
//! SHA-256 serving as both the label hash and the MGF1 hash. Keys arrive as
//! PEM text (SPKI / PKCS#8, or the older PKCS#1 form) and are only borrowed
//! for the duration of one call.

use rand::{CryptoRng, RngCore};
use rsa::{
    pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey},
    pkcs8::{DecodePrivateKey, DecodePublicKey},
    traits::PublicKeyParts,
    Oaep, RsaPrivateKey, RsaPublicKey,
};
use sha2::Sha256;
use zeroize::Zeroize;

use crate::{
    error::{Error, Result},
    symmetric::SymmetricKey,
};

/// Bytes OAEP-SHA256 adds to every payload (`2 * hLen + 2`)
pub const OAEP_SHA256_OVERHEAD: usize = 2 * 32 + 2;

/// RSA private key used to unwrap symmetric keys
pub struct Rsa {
    inner: RsaPrivateKey,
}

impl From<RsaPrivateKey> for Rsa {
    fn from(value: RsaPrivateKey) -> Self {
        Self { inner: value }
    }
}

impl Rsa {
    /// Import a private key from PKCS#8 (`PRIVATE KEY`) or PKCS#1
    /// (`RSA PRIVATE KEY`) PEM
    pub fn from_pem(pem: &str) -> Result<Self> {
        let pem = pem.trim();
        let private_key = RsaPrivateKey::from_pkcs8_pem(pem)
            .or_else(|_| RsaPrivateKey::from_pkcs1_pem(pem))
            .map_err(|_| Error::InvalidPrivateKey)?;
        Ok(private_key.into())
    }

    /// Recover a wrapped symmetric key
    ///
    /// Every failure (bad OAEP encoding, wrong key, wrong length, payload
    /// that is not a 32-byte key) collapses into [`Error::UnwrapFailure`].
    pub fn unwrap_key(&self, wrapped: &[u8]) -> Result<SymmetricKey> {
        let mut plain = self
            .inner
            .decrypt(Oaep::new::<Sha256>(), wrapped)
            .map_err(|_| Error::UnwrapFailure)?;
        let key = SymmetricKey::from_slice(&plain).map_err(|_| Error::UnwrapFailure);
        plain.zeroize();
        key
    }
}

/// Import a public key from SPKI (`PUBLIC KEY`) or PKCS#1 (`RSA PUBLIC KEY`) PEM
pub fn public_key_from_pem(pem: &str) -> Result<RsaPublicKey> {
    let pem = pem.trim();
    RsaPublicKey::from_public_key_pem(pem)
        .or_else(|_| RsaPublicKey::from_pkcs1_pem(pem))
        .map_err(|_| Error::InvalidPublicKey)
}

/// Largest payload OAEP-SHA256 can carry under `public_key`
pub fn max_payload_len(public_key: &RsaPublicKey) -> usize {
    public_key.size().saturating_sub(OAEP_SHA256_OVERHEAD)
}

/// Encrypt an arbitrary payload with RSA-OAEP-SHA256
///
/// The size limit is checked up front so an undersized modulus yields
/// [`Error::PlaintextTooLarge`] instead of an opaque RSA failure.
pub fn encrypt<R: RngCore + CryptoRng>(
    rng: &mut R,
    public_key: &RsaPublicKey,
    payload: &[u8],
) -> Result<Vec<u8>> {
    let max = max_payload_len(public_key);
    if payload.len() > max {
        return Err(Error::PlaintextTooLarge {
            len: payload.len(),
            max,
        });
    }

    public_key
        .encrypt(rng, Oaep::new::<Sha256>(), payload)
        .map_err(|e| match e {
            rsa::Error::MessageTooLong => Error::PlaintextTooLarge {
                len: payload.len(),
                max,
            },
            _ => Error::InvalidPublicKey,
        })
}

/// Wrap a symmetric key under `public_key`
///
/// The result is exactly as long as the modulus in bytes.
pub fn wrap_key<R: RngCore + CryptoRng>(
    rng: &mut R,
    public_key: &RsaPublicKey,
    key: &SymmetricKey,
) -> Result<Vec<u8>> {
    encrypt(rng, public_key, key.as_bytes())
}

/// Parse `private_key_pem` and unwrap `wrapped` with it
pub fn unwrap_key(private_key_pem: &str, wrapped: &[u8]) -> Result<SymmetricKey> {
    Rsa::from_pem(private_key_pem)?.unwrap_key(wrapped)
}
