//! AES-256-CBC with PKCS#7 padding
//!
//! Unauthenticated block-cipher encryption used by the passphrase mode and
//! inside the hybrid envelope. The transform is a pure function of
//! `(key, iv, input)`.

use aes::Aes256;
use cbc::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use super::key::{Iv, SymmetricKey, KEY_LEN};
use crate::error::{Error, Result};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// AES block size in bytes
pub const BLOCK_SIZE: usize = 16;

/// AES-256-CBC cipher bound to one key
pub struct Aes256Cbc {
    key: SymmetricKey,
}

impl From<SymmetricKey> for Aes256Cbc {
    fn from(key: SymmetricKey) -> Self {
        Self { key }
    }
}

impl Aes256Cbc {
    /// Create a cipher from raw key bytes (must be 32 bytes)
    pub fn new(key: &[u8]) -> Result<Self> {
        Ok(SymmetricKey::from_slice(key)?.into())
    }

    /// Pad `plaintext` to the block size and encrypt it
    ///
    /// The output length is always a non-zero multiple of 16.
    pub fn encrypt(&self, iv: &Iv, plaintext: &[u8]) -> Result<Vec<u8>> {
        let cipher = Aes256CbcEnc::new_from_slices(self.key.as_bytes(), iv.as_bytes())
            .map_err(|_| Error::InvalidKeyLength {
                expected: KEY_LEN,
                actual: self.key.as_bytes().len(),
            })?;
        Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
    }

    /// Decrypt and strip the PKCS#7 padding
    ///
    /// Misaligned input and inconsistent padding both surface as
    /// [`Error::Padding`], without saying which check failed.
    pub fn decrypt(&self, iv: &Iv, ciphertext: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
            return Err(Error::Padding);
        }

        let cipher = Aes256CbcDec::new_from_slices(self.key.as_bytes(), iv.as_bytes())
            .map_err(|_| Error::InvalidKeyLength {
                expected: KEY_LEN,
                actual: self.key.as_bytes().len(),
            })?;
        cipher
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|_| Error::Padding)
    }
}

/// Encrypt with raw key and IV bytes
///
/// # Errors
/// * [`Error::InvalidKeyLength`] unless `key` is 32 bytes
/// * [`Error::InvalidIvLength`] unless `iv` is 16 bytes
pub fn encrypt(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Cbc::new(key)?;
    let iv = Iv::from_slice(iv)?;
    cipher.encrypt(&iv, plaintext)
}

/// Decrypt with raw key and IV bytes
pub fn decrypt(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Cbc::new(key)?;
    let iv = Iv::from_slice(iv)?;
    cipher.decrypt(&iv, ciphertext)
}
