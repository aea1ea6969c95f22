//! Symmetric encryption
//!
//! AES-256 in CBC mode with PKCS#7 padding, plus the key and IV types it
//! consumes.

pub mod cbc;
pub mod key;

pub use cbc::{Aes256Cbc, BLOCK_SIZE};
pub use key::{Iv, SymmetricKey, IV_LEN, KEY_LEN};
