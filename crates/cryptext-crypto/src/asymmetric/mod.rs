//! Asymmetric cryptography
//!
//! RSA-OAEP-SHA256 wrapping of symmetric keys.

pub mod rsa;

pub use self::rsa::Rsa;
pub use ::rsa::{RsaPrivateKey, RsaPublicKey};
