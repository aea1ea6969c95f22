//! # Cryptext
//!
//! On-demand text conversion: Base64, digests, passphrase AES and hybrid
//! AES+RSA envelopes.
//!
//! ## Crates
//!
//! - `cryptext_crypto` - cryptographic primitives and the envelope format
//! - `cryptext_core` - request validation and the conversion dispatcher
//! - `cryptext-cli` - command-line front end
//! - `cryptext-api` - HTTP service

// Re-export library sub-crates
pub use cryptext_core;
pub use cryptext_crypto;

pub use cryptext_core::{convert, ConversionRequest, ConvertError};
pub use cryptext_crypto::{open, seal};
