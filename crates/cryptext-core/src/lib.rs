//! Cryptext core
//!
//! Validates conversion requests and routes them to the primitives in
//! `cryptext-crypto`. Stateless: callers on any thread may invoke the
//! transforms concurrently without coordination.
//!
//! ```
//! use cryptext_core::{hash_transform, symmetric_transform};
//!
//! let digest = hash_transform("abc", "sha256").unwrap();
//! assert!(digest.starts_with("ba7816bf"));
//!
//! let sealed = symmetric_transform("hello", "encrypt", "passphrase").unwrap();
//! assert_eq!(symmetric_transform(&sealed, "decrypt", "passphrase").unwrap(), "hello");
//! ```

pub mod convert;
pub mod error;
pub mod request;

pub use convert::{base64_transform, convert, hash_transform, hybrid_transform, symmetric_transform};
pub use error::{ConvertError, ErrorKind, Result};
pub use request::{Base64Action, CipherAction, Conversion, ConversionRequest, Mode};
