use thiserror::Error;

/// Errors raised by the cryptext primitives and the envelope codec
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("Invalid IV length: expected {expected} bytes, got {actual}")]
    InvalidIvLength { expected: usize, actual: usize },

    /// Padding was inconsistent after CBC decryption. Carries no detail on purpose.
    #[error("Decryption failed")]
    Padding,

    #[error("Invalid RSA public key")]
    InvalidPublicKey,

    #[error("Invalid RSA private key")]
    InvalidPrivateKey,

    #[error("Payload of {len} bytes exceeds the {max} byte limit of the RSA key")]
    PlaintextTooLarge { len: usize, max: usize },

    /// Any OAEP decryption failure. Carries no detail on purpose.
    #[error("Key unwrap failed")]
    UnwrapFailure,

    #[error("A public key is required for encryption")]
    MissingPublicKey,

    #[error("A private key is required for decryption")]
    MissingPrivateKey,

    #[error("Malformed envelope")]
    MalformedEnvelope,

    #[error("Decrypted data is not valid UTF-8 text")]
    InvalidTextEncoding,

    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Base64 decode error: {0}")]
    InvalidBase64(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
