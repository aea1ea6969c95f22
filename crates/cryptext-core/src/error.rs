//! Caller-facing error taxonomy

use cryptext_crypto::Error as CryptoError;
use thiserror::Error;

/// Conversion error
///
/// Cryptographic integrity failures never say which internal check tripped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// Missing or malformed request input, detected before any cryptography
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Unparsable PEM, wrong key length or a modulus too small for the payload
    #[error("Invalid key material: {0}")]
    InvalidKeyMaterial(String),

    #[error("Decryption failed")]
    Padding,

    #[error("Key unwrap failed")]
    UnwrapFailure,

    #[error("Malformed envelope")]
    MalformedEnvelope,

    #[error("Result is not valid UTF-8 text")]
    InvalidTextEncoding,

    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

/// Discriminant of [`ConvertError`] for matching without payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BadRequest,
    InvalidKeyMaterial,
    Padding,
    UnwrapFailure,
    MalformedEnvelope,
    InvalidTextEncoding,
    UnsupportedAlgorithm,
}

impl ConvertError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::BadRequest(_) => ErrorKind::BadRequest,
            ConvertError::InvalidKeyMaterial(_) => ErrorKind::InvalidKeyMaterial,
            ConvertError::Padding => ErrorKind::Padding,
            ConvertError::UnwrapFailure => ErrorKind::UnwrapFailure,
            ConvertError::MalformedEnvelope => ErrorKind::MalformedEnvelope,
            ConvertError::InvalidTextEncoding => ErrorKind::InvalidTextEncoding,
            ConvertError::UnsupportedAlgorithm(_) => ErrorKind::UnsupportedAlgorithm,
        }
    }

    /// True for failures caused by the shape of the request rather than by
    /// the data or keys it carries
    pub fn is_client_input(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::BadRequest | ErrorKind::UnsupportedAlgorithm
        )
    }
}

impl From<CryptoError> for ConvertError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::InvalidKeyLength { .. }
            | CryptoError::InvalidIvLength { .. }
            | CryptoError::InvalidPublicKey
            | CryptoError::InvalidPrivateKey
            | CryptoError::PlaintextTooLarge { .. } => {
                ConvertError::InvalidKeyMaterial(err.to_string())
            }
            CryptoError::Padding => ConvertError::Padding,
            CryptoError::UnwrapFailure => ConvertError::UnwrapFailure,
            CryptoError::MissingPublicKey | CryptoError::MissingPrivateKey => {
                ConvertError::BadRequest(err.to_string())
            }
            CryptoError::MalformedEnvelope | CryptoError::Serialization(_) => {
                ConvertError::MalformedEnvelope
            }
            CryptoError::InvalidTextEncoding => ConvertError::InvalidTextEncoding,
            CryptoError::UnsupportedAlgorithm(name) => ConvertError::UnsupportedAlgorithm(name),
            CryptoError::InvalidBase64(_) => {
                ConvertError::BadRequest("Input is not valid Base64".to_string())
            }
        }
    }
}

/// Conversion result type
pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crypto_error_mapping() {
        let cases = [
            (CryptoError::InvalidPublicKey, ErrorKind::InvalidKeyMaterial),
            (CryptoError::InvalidPrivateKey, ErrorKind::InvalidKeyMaterial),
            (
                CryptoError::InvalidKeyLength {
                    expected: 32,
                    actual: 3,
                },
                ErrorKind::InvalidKeyMaterial,
            ),
            (
                CryptoError::PlaintextTooLarge { len: 32, max: 30 },
                ErrorKind::InvalidKeyMaterial,
            ),
            (CryptoError::Padding, ErrorKind::Padding),
            (CryptoError::UnwrapFailure, ErrorKind::UnwrapFailure),
            (CryptoError::MissingPublicKey, ErrorKind::BadRequest),
            (CryptoError::MissingPrivateKey, ErrorKind::BadRequest),
            (CryptoError::MalformedEnvelope, ErrorKind::MalformedEnvelope),
            (
                CryptoError::Serialization("eof".into()),
                ErrorKind::MalformedEnvelope,
            ),
            (CryptoError::InvalidTextEncoding, ErrorKind::InvalidTextEncoding),
            (
                CryptoError::UnsupportedAlgorithm("x".into()),
                ErrorKind::UnsupportedAlgorithm,
            ),
            (CryptoError::InvalidBase64("bad".into()), ErrorKind::BadRequest),
        ];

        for (crypto, kind) in cases {
            assert_eq!(ConvertError::from(crypto).kind(), kind);
        }
    }

    #[test]
    fn test_integrity_errors_are_generic() {
        assert_eq!(ConvertError::Padding.to_string(), "Decryption failed");
        assert_eq!(ConvertError::UnwrapFailure.to_string(), "Key unwrap failed");
    }

    #[test]
    fn test_client_input_classification() {
        assert!(ConvertError::BadRequest("x".into()).is_client_input());
        assert!(ConvertError::UnsupportedAlgorithm("x".into()).is_client_input());
        assert!(!ConvertError::Padding.is_client_input());
        assert!(!ConvertError::MalformedEnvelope.is_client_input());
    }
}
