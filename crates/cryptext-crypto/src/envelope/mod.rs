//! Hybrid AES+RSA envelope
//!
//! Sealing draws a fresh AES-256 key and IV, encrypts the text with
//! AES-256-CBC, wraps the key with RSA-OAEP-SHA256 and packs everything into
//! one opaque string:
//!
//! ```text
//! Base64( JSON({ "alg": "AES-256-CBC+RSA-OAEP",
//!                "iv":  Base64(iv),
//!                "ek":  Base64(wrapped key),
//!                "ct":  Base64(ciphertext) }) )
//! ```
//!
//! Opening inverts every step. Key, IV and intermediate buffers live for one
//! call only; nothing here holds state between calls.

use rand::{rngs::OsRng, CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::{
    asymmetric::{rsa as key_wrap, Rsa, RsaPublicKey},
    error::{Error, Result},
    hash::base64,
    symmetric::{Aes256Cbc, Iv, SymmetricKey, BLOCK_SIZE},
};

/// Algorithm identifier written into every envelope
pub const ALGORITHM_ID: &str = "AES-256-CBC+RSA-OAEP";

/// Long form of the identifier, accepted when opening
pub const ALGORITHM_ID_SHA256: &str = "AES-256-CBC+RSA-OAEP-SHA256";

/// Serialized field layout. Field order is not significant on decode.
#[derive(Serialize, Deserialize)]
struct WireEnvelope {
    alg: String,
    iv: String,
    ek: String,
    ct: String,
}

/// Decoded envelope contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    algorithm: String,
    iv: Iv,
    wrapped_key: Vec<u8>,
    ciphertext: Vec<u8>,
}

impl Envelope {
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn iv(&self) -> &Iv {
        &self.iv
    }

    pub fn wrapped_key(&self) -> &[u8] {
        &self.wrapped_key
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Serialize to the opaque outer string
    pub fn encode(&self) -> Result<String> {
        let wire = WireEnvelope {
            alg: self.algorithm.clone(),
            iv: base64::encode(self.iv.as_bytes()),
            ek: base64::encode(&self.wrapped_key),
            ct: base64::encode(&self.ciphertext),
        };
        let json =
            serde_json::to_vec(&wire).map_err(|e| Error::Serialization(e.to_string()))?;
        Ok(base64::encode(json))
    }

    /// Parse the opaque outer string
    ///
    /// Every structural problem (outer or inner Base64, JSON shape, missing
    /// fields, IV length, ciphertext alignment) is reported as
    /// [`Error::MalformedEnvelope`]. A well-formed envelope naming another
    /// algorithm is [`Error::UnsupportedAlgorithm`].
    pub fn decode(encoded: &str) -> Result<Self> {
        let json = base64::decode(encoded.trim()).map_err(|_| Error::MalformedEnvelope)?;
        let wire: WireEnvelope =
            serde_json::from_slice(&json).map_err(|_| Error::MalformedEnvelope)?;

        if wire.alg != ALGORITHM_ID && wire.alg != ALGORITHM_ID_SHA256 {
            return Err(Error::UnsupportedAlgorithm(wire.alg));
        }

        let iv = decode_field(&wire.iv)?;
        let iv = Iv::from_slice(&iv).map_err(|_| Error::MalformedEnvelope)?;

        let wrapped_key = decode_field(&wire.ek)?;
        if wrapped_key.is_empty() {
            return Err(Error::MalformedEnvelope);
        }

        let ciphertext = decode_field(&wire.ct)?;
        if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
            return Err(Error::MalformedEnvelope);
        }

        Ok(Self {
            algorithm: wire.alg,
            iv,
            wrapped_key,
            ciphertext,
        })
    }
}

fn decode_field(field: &str) -> Result<Vec<u8>> {
    base64::decode(field).map_err(|_| Error::MalformedEnvelope)
}

/// Encrypt raw bytes for the holder of `public_key`
pub fn seal_bytes<R: RngCore + CryptoRng>(
    rng: &mut R,
    public_key: &RsaPublicKey,
    plaintext: &[u8],
) -> Result<Envelope> {
    let key = SymmetricKey::generate(rng);
    let iv = Iv::generate(rng);

    let ciphertext = Aes256Cbc::from(key.clone()).encrypt(&iv, plaintext)?;
    let wrapped_key = key_wrap::wrap_key(rng, public_key, &key)?;

    Ok(Envelope {
        algorithm: ALGORITHM_ID.to_string(),
        iv,
        wrapped_key,
        ciphertext,
    })
}

/// Decrypt an envelope's payload to raw bytes
pub fn open_bytes(private_key: &Rsa, envelope: &Envelope) -> Result<Vec<u8>> {
    let key = private_key.unwrap_key(envelope.wrapped_key())?;
    Aes256Cbc::from(key).decrypt(envelope.iv(), envelope.ciphertext())
}

/// Seal `plaintext` with a caller-supplied secure generator
///
/// # Errors
/// * [`Error::MissingPublicKey`] when no key is given
/// * [`Error::InvalidPublicKey`] when the PEM does not parse
/// * [`Error::PlaintextTooLarge`] when the modulus is too small for OAEP
pub fn seal_with_rng<R: RngCore + CryptoRng>(
    rng: &mut R,
    public_key_pem: Option<&str>,
    plaintext: &str,
) -> Result<String> {
    let public_key_pem = public_key_pem.ok_or(Error::MissingPublicKey)?;
    let public_key = key_wrap::public_key_from_pem(public_key_pem)?;

    let envelope = seal_bytes(rng, &public_key, plaintext.as_bytes())?;
    envelope.encode()
}

/// Seal `plaintext` for the holder of the private half of `public_key_pem`
///
/// Key and IV come from the operating system's CSPRNG, so two calls on the
/// same input yield different envelopes.
pub fn seal(public_key_pem: Option<&str>, plaintext: &str) -> Result<String> {
    seal_with_rng(&mut OsRng, public_key_pem, plaintext)
}

/// Open an envelope produced by [`seal`]
///
/// # Errors
/// * [`Error::MissingPrivateKey`] when no key is given
/// * [`Error::MalformedEnvelope`] / [`Error::UnsupportedAlgorithm`] from [`Envelope::decode`]
/// * [`Error::InvalidPrivateKey`] when the PEM does not parse
/// * [`Error::UnwrapFailure`] when the key cannot be unwrapped
/// * [`Error::Padding`] when the ciphertext does not decrypt cleanly
/// * [`Error::InvalidTextEncoding`] when the plaintext is not UTF-8
pub fn open(private_key_pem: Option<&str>, encoded: &str) -> Result<String> {
    let private_key_pem = private_key_pem.ok_or(Error::MissingPrivateKey)?;
    let envelope = Envelope::decode(encoded)?;
    let private_key = Rsa::from_pem(private_key_pem)?;

    let plaintext = open_bytes(&private_key, &envelope)?;
    String::from_utf8(plaintext).map_err(|_| Error::InvalidTextEncoding)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::test_keys;

    fn wire(encoded: &str) -> serde_json::Value {
        serde_json::from_slice(&base64::decode(encoded).unwrap()).unwrap()
    }

    fn rewrap(value: &serde_json::Value) -> String {
        base64::encode(serde_json::to_vec(value).unwrap())
    }

    #[test]
    fn test_seal_open() {
        let sealed = seal(Some(test_keys::PUBLIC_A), "Attack at dawn").unwrap();
        let opened = open(Some(test_keys::PRIVATE_A), &sealed).unwrap();
        assert_eq!(opened, "Attack at dawn");
    }

    #[test]
    fn test_seal_open_unicode_and_empty() {
        let long = "x".repeat(10_000);
        for text in ["", "日本語のテキスト 🚀", long.as_str()] {
            let sealed = seal(Some(test_keys::PUBLIC_A), text).unwrap();
            assert_eq!(open(Some(test_keys::PRIVATE_A), &sealed).unwrap(), text);
        }
    }

    #[test]
    fn test_wire_format() {
        let sealed = seal(Some(test_keys::PUBLIC_A), "hello").unwrap();
        let value = wire(&sealed);
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert_eq!(object["alg"], ALGORITHM_ID);
        assert_eq!(base64::decode(object["iv"].as_str().unwrap()).unwrap().len(), 16);
        assert_eq!(base64::decode(object["ek"].as_str().unwrap()).unwrap().len(), 256);
        assert_eq!(base64::decode(object["ct"].as_str().unwrap()).unwrap().len(), 16);
    }

    #[test]
    fn test_fresh_key_and_iv_per_call() {
        let a = seal(Some(test_keys::PUBLIC_A), "same input").unwrap();
        let b = seal(Some(test_keys::PUBLIC_A), "same input").unwrap();
        assert_ne!(a, b);

        let (wa, wb) = (wire(&a), wire(&b));
        assert_ne!(wa["iv"], wb["iv"]);
        assert_ne!(wa["ek"], wb["ek"]);
        assert_ne!(wa["ct"], wb["ct"]);

        assert_eq!(open(Some(test_keys::PRIVATE_A), &a).unwrap(), "same input");
        assert_eq!(open(Some(test_keys::PRIVATE_A), &b).unwrap(), "same input");
    }

    #[test]
    fn test_injected_rng_is_reproducible() {
        let a = seal_with_rng(&mut StdRng::seed_from_u64(5), Some(test_keys::PUBLIC_A), "x").unwrap();
        let b = seal_with_rng(&mut StdRng::seed_from_u64(5), Some(test_keys::PUBLIC_A), "x").unwrap();
        let c = seal_with_rng(&mut StdRng::seed_from_u64(6), Some(test_keys::PUBLIC_A), "x").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(open(Some(test_keys::PRIVATE_A), &a).unwrap(), "x");
    }

    #[test]
    fn test_envelope_decode_encode() {
        let sealed = seal(Some(test_keys::PUBLIC_A), "payload").unwrap();
        let envelope = Envelope::decode(&sealed).unwrap();
        assert_eq!(envelope.algorithm(), ALGORITHM_ID);
        assert_eq!(envelope.wrapped_key().len(), 256);
        assert_eq!(envelope.encode().unwrap(), sealed);
    }

    #[test]
    fn test_missing_keys() {
        assert_eq!(seal(None, "x").unwrap_err(), Error::MissingPublicKey);
        let sealed = seal(Some(test_keys::PUBLIC_A), "x").unwrap();
        assert_eq!(open(None, &sealed).unwrap_err(), Error::MissingPrivateKey);
    }

    #[test]
    fn test_invalid_key_material() {
        assert_eq!(
            seal(Some("garbage"), "x").unwrap_err(),
            Error::InvalidPublicKey
        );
        let sealed = seal(Some(test_keys::PUBLIC_A), "x").unwrap();
        assert_eq!(
            open(Some("garbage"), &sealed).unwrap_err(),
            Error::InvalidPrivateKey
        );
        assert!(matches!(
            seal(Some(test_keys::PUBLIC_SMALL), "x"),
            Err(Error::PlaintextTooLarge { .. })
        ));
    }

    #[test]
    fn test_wrong_private_key() {
        let sealed = seal(Some(test_keys::PUBLIC_A), "secret").unwrap();
        assert_eq!(
            open(Some(test_keys::PRIVATE_B), &sealed).unwrap_err(),
            Error::UnwrapFailure
        );
    }

    #[test]
    fn test_tampered_wrapped_key() {
        let sealed = seal(Some(test_keys::PUBLIC_A), "secret").unwrap();
        let value = wire(&sealed);
        let ek = base64::decode(value["ek"].as_str().unwrap()).unwrap();

        for pos in [0usize, 17, 128, 255] {
            let mut tampered_ek = ek.clone();
            tampered_ek[pos] ^= 0x01;
            let mut tampered = value.clone();
            tampered["ek"] = base64::encode(&tampered_ek).into();

            assert_eq!(
                open(Some(test_keys::PRIVATE_A), &rewrap(&tampered)).unwrap_err(),
                Error::UnwrapFailure
            );
        }
    }

    #[test]
    fn test_tampered_ciphertext_padding() {
        // 16 bytes of text: two blocks, the second one all padding (0x10)
        let sealed = seal(Some(test_keys::PUBLIC_A), "0123456789abcdef").unwrap();
        let value = wire(&sealed);
        let ct = base64::decode(value["ct"].as_str().unwrap()).unwrap();
        assert_eq!(ct.len(), 32);

        // Any flip in the first block lands in the padding block after CBC
        // chaining, breaking the uniform 0x10 pattern
        for pos in 0..16 {
            let mut tampered_ct = ct.clone();
            tampered_ct[pos] ^= 0x01;
            let mut tampered = value.clone();
            tampered["ct"] = base64::encode(&tampered_ct).into();

            assert_eq!(
                open(Some(test_keys::PRIVATE_A), &rewrap(&tampered)).unwrap_err(),
                Error::Padding
            );
        }
    }

    #[test]
    fn test_malformed_envelopes() {
        let sealed = seal(Some(test_keys::PUBLIC_A), "x").unwrap();
        let value = wire(&sealed);
        let open_a = |s: &str| open(Some(test_keys::PRIVATE_A), s).unwrap_err();

        // Not base64 at all
        assert_eq!(open_a("%%% not base64 %%%"), Error::MalformedEnvelope);
        // Base64 of bytes that are not JSON
        assert_eq!(
            open_a(&base64::encode([0x13u8, 0x37, 0xC0, 0xFF, 0xEE, 0x00, 0x42])),
            Error::MalformedEnvelope
        );
        // JSON but not an object
        assert_eq!(open_a(&base64::encode("[1,2,3]")), Error::MalformedEnvelope);

        // Each mandatory field removed in turn
        for field in ["alg", "iv", "ek", "ct"] {
            let mut partial = value.clone();
            partial.as_object_mut().unwrap().remove(field);
            assert_eq!(open_a(&rewrap(&partial)), Error::MalformedEnvelope, "{}", field);
        }

        // Fields that are not base64
        for field in ["iv", "ek", "ct"] {
            let mut broken = value.clone();
            broken[field] = "***".into();
            assert_eq!(open_a(&rewrap(&broken)), Error::MalformedEnvelope, "{}", field);
        }

        // Non-string field
        let mut numeric = value.clone();
        numeric["iv"] = 12.into();
        assert_eq!(open_a(&rewrap(&numeric)), Error::MalformedEnvelope);

        // Wrong IV length
        let mut short_iv = value.clone();
        short_iv["iv"] = base64::encode([0u8; 8]).into();
        assert_eq!(open_a(&rewrap(&short_iv)), Error::MalformedEnvelope);

        // Ciphertext not block aligned
        let mut ragged = value.clone();
        ragged["ct"] = base64::encode([0u8; 20]).into();
        assert_eq!(open_a(&rewrap(&ragged)), Error::MalformedEnvelope);
    }

    #[test]
    fn test_field_order_and_extra_fields_ignored() {
        let sealed = seal(Some(test_keys::PUBLIC_A), "reordered").unwrap();
        let value = wire(&sealed);
        let reordered = format!(
            r#"{{"ct":{},"note":"extra","ek":{},"iv":{},"alg":{}}}"#,
            value["ct"], value["ek"], value["iv"], value["alg"]
        );
        let opened = open(Some(test_keys::PRIVATE_A), &base64::encode(reordered)).unwrap();
        assert_eq!(opened, "reordered");
    }

    #[test]
    fn test_algorithm_identifier() {
        let sealed = seal(Some(test_keys::PUBLIC_A), "versioned").unwrap();
        let mut value = wire(&sealed);

        value["alg"] = ALGORITHM_ID_SHA256.into();
        assert_eq!(
            open(Some(test_keys::PRIVATE_A), &rewrap(&value)).unwrap(),
            "versioned"
        );

        value["alg"] = "CHACHA20+X25519".into();
        assert_eq!(
            open(Some(test_keys::PRIVATE_A), &rewrap(&value)).unwrap_err(),
            Error::UnsupportedAlgorithm("CHACHA20+X25519".to_string())
        );
    }

    #[test]
    fn test_non_utf8_payload() {
        let public_key = key_wrap::public_key_from_pem(test_keys::PUBLIC_A).unwrap();
        let envelope = seal_bytes(&mut OsRng, &public_key, &[0xFF, 0xFE, 0xFD]).unwrap();

        let private_key = Rsa::from_pem(test_keys::PRIVATE_A).unwrap();
        assert_eq!(open_bytes(&private_key, &envelope).unwrap(), vec![0xFF, 0xFE, 0xFD]);
        assert_eq!(
            open(Some(test_keys::PRIVATE_A), &envelope.encode().unwrap()).unwrap_err(),
            Error::InvalidTextEncoding
        );
    }
}
