//! Conversion dispatcher
//!
//! Runs validated [`Conversion`]s and exposes the four text transforms.
//! Every call is independent: keys, IVs and buffers are local to the call.

use cryptext_crypto::{
    base64, derive_key32, envelope, hash_hex, Aes256Cbc, Iv, HashAlgorithm,
};
use rand::{rngs::OsRng, CryptoRng, RngCore};
use tracing::debug;

use crate::{
    error::{ConvertError, Result},
    request::{Base64Action, CipherAction, Conversion, ConversionRequest},
};

const IV_LEN: usize = cryptext_crypto::symmetric::IV_LEN;
const BLOCK_SIZE: usize = cryptext_crypto::symmetric::BLOCK_SIZE;

impl Conversion<'_> {
    /// Run the conversion, drawing randomness from the OS generator
    pub fn run(&self, text: &str) -> Result<String> {
        self.run_with_rng(&mut OsRng, text)
    }

    /// Run the conversion with an injected secure generator
    ///
    /// Only encryption consumes randomness (IV, and the message key in
    /// hybrid mode).
    pub fn run_with_rng<R: RngCore + CryptoRng>(&self, rng: &mut R, text: &str) -> Result<String> {
        debug!(mode = %self.mode(), action = self.action_name(), "running conversion");

        let result = match *self {
            Conversion::Base64(action) => base64_convert(text, action),
            Conversion::Hash(algorithm) => Ok(hash_convert(text, algorithm)),
            Conversion::Symmetric {
                action: CipherAction::Encrypt,
                passphrase,
            } => aes_encrypt(rng, text, passphrase),
            Conversion::Symmetric {
                action: CipherAction::Decrypt,
                passphrase,
            } => aes_decrypt(text, passphrase),
            Conversion::HybridSeal { public_key_pem } => {
                envelope::seal_with_rng(rng, Some(public_key_pem), text).map_err(Into::into)
            }
            Conversion::HybridOpen { private_key_pem } => {
                envelope::open(Some(private_key_pem), text).map_err(Into::into)
            }
        };

        if let Err(ref e) = result {
            debug!(mode = %self.mode(), kind = ?e.kind(), "conversion failed");
        }
        result
    }
}

fn base64_convert(text: &str, action: Base64Action) -> Result<String> {
    match action {
        Base64Action::Encode => Ok(base64::encode(text)),
        Base64Action::Decode => {
            let bytes = base64::decode(text)?;
            String::from_utf8(bytes).map_err(|_| ConvertError::InvalidTextEncoding)
        }
    }
}

fn hash_convert(text: &str, algorithm: HashAlgorithm) -> String {
    hash_hex(text.as_bytes(), algorithm)
}

/// `Base64(iv || AES-256-CBC(SHA-256(passphrase), iv, text))`
fn aes_encrypt<R: RngCore + CryptoRng>(rng: &mut R, text: &str, passphrase: &str) -> Result<String> {
    let cipher = Aes256Cbc::from(derive_key32(passphrase.as_bytes()));
    let iv = Iv::generate(rng);
    let ciphertext = cipher.encrypt(&iv, text.as_bytes())?;

    let mut out = Vec::with_capacity(IV_LEN + ciphertext.len());
    out.extend_from_slice(iv.as_bytes());
    out.extend_from_slice(&ciphertext);
    Ok(base64::encode(out))
}

fn aes_decrypt(text: &str, passphrase: &str) -> Result<String> {
    let data = base64::decode(text).map_err(|_| ConvertError::MalformedEnvelope)?;
    if data.len() < IV_LEN + BLOCK_SIZE || (data.len() - IV_LEN) % BLOCK_SIZE != 0 {
        return Err(ConvertError::MalformedEnvelope);
    }

    let (iv, ciphertext) = data.split_at(IV_LEN);
    let iv = Iv::from_slice(iv)?;
    let cipher = Aes256Cbc::from(derive_key32(passphrase.as_bytes()));
    let plaintext = cipher.decrypt(&iv, ciphertext)?;
    String::from_utf8(plaintext).map_err(|_| ConvertError::InvalidTextEncoding)
}

/// Validate and run a request
pub fn convert(request: &ConversionRequest) -> Result<String> {
    request.validate()?.run(&request.text)
}

/// Base64 encode (`action = "encode"`) or decode (`"decode"`) UTF-8 text
pub fn base64_transform(text: &str, action: &str) -> Result<String> {
    Conversion::base64(Some(action))?.run(text)
}

/// Lower-case hex digest of `text` with the named algorithm
pub fn hash_transform(text: &str, algorithm_name: &str) -> Result<String> {
    Conversion::hash(Some(algorithm_name))?.run(text)
}

/// AES-256-CBC with a key derived from `passphrase`
///
/// Encrypting the same text twice gives different output (fresh IV); both
/// decrypt with the same passphrase.
pub fn symmetric_transform(text: &str, action: &str, passphrase: &str) -> Result<String> {
    Conversion::symmetric(Some(action), Some(passphrase))?.run(text)
}

/// Hybrid AES+RSA envelope: `encrypt` needs `public_key_pem`, `decrypt`
/// needs `private_key_pem`
pub fn hybrid_transform(
    text: &str,
    action: &str,
    public_key_pem: Option<&str>,
    private_key_pem: Option<&str>,
) -> Result<String> {
    Conversion::hybrid(Some(action), public_key_pem, private_key_pem)?.run(text)
}
