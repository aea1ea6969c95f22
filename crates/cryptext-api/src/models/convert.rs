//! Conversion API models

use cryptext_core::ConversionRequest;
use serde::{Deserialize, Serialize};

/// Body of `POST /convert`
///
/// Field names follow the original web front end: `type` selects the mode and
/// `key` carries the AES passphrase.
#[derive(Clone, Deserialize)]
pub struct ConvertRequest {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub text: String,
    pub action: Option<String>,
    pub algorithm: Option<String>,
    pub key: Option<String>,
    pub public_key: Option<String>,
    pub private_key: Option<String>,
}

impl From<ConvertRequest> for ConversionRequest {
    fn from(value: ConvertRequest) -> Self {
        ConversionRequest {
            mode: value.kind,
            text: value.text,
            action: value.action,
            algorithm: value.algorithm,
            passphrase: value.key,
            public_key: value.public_key,
            private_key: value.private_key,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub result: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
