//! Transaction Signer
//!
//! Seam toward the hardware-wallet SDK. The device firmware performs all
//! cryptography; this layer only ships the signing request across and
//! surfaces the SDK's verdict unmodified.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::error::{PeginError, PeginResult};
use crate::log_warn;
use crate::tx::types::{TrezorSignedTx, TrezorTx};

const MODULE: &str = "tx::signer";

/// Default endpoint of the local Trezor connect bridge
const DEFAULT_BRIDGE_URL: &str = "http://127.0.0.1:21325";

/// Capability to sign a device request
#[async_trait]
pub trait TxSigner: Send + Sync {
    async fn sign(&self, tx: &TrezorTx) -> PeginResult<TrezorSignedTx>;
}

/// Signer backed by the Trezor connect bridge
#[derive(Debug, Clone)]
pub struct TrezorTxSigner {
    client: reqwest::Client,
    bridge_url: String,
}

/// Response envelope the connect SDK wraps results in
#[derive(Debug, Deserialize)]
struct SignResponse {
    success: bool,
    payload: Option<TrezorSignedTx>,
    error: Option<String>,
}

impl TrezorTxSigner {
    pub fn new() -> PeginResult<Self> {
        Self::with_bridge_url(DEFAULT_BRIDGE_URL)
    }

    pub fn with_bridge_url(bridge_url: impl Into<String>) -> PeginResult<Self> {
        // Signing waits for the user to confirm on the device
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(|e| PeginError::internal(format!("HTTP client build failed: {}", e)))?;

        Ok(Self {
            client,
            bridge_url: bridge_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl TxSigner for TrezorTxSigner {
    async fn sign(&self, tx: &TrezorTx) -> PeginResult<TrezorSignedTx> {
        let url = format!("{}/sign-tx", self.bridge_url);

        let response = self
            .client
            .post(&url)
            .json(tx)
            .send()
            .await
            .map_err(|e| PeginError::signer(e.to_string()))?;

        let response: SignResponse = response
            .json()
            .await
            .map_err(|e| PeginError::signer(format!("Malformed signer response: {}", e)))?;

        if !response.success {
            let message = response
                .error
                .unwrap_or_else(|| "Device rejected the transaction".to_string());
            log_warn!(MODULE, "signing failed", error = message);
            return Err(PeginError::signer(message));
        }

        response
            .payload
            .ok_or_else(|| PeginError::signer("Signer returned success without a payload"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridge_url_trailing_slash_trimmed() {
        let signer = TrezorTxSigner::with_bridge_url("http://127.0.0.1:21325/").unwrap();
        assert_eq!(signer.bridge_url, "http://127.0.0.1:21325");
    }

    #[test]
    fn test_sign_response_decoding() {
        let json = r#"{
            "success": true,
            "payload": {"signatures": ["3045aa"], "serializedTx": "01000000..."}
        }"#;
        let response: SignResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        assert_eq!(response.payload.unwrap().signatures.len(), 1);

        let json = r#"{"success": false, "error": "Action cancelled by user"}"#;
        let response: SignResponse = serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Action cancelled by user"));
    }
}
