//! Peg-in transaction service client
//!
//! The remote service owns UTXO selection, fee calculation, and script
//! construction. This client only ships the transfer parameters over and
//! hands back the normalized transaction it returns.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{PeginError, PeginResult};
use crate::types::{FeeLevel, NormalizedTx, PeginConfiguration};
use crate::log_debug;

const MODULE: &str = "api";

/// Default per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Parameters of a "create peg-in transaction" call.
///
/// Field names follow the service's wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePeginTxRequest {
    pub amount_to_transfer_in_satoshi: u64,
    pub refund_address: String,
    pub recipient: String,
    pub session_id: String,
    pub fee_level: FeeLevel,
    pub change_address: String,
}

/// Capability to create a peg-in transaction remotely.
///
/// The transaction builder consumes the service through this seam so tests
/// can inject a canned implementation.
#[async_trait]
pub trait CreatePeginTx: Send + Sync {
    async fn create_pegin_tx(&self, request: &CreatePeginTxRequest) -> PeginResult<NormalizedTx>;
}

/// HTTP client for the peg-in API
#[derive(Debug, Clone)]
pub struct PeginApiService {
    client: reqwest::Client,
    base_url: String,
}

impl PeginApiService {
    pub fn new(base_url: impl Into<String>) -> PeginResult<Self> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> PeginResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PeginError::internal(format!("HTTP client build failed: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Session-scoped peg-in configuration (amount bounds, federation address)
    pub async fn fetch_pegin_configuration(&self) -> PeginResult<PeginConfiguration> {
        let url = format!("{}/pegin-configuration", self.base_url);
        log_debug!(MODULE, "fetching peg-in configuration", url = url);

        let response = self.client.get(&url).send().await?;
        let response = check_status(response).await?;

        Ok(response.json::<PeginConfiguration>().await?)
    }
}

#[async_trait]
impl CreatePeginTx for PeginApiService {
    async fn create_pegin_tx(&self, request: &CreatePeginTxRequest) -> PeginResult<NormalizedTx> {
        let url = format!("{}/pegin-tx", self.base_url);
        log_debug!(
            MODULE,
            "requesting peg-in transaction",
            url = url,
            amount = request.amount_to_transfer_in_satoshi,
            session_id = request.session_id,
        );

        let response = self.client.post(&url).json(request).send().await?;
        let response = check_status(response).await?;

        Ok(response.json::<NormalizedTx>().await?)
    }
}

/// Error body the service sends alongside non-2xx statuses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

async fn check_status(response: reqwest::Response) -> PeginResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<ApiErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => format!("Service responded with status {}", status),
    };

    Err(PeginError::remote_service(message).with_details(format!("status {}", status)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format_is_camel_case() {
        let request = CreatePeginTxRequest {
            amount_to_transfer_in_satoshi: 100000,
            refund_address: "mzMCEHDUAZaKL9BXt9SzasFPUUqM77TqP1".to_string(),
            recipient: "0xa2193a393aa0c94a4d52893496f02b56c61c36a1".to_string(),
            session_id: "sess-1".to_string(),
            fee_level: FeeLevel::Average,
            change_address: "mfWxJ45yp2SFn7UciZyNpvDKrzbhyfKrY8".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["amountToTransferInSatoshi"], 100000);
        assert_eq!(json["feeLevel"], "BITCOIN_AVERAGE_FEE_LEVEL");
        assert_eq!(json["sessionId"], "sess-1");
        assert!(json.get("amount_to_transfer_in_satoshi").is_none());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let service = PeginApiService::new("https://api.example.test/").unwrap();
        assert_eq!(service.base_url, "https://api.example.test");
    }

    #[test]
    fn test_normalized_tx_decodes_service_payload() {
        let json = r#"{
            "inputs": [
                {"address": "mA", "prev_hash": "h1", "prev_index": 0, "amount": 100000}
            ],
            "outputs": [
                {"amount": "0", "op_return_data": "deadbeef"},
                {"address": "2N1GMB8gxHYR5HLPSRgf9CJ9Lunjb9CTnKB", "amount": "99000"}
            ]
        }"#;

        let tx: NormalizedTx = serde_json::from_str(json).unwrap();
        assert_eq!(tx.inputs.len(), 1);
        assert_eq!(tx.inputs[0].amount, 100000);
        assert_eq!(tx.outputs[0].op_return_data.as_deref(), Some("deadbeef"));
        assert_eq!(tx.outputs[1].address.as_deref(), Some("2N1GMB8gxHYR5HLPSRgf9CJ9Lunjb9CTnKB"));
    }
}
