//! Trezor peg-in transaction builder
//!
//! Maps the service's normalized transaction into a Trezor signing
//! request: derivation paths come from the injected address registry,
//! spend script types from the address classifier, and embedded-data
//! outputs are forced to zero value.

use async_trait::async_trait;
use std::sync::Arc;

use crate::api::{CreatePeginTx, CreatePeginTxRequest};
use crate::error::{PeginError, PeginResult};
use crate::log_info;
use crate::store::AddressRegistry;
use crate::tx::builder::{BuildParams, TxBuilder};
use crate::tx::signer::TxSigner;
use crate::tx::types::{InputScriptType, TrezorSignedTx, TrezorTx, TxInput, TxOutput};
use crate::types::{Coin, NormalizedInput, NormalizedOutput};
use crate::wallet::{get_account_type, validate_address};

const MODULE: &str = "tx::trezor";

pub struct TrezorTxBuilder {
    coin: Coin,
    registry: Arc<AddressRegistry>,
    service: Arc<dyn CreatePeginTx>,
    signer: Arc<dyn TxSigner>,
    tx: Option<TrezorTx>,
    change_addr: String,
}

impl TrezorTxBuilder {
    pub fn new(
        coin: Coin,
        registry: Arc<AddressRegistry>,
        service: Arc<dyn CreatePeginTx>,
        signer: Arc<dyn TxSigner>,
    ) -> Self {
        Self {
            coin,
            registry,
            service,
            signer,
            tx: None,
            change_addr: String::new(),
        }
    }

    /// Map normalized inputs, order preserved.
    ///
    /// An input address the registry cannot resolve aborts the build: the
    /// device cannot sign without a derivation path.
    fn map_inputs(&self, inputs: &[NormalizedInput]) -> PeginResult<Vec<TxInput>> {
        inputs
            .iter()
            .map(|input| {
                let path = self
                    .registry
                    .find_path(&input.address)
                    .ok_or_else(|| PeginError::unknown_address(&input.address))?;

                Ok(TxInput {
                    address_n: path.to_vec(),
                    prev_hash: input.prev_hash.clone(),
                    prev_index: input.prev_index,
                    script_type: InputScriptType::from_account(get_account_type(
                        &input.address,
                        self.coin,
                    )),
                    amount: input.amount.to_string(),
                })
            })
            .collect()
    }

    /// Map normalized outputs, order preserved.
    ///
    /// Embedded-data outputs ride as zero-value `PAYTOOPRETURN`; everything
    /// else pays to its address (empty string when the service omits one).
    pub fn map_outputs(outputs: &[NormalizedOutput]) -> Vec<TxOutput> {
        outputs
            .iter()
            .map(|output| match &output.op_return_data {
                Some(data) if !data.is_empty() => TxOutput::OpReturn {
                    op_return_data: data.clone(),
                    amount: "0".to_string(),
                },
                _ => TxOutput::Address {
                    address: output.address.clone().unwrap_or_default(),
                    amount: output.amount.clone(),
                },
            })
            .collect()
    }
}

#[async_trait]
impl TxBuilder for TrezorTxBuilder {
    async fn build_tx(&mut self, params: BuildParams) -> PeginResult<TrezorTx> {
        self.change_addr = params.change_address.clone();

        validate_address(&params.refund_address, self.coin)?;
        validate_address(&params.change_address, self.coin)?;

        let request = CreatePeginTxRequest {
            amount_to_transfer_in_satoshi: params.amount_to_transfer_in_satoshi,
            refund_address: params.refund_address,
            recipient: params.recipient,
            session_id: params.session_id,
            fee_level: params.fee_level,
            change_address: params.change_address,
        };

        let normalized = self.service.create_pegin_tx(&request).await?;

        let tx = TrezorTx {
            coin: self.coin.as_str().to_string(),
            inputs: self.map_inputs(&normalized.inputs)?,
            outputs: Self::map_outputs(&normalized.outputs),
        };

        log_info!(
            MODULE,
            "peg-in transaction built",
            coin = tx.coin,
            inputs = tx.inputs.len(),
            outputs = tx.outputs.len(),
            change_address = self.change_addr,
        );

        self.tx = Some(tx.clone());
        Ok(tx)
    }

    async fn sign(&self) -> PeginResult<TrezorSignedTx> {
        let tx = self
            .tx
            .as_ref()
            .ok_or_else(|| PeginError::build_required("build_tx must complete before sign"))?;

        self.signer.sign(tx).await
    }

    fn change_address(&self) -> &str {
        &self.change_addr
    }
}
