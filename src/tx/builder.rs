//! Transaction Builder
//!
//! Capability contract for device-specific peg-in builders, plus the
//! factory that picks the variant for a connected wallet family.

use async_trait::async_trait;
use std::sync::Arc;

use crate::api::CreatePeginTx;
use crate::error::{PeginError, PeginResult};
use crate::store::AddressRegistry;
use crate::tx::signer::TxSigner;
use crate::tx::trezor::TrezorTxBuilder;
use crate::tx::types::{TrezorSignedTx, TrezorTx};
use crate::types::{Coin, FeeLevel, WalletKind};

/// Parameters of one peg-in build attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildParams {
    pub amount_to_transfer_in_satoshi: u64,
    /// Bitcoin address refunded if the peg-in is rejected
    pub refund_address: String,
    /// Destination identifier on the sidechain
    pub recipient: String,
    pub fee_level: FeeLevel,
    pub change_address: String,
    pub session_id: String,
}

/// Contract every device family implements.
///
/// A builder instance runs one build/sign cycle at a time: `sign` observes
/// exactly the request produced by the most recent completed `build_tx`.
#[async_trait]
pub trait TxBuilder: Send {
    /// Fetch the normalized transaction and shape it for the device.
    ///
    /// Fails on any remote-service error (propagated unmodified, no retry)
    /// and on input addresses the wallet registry cannot resolve.
    async fn build_tx(&mut self, params: BuildParams) -> PeginResult<TrezorTx>;

    /// Forward the most recently built request to the signer.
    ///
    /// Fails with `BuildRequired` when no build has completed yet.
    async fn sign(&self) -> PeginResult<TrezorSignedTx>;

    /// Change address recorded by the last `build_tx`, or `""` before any
    fn change_address(&self) -> &str;
}

impl std::fmt::Debug for dyn TxBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn TxBuilder")
    }
}

/// Everything a builder variant needs injected
pub struct BuilderDeps {
    pub coin: Coin,
    pub registry: Arc<AddressRegistry>,
    pub service: Arc<dyn CreatePeginTx>,
    pub signer: Arc<dyn TxSigner>,
}

/// Pick the builder variant for a wallet family.
///
/// Only the Trezor family is wired up; the remaining kinds report
/// `NotImplemented` until their device adapters land.
pub fn builder_for(kind: WalletKind, deps: BuilderDeps) -> PeginResult<Box<dyn TxBuilder>> {
    match kind {
        WalletKind::Trezor => Ok(Box::new(TrezorTxBuilder::new(
            deps.coin,
            deps.registry,
            deps.service,
            deps.signer,
        ))),
        other => Err(PeginError::not_implemented(format!(
            "No transaction builder for {}",
            other.as_str()
        ))),
    }
}
