//! Peg-in Core Library
//!
//! Rust core for a web wallet that moves bitcoin into a two-way-peg
//! sidechain through a hardware wallet.
//!
//! # Architecture
//!
//! This crate provides:
//! - **store**: session state, address registry, and the store identifier
//!   vocabulary as closed tag sets
//! - **api**: client for the remote peg-in transaction service
//! - **tx**: device signing request construction and the signer seam
//! - **wallet**: address classification and validation
//! - **utils**: structured logging with sensitive-data redaction
//!
//! # Example
//!
//! ```rust,ignore
//! use pegin_core::{builder_for, BuilderDeps, BuildParams, Coin, FeeLevel, WalletKind};
//!
//! let mut builder = builder_for(WalletKind::Trezor, deps)?;
//! let tx = builder.build_tx(params).await?;
//! let signed = builder.sign().await?;
//! println!("signed: {}", signed.serialized_tx);
//! ```
//!
//! UTXO selection, fee calculation, and all cryptography live elsewhere:
//! the remote service assembles the transaction, the device firmware signs
//! it. This crate is the glue between the two.

pub mod error;
pub mod types;
pub mod store;
pub mod api;
pub mod tx;
pub mod wallet;
pub mod utils;

// Re-export key types for convenience
pub use error::{ErrorCode, PeginError, PeginResult};
pub use types::*;

pub use api::{CreatePeginTx, CreatePeginTxRequest, PeginApiService};
pub use store::{Action, AddressRegistry, Getter, Mutation, PeginSessionState};
pub use tx::{
    builder_for, BuildParams, BuilderDeps, InputScriptType, TrezorSignedTx, TrezorTx,
    TrezorTxBuilder, TrezorTxSigner, TxBuilder, TxInput, TxOutput, TxSigner,
};
pub use wallet::{get_account_type, validate_address};
