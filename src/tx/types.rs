//! Device signing request types
//!
//! Shapes match the Trezor-family connect protocol: derivation paths ride
//! as `address_n`, amounts as decimal strings, and script types use the
//! device vocabulary (`SPENDADDRESS`, `PAYTOOPRETURN`, ...).

use serde::{Deserialize, Serialize};

use crate::types::AccountType;

/// Spend script type of a transaction input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputScriptType {
    /// Plain P2PKH spend
    #[serde(rename = "SPENDADDRESS")]
    SpendAddress,
    /// Segwit wrapped in P2SH (P2SH-P2WPKH)
    #[serde(rename = "SPENDP2SHWITNESS")]
    SpendP2shWitness,
    /// Native segwit (P2WPKH)
    #[serde(rename = "SPENDWITNESS")]
    SpendWitness,
}

impl InputScriptType {
    /// Classify an account type into the device's spend vocabulary.
    ///
    /// Total over all inputs: anything outside the closed set spends as a
    /// plain address.
    pub fn from_account(account: Option<AccountType>) -> Self {
        match account {
            Some(AccountType::Segwit) => InputScriptType::SpendP2shWitness,
            Some(AccountType::Legacy) => InputScriptType::SpendAddress,
            Some(AccountType::NativeSegwit) => InputScriptType::SpendWitness,
            _ => InputScriptType::SpendAddress,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputScriptType::SpendAddress => "SPENDADDRESS",
            InputScriptType::SpendP2shWitness => "SPENDP2SHWITNESS",
            InputScriptType::SpendWitness => "SPENDWITNESS",
        }
    }
}

/// Input of a device signing request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInput {
    /// BIP-32 derivation path of the spending address
    pub address_n: Vec<u32>,
    pub prev_hash: String,
    pub prev_index: u32,
    pub script_type: InputScriptType,
    /// Satoshi amount as a decimal string
    pub amount: String,
}

/// Output of a device signing request, tagged by script type on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "script_type")]
pub enum TxOutput {
    #[serde(rename = "PAYTOADDRESS")]
    Address { address: String, amount: String },
    /// Zero-value output carrying an embedded data payload
    #[serde(rename = "PAYTOOPRETURN")]
    OpReturn { op_return_data: String, amount: String },
}

impl TxOutput {
    pub fn amount(&self) -> &str {
        match self {
            TxOutput::Address { amount, .. } => amount,
            TxOutput::OpReturn { amount, .. } => amount,
        }
    }
}

/// A complete signing request for the device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrezorTx {
    pub coin: String,
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
}

/// Signed transaction returned by the device SDK
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrezorSignedTx {
    /// One DER signature per input, hex encoded
    pub signatures: Vec<String>,
    /// Fully serialized signed transaction, hex encoded
    pub serialized_tx: String,
}
