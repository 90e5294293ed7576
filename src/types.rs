//! Shared types for the peg-in middleware
//!
//! All data structures that cross module boundaries are defined here
//! for consistent serialization toward the API service and the device SDK.

use serde::{Deserialize, Serialize};

// =============================================================================
// Coin / Network
// =============================================================================

/// Bitcoin network the peg-in runs against.
///
/// The string form is the coin tag the device SDK expects and is threaded
/// unchanged into every signing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Coin {
    /// Bitcoin mainnet ("btc")
    Btc,
    /// Bitcoin testnet ("test")
    Test,
}

impl Coin {
    /// Coin tag for the device signing request
    pub fn as_str(&self) -> &'static str {
        match self {
            Coin::Btc => "btc",
            Coin::Test => "test",
        }
    }

    pub fn is_testnet(&self) -> bool {
        matches!(self, Coin::Test)
    }

    /// Expected bech32 human-readable part for native segwit addresses
    pub fn bech32_hrp(&self) -> &'static str {
        match self {
            Coin::Btc => "bc",
            Coin::Test => "tb",
        }
    }
}

impl std::str::FromStr for Coin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "btc" | "main" | "mainnet" => Ok(Coin::Btc),
            "test" | "testnet" => Ok(Coin::Test),
            _ => Err(format!("Unknown coin: {}", s)),
        }
    }
}

// =============================================================================
// Wallet vocabulary
// =============================================================================

/// Hardware/software wallet families the front-end can connect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WalletKind {
    #[serde(rename = "WALLET_LEDGER")]
    Ledger,
    #[serde(rename = "WALLET_ELECTRUM")]
    Electrum,
    #[serde(rename = "WALLET_TREZOR")]
    Trezor,
    #[serde(rename = "WALLET_RWALLET")]
    RWallet,
    #[serde(rename = "WALLET_DEFIANT")]
    Defiant,
}

impl WalletKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WalletKind::Ledger => "WALLET_LEDGER",
            WalletKind::Electrum => "WALLET_ELECTRUM",
            WalletKind::Trezor => "WALLET_TREZOR",
            WalletKind::RWallet => "WALLET_RWALLET",
            WalletKind::Defiant => "WALLET_DEFIANT",
        }
    }
}

/// Bitcoin account types the wallet enumerates addresses for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    #[serde(rename = "BITCOIN_LEGACY_ADDRESS")]
    Legacy,
    #[serde(rename = "BITCOIN_SEGWIT_ADDRESS")]
    Segwit,
    #[serde(rename = "BITCOIN_NATIVE_SEGWIT_ADDRESS")]
    NativeSegwit,
    #[serde(rename = "BITCOIN_MULTISIGNATURE_ADDRESS")]
    Multisig,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Legacy => "BITCOIN_LEGACY_ADDRESS",
            AccountType::Segwit => "BITCOIN_SEGWIT_ADDRESS",
            AccountType::NativeSegwit => "BITCOIN_NATIVE_SEGWIT_ADDRESS",
            AccountType::Multisig => "BITCOIN_MULTISIGNATURE_ADDRESS",
        }
    }
}

/// Fee level presets understood by the peg-in API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeeLevel {
    #[serde(rename = "BITCOIN_SLOW_FEE_LEVEL")]
    Slow,
    #[serde(rename = "BITCOIN_AVERAGE_FEE_LEVEL")]
    Average,
    #[serde(rename = "BITCOIN_FAST_FEE_LEVEL")]
    Fast,
}

impl FeeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeeLevel::Slow => "BITCOIN_SLOW_FEE_LEVEL",
            FeeLevel::Average => "BITCOIN_AVERAGE_FEE_LEVEL",
            FeeLevel::Fast => "BITCOIN_FAST_FEE_LEVEL",
        }
    }
}

impl std::str::FromStr for FeeLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BITCOIN_SLOW_FEE_LEVEL" | "slow" => Ok(FeeLevel::Slow),
            "BITCOIN_AVERAGE_FEE_LEVEL" | "average" => Ok(FeeLevel::Average),
            "BITCOIN_FAST_FEE_LEVEL" | "fast" => Ok(FeeLevel::Fast),
            _ => Err(format!("Unknown fee level: {}", s)),
        }
    }
}

// =============================================================================
// Wallet addresses
// =============================================================================

/// A wallet address together with its BIP-32 derivation path.
///
/// Hardened components carry the 0x80000000 bit, exactly as the device
/// expects them in `address_n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletAddress {
    pub address: String,
    pub path: Vec<u32>,
}

impl WalletAddress {
    pub fn new(address: &str, path: Vec<u32>) -> Self {
        Self {
            address: address.to_string(),
            path,
        }
    }
}

/// An unspent output tracked for the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utxo {
    pub txid: String,
    pub vout: u32,
    pub amount: u64,
    pub address: Option<String>,
}

// =============================================================================
// Normalized transaction (service-provided, wallet-agnostic)
// =============================================================================

/// Input of a normalized transaction as returned by the peg-in API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedInput {
    pub address: String,
    pub prev_hash: String,
    pub prev_index: u32,
    /// Amount in satoshis; the device wants its decimal string form
    pub amount: u64,
}

/// Output of a normalized transaction as returned by the peg-in API.
///
/// `address` and `op_return_data` are mutually exclusive by convention;
/// the service never emits both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub op_return_data: Option<String>,
}

/// The wallet-agnostic transaction description produced by the service,
/// prior to device-specific formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedTx {
    pub inputs: Vec<NormalizedInput>,
    pub outputs: Vec<NormalizedOutput>,
}

// =============================================================================
// Peg-in configuration
// =============================================================================

/// Session-scoped configuration handed out by the peg-in API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeginConfiguration {
    /// Smallest transferable amount, in satoshis
    pub min_value: u64,
    /// Largest transferable amount, in satoshis
    pub max_value: u64,
    /// Federation (peg) address funds are custodied at
    pub federation_address: String,
    pub session_id: String,
}
