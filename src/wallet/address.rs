//! Bitcoin address classification and validation
//!
//! Classifies wallet addresses into account types by network prefix and
//! verifies their encoding (Base58Check for legacy/segwit, bech32 for
//! native segwit) before they are sent anywhere.

use bech32::{self, Variant};
use sha2::{Digest, Sha256};

use crate::error::{PeginError, PeginResult};
use crate::types::{AccountType, Coin};

/// Base58Check version bytes
mod version_bytes {
    pub const MAINNET_P2PKH: u8 = 0x00;
    pub const MAINNET_P2SH: u8 = 0x05;
    pub const TESTNET_P2PKH: u8 = 0x6f;
    pub const TESTNET_P2SH: u8 = 0xc4;
}

fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Classify an address into its account type by network prefix.
///
/// Returns `None` for anything that does not look like an address of the
/// given network; callers fall back to the default spend classification.
pub fn get_account_type(address: &str, coin: Coin) -> Option<AccountType> {
    let trimmed = address.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.to_lowercase().starts_with(coin.bech32_hrp()) {
        return Some(AccountType::NativeSegwit);
    }

    match coin {
        Coin::Btc => match trimmed.chars().next() {
            Some('1') => Some(AccountType::Legacy),
            Some('3') => Some(AccountType::Segwit),
            _ => None,
        },
        Coin::Test => match trimmed.chars().next() {
            Some('m') | Some('n') => Some(AccountType::Legacy),
            Some('2') => Some(AccountType::Segwit),
            _ => None,
        },
    }
}

/// Validate an address's encoding and network.
///
/// Legacy and segwit addresses get a full Base58Check round (double-sha256
/// checksum plus version-byte check); native segwit addresses get a bech32
/// decode with hrp and witness-program checks.
pub fn validate_address(address: &str, coin: Coin) -> PeginResult<()> {
    let trimmed = address.trim();

    match get_account_type(trimmed, coin) {
        Some(AccountType::NativeSegwit) => validate_bech32(trimmed, coin),
        Some(AccountType::Legacy) | Some(AccountType::Segwit) => validate_base58(trimmed, coin),
        Some(AccountType::Multisig) | None => Err(PeginError::invalid_address(format!(
            "Address {} does not match the {} network",
            trimmed,
            coin.as_str()
        ))),
    }
}

fn validate_base58(address: &str, coin: Coin) -> PeginResult<()> {
    let decoded = bs58::decode(address)
        .into_vec()
        .map_err(|_| PeginError::invalid_address("Invalid Base58 encoding"))?;

    if decoded.len() < 5 {
        return Err(PeginError::invalid_address("Address payload too short"));
    }

    let (payload, checksum) = decoded.split_at(decoded.len() - 4);
    let digest = sha256(&sha256(payload));
    if &digest[..4] != checksum {
        return Err(PeginError::invalid_address("Invalid Base58Check checksum"));
    }

    let valid_version = match coin {
        Coin::Btc => {
            payload[0] == version_bytes::MAINNET_P2PKH || payload[0] == version_bytes::MAINNET_P2SH
        }
        Coin::Test => {
            payload[0] == version_bytes::TESTNET_P2PKH || payload[0] == version_bytes::TESTNET_P2SH
        }
    };
    if !valid_version {
        return Err(PeginError::invalid_address(format!(
            "Version byte {:#04x} does not match the {} network",
            payload[0],
            coin.as_str()
        )));
    }

    Ok(())
}

fn validate_bech32(address: &str, coin: Coin) -> PeginResult<()> {
    let lower = address.to_lowercase();
    let (hrp, data, variant) = bech32::decode(&lower)
        .map_err(|e| PeginError::invalid_address(format!("Invalid bech32 encoding: {}", e)))?;

    if hrp != coin.bech32_hrp() {
        return Err(PeginError::invalid_address(format!(
            "Address prefix {} does not match the {} network",
            hrp,
            coin.as_str()
        )));
    }

    if data.is_empty() {
        return Err(PeginError::invalid_address("Empty witness program"));
    }

    let witness_version = data[0].to_u8();
    let expected_variant = if witness_version == 0 {
        Variant::Bech32
    } else {
        Variant::Bech32m
    };
    if variant != expected_variant {
        return Err(PeginError::invalid_address(
            "Incorrect bech32 variant for witness version",
        ));
    }

    let program = convert_bits_5_to_8(&data[1..].iter().map(|u| u.to_u8()).collect::<Vec<_>>());
    match (witness_version, program.len()) {
        (0, 20) | (0, 32) | (1, 32) => Ok(()),
        _ => Err(PeginError::invalid_address(format!(
            "Unusual witness version {} or program length {}",
            witness_version,
            program.len()
        ))),
    }
}

/// Convert 5-bit groups to 8-bit bytes (for bech32 witness programs)
fn convert_bits_5_to_8(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::new();
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;

    for value in data {
        acc = (acc << 5) | (*value as u32);
        bits += 5;
        while bits >= 8 {
            bits -= 8;
            result.push((acc >> bits) as u8);
        }
    }

    result
}
