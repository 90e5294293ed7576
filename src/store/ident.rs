//! Store action, mutation, and getter identifiers
//!
//! Each variant keeps its original wire identifier via `as_str`/`FromStr`
//! so persisted or logged identifiers stay readable across versions.

use std::fmt;
use std::str::FromStr;

/// Store actions dispatched by the front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    PeginTxAddAddresses,
    PeginTxAddUtxos,
    PeginTxAddSessionId,
    PeginTxAddPeginConfiguration,
    PeginTxAddBitcoinWallet,
    Web3SessionGetAccount,
    SessionConnectWeb3,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::PeginTxAddAddresses => "PEGIN_TX_ADD_ADDRESSES",
            Action::PeginTxAddUtxos => "PEGIN_TX_ADD_UTXOS",
            Action::PeginTxAddSessionId => "PEGIN_TX_ADD_SESSION_ID",
            Action::PeginTxAddPeginConfiguration => "PEGIN_TX_ADD_PEGIN_CONFIGURATION",
            Action::PeginTxAddBitcoinWallet => "PEGIN_TX_ADD_BITCOIN_WALLET",
            Action::Web3SessionGetAccount => "WEB3_SESSION_GET_ACCOUNT",
            Action::SessionConnectWeb3 => "SESSION_CONNECT_WEB3",
        }
    }

    pub const ALL: [Action; 7] = [
        Action::PeginTxAddAddresses,
        Action::PeginTxAddUtxos,
        Action::PeginTxAddSessionId,
        Action::PeginTxAddPeginConfiguration,
        Action::PeginTxAddBitcoinWallet,
        Action::Web3SessionGetAccount,
        Action::SessionConnectWeb3,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .iter()
            .find(|a| a.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Unknown store action: {}", s))
    }
}

/// Store mutations committed by actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutation {
    PeginTxSetAddressList,
    PeginTxSetUtxoList,
    PeginTxSetTrezorConnected,
    PeginTxSetSessionId,
    PeginTxSetPeginConfiguration,
    PeginTxSetBitcoinWallet,
    SessionSetAccount,
    SessionSetWeb3Instance,
    SessionIsEnabled,
    Web3SessionClearAccount,
}

impl Mutation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mutation::PeginTxSetAddressList => "PEGIN_TX_SET_ADDRESS_LIST",
            Mutation::PeginTxSetUtxoList => "PEGIN_TX_SET_UTXO_LIST",
            Mutation::PeginTxSetTrezorConnected => "PEGIN_TX_SET_TREZOR_CONNECTED",
            Mutation::PeginTxSetSessionId => "PEGIN_TX_SET_SESSION_ID",
            Mutation::PeginTxSetPeginConfiguration => "PEGIN_TX_SET_PEGIN_CONFIGURATION",
            Mutation::PeginTxSetBitcoinWallet => "PEGIN_TX_SET_BITCOIN_WALLET",
            Mutation::SessionSetAccount => "SESSION_SET_ACCOUNT",
            Mutation::SessionSetWeb3Instance => "SESSION_SET_WEB3_INSTANCE",
            Mutation::SessionIsEnabled => "SESSION_IS_ENABLED",
            Mutation::Web3SessionClearAccount => "WEB3_SESSION_CLEAR_ACCOUNT",
        }
    }

    pub const ALL: [Mutation; 10] = [
        Mutation::PeginTxSetAddressList,
        Mutation::PeginTxSetUtxoList,
        Mutation::PeginTxSetTrezorConnected,
        Mutation::PeginTxSetSessionId,
        Mutation::PeginTxSetPeginConfiguration,
        Mutation::PeginTxSetBitcoinWallet,
        Mutation::SessionSetAccount,
        Mutation::SessionSetWeb3Instance,
        Mutation::SessionIsEnabled,
        Mutation::Web3SessionClearAccount,
    ];
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mutation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mutation::ALL
            .iter()
            .find(|m| m.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Unknown store mutation: {}", s))
    }
}

/// Store getters queried by views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Getter {
    WalletName,
    IsTrezorConnected,
    PeginTxGetChangeAddress,
    PeginTxGetBip32DerivationPathFromAddress,
    PeginTxGetBip44DerivationPathFromAddress,
    PeginTxGetRefundAddress,
    PeginTxGetAddressPublicKey,
}

impl Getter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Getter::WalletName => "WALLET_NAME",
            Getter::IsTrezorConnected => "IS_TREZOR_CONNECTED",
            Getter::PeginTxGetChangeAddress => "PEGIN_TX_GET_CHANGE_ADDRESS",
            Getter::PeginTxGetBip32DerivationPathFromAddress => {
                "PEGIN_TX_GET_BIP32_DERIVATION_PATH_FROM_ADDRESS"
            }
            Getter::PeginTxGetBip44DerivationPathFromAddress => {
                "PEGIN_TX_GET_BIP44_DERIVATION_PATH_FROM_ADDRESS"
            }
            Getter::PeginTxGetRefundAddress => "PEGIN_TX_GET_REFUND_ADDRESS",
            Getter::PeginTxGetAddressPublicKey => "PEGIN_TX_GET_ADDRESS_PUBLIC_KEY",
        }
    }

    pub const ALL: [Getter; 7] = [
        Getter::WalletName,
        Getter::IsTrezorConnected,
        Getter::PeginTxGetChangeAddress,
        Getter::PeginTxGetBip32DerivationPathFromAddress,
        Getter::PeginTxGetBip44DerivationPathFromAddress,
        Getter::PeginTxGetRefundAddress,
        Getter::PeginTxGetAddressPublicKey,
    ];
}

impl fmt::Display for Getter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Getter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Getter::ALL
            .iter()
            .find(|g| g.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Unknown store getter: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_round_trip() {
        for action in Action::ALL {
            assert_eq!(action.as_str().parse::<Action>(), Ok(action));
        }
    }

    #[test]
    fn test_mutation_round_trip() {
        for mutation in Mutation::ALL {
            assert_eq!(mutation.as_str().parse::<Mutation>(), Ok(mutation));
        }
    }

    #[test]
    fn test_getter_round_trip() {
        for getter in Getter::ALL {
            assert_eq!(getter.as_str().parse::<Getter>(), Ok(getter));
        }
    }

    #[test]
    fn test_unknown_identifier_rejected() {
        assert!("PEGIN_TX_DO_EVERYTHING".parse::<Action>().is_err());
        assert!("".parse::<Mutation>().is_err());
        assert!("wallet_name".parse::<Getter>().is_err());
    }
}
