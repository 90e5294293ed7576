//! Address registry and peg-in session state

use serde::{Deserialize, Serialize};

use crate::types::{PeginConfiguration, Utxo, WalletAddress, WalletKind};

/// The wallet's enumerated addresses with their derivation paths.
///
/// Populated when the wallet enumerates accounts; read-only for the
/// transaction builder, which receives it by explicit injection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressRegistry {
    addresses: Vec<WalletAddress>,
}

impl AddressRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list
    pub fn set_address_list(&mut self, addresses: Vec<WalletAddress>) {
        self.addresses = addresses;
    }

    /// Append addresses, keeping the first entry for a duplicate address
    pub fn add_addresses(&mut self, addresses: Vec<WalletAddress>) {
        for incoming in addresses {
            if !self.addresses.iter().any(|a| a.address == incoming.address) {
                self.addresses.push(incoming);
            }
        }
    }

    /// Derivation path for an exact address match
    pub fn find_path(&self, address: &str) -> Option<&[u32]> {
        self.addresses
            .iter()
            .find(|a| a.address == address)
            .map(|a| a.path.as_slice())
    }

    pub fn contains(&self, address: &str) -> bool {
        self.find_path(address).is_some()
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn clear(&mut self) {
        self.addresses.clear();
    }
}

/// Per-session peg-in state the store mutations operate on
#[derive(Debug, Clone, Default)]
pub struct PeginSessionState {
    address_registry: AddressRegistry,
    utxo_list: Vec<Utxo>,
    session_id: String,
    pegin_configuration: Option<PeginConfiguration>,
    bitcoin_wallet: Option<WalletKind>,
    trezor_connected: bool,
}

impl PeginSessionState {
    pub fn new() -> Self {
        Self::default()
    }

    // Mutations

    pub fn set_address_list(&mut self, addresses: Vec<WalletAddress>) {
        self.address_registry.set_address_list(addresses);
    }

    pub fn add_addresses(&mut self, addresses: Vec<WalletAddress>) {
        self.address_registry.add_addresses(addresses);
    }

    pub fn set_utxo_list(&mut self, utxos: Vec<Utxo>) {
        self.utxo_list = utxos;
    }

    pub fn set_session_id(&mut self, session_id: impl Into<String>) {
        self.session_id = session_id.into();
    }

    pub fn set_pegin_configuration(&mut self, configuration: PeginConfiguration) {
        self.pegin_configuration = Some(configuration);
    }

    pub fn set_bitcoin_wallet(&mut self, wallet: WalletKind) {
        self.bitcoin_wallet = Some(wallet);
    }

    pub fn set_trezor_connected(&mut self, connected: bool) {
        self.trezor_connected = connected;
    }

    /// Session reset: drops addresses, utxos, and identifiers
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    // Getters

    pub fn address_registry(&self) -> &AddressRegistry {
        &self.address_registry
    }

    pub fn utxo_list(&self) -> &[Utxo] {
        &self.utxo_list
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn pegin_configuration(&self) -> Option<&PeginConfiguration> {
        self.pegin_configuration.as_ref()
    }

    pub fn bitcoin_wallet(&self) -> Option<WalletKind> {
        self.bitcoin_wallet
    }

    pub fn is_trezor_connected(&self) -> bool {
        self.trezor_connected
    }

    /// BIP-32 path for an address, if the wallet derived it
    pub fn derivation_path_from_address(&self, address: &str) -> Option<&[u32]> {
        self.address_registry.find_path(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(address: &str, path: Vec<u32>) -> WalletAddress {
        WalletAddress::new(address, path)
    }

    #[test]
    fn test_find_path_exact_match() {
        let mut registry = AddressRegistry::new();
        registry.set_address_list(vec![
            addr("mzMCEHDUAZaKL9BXt9SzasFPUUqM77TqP1", vec![44, 1, 0, 0, 0]),
            addr("tb1qkfw2sv0tlrzq7ednaw2swhe25g2qf5k29zql5u", vec![84, 1, 0, 0, 0]),
        ]);

        assert_eq!(
            registry.find_path("mzMCEHDUAZaKL9BXt9SzasFPUUqM77TqP1"),
            Some(&[44, 1, 0, 0, 0][..])
        );
        assert_eq!(registry.find_path("mzMCEHDUAZaKL9BXt9SzasFPUUqM77TqP"), None);
    }

    #[test]
    fn test_add_addresses_dedups() {
        let mut registry = AddressRegistry::new();
        registry.add_addresses(vec![addr("mA", vec![0, 0, 0])]);
        registry.add_addresses(vec![addr("mA", vec![9, 9, 9]), addr("mB", vec![0, 0, 1])]);

        assert_eq!(registry.len(), 2);
        // First entry wins
        assert_eq!(registry.find_path("mA"), Some(&[0, 0, 0][..]));
    }

    #[test]
    fn test_session_clear_resets_everything() {
        let mut state = PeginSessionState::new();
        state.set_session_id("sess-1");
        state.set_bitcoin_wallet(WalletKind::Trezor);
        state.set_trezor_connected(true);
        state.add_addresses(vec![addr("mA", vec![0, 0, 0])]);

        state.clear();

        assert_eq!(state.session_id(), "");
        assert_eq!(state.bitcoin_wallet(), None);
        assert!(!state.is_trezor_connected());
        assert!(state.address_registry().is_empty());
    }
}
