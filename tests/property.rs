use proptest::prelude::*;

use pegin_core::{
    get_account_type, AccountType, AddressRegistry, Coin, InputScriptType, NormalizedOutput,
    TrezorTxBuilder, TxOutput, WalletAddress,
};

fn any_coin() -> impl Strategy<Value = Coin> {
    prop_oneof![Just(Coin::Btc), Just(Coin::Test)]
}

fn any_account_type() -> impl Strategy<Value = Option<AccountType>> {
    prop_oneof![
        Just(None),
        Just(Some(AccountType::Legacy)),
        Just(Some(AccountType::Segwit)),
        Just(Some(AccountType::NativeSegwit)),
        Just(Some(AccountType::Multisig)),
    ]
}

fn any_normalized_output() -> impl Strategy<Value = NormalizedOutput> {
    (
        prop::option::of("[a-zA-Z0-9]{10,40}"),
        "[0-9]{1,9}",
        prop::option::of("[0-9a-f]{0,80}"),
    )
        .prop_map(|(address, amount, op_return_data)| NormalizedOutput {
            address,
            amount,
            op_return_data,
        })
}

proptest! {
    #[test]
    fn classification_is_total(account in any_account_type()) {
        // Every account type lands on exactly one of the three spend kinds
        let script = InputScriptType::from_account(account);
        let expected = match account {
            Some(AccountType::Segwit) => InputScriptType::SpendP2shWitness,
            Some(AccountType::NativeSegwit) => InputScriptType::SpendWitness,
            _ => InputScriptType::SpendAddress,
        };
        prop_assert_eq!(script, expected);
    }

    #[test]
    fn account_detection_never_panics(address in "\\PC*", coin in any_coin()) {
        let detected = get_account_type(&address, coin);
        // Whatever came out, the classifier accepts it
        let _ = InputScriptType::from_account(detected);
    }

    #[test]
    fn output_mapping_holds_invariants(outputs in prop::collection::vec(any_normalized_output(), 0..8)) {
        let mapped = TrezorTxBuilder::map_outputs(&outputs);
        prop_assert_eq!(mapped.len(), outputs.len());

        for (normalized, device) in outputs.iter().zip(&mapped) {
            let has_payload = normalized
                .op_return_data
                .as_deref()
                .map(|d| !d.is_empty())
                .unwrap_or(false);

            match device {
                TxOutput::OpReturn { op_return_data, amount } => {
                    prop_assert!(has_payload);
                    prop_assert_eq!(amount.as_str(), "0");
                    prop_assert_eq!(
                        op_return_data.as_str(),
                        normalized.op_return_data.as_deref().unwrap()
                    );
                }
                TxOutput::Address { address, amount } => {
                    prop_assert!(!has_payload);
                    prop_assert_eq!(amount.as_str(), normalized.amount.as_str());
                    prop_assert_eq!(
                        address.as_str(),
                        normalized.address.as_deref().unwrap_or("")
                    );
                }
            }
        }
    }

    #[test]
    fn registry_lookup_returns_exact_path(
        paths in prop::collection::vec(prop::collection::vec(any::<u32>(), 1..6), 1..10),
        pick in any::<prop::sample::Index>(),
    ) {
        let addresses: Vec<WalletAddress> = paths
            .iter()
            .enumerate()
            .map(|(i, path)| WalletAddress::new(&format!("addr-{}", i), path.clone()))
            .collect();

        let mut registry = AddressRegistry::new();
        registry.set_address_list(addresses.clone());

        let chosen = pick.get(&addresses);
        prop_assert_eq!(
            registry.find_path(&chosen.address),
            Some(chosen.path.as_slice())
        );
        prop_assert_eq!(registry.find_path("unknown-address"), None);
    }
}
