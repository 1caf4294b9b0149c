//! End-to-end checks over the built wallet and export configuration.

use std::collections::BTreeSet;
use std::fs;

use faucet_config::chain::ChainId;
use faucet_config::cmd;
use faucet_config::connector::Connector;
use faucet_config::storage::StorageBackend;
use faucet_config::{ConfigCell, ExecutionContext, Settings, WalletConfig};

#[test]
fn chain_ids_are_unique_and_each_has_a_transport() {
    let config = WalletConfig::build(&Settings::default(), "", ExecutionContext::Server);

    let ids: BTreeSet<u64> = config.chains().ids().map(ChainId::get).collect();
    assert_eq!(ids, BTreeSet::from([1, 31337, 36962, 36963]));
    assert_eq!(ids.len(), config.chains().len());

    let transport_ids: BTreeSet<u64> = config.transports().keys().map(|id| id.get()).collect();
    assert_eq!(transport_ids, ids);
}

#[test]
fn storage_selection_is_a_function_of_context() {
    let settings = Settings::default();
    let server = WalletConfig::build(&settings, "p", ExecutionContext::Server);
    let browser = WalletConfig::build(&settings, "p", ExecutionContext::Browser);
    assert!(matches!(server.storage().backend(), StorageBackend::Noop(_)));
    assert!(matches!(browser.storage().backend(), StorageBackend::Cookie(_)));
}

#[test]
fn composition_root_shares_one_config() {
    let cell = ConfigCell::new();
    let mut builds = 0;
    let first = cell.get_or_init(|| {
        builds += 1;
        WalletConfig::get_config(ExecutionContext::Server)
    });
    let again = cell.get_or_init(|| unreachable!("config is built once"));
    assert_eq!(builds, 1);
    assert!(std::sync::Arc::ptr_eq(&first, &again));
    assert!(matches!(
        first.connectors(),
        [
            Connector::Injected,
            Connector::CoinbaseWallet { .. },
            Connector::WalletConnect { .. }
        ]
    ));
}

#[test]
fn init_then_export_writes_static_build_config() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("faucet.toml");
    let output = dir.path().join("next.config.json");

    cmd::init::run(&settings, false).unwrap();
    cmd::export::run(&settings, &output).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["output"], "export");
    assert_eq!(json["images"]["unoptimized"], true);
}

#[test]
fn export_refuses_optimized_images() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("faucet.toml");
    let output = dir.path().join("next.config.json");
    fs::write(&settings, "[export]\noutput = \"export\"\nimages = { unoptimized = false }\n").unwrap();

    let err = cmd::export::run(&settings, &output).unwrap_err();
    assert!(err.to_string().starts_with("export:"));
    assert!(!output.exists());
}
