//! Wallet-client configuration: chains, connectors, storage, and transports.
//!
//! [`WalletConfig::build`] assembles the aggregate once; [`ConfigCell`] is the
//! write-once holder the composition root hands to consumers instead of a
//! load-time global.

use std::sync::{Arc, OnceLock};

use serde::Serialize;
use url::Url;

use crate::chain::{ChainDescriptor, ChainId, ChainsConfig};
use crate::config::Settings;
use crate::connector::{Connector, default_connectors};
use crate::error::Error;
use crate::storage::{ExecutionContext, PrefixedStorage, create_storage, select_storage};
use crate::transport::{Transport, TransportMap};

/// Environment variable carrying the `WalletConnect` project identifier.
pub const PROJECT_ID_ENV: &str = "NEXT_PUBLIC_WC_PROJECT_ID";

/// Immutable wallet-client configuration.
#[derive(Debug, Clone)]
pub struct WalletConfig {
    chains: ChainsConfig,
    connectors: Vec<Connector>,
    storage: PrefixedStorage,
    ssr: bool,
    transports: TransportMap,
}

impl WalletConfig {
    /// Assembles the configuration.
    ///
    /// `project_id` is passed to the `WalletConnect` connector unchecked; an
    /// empty value only fails once a user tries to connect. The storage backend
    /// is fixed here from `context` and never changes afterwards.
    #[must_use]
    pub fn build(settings: &Settings, project_id: &str, context: ExecutionContext) -> Self {
        let chains = settings.chains.clone();
        let transports = TransportMap::http_for(&chains);
        let storage = create_storage(select_storage(context), settings.storage_key.as_str());
        let config = Self {
            connectors: default_connectors(&settings.app_name, project_id),
            chains,
            storage,
            ssr: true,
            transports,
        };
        #[cfg(feature = "telemetry")]
        tracing::debug!(
            chains = config.chains.len(),
            connectors = config.connectors.len(),
            storage = config.storage.backend().kind(),
            "wallet config built"
        );
        config
    }

    /// Builds from the built-in settings, reading the project id from
    /// [`PROJECT_ID_ENV`] (empty when unset).
    #[must_use]
    pub fn get_config(context: ExecutionContext) -> Self {
        let project_id = std::env::var(PROJECT_ID_ENV).unwrap_or_default();
        Self::build(&Settings::default(), &project_id, context)
    }

    /// Chains users may connect to.
    #[must_use]
    pub const fn chains(&self) -> &ChainsConfig {
        &self.chains
    }

    /// Connectors in display order.
    #[must_use]
    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    /// Selected storage.
    #[must_use]
    pub const fn storage(&self) -> &PrefixedStorage {
        &self.storage
    }

    /// Whether the UI is server-rendered before hydration.
    #[must_use]
    pub const fn ssr(&self) -> bool {
        self.ssr
    }

    /// Per-chain transports.
    #[must_use]
    pub const fn transports(&self) -> &TransportMap {
        &self.transports
    }

    /// `WalletConnect` project identifier, if that connector is configured.
    #[must_use]
    pub fn project_id(&self) -> Option<&str> {
        self.connectors.iter().find_map(|c| match c {
            Connector::WalletConnect { project_id } => Some(project_id.as_str()),
            _ => None,
        })
    }

    /// Transport registered for `id`.
    #[must_use]
    pub fn transport_for(&self, id: ChainId) -> Option<&Transport> {
        self.transports.get(&id)
    }

    /// RPC endpoint used for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Chain`] if the chain is unknown, has no transport, or
    /// its URL does not parse.
    pub fn rpc_url_for(&self, id: ChainId) -> Result<Url, Error> {
        let chain = self
            .chains
            .get(id)
            .ok_or_else(|| Error::chain(format!("unknown chain {id}")))?;
        let transport = self
            .transport_for(id)
            .ok_or_else(|| Error::chain(format!("no transport configured for chain {id}")))?;
        transport.resolve(chain)
    }

    /// Chains without a transport entry.
    #[must_use]
    pub fn missing_transports(&self) -> Vec<ChainId> {
        self.transports.missing_for(&self.chains)
    }

    /// Serialisable snapshot.
    #[must_use]
    pub fn view(&self) -> WalletConfigView<'_> {
        WalletConfigView {
            chains: self.chains.iter().collect(),
            connectors: &self.connectors,
            storage: StorageView {
                kind: self.storage.backend().kind(),
                key: self.storage.key(),
            },
            ssr: self.ssr,
            transports: &self.transports,
        }
    }
}

/// JSON view of a [`WalletConfig`].
#[derive(Debug, Serialize)]
pub struct WalletConfigView<'a> {
    /// Chain descriptors in order.
    pub chains: Vec<&'a ChainDescriptor>,
    /// Connectors in display order.
    pub connectors: &'a [Connector],
    /// Storage backend and key prefix.
    pub storage: StorageView<'a>,
    /// Server-rendering flag.
    pub ssr: bool,
    /// Per-chain transports.
    pub transports: &'a TransportMap,
}

/// JSON view of the selected storage.
#[derive(Debug, Serialize)]
pub struct StorageView<'a> {
    /// `"cookie"` or `"noop"`.
    pub kind: &'static str,
    /// Key prefix.
    pub key: &'a str,
}

/// Write-once holder for the process-wide [`WalletConfig`].
///
/// The composition root owns one cell and passes it by reference; the builder
/// closure runs at most once and every caller sees the same [`Arc`].
#[derive(Debug, Default)]
pub struct ConfigCell {
    inner: OnceLock<Arc<WalletConfig>>,
}

impl ConfigCell {
    /// Creates an empty cell.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: OnceLock::new(),
        }
    }

    /// Returns the stored configuration, building it with `init` on first use.
    pub fn get_or_init(&self, init: impl FnOnce() -> WalletConfig) -> Arc<WalletConfig> {
        Arc::clone(self.inner.get_or_init(|| Arc::new(init())))
    }

    /// Returns the stored configuration if it has been built.
    #[must_use]
    pub fn get(&self) -> Option<Arc<WalletConfig>> {
        self.inner.get().map(Arc::clone)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::storage::{Storage, StorageBackend};

    fn build(context: ExecutionContext) -> WalletConfig {
        WalletConfig::build(&Settings::default(), "test-project", context)
    }

    #[test]
    fn builds_four_chains_with_matching_transports() {
        let config = build(ExecutionContext::Server);
        let ids: Vec<u64> = config.chains().ids().map(ChainId::get).collect();
        assert_eq!(ids, vec![31337, 1, 36963, 36962]);
        assert_eq!(config.transports().len(), 4);
        for id in config.chains().ids() {
            assert_eq!(config.transport_for(id), Some(&Transport::http()));
        }
        assert!(config.missing_transports().is_empty());
        assert!(config.ssr());
    }

    #[test]
    fn storage_follows_execution_context() {
        let server = build(ExecutionContext::Server);
        assert!(matches!(server.storage().backend(), StorageBackend::Noop(_)));
        let browser = build(ExecutionContext::Browser);
        assert!(matches!(browser.storage().backend(), StorageBackend::Cookie(_)));
        assert_eq!(browser.storage().key(), "wagmi");
    }

    #[test]
    fn selected_storage_is_fixed_for_the_config() {
        let config = build(ExecutionContext::Server);
        let mut storage = config.storage().clone();
        storage.set_item("store", "{}");
        assert_eq!(storage.get_item("store"), None);
        assert_eq!(config.storage().backend().kind(), "noop");
    }

    #[test]
    fn two_builds_are_independent_but_equal_in_shape() {
        let a = build(ExecutionContext::Browser);
        let b = build(ExecutionContext::Browser);
        assert_eq!(a.chains(), b.chains());
        let kinds = |c: &WalletConfig| c.connectors().iter().map(Connector::id).collect::<Vec<_>>();
        assert_eq!(kinds(&a), kinds(&b));
    }

    #[test]
    fn builds_do_not_share_settings() {
        let mut settings = Settings::default();
        let before = WalletConfig::build(&settings, "p", ExecutionContext::Server);
        settings.chains.0.truncate(1);
        settings.app_name = "Other Faucet".to_owned();
        let after = WalletConfig::build(&settings, "p", ExecutionContext::Server);

        assert_eq!(after.chains().len(), 1);
        assert_eq!(after.transports().len(), 1);
        assert_eq!(before.chains().len(), 4);
        assert_eq!(before.transports().len(), 4);
        assert_eq!(
            before.connectors()[1],
            Connector::CoinbaseWallet {
                app_name: "Hanzo Network Faucet".to_owned()
            }
        );
    }

    #[test]
    fn empty_project_id_is_accepted() {
        let config = WalletConfig::build(&Settings::default(), "", ExecutionContext::Server);
        assert_eq!(config.project_id(), Some(""));
    }

    #[test]
    fn rpc_url_resolves_through_transport() {
        let config = build(ExecutionContext::Server);
        assert_eq!(
            config.rpc_url_for(ChainId(36963)).unwrap().as_str(),
            "https://rpc.hanzo.network/"
        );
        assert!(matches!(config.rpc_url_for(ChainId(10)), Err(Error::Chain(_))));
    }

    #[test]
    fn config_cell_builds_once() {
        let cell = ConfigCell::new();
        assert!(cell.get().is_none());
        let builds = Cell::new(0);
        let make = || {
            builds.set(builds.get() + 1);
            build(ExecutionContext::Server)
        };
        let first = cell.get_or_init(make);
        let second = cell.get_or_init(|| {
            builds.set(builds.get() + 1);
            build(ExecutionContext::Browser)
        });
        assert_eq!(builds.get(), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.storage().backend().kind(), "noop");
    }

    #[test]
    fn view_serialises_shape() {
        let config = build(ExecutionContext::Browser);
        let json = serde_json::to_value(config.view()).unwrap();
        assert_eq!(json["chains"].as_array().unwrap().len(), 4);
        assert_eq!(json["chains"][2]["name"], "Hanzo Network Mainnet");
        assert_eq!(json["connectors"][2]["projectId"], "test-project");
        assert_eq!(json["storage"]["kind"], "cookie");
        assert_eq!(json["transports"]["eip155:31337"]["type"], "http");
    }
}
