//! Per-chain network transports.
//!
//! Transports are descriptors only: this crate never dials the endpoints. A
//! transport without an explicit URL falls back to the chain's first default
//! RPC URL when resolved.

use std::collections::BTreeMap;
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::chain::{ChainDescriptor, ChainId, ChainsConfig};
use crate::error::Error;

/// Network mechanism used to reach a chain's RPC endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Transport {
    /// JSON-RPC over HTTP(S).
    Http {
        /// Explicit endpoint; `None` uses the chain's default RPC URL.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
}

impl Transport {
    /// HTTP transport using the chain's default RPC URL.
    #[must_use]
    pub const fn http() -> Self {
        Self::Http { url: None }
    }

    /// Resolves the endpoint this transport talks to for `chain`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Chain`] if no URL is available or it does not parse.
    pub fn resolve(&self, chain: &ChainDescriptor) -> Result<Url, Error> {
        let Self::Http { url } = self;
        let raw = url
            .as_deref()
            .or_else(|| chain.default_rpc_url())
            .ok_or_else(|| Error::chain(format!("no RPC URL for chain {}", chain.id)))?;
        Url::parse(raw)
            .map_err(|e| Error::chain(format!("invalid RPC URL '{raw}' for chain {}: {e}", chain.id)))
    }
}

/// Transport lookup keyed by chain identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportMap(pub BTreeMap<ChainId, Transport>);

impl Deref for TransportMap {
    type Target = BTreeMap<ChainId, Transport>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TransportMap {
    /// One default HTTP transport per chain.
    #[must_use]
    pub fn http_for(chains: &ChainsConfig) -> Self {
        Self(chains.ids().map(|id| (id, Transport::http())).collect())
    }

    /// Chains in `chains` with no transport entry, in declaration order.
    #[must_use]
    pub fn missing_for(&self, chains: &ChainsConfig) -> Vec<ChainId> {
        chains.ids().filter(|id| !self.0.contains_key(id)).collect()
    }
}
