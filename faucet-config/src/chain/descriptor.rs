//! Chain identity and metadata types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// CAIP-2 namespace for EVM chains.
pub const EIP155_NAMESPACE: &str = "eip155";

/// Numeric EIP-155 chain identifier.
///
/// Displayed and keyed as the CAIP-2 string `eip155:<id>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChainId(pub u64);

impl ChainId {
    /// Returns the raw numeric identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{EIP155_NAMESPACE}:{}", self.0)
    }
}

/// Error returned when a string is not a valid `eip155:<id>` identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainIdError {
    /// Missing the `namespace:reference` separator.
    #[error("invalid chain id '{0}': expected 'namespace:reference'")]
    Malformed(String),
    /// Namespace other than `eip155`.
    #[error("unexpected namespace: {0}")]
    Namespace(String),
    /// Reference is not a decimal `u64`.
    #[error("invalid eip155 reference '{0}'")]
    Reference(String),
}

impl FromStr for ChainId {
    type Err = ChainIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (namespace, reference) = s
            .split_once(':')
            .ok_or_else(|| ChainIdError::Malformed(s.to_owned()))?;
        if namespace != EIP155_NAMESPACE {
            return Err(ChainIdError::Namespace(namespace.to_owned()));
        }
        // one canonical spelling per id: plain digits, no leading zeros
        let canonical = !reference.is_empty()
            && reference.bytes().all(|b| b.is_ascii_digit())
            && (reference == "0" || !reference.starts_with('0'));
        if !canonical {
            return Err(ChainIdError::Reference(reference.to_owned()));
        }
        reference
            .parse::<u64>()
            .map(Self)
            .map_err(|_| ChainIdError::Reference(reference.to_owned()))
    }
}

impl Serialize for ChainId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ChainId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Native currency metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    /// Display name, e.g. `"Ether"`.
    pub name: String,
    /// Ticker symbol, e.g. `"ETH"`.
    pub symbol: String,
    /// Decimal precision of the smallest unit.
    pub decimals: u8,
}

impl NativeCurrency {
    /// Creates a currency descriptor.
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals,
        }
    }

    /// 18-decimal Ether.
    #[must_use]
    pub fn ether() -> Self {
        Self::new("Ether", "ETH", 18)
    }
}

/// Endpoint list for one RPC set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcEndpoints {
    /// HTTP(S) RPC URLs. Not validated; malformed entries surface at resolve time.
    pub http: Vec<String>,
}

/// RPC endpoint sets of a chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcUrls {
    /// Endpoints used when no explicit transport URL is configured.
    pub default: RpcEndpoints,
}

impl RpcUrls {
    /// Single default HTTP endpoint.
    pub fn http(url: impl Into<String>) -> Self {
        Self {
            default: RpcEndpoints {
                http: vec![url.into()],
            },
        }
    }
}

/// Block explorer link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockExplorer {
    /// Explorer display name.
    pub name: String,
    /// Explorer base URL.
    pub url: String,
}

/// Block explorers of a chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockExplorers {
    /// Explorer shown to users.
    pub default: BlockExplorer,
}

impl BlockExplorers {
    /// Single default explorer.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            default: BlockExplorer {
                name: name.into(),
                url: url.into(),
            },
        }
    }
}

/// Chain metadata as it appears under a `[chains."eip155:<id>"]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainMetadata {
    /// Human-readable chain name.
    pub name: String,
    /// Native currency.
    pub native_currency: NativeCurrency,
    /// RPC endpoints.
    pub rpc_urls: RpcUrls,
    /// Optional block explorer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_explorers: Option<BlockExplorers>,
    /// Whether this is a test network.
    #[serde(default)]
    pub testnet: bool,
}

/// Full chain descriptor: identifier plus metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainDescriptor {
    /// EIP-155 identifier.
    pub id: ChainId,
    /// Everything but the identifier.
    #[serde(flatten)]
    pub metadata: ChainMetadata,
}

impl ChainDescriptor {
    /// Creates a mainnet-style descriptor with a single default RPC URL.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        native_currency: NativeCurrency,
        rpc_url: impl Into<String>,
    ) -> Self {
        Self {
            id: ChainId(id),
            metadata: ChainMetadata {
                name: name.into(),
                native_currency,
                rpc_urls: RpcUrls::http(rpc_url),
                block_explorers: None,
                testnet: false,
            },
        }
    }

    /// Attaches a default block explorer.
    #[must_use]
    pub fn with_explorer(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.metadata.block_explorers = Some(BlockExplorers::new(name, url));
        self
    }

    /// Marks the chain as a test network.
    #[must_use]
    pub fn testnet(mut self) -> Self {
        self.metadata.testnet = true;
        self
    }

    /// Human-readable chain name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// First default HTTP RPC URL, if any.
    #[must_use]
    pub fn default_rpc_url(&self) -> Option<&str> {
        self.metadata
            .rpc_urls
            .default
            .http
            .first()
            .map(String::as_str)
    }

    /// Whether this is a test network.
    #[must_use]
    pub const fn is_testnet(&self) -> bool {
        self.metadata.testnet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_id_uses_caip2_form() {
        let id: ChainId = "eip155:36963".parse().unwrap();
        assert_eq!(id, ChainId(36963));
        assert_eq!(id.to_string(), "eip155:36963");
    }

    #[test]
    fn chain_id_rejects_other_namespaces() {
        let err = "solana:5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp"
            .parse::<ChainId>()
            .unwrap_err();
        assert_eq!(err, ChainIdError::Namespace("solana".to_owned()));
        assert!(matches!(
            "31337".parse::<ChainId>(),
            Err(ChainIdError::Malformed(_))
        ));
        assert!(matches!(
            "eip155:abc".parse::<ChainId>(),
            Err(ChainIdError::Reference(_))
        ));
    }

    #[test]
    fn chain_id_requires_canonical_reference() {
        for raw in ["eip155:01", "eip155:+1", "eip155: 1", "eip155:", "eip155:18446744073709551616"] {
            assert!(
                matches!(raw.parse::<ChainId>(), Err(ChainIdError::Reference(_))),
                "{raw} should be rejected"
            );
        }
        assert_eq!("eip155:0".parse::<ChainId>(), Ok(ChainId(0)));
        assert_eq!("eip155:10".parse::<ChainId>(), Ok(ChainId(10)));
    }

    #[test]
    fn descriptor_serialises_flat_with_camel_case_keys() {
        let chain = ChainDescriptor::new(31337, "Localhost", NativeCurrency::ether(), "http://127.0.0.1:8545")
            .testnet();
        let json = serde_json::to_value(&chain).unwrap();
        assert_eq!(json["id"], "eip155:31337");
        assert_eq!(json["nativeCurrency"]["symbol"], "ETH");
        assert_eq!(json["rpcUrls"]["default"]["http"][0], "http://127.0.0.1:8545");
        assert_eq!(json["testnet"], true);
        assert!(json.get("blockExplorers").is_none());
    }
}
