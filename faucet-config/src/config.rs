//! Settings loading and default template generation.
//!
//! This module provides:
//!
//! - [`Settings`] — overridable inputs to the wallet and build configuration.
//! - [`load_settings`] — Reads and parses a TOML settings file.
//! - [`generate_default_settings`] — Produces a commented TOML template.
//!
//! # Settings File Format
//!
//! ```toml
//! app_name = "Hanzo Network Faucet"
//! storage_key = "wagmi"
//!
//! [chains."eip155:31337"]
//! name = "Localhost"
//! nativeCurrency = { name = "Ether", symbol = "ETH", decimals = 18 }
//! rpcUrls = { default = { http = ["http://127.0.0.1:8545"] } }
//! testnet = true
//!
//! [export]
//! output = "export"
//! images = { unoptimized = true }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chain::{ChainsConfig, default_chains};
use crate::connector::DEFAULT_APP_NAME;
use crate::error::Error;
use crate::export::ExportConfig;
use crate::storage::DEFAULT_STORAGE_KEY;

/// Settings that feed the wallet-client and build configuration.
///
/// Every field defaults to the built-in value, so a partial file only
/// overrides what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Application name reported to wallet connectors.
    pub app_name: String,
    /// Key prefix for persisted wallet state.
    pub storage_key: String,
    /// Chains users may connect to. Replaces the built-in list when present.
    pub chains: ChainsConfig,
    /// Hosting framework build configuration.
    pub export: ExportConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_owned(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            chains: default_chains(),
            export: ExportConfig::default(),
        }
    }
}

/// Load settings from a TOML file at the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be resolved, read, or parsed.
pub fn load_settings(path: &Path) -> Result<Settings, Error> {
    let settings_path = path.canonicalize().map_err(|e| {
        Error::config_with(
            format!("failed to resolve settings path '{}'", path.display()),
            e,
        )
    })?;
    let content = std::fs::read_to_string(&settings_path).map_err(|e| {
        Error::config_with(
            format!("failed to read settings file '{}'", settings_path.display()),
            e,
        )
    })?;
    toml::from_str(&content).map_err(|e| {
        Error::config_with(
            format!("failed to parse TOML settings '{}'", settings_path.display()),
            e,
        )
    })
}

/// Load settings from `path`, or the built-in defaults when the file is absent.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_settings_or_default(path: &Path) -> Result<Settings, Error> {
    if path.exists() {
        load_settings(path)
    } else {
        #[cfg(feature = "telemetry")]
        tracing::debug!(path = %path.display(), "settings file not found, using built-in defaults");
        Ok(Settings::default())
    }
}

/// Generate the default TOML settings template.
#[must_use]
pub fn generate_default_settings() -> String {
    String::from(
        r#"# Hanzo Network Faucet wallet configuration

# Application name shown by wallet connectors.
app_name = "Hanzo Network Faucet"

# Key prefix for persisted wallet state (cookie names are "<storage_key>.<name>").
storage_key = "wagmi"

# ── Chains ───────────────────────────────────────────────────────────
# Key format: "eip155:<chain_id>". Order is wallet preference order.
# Every chain gets an HTTP transport using its first default RPC URL.

# Local node for testing with Foundry/Anvil. Listed in every build.
[chains."eip155:31337"]
name = "Localhost"
nativeCurrency = { name = "Ether", symbol = "ETH", decimals = 18 }
rpcUrls = { default = { http = ["http://127.0.0.1:8545"] } }
testnet = true

[chains."eip155:1"]
name = "Ethereum"
nativeCurrency = { name = "Ether", symbol = "ETH", decimals = 18 }
rpcUrls = { default = { http = ["https://eth.merkle.io"] } }
blockExplorers = { default = { name = "Etherscan", url = "https://etherscan.io" } }

[chains."eip155:36963"]
name = "Hanzo Network Mainnet"
nativeCurrency = { name = "AI", symbol = "AI", decimals = 18 }
rpcUrls = { default = { http = ["https://rpc.hanzo.network"] } }
blockExplorers = { default = { name = "Hanzo Network Explorer", url = "https://explorer.hanzo.network" } }

[chains."eip155:36962"]
name = "Hanzo Network Testnet"
nativeCurrency = { name = "AI", symbol = "AI", decimals = 18 }
rpcUrls = { default = { http = ["https://rpc-testnet.hanzo.network"] } }
blockExplorers = { default = { name = "Hanzo Network Testnet Explorer", url = "https://explorer-testnet.hanzo.network" } }
testnet = true

# ── Build output ─────────────────────────────────────────────────────
# Static export cannot run the image optimisation service.

[export]
reactStrictMode = true
output = "export"
images = { unoptimized = true }
experimental = { optimizeCss = false }
"#,
    )
}
