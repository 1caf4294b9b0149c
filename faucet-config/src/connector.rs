//! Wallet connection strategies offered by the faucet.

use serde::{Deserialize, Serialize};

/// Application name reported to the Coinbase Wallet connector.
pub const DEFAULT_APP_NAME: &str = "Hanzo Network Faucet";

/// One method of establishing a wallet connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Connector {
    /// Browser-injected provider (`window.ethereum`).
    Injected,
    /// Coinbase Wallet SDK.
    #[serde(rename_all = "camelCase")]
    CoinbaseWallet {
        /// Application name shown in the wallet's approval prompt.
        app_name: String,
    },
    /// `WalletConnect` protocol.
    #[serde(rename_all = "camelCase")]
    WalletConnect {
        /// Cloud project identifier. May be empty; the relay rejects it at connect time.
        project_id: String,
    },
}

impl Connector {
    /// Stable connector identifier.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Injected => "injected",
            Self::CoinbaseWallet { .. } => "coinbaseWallet",
            Self::WalletConnect { .. } => "walletConnect",
        }
    }
}

/// Builds the connector list in display order.
///
/// `project_id` is passed through as-is.
#[must_use]
pub fn default_connectors(app_name: &str, project_id: &str) -> Vec<Connector> {
    vec![
        Connector::Injected,
        Connector::CoinbaseWallet {
            app_name: app_name.to_owned(),
        },
        Connector::WalletConnect {
            project_id: project_id.to_owned(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connectors_keep_display_order() {
        let ids: Vec<_> = default_connectors(DEFAULT_APP_NAME, "abc")
            .iter()
            .map(Connector::id)
            .collect();
        assert_eq!(ids, ["injected", "coinbaseWallet", "walletConnect"]);
    }

    #[test]
    fn empty_project_id_is_passed_through() {
        let connectors = default_connectors(DEFAULT_APP_NAME, "");
        assert_eq!(
            connectors[2],
            Connector::WalletConnect {
                project_id: String::new()
            }
        );
    }

    #[test]
    fn serialises_with_type_tag() {
        let json = serde_json::to_value(Connector::CoinbaseWallet {
            app_name: DEFAULT_APP_NAME.to_owned(),
        })
        .unwrap();
        assert_eq!(json["type"], "coinbaseWallet");
        assert_eq!(json["appName"], DEFAULT_APP_NAME);
    }
}
