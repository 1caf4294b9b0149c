//! Built-in chain list for the faucet.
//!
//! The local development chain is always part of the list, including in
//! production builds, so the faucet UI can be pointed at an Anvil node from any
//! deployment.

use super::config::ChainsConfig;
use super::descriptor::{ChainDescriptor, NativeCurrency};

/// Anvil / Foundry local node.
pub const LOCALHOST_CHAIN_ID: u64 = 31337;
/// Ethereum mainnet.
pub const MAINNET_CHAIN_ID: u64 = 1;
/// Hanzo Network mainnet.
pub const HANZO_MAINNET_CHAIN_ID: u64 = 36963;
/// Hanzo Network testnet.
pub const HANZO_TESTNET_CHAIN_ID: u64 = 36962;

fn ai() -> NativeCurrency {
    NativeCurrency::new("AI", "AI", 18)
}

/// Hanzo Network mainnet.
#[must_use]
pub fn hanzo_mainnet() -> ChainDescriptor {
    ChainDescriptor::new(
        HANZO_MAINNET_CHAIN_ID,
        "Hanzo Network Mainnet",
        ai(),
        "https://rpc.hanzo.network",
    )
    .with_explorer("Hanzo Network Explorer", "https://explorer.hanzo.network")
}

/// Hanzo Network testnet.
#[must_use]
pub fn hanzo_testnet() -> ChainDescriptor {
    ChainDescriptor::new(
        HANZO_TESTNET_CHAIN_ID,
        "Hanzo Network Testnet",
        ai(),
        "https://rpc-testnet.hanzo.network",
    )
    .with_explorer(
        "Hanzo Network Testnet Explorer",
        "https://explorer-testnet.hanzo.network",
    )
    .testnet()
}

/// Local node for testing with Foundry/Anvil.
#[must_use]
pub fn localhost() -> ChainDescriptor {
    ChainDescriptor::new(
        LOCALHOST_CHAIN_ID,
        "Localhost",
        NativeCurrency::ether(),
        "http://127.0.0.1:8545",
    )
    .testnet()
}

/// Ethereum mainnet with its public default RPC.
#[must_use]
pub fn mainnet() -> ChainDescriptor {
    ChainDescriptor::new(
        MAINNET_CHAIN_ID,
        "Ethereum",
        NativeCurrency::ether(),
        "https://eth.merkle.io",
    )
    .with_explorer("Etherscan", "https://etherscan.io")
}

/// All chains users may connect to, in wallet preference order.
#[must_use]
pub fn default_chains() -> ChainsConfig {
    ChainsConfig(vec![localhost(), mainnet(), hanzo_mainnet(), hanzo_testnet()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::ChainId;

    #[test]
    fn default_ids_are_unique_and_ordered() {
        let chains = default_chains();
        let ids: Vec<u64> = chains.ids().map(ChainId::get).collect();
        assert_eq!(ids, vec![31337, 1, 36963, 36962]);
        assert!(chains.duplicate_ids().is_empty());
    }

    #[test]
    fn localhost_is_always_listed() {
        let chains = default_chains();
        let local = chains.get(ChainId(LOCALHOST_CHAIN_ID)).unwrap();
        assert!(local.is_testnet());
        assert_eq!(local.default_rpc_url(), Some("http://127.0.0.1:8545"));
        assert!(local.metadata.block_explorers.is_none());
    }

    #[test]
    fn hanzo_chains_use_ai_currency() {
        for chain in [hanzo_mainnet(), hanzo_testnet()] {
            assert_eq!(chain.metadata.native_currency, NativeCurrency::new("AI", "AI", 18));
            assert!(chain.metadata.block_explorers.is_some());
        }
        assert!(!hanzo_mainnet().is_testnet());
        assert!(hanzo_testnet().is_testnet());
    }
}
