//! `faucet-config check` command — structural checks over the configuration.

use std::path::Path;

use crate::config::{Settings, load_settings_or_default};
use crate::error::Error;
use crate::storage::ExecutionContext;
use crate::wallet::{ConfigCell, WalletConfig};

/// Execute the `check` command.
///
/// # Errors
///
/// Returns an error if settings cannot be loaded or any check fails.
pub fn run(cell: &ConfigCell, settings_path: &Path, project_id: &str) -> Result<(), Error> {
    let settings = load_settings_or_default(settings_path)?;
    let config =
        cell.get_or_init(|| WalletConfig::build(&settings, project_id, ExecutionContext::Server));
    check(&settings, &config)?;

    #[cfg(feature = "telemetry")]
    tracing::info!(chains = config.chains().len(), "configuration ok");
    Ok(())
}

/// Checks the built configuration against its settings.
///
/// An empty project identifier is only reported, never rejected.
///
/// # Errors
///
/// Returns [`Error::Chain`] for duplicate identifiers and [`Error::Export`]
/// for contradictory build flags. Transport coverage holds by construction in
/// [`WalletConfig::build`].
pub fn check(settings: &Settings, config: &WalletConfig) -> Result<(), Error> {
    let duplicates = settings.chains.duplicate_ids();
    if !duplicates.is_empty() {
        return Err(Error::chain(format!(
            "duplicate chain ids: {}",
            join(&duplicates)
        )));
    }

    settings.export.validate()?;

    #[cfg(feature = "telemetry")]
    {
        if config.project_id().is_some_and(str::is_empty) {
            tracing::warn!("WalletConnect project id is empty; connecting with WalletConnect will fail");
        }
        for chain in config.chains().iter().filter(|c| c.is_testnet()) {
            tracing::info!(chain = %chain.id, name = chain.name(), "test network listed");
        }
    }

    Ok(())
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
