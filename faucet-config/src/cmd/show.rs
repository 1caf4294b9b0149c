//! `faucet-config show` command — print the wallet-client configuration.

use std::path::Path;

use crate::config::load_settings_or_default;
use crate::error::Error;
use crate::storage::ExecutionContext;
use crate::wallet::{ConfigCell, WalletConfig};

/// Execute the `show` command.
///
/// Builds the configuration into `cell` (or reuses it) and prints its JSON view
/// to stdout.
///
/// # Errors
///
/// Returns an error if the settings file cannot be loaded or the view cannot
/// be serialised.
#[allow(clippy::print_stdout)]
pub fn run(
    cell: &ConfigCell,
    settings_path: &Path,
    project_id: &str,
    context: ExecutionContext,
) -> Result<(), Error> {
    let settings = load_settings_or_default(settings_path)?;
    let config = cell.get_or_init(|| WalletConfig::build(&settings, project_id, context));
    let json = serde_json::to_string_pretty(&config.view())
        .map_err(|e| Error::config_with("failed to serialise wallet config", e))?;
    println!("{json}");
    Ok(())
}
