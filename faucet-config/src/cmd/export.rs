//! `faucet-config export` command — write the static-export build configuration.

use std::fs;
use std::path::Path;

use crate::config::load_settings_or_default;
use crate::error::Error;

/// Execute the `export` command.
///
/// Validates the `[export]` settings before writing `output`, so an invalid
/// combination never reaches the hosting framework.
///
/// # Errors
///
/// Returns an error if settings cannot be loaded, the flags are invalid, or
/// writing fails.
pub fn run(settings_path: &Path, output: &Path) -> Result<(), Error> {
    let settings = load_settings_or_default(settings_path)?;
    settings.export.validate()?;
    let json = settings.export.to_json()?;
    fs::write(output, json + "\n")
        .map_err(|e| Error::config_with(format!("failed to write '{}'", output.display()), e))?;

    #[cfg(feature = "telemetry")]
    tracing::info!(path = %output.display(), output = ?settings.export.output, "build config written");
    Ok(())
}
