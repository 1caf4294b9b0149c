//! `faucet-config init` command — generate a default TOML settings file.

use std::fs;
use std::path::Path;

use crate::config::generate_default_settings;
use crate::error::Error;

/// Execute the `init` command.
///
/// Writes the default settings template to `output`. Refuses to overwrite an
/// existing file unless `force` is `true`.
///
/// # Errors
///
/// Returns an error if the file already exists (without `--force`) or if
/// writing fails.
pub fn run(output: &Path, force: bool) -> Result<(), Error> {
    if output.exists() && !force {
        return Err(Error::config(format!(
            "'{}' already exists, use --force to overwrite",
            output.display()
        )));
    }

    fs::write(output, generate_default_settings())
        .map_err(|e| Error::config_with(format!("failed to write '{}'", output.display()), e))?;

    #[cfg(feature = "telemetry")]
    tracing::info!(path = %output.display(), "settings file written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("existing.toml");
        fs::write(&path, "app_name = \"keep me\"").unwrap();

        let err = run(&path, false).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "app_name = \"keep me\"");

        run(&path, true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), generate_default_settings());
    }
}
