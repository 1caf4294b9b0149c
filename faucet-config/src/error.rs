//! Unified error types for the faucet configuration.

use thiserror::Error;

/// Top-level error type for configuration loading and checks.
#[derive(Debug, Error)]
pub enum Error {
    /// Settings file could not be resolved, read, written, or parsed.
    #[error("config: {0}")]
    Config(String),

    /// Chain list or transport map is inconsistent.
    #[error("chain: {0}")]
    Chain(String),

    /// Build/export flags are contradictory.
    #[error("export: {0}")]
    Export(String),
}

impl Error {
    /// Creates a [`Error::Config`] from a message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a [`Error::Config`] from a message and an underlying cause.
    pub fn config_with(msg: impl AsRef<str>, err: impl std::fmt::Display) -> Self {
        Self::Config(format!("{}: {err}", msg.as_ref()))
    }

    /// Creates a [`Error::Chain`] from a message.
    pub fn chain(msg: impl Into<String>) -> Self {
        Self::Chain(msg.into())
    }

    /// Creates a [`Error::Export`] from a message.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }
}
