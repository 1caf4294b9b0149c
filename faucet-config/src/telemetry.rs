//! Console tracing setup.
//!
//! Provides [`Telemetry`] for installing a `tracing` subscriber. Only available
//! with the `telemetry` feature.

use std::env;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Resolve an env var with a programmatic fallback.
fn resolve_env(env_key: &str, fallback: Option<&str>) -> Option<String> {
    env::var(env_key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| fallback.map(str::to_owned))
}

/// Service identity and log level for the subscriber.
///
/// The service name can be overridden with `FAUCET_SERVICE_NAME`; the level
/// filter with `RUST_LOG`.
#[derive(Debug, Default)]
pub struct Telemetry {
    name: Option<String>,
    version: Option<String>,
    log_level: Option<String>,
}

impl Telemetry {
    /// Creates a new, empty [`Telemetry`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the service name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the service version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the log level filter used when `RUST_LOG` is not set.
    ///
    /// Accepts any valid [`EnvFilter`] directive string (e.g. `"debug"`,
    /// `"faucet_config=debug"`).
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Installs the global subscriber. Logs go to stderr so command output on
    /// stdout stays machine-readable.
    ///
    /// Does nothing if a subscriber is already installed.
    pub fn register(self) {
        let fallback = self.log_level.as_deref().unwrap_or("info");
        let installed = tracing_subscriber::registry()
            .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .is_ok();

        if installed {
            let name = resolve_env("FAUCET_SERVICE_NAME", self.name.as_deref());
            tracing::debug!(
                service = name.as_deref().unwrap_or("unknown"),
                version = self.version.as_deref().unwrap_or("unknown"),
                "tracing initialised"
            );
        }
    }
}
