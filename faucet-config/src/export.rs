//! Static-export build configuration for the hosting framework.
//!
//! Serialises to the camelCase object the framework reads from
//! `next.config.json`.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Build output mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Fully static site, no server runtime.
    #[default]
    Export,
    /// Self-contained server bundle.
    Standalone,
}

/// Image handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Images {
    /// Skip the image-optimisation service. Static hosts cannot run it.
    pub unoptimized: bool,
}

impl Default for Images {
    fn default() -> Self {
        Self { unoptimized: true }
    }
}

/// Experimental framework flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experimental {
    /// CSS optimisation; unsupported with static export.
    pub optimize_css: bool,
}

/// Hosting framework build configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportConfig {
    /// Extra development-time checks in the UI framework.
    #[serde(default = "default_true")]
    pub react_strict_mode: bool,
    /// Output mode.
    #[serde(default)]
    pub output: OutputMode,
    /// Image handling.
    #[serde(default)]
    pub images: Images,
    /// Experimental flags.
    #[serde(default)]
    pub experimental: Experimental,
}

const fn default_true() -> bool {
    true
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            react_strict_mode: true,
            output: OutputMode::Export,
            images: Images::default(),
            experimental: Experimental::default(),
        }
    }
}

impl ExportConfig {
    /// Rejects flag combinations the static host cannot serve.
    ///
    /// A server build with unoptimised images is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Export`] for a static export with optimised images
    /// or with CSS optimisation enabled.
    pub fn validate(&self) -> Result<(), Error> {
        if self.output != OutputMode::Export {
            return Ok(());
        }
        if !self.images.unoptimized {
            return Err(Error::export(
                "static export requires images.unoptimized = true",
            ));
        }
        if self.experimental.optimize_css {
            return Err(Error::export(
                "experimental.optimizeCss is not supported with static export",
            ));
        }
        Ok(())
    }

    /// Pretty-printed JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Export`] if serialisation fails.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::export(format!("failed to serialise build config: {e}")))
    }
}
