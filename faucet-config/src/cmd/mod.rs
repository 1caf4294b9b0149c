//! CLI definitions and command implementations for the faucet configuration.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::storage::ExecutionContext;

pub mod check;
pub mod export;
pub mod init;
pub mod show;

/// Hanzo Network Faucet — wallet connectivity and build configuration.
#[derive(Debug, Parser)]
#[command(name = "faucet-config")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Settings file location shared by every command that reads it.
#[derive(Debug, Clone, Args)]
pub struct SettingsArgs {
    /// Path to the TOML settings file. Built-in defaults apply when it is absent.
    #[arg(short, long, env = "FAUCET_SETTINGS", default_value = "faucet.toml")]
    pub settings: PathBuf,
}

/// `WalletConnect` project identifier input.
#[derive(Debug, Clone, Args)]
pub struct ProjectIdArgs {
    /// `WalletConnect` cloud project identifier. Not validated.
    #[arg(long, env = "NEXT_PUBLIC_WC_PROJECT_ID", default_value = "", hide_env_values = true)]
    pub project_id: String,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a default TOML settings file.
    Init {
        /// Output path for the settings file.
        #[arg(short, long, default_value = "faucet.toml")]
        output: PathBuf,

        /// Overwrite the file if it already exists.
        #[arg(long, default_value_t = false)]
        force: bool,
    },

    /// Print the wallet-client configuration as JSON.
    Show {
        /// Settings file.
        #[command(flatten)]
        settings: SettingsArgs,

        /// Project identifier.
        #[command(flatten)]
        project: ProjectIdArgs,

        /// Execution context that decides the storage backend.
        #[arg(long, value_enum, default_value_t = ExecutionContext::Browser)]
        context: ExecutionContext,
    },

    /// Write the static-export build configuration.
    Export {
        /// Settings file.
        #[command(flatten)]
        settings: SettingsArgs,

        /// Output path for the build configuration JSON.
        #[arg(short, long, default_value = "next.config.json")]
        output: PathBuf,
    },

    /// Check chain ids and build flags.
    Check {
        /// Settings file.
        #[command(flatten)]
        settings: SettingsArgs,

        /// Project identifier.
        #[command(flatten)]
        project: ProjectIdArgs,
    },
}
