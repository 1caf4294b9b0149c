//! Hanzo Network Faucet configuration CLI
//!
//! Builds the wallet-client configuration and the static-export build
//! configuration for the faucet frontend.
//!
//! ```sh
//! faucet-config init            # Generate default faucet.toml
//! faucet-config show            # Print the wallet configuration as JSON
//! faucet-config export          # Write next.config.json
//! faucet-config check           # Validate chain ids and build flags
//! ```

use clap::Parser;
use dotenvy::dotenv;
use faucet_config::ConfigCell;
use faucet_config::cmd::{self, Cli, Commands};
#[cfg(feature = "telemetry")]
use faucet_config::telemetry::Telemetry;

#[allow(clippy::print_stderr)]
fn main() {
    // .env must be loaded before clap reads `env` fallbacks
    dotenv().ok();

    let cli = Cli::parse();

    #[cfg(feature = "telemetry")]
    Telemetry::new()
        .with_name(env!("CARGO_PKG_NAME"))
        .with_version(env!("CARGO_PKG_VERSION"))
        .register();

    let wallet_config = ConfigCell::new();

    let result = match cli.command {
        Commands::Init { output, force } => cmd::init::run(&output, force),
        Commands::Show {
            settings,
            project,
            context,
        } => cmd::show::run(&wallet_config, &settings.settings, &project.project_id, context),
        Commands::Export { settings, output } => cmd::export::run(&settings.settings, &output),
        Commands::Check { settings, project } => {
            cmd::check::run(&wallet_config, &settings.settings, &project.project_id)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
