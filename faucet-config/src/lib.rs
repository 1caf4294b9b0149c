//! Hanzo Network Faucet wallet configuration.
//!
//! Declares the chains, wallet connectors, storage, and transports the faucet
//! frontend connects with, plus the static-export build configuration for its
//! hosting framework.
//!
//! ```
//! use faucet_config::{ConfigCell, ExecutionContext, Settings, WalletConfig};
//!
//! let cell = ConfigCell::new();
//! let config = cell.get_or_init(|| {
//!     WalletConfig::build(&Settings::default(), "", ExecutionContext::Server)
//! });
//! assert_eq!(config.chains().len(), 4);
//! ```

pub mod chain;
pub mod cmd;
pub mod config;
pub mod connector;
pub mod error;
pub mod export;
pub mod storage;
#[cfg(feature = "telemetry")]
pub mod telemetry;
pub mod transport;
pub mod wallet;

pub use config::Settings;
pub use error::Error;
pub use storage::ExecutionContext;
pub use wallet::{ConfigCell, WalletConfig};
