//! Chain descriptors, the built-in chain list, and CAIP-2 keyed TOML (de)serialisation.
//!
//! - [`descriptor`] — [`ChainId`] and [`ChainDescriptor`] metadata types.
//! - [`config`] — [`ChainsConfig`], the ordered chain list and its TOML map form.
//! - [`registry`] — the chains the faucet lets users connect to.

mod config;
mod descriptor;
mod registry;

pub use self::config::*;
pub use self::descriptor::*;
pub use self::registry::*;
