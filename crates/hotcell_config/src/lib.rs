//! Parsing and validation of `hotcell.toml` host configuration files.
//!
//! Hosts that bind cells declaratively describe them here: which
//! identifier to bind, where the resolver reads from, and whether the
//! cell is wrapped for concurrent access. The crate stays declarative —
//! wiring a resolver and backend from a validated [`HostConfig`] is the
//! host's job. No CLI, no environment variables.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use types::{CellSection, HostConfig, ResolverSection};
