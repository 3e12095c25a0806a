//! Centralized error type for the jumble umbrella crate.
//!
//! Wraps the subsystem errors so `?` propagates across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] jumble_core::Error),

    #[error("Plugin: {0}")]
    Plugin(#[from] jumble_plugin::PluginError),
}

pub type Result<T> = std::result::Result<T, Error>;
