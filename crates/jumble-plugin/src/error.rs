//! Error types for the plugin boundary

use crate::port::Port;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PluginError {
    #[error("Unknown port index: {0}")]
    UnknownPort(usize),

    #[error("Port not connected: {0}")]
    PortNotConnected(Port),

    #[error("Buffers overlap; in-place processing is not supported")]
    InPlaceUnsupported,

    #[error("Invalid sample rate: {0} Hz")]
    InvalidSampleRate(u64),

    #[error("Unknown plugin label: {0}")]
    UnknownPlugin(String),

    #[error(transparent)]
    Core(#[from] jumble_core::Error),
}

pub type Result<T> = std::result::Result<T, PluginError>;
