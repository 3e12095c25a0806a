//! Host-facing plugin boundary for Jumble
//!
//! Exposes both effects the way a simple plugin host sees them: an indexed
//! descriptor table, instances bound to four externally owned audio buffers,
//! and a per-block `run`.
//!
//! ## Usage
//!
//! ```ignore
//! use jumble_plugin::{descriptor, PluginInstance};
//!
//! let desc = descriptor(0).unwrap();
//! let mut instance = PluginInstance::instantiate(&desc, 44100)?;
//! instance.connect_port(0, input_left.as_mut_ptr())?;
//! // ... ports 1..=3
//! unsafe { instance.run(input_left.len()) };
//! instance.cleanup();
//! ```

pub mod error;
pub use error::{PluginError, Result};

mod port;
pub use port::{Port, PORT_COUNT};

mod metadata;
pub use metadata::{
    PluginDescriptor, PluginProperties, PortDescriptor, PortDirection, PortKind, COPYRIGHT,
    KITE_UNIQUE_ID, MAKER, SCRAMBLER_UNIQUE_ID,
};

mod instance;
pub use instance::PluginInstance;

mod registry;
pub use registry::{descriptor, descriptors, find};
