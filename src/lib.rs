//! # Jumble - Real-time Sample-Reordering Effects
//!
//! Two stereo effects that rearrange the samples of each block:
//!
//! - **Kite** - cuts the block into variable-length sub-blocks, reverses
//!   about half of them, and concatenates them
//! - **Scrambler** - emits every sample of the block in random order
//!
//! ## Architecture
//!
//! Jumble is an umbrella crate over:
//! - **jumble-core** - random sources, block validation, configuration
//! - **jumble-dsp** - the two engines
//! - **jumble-plugin** - descriptors, port binding and per-block `run` for hosts
//!
//! ## Quick Start
//!
//! ```ignore
//! use jumble::prelude::*;
//!
//! let mut effect = EffectBuilder::new(EffectKind::Scrambler)
//!     .sample_rate(44100)
//!     .build()?;
//!
//! effect.process_slices(&mut in_l, &mut in_r, &mut out_l, &mut out_r)?;
//! ```
//!
//! Both engines consume their input buffers. Keep a copy if the dry signal
//! is still needed.

/// Re-export of jumble-core for direct access
pub use jumble_core as core;

/// Re-export of jumble-dsp for direct access
pub use jumble_dsp as dsp;

/// Re-export of jumble-plugin for direct access
pub use jumble_plugin as plugin;

mod builder;
pub use builder::EffectBuilder;

mod error;
pub use error::{Error, Result};

pub use jumble_core::{Bookkeeping, EngineConfig, RandomSource, SeedMode, XorShift64};
pub use jumble_dsp::{BlockProcessor, Effect, EffectKind, KiteEngine, ScramblerEngine};
pub use jumble_plugin::{PluginDescriptor, PluginError, PluginInstance};

pub mod prelude {
    pub use crate::{
        Bookkeeping, BlockProcessor, Effect, EffectBuilder, EffectKind, EngineConfig, Error,
        KiteEngine, PluginDescriptor, PluginInstance, RandomSource, Result, ScramblerEngine,
        SeedMode, XorShift64,
    };
}
