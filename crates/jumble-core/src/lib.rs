//! Core types for the Jumble sample-reordering effects.
//!
//! - [`RandomSource`]: bounded draws driving every reordering decision
//! - [`StereoBlock`]: validated view over one block of host buffers
//! - [`EngineConfig`]: construction-time settings (sample rate, seeding, bookkeeping)
//!
//! Nothing here allocates on the processing path.

pub mod error;
pub use error::{Error, Result};

pub mod rng;
#[cfg(feature = "rand")]
pub use rng::RandSource;
pub use rng::{clock_seed, ConstantSource, RandomSource, SeedMode, SequenceSource, XorShift64};

mod block;
pub use block::StereoBlock;

mod config;
pub use config::{Bookkeeping, EngineConfig, MAX_SAMPLE_RATE};
