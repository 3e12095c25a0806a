//! Engine configuration.

use crate::rng::SeedMode;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Highest sample rate accepted by [`EngineConfig::validate`].
pub const MAX_SAMPLE_RATE: u32 = 768_000;

/// Remaining-count bookkeeping used by the segmented shuffle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Bookkeeping {
    /// The remaining count shrinks as sub-blocks are emitted; every input
    /// sample lands in the output exactly once.
    #[default]
    Corrected,
    /// The remaining count stays at the block length for every sub-block,
    /// and each sub-block is copied with an exclusive end.
    Literal,
}

/// Construction-time configuration shared by both engines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub sample_rate: u32,
    pub seed: SeedMode,
    pub bookkeeping: Bookkeeping,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            seed: SeedMode::Clock,
            bookkeeping: Bookkeeping::Corrected,
        }
    }
}

impl EngineConfig {
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            ..Self::default()
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = SeedMode::Fixed(seed);
        self
    }

    pub fn bookkeeping(mut self, bookkeeping: Bookkeeping) -> Self {
        self.bookkeeping = bookkeeping;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 || self.sample_rate > MAX_SAMPLE_RATE {
            return Err(Error::InvalidConfig(format!(
                "sample_rate {} out of range (1-{} Hz)",
                self.sample_rate, MAX_SAMPLE_RATE
            )));
        }
        Ok(())
    }
}
