//! Builder for configuring and constructing an effect.

use jumble_core::{Bookkeeping, EngineConfig, RandomSource};
use jumble_dsp::{Effect, EffectKind};
use jumble_plugin::{PluginDescriptor, PluginInstance};

use crate::Result;

/// Without `.seed()` the generator is seeded from the wall clock, so two
/// effects built back to back produce different output.
///
/// # Example
///
/// ```ignore
/// use jumble::prelude::*;
///
/// let mut kite = EffectBuilder::new(EffectKind::Kite)
///     .sample_rate(48000)
///     .seed(7)
///     .build()?;
///
/// kite.process_slices(&mut in_l, &mut in_r, &mut out_l, &mut out_r)?;
/// ```
#[derive(Debug, Clone)]
pub struct EffectBuilder {
    kind: EffectKind,
    config: EngineConfig,
}

impl EffectBuilder {
    pub fn new(kind: EffectKind) -> Self {
        Self {
            kind,
            config: EngineConfig::default(),
        }
    }

    /// Default: 44100
    pub fn sample_rate(mut self, sample_rate: u32) -> Self {
        self.config.sample_rate = sample_rate;
        self
    }

    /// Fixed seed for reproducible output.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config = self.config.seed(seed);
        self
    }

    /// Only affects [`EffectKind::Kite`]. Default: [`Bookkeeping::Corrected`]
    pub fn bookkeeping(mut self, bookkeeping: Bookkeeping) -> Self {
        self.config = self.config.bookkeeping(bookkeeping);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn build(self) -> Result<Effect> {
        Ok(Effect::from_config(self.kind, &self.config)?)
    }

    /// Build around a caller-supplied random source. Any `.seed()` is ignored.
    pub fn build_with<R: RandomSource>(self, rng: R) -> Result<Effect<R>> {
        Ok(Effect::with_rng(self.kind, &self.config, rng)?)
    }

    /// Instantiate through the plugin boundary with this configuration.
    pub fn instantiate(self) -> Result<Box<PluginInstance>> {
        let descriptor = PluginDescriptor::for_effect(self.kind);
        Ok(PluginInstance::with_config(&descriptor, &self.config)?)
    }
}
