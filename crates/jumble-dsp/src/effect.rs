//! Either engine behind one type, selected by [`EffectKind`].

use jumble_core::{EngineConfig, RandomSource, Result, StereoBlock, XorShift64};

use crate::kite::KiteEngine;
use crate::processor::BlockProcessor;
use crate::scrambler::ScramblerEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    Kite,
    Scrambler,
}

impl EffectKind {
    pub fn all() -> &'static [EffectKind] {
        &[EffectKind::Kite, EffectKind::Scrambler]
    }

    /// Short identifier without whitespace.
    pub fn label(&self) -> &'static str {
        match self {
            EffectKind::Kite => "Kite",
            EffectKind::Scrambler => "Scrambler",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.label() == label)
    }
}

impl std::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone)]
pub enum Effect<R: RandomSource = XorShift64> {
    Kite(KiteEngine<R>),
    Scrambler(ScramblerEngine<R>),
}

impl Effect<XorShift64> {
    pub fn from_config(kind: EffectKind, config: &EngineConfig) -> Result<Self> {
        Ok(match kind {
            EffectKind::Kite => Effect::Kite(KiteEngine::from_config(config)?),
            EffectKind::Scrambler => Effect::Scrambler(ScramblerEngine::from_config(config)?),
        })
    }
}

impl<R: RandomSource> Effect<R> {
    /// Build with a caller-supplied generator. `config.seed` is ignored.
    pub fn with_rng(kind: EffectKind, config: &EngineConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(match kind {
            EffectKind::Kite => Effect::Kite(
                KiteEngine::with_rng(config.sample_rate, rng).with_bookkeeping(config.bookkeeping),
            ),
            EffectKind::Scrambler => Effect::Scrambler(ScramblerEngine::with_rng(rng)),
        })
    }

    pub fn kind(&self) -> EffectKind {
        match self {
            Effect::Kite(_) => EffectKind::Kite,
            Effect::Scrambler(_) => EffectKind::Scrambler,
        }
    }
}

impl<R: RandomSource> BlockProcessor for Effect<R> {
    #[inline]
    fn process(&mut self, block: StereoBlock<'_>) {
        match self {
            Effect::Kite(engine) => engine.process(block),
            Effect::Scrambler(engine) => engine.process(block),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jumble_core::{Bookkeeping, ConstantSource};

    #[test]
    fn test_label_round_trip() {
        for kind in EffectKind::all() {
            assert_eq!(EffectKind::from_label(kind.label()), Some(*kind));
        }
        assert_eq!(EffectKind::from_label("kite"), None);
        assert_eq!(EffectKind::Scrambler.to_string(), "Scrambler");
    }

    #[test]
    fn test_from_config_selects_engine() {
        let config = EngineConfig::new(48000).seed(1);
        let kite = Effect::from_config(EffectKind::Kite, &config).unwrap();
        assert_eq!(kite.kind(), EffectKind::Kite);
        let scrambler = Effect::from_config(EffectKind::Scrambler, &config).unwrap();
        assert_eq!(scrambler.kind(), EffectKind::Scrambler);
    }

    #[test]
    fn test_with_rng_keeps_bookkeeping() {
        let config = EngineConfig::new(8).bookkeeping(Bookkeeping::Literal);
        match Effect::with_rng(EffectKind::Kite, &config, ConstantSource(0)).unwrap() {
            Effect::Kite(engine) => assert_eq!(engine.bookkeeping(), Bookkeeping::Literal),
            Effect::Scrambler(_) => panic!("expected kite"),
        }
    }

    #[test]
    fn test_dispatch_processes_block() {
        let config = EngineConfig::new(8);
        let mut effect =
            Effect::with_rng(EffectKind::Scrambler, &config, ConstantSource(0)).unwrap();
        let mut il = [1.0, 2.0, 3.0];
        let mut ir = [4.0, 5.0, 6.0];
        let mut ol = [0.0; 3];
        let mut or = [0.0; 3];
        effect
            .process_slices(&mut il, &mut ir, &mut ol, &mut or)
            .unwrap();
        assert_eq!(ol, [1.0, 3.0, 2.0]);
        assert_eq!(or, [4.0, 6.0, 5.0]);
    }
}
