//! Scrambler: swap-based full scramble.

use jumble_core::{EngineConfig, RandomSource, Result, StereoBlock, XorShift64};

use crate::processor::BlockProcessor;

/// Random permutation of every sample in the block.
///
/// Each step picks one of the remaining input samples, emits it, and fills its
/// slot with the last remaining sample before shrinking the range by one. The
/// same pick is used for both channels, so the stereo pair stays coherent.
///
/// The input block is consumed: after `process` its contents are unspecified.
#[derive(Debug, Clone)]
pub struct ScramblerEngine<R: RandomSource = XorShift64> {
    rng: R,
}

impl ScramblerEngine<XorShift64> {
    /// Clock-seeded engine.
    pub fn new() -> Self {
        Self::with_rng(XorShift64::from_clock())
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_rng(config.seed.generator()))
    }
}

impl Default for ScramblerEngine<XorShift64> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> ScramblerEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

impl<R: RandomSource> BlockProcessor for ScramblerEngine<R> {
    fn process(&mut self, block: StereoBlock<'_>) {
        let (input_left, input_right, output_left, output_right) = block.split();
        let total = input_left.len();

        for processed in 0..total {
            let remaining = total - processed;
            let last = remaining - 1;
            let pick = self.rng.draw(remaining);

            output_left[processed] = input_left[pick];
            input_left[pick] = input_left[last];

            output_right[processed] = input_right[pick];
            input_right[pick] = input_right[last];
        }
    }
}
