//! Kite: segmented shuffle-and-reverse.
//!
//! Each block is cut into variable-length sub-blocks chosen by the
//! [`SegmentPlanner`]; every sub-block is reversed with probability one half
//! and appended to the output.

use jumble_core::{Bookkeeping, EngineConfig, RandomSource, Result, StereoBlock, XorShift64};

use crate::planner::{BlockDescriptor, SegmentPlanner};
use crate::processor::BlockProcessor;
use crate::reverse::reverse_pair;

/// Segmented shuffle engine.
///
/// Both channels go through identical sub-block boundaries and reversals, so
/// left and right samples always move as a pair. The input block is modified
/// in place.
///
/// ## Bookkeeping
///
/// - [`Bookkeeping::Corrected`]: sub-blocks are carved out of the unconsumed
///   input and appended to the output, so the output holds every input sample
///   exactly once. A sub-block ending at the region's last sample is copied
///   out directly; any other is rotated to the front of the region first.
///   The skipped prefix is bounded by the planner, so work stays linear in
///   the block length.
/// - [`Bookkeeping::Literal`]: every sub-block is planned against the full
///   block length and copied with an exclusive end. Input samples may repeat
///   or be dropped; the output is still written exactly once per index.
#[derive(Debug, Clone)]
pub struct KiteEngine<R: RandomSource = XorShift64> {
    planner: SegmentPlanner,
    rng: R,
    bookkeeping: Bookkeeping,
    /// Samples moved by rotations, for checking per-block work.
    #[cfg(test)]
    rotated: usize,
}

impl KiteEngine<XorShift64> {
    /// Clock-seeded engine with corrected bookkeeping.
    pub fn new(sample_rate: u32) -> Self {
        Self::with_rng(sample_rate, XorShift64::from_clock())
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_rng(config.sample_rate, config.seed.generator())
            .with_bookkeeping(config.bookkeeping))
    }
}

impl<R: RandomSource> KiteEngine<R> {
    pub fn with_rng(sample_rate: u32, rng: R) -> Self {
        Self {
            planner: SegmentPlanner::new(sample_rate),
            rng,
            bookkeeping: Bookkeeping::default(),
            #[cfg(test)]
            rotated: 0,
        }
    }

    pub fn with_bookkeeping(mut self, bookkeeping: Bookkeeping) -> Self {
        self.bookkeeping = bookkeeping;
        self
    }

    pub fn bookkeeping(&self) -> Bookkeeping {
        self.bookkeeping
    }

    pub fn planner(&self) -> &SegmentPlanner {
        &self.planner
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Plan a block of `total` samples under corrected bookkeeping without
    /// touching any audio, reporting each sub-block to `visit`.
    ///
    /// Consumes the same draws `process` would for a block of that length.
    pub fn plan_segments(&mut self, total: usize, mut visit: impl FnMut(BlockDescriptor)) {
        let mut consumed = 0;
        while consumed < total {
            let desc = self.planner.plan(total - consumed, &mut self.rng);
            consumed += desc.len_inclusive();
            visit(desc);
        }
    }

    fn process_corrected(
        &mut self,
        input_left: &mut [f32],
        input_right: &mut [f32],
        output_left: &mut [f32],
        output_right: &mut [f32],
    ) {
        // Unconsumed input is `lo..hi`, in its current order.
        let (mut lo, mut hi) = (0, input_left.len());
        let mut written = 0;

        while lo < hi {
            let remaining = hi - lo;
            let desc = self.planner.plan(remaining, &mut self.rng);
            let left = &mut input_left[lo..hi];
            let right = &mut input_right[lo..hi];

            if desc.reverse {
                reverse_pair(left, right, desc.start, desc.end);
            }

            let len = desc.len_inclusive();
            let out = written..written + len;

            if desc.end + 1 == remaining {
                // Sub-block is the region's suffix: the prefix stays in place.
                output_left[out.clone()].copy_from_slice(&left[desc.start..]);
                output_right[out].copy_from_slice(&right[desc.start..]);
                hi = lo + desc.start;
            } else {
                // Move the sub-block to the front; the skipped prefix shifts
                // behind it. The prefix is shorter than `min_block + max_block_end`.
                left[..=desc.end].rotate_right(len);
                right[..=desc.end].rotate_right(len);
                #[cfg(test)]
                {
                    self.rotated += desc.end + 1;
                }

                output_left[out.clone()].copy_from_slice(&left[..len]);
                output_right[out].copy_from_slice(&right[..len]);
                lo += len;
            }
            written += len;
        }
    }

    fn process_literal(
        &mut self,
        input_left: &mut [f32],
        input_right: &mut [f32],
        output_left: &mut [f32],
        output_right: &mut [f32],
    ) {
        let total = input_left.len();
        let mut written = 0;

        while written < total {
            // The remaining count is deliberately not reduced here.
            let desc = self.planner.plan(total, &mut self.rng);

            if desc.reverse {
                reverse_pair(input_left, input_right, desc.start, desc.end);
            }

            debug_assert!(desc.len_exclusive() >= 1, "sub-block would not advance");
            let len = desc.len_exclusive().max(1).min(total - written);
            let source = desc.start..desc.start + len;

            output_left[written..written + len].copy_from_slice(&input_left[source.clone()]);
            output_right[written..written + len].copy_from_slice(&input_right[source]);
            written += len;
        }
    }
}

impl<R: RandomSource> BlockProcessor for KiteEngine<R> {
    fn process(&mut self, block: StereoBlock<'_>) {
        let (input_left, input_right, output_left, output_right) = block.split();
        match self.bookkeeping {
            Bookkeeping::Corrected => {
                self.process_corrected(input_left, input_right, output_left, output_right)
            }
            Bookkeeping::Literal => {
                self.process_literal(input_left, input_right, output_left, output_right)
            }
        }
    }
}
