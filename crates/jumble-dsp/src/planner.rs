//! Sub-block boundary planning for the segmented shuffle.

use jumble_core::RandomSource;

/// One planned sub-block.
///
/// `start` and `end` are both inclusive and are relative to the region the
/// planner was asked about (the unconsumed tail of the block, or the whole
/// block under literal bookkeeping).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockDescriptor {
    pub start: usize,
    pub end: usize,
    pub reverse: bool,
}

impl BlockDescriptor {
    /// Samples in `[start, end]`.
    #[inline]
    pub fn len_inclusive(&self) -> usize {
        self.end - self.start + 1
    }

    /// Samples in `[start, end)`.
    #[inline]
    pub fn len_exclusive(&self) -> usize {
        self.end - self.start
    }
}

/// Computes sub-block boundaries from the remaining sample count.
///
/// Sizes scale with the sample rate: the shortest sub-block is a quarter
/// second and the natural span ceiling is `min_block + 2 s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentPlanner {
    min_block: usize,
    max_span: usize,
}

impl SegmentPlanner {
    pub fn new(sample_rate: u32) -> Self {
        let min_block = ((0.25 * sample_rate as f64).round() as usize).max(1);
        let max_span = (2 * sample_rate as usize).max(1);
        Self {
            min_block,
            max_span,
        }
    }

    /// Shortest sub-block, in samples (never zero).
    #[inline]
    pub fn min_block(&self) -> usize {
        self.min_block
    }

    #[inline]
    pub fn max_span(&self) -> usize {
        self.max_span
    }

    #[inline]
    pub fn max_block_end(&self) -> usize {
        self.min_block + self.max_span
    }

    /// Plan the next sub-block of a region holding `remaining` samples.
    ///
    /// - `remaining <= 2 * min_block`: the whole region, `[0, remaining - 1]`.
    /// - `remaining <= max_block_end`: a random start, ending at the region's
    ///   last sample.
    /// - otherwise: random start and end, at least `min_block` apart.
    ///
    /// Draws follow the [`RandomSource`] modulus convention and are then
    /// clamped to the region, so the descriptor never addresses a sample at or
    /// beyond `remaining`.
    pub fn plan<G: RandomSource + ?Sized>(&self, remaining: usize, rng: &mut G) -> BlockDescriptor {
        debug_assert!(remaining >= 1, "planning an empty region");
        let min = self.min_block;
        let last = remaining.saturating_sub(1);

        let (start, end) = if remaining <= 2 * min {
            (0, last)
        } else if remaining <= self.max_block_end() {
            // remaining > 2 * min, so the modulus is at least min >= 1
            let start = rng.draw_offset(min, remaining - min - 1);
            (start, last)
        } else {
            let start = rng
                .draw_offset(min, self.max_block_end())
                .min(last - min);
            let upper = if remaining <= start + self.max_span {
                last
            } else {
                start + self.max_span
            };
            let end = rng.draw_offset(start + min, upper).min(last);
            (start, end)
        };

        let reverse = rng.draw_offset(0, 2) == 1;

        BlockDescriptor {
            start,
            end,
            reverse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jumble_core::{ConstantSource, SequenceSource, XorShift64};
    use proptest::prelude::*;

    #[test]
    fn test_sizes_scale_with_sample_rate() {
        let planner = SegmentPlanner::new(8);
        assert_eq!(planner.min_block(), 2);
        assert_eq!(planner.max_span(), 16);
        assert_eq!(planner.max_block_end(), 18);

        let planner = SegmentPlanner::new(44100);
        assert_eq!(planner.min_block(), 11025);
        assert_eq!(planner.max_span(), 88200);
    }

    #[test]
    fn test_min_block_never_zero() {
        let planner = SegmentPlanner::new(1);
        assert_eq!(planner.min_block(), 1);
        assert_eq!(planner.max_span(), 2);
    }

    #[test]
    fn test_tail_case_covers_whole_region() {
        let planner = SegmentPlanner::new(8);
        let desc = planner.plan(2, &mut ConstantSource(0));
        assert_eq!(
            desc,
            BlockDescriptor {
                start: 0,
                end: 1,
                reverse: false
            }
        );
        assert_eq!(desc.len_inclusive(), 2);
    }

    #[test]
    fn test_tail_case_draws_only_reverse_flag() {
        let planner = SegmentPlanner::new(8);
        let mut rng = SequenceSource::new(&[1]);
        let desc = planner.plan(4, &mut rng);
        assert_eq!((desc.start, desc.end), (0, 3));
        assert!(desc.reverse);
        assert_eq!(rng.consumed(), 1);
    }

    #[test]
    fn test_near_tail_case_ends_at_last_sample() {
        let planner = SegmentPlanner::new(8);
        // modulus 5 - 2 - 1 = 2; raw 0 -> start 2
        let desc = planner.plan(5, &mut ConstantSource(0));
        assert_eq!((desc.start, desc.end), (2, 4));

        // raw 1 -> start 3, still before the last sample
        let desc = planner.plan(5, &mut ConstantSource(1));
        assert_eq!((desc.start, desc.end), (3, 4));
        assert!(desc.reverse);
    }

    #[test]
    fn test_general_case_bounds() {
        let planner = SegmentPlanner::new(8);
        // start = 0 % 18 + 2 = 2; upper = 2 + 16 = 18; end = 0 % 18 + 4 = 4
        let desc = planner.plan(100, &mut ConstantSource(0));
        assert_eq!((desc.start, desc.end), (2, 4));
    }

    #[test]
    fn test_general_case_clamps_to_region() {
        let planner = SegmentPlanner::new(8);
        // start 17 % 18 + 2 = 19, clamped to 17; end 17 % 19 + 19 = 36, clamped to 19
        let mut rng = SequenceSource::new(&[17, 17, 0]);
        let desc = planner.plan(20, &mut rng);
        assert_eq!(desc.start, 17);
        assert_eq!(desc.end, 19);
    }

    proptest! {
        #[test]
        fn prop_descriptor_stays_in_region(
            sample_rate in 1u32..4000,
            remaining in 1usize..40_000,
            seed in any::<u64>(),
        ) {
            let planner = SegmentPlanner::new(sample_rate);
            let mut rng = XorShift64::new(seed);
            let desc = planner.plan(remaining, &mut rng);

            prop_assert!(desc.start <= desc.end);
            prop_assert!(desc.end < remaining);
            if remaining > 2 * planner.min_block() {
                prop_assert!(desc.start >= planner.min_block());
                prop_assert!(desc.len_exclusive() >= 1);
            } else {
                prop_assert_eq!(desc.start, 0);
                prop_assert_eq!(desc.end, remaining - 1);
            }
        }
    }
}
