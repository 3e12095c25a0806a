//! Per-block processing entry point shared by both engines.

use jumble_core::{Result, StereoBlock};

/// One-block-at-a-time stereo processor.
///
/// Implementations are real-time safe: no allocation, no locking, and
/// `O(len)` work per block.
pub trait BlockProcessor {
    /// Fill both output channels of a validated block.
    fn process(&mut self, block: StereoBlock<'_>);

    /// Validate raw channel slices, then process them.
    ///
    /// Invalid blocks (fewer than two samples, mismatched lengths) are
    /// skipped: a warning is logged, the outputs are left exactly as they
    /// were, and the validation error is returned.
    fn process_slices(
        &mut self,
        input_left: &mut [f32],
        input_right: &mut [f32],
        output_left: &mut [f32],
        output_right: &mut [f32],
    ) -> Result<()> {
        match StereoBlock::new(input_left, input_right, output_left, output_right) {
            Ok(block) => {
                self.process(block);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("{}; plugin not executed", e);
                Err(e)
            }
        }
    }
}
