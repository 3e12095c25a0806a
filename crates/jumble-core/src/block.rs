//! Borrowed stereo block: the four host buffers for one processing cycle.

use crate::{Error, Result};

/// Input and output channel pairs for one block.
///
/// Both engines consume their input (reversal and swap-selection work in
/// place), so the input slices are mutable too. All four slices have the same
/// length and that length is at least 2; [`StereoBlock::new`] is the only way
/// to build one.
#[derive(Debug)]
pub struct StereoBlock<'a> {
    input_left: &'a mut [f32],
    input_right: &'a mut [f32],
    output_left: &'a mut [f32],
    output_right: &'a mut [f32],
}

impl<'a> StereoBlock<'a> {
    /// Validate and wrap one block. The block length is taken from
    /// `input_left`; every other slice must match it.
    pub fn new(
        input_left: &'a mut [f32],
        input_right: &'a mut [f32],
        output_left: &'a mut [f32],
        output_right: &'a mut [f32],
    ) -> Result<Self> {
        let len = input_left.len();
        if len <= 1 {
            return Err(Error::InvalidBlockSize(len));
        }
        for other in [input_right.len(), output_left.len(), output_right.len()] {
            if other != len {
                return Err(Error::LengthMismatch {
                    expected: len,
                    actual: other,
                });
            }
        }
        Ok(Self {
            input_left,
            input_right,
            output_left,
            output_right,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.input_left.len()
    }

    /// Always false: a valid block holds at least two samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// `(input_left, input_right, output_left, output_right)`
    #[inline]
    pub fn split(self) -> (&'a mut [f32], &'a mut [f32], &'a mut [f32], &'a mut [f32]) {
        (
            self.input_left,
            self.input_right,
            self.output_left,
            self.output_right,
        )
    }
}
