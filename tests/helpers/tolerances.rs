//! Tolerance constants for audio testing.
//!
//! Reordering never changes a sample value, so most comparisons are exact.
//! Only aggregate measurements summed in a different order need slack.

/// Floating point rounding errors on a single operation.
pub const FLOAT_EPSILON: f32 = 1e-6;

/// Relative tolerance for RMS and other sums over a reordered block.
pub const SUM_RELATIVE_EPSILON: f32 = 1e-4;

/// Silence threshold (~-80dB).
pub const SILENCE_THRESHOLD: f32 = 0.0001;
