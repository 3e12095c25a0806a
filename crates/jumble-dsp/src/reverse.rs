//! In-place reversal of inclusive sample ranges.

/// Reverse `buffer[start..=end]` in place.
///
/// Empty or inverted ranges (`start >= end`) are left untouched.
#[inline]
pub fn reverse_range(buffer: &mut [f32], start: usize, end: usize) {
    if start < end {
        buffer[start..=end].reverse();
    }
}

/// Reverse the same inclusive range in both channels so the stereo pair
/// stays aligned.
#[inline]
pub fn reverse_pair(left: &mut [f32], right: &mut [f32], start: usize, end: usize) {
    reverse_range(left, start, end);
    reverse_range(right, start, end);
}
