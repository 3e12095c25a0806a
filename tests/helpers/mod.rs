//! Test helpers and fixtures for Jumble integration tests
//!
//! Signals use distinct values per sample wherever possible so that a
//! reordered output can be traced back to the input positions it came from.
//!
//! ## Tolerance Levels
//!
//! Use the appropriate tolerance from [`tolerances`] module:
//! - `FLOAT_EPSILON` (1e-6): single-value comparisons
//! - `SUM_RELATIVE_EPSILON` (1e-4): sums over reordered blocks (RMS)
//! - `SILENCE_THRESHOLD` (0.0001): silence detection (-80dB)

#![allow(dead_code)]

pub mod tolerances;

use jumble::prelude::*;

/// Default test sample rate (matches common hardware)
pub const TEST_SAMPLE_RATE: u32 = 48000;

/// Tiny sample rate: sub-blocks of a handful of samples.
pub const TINY_SAMPLE_RATE: u32 = 8;

/// Marks output samples the engine never wrote.
pub const SENTINEL: f32 = -12345.0;

/// Offset between left and right staircase values.
pub const RIGHT_OFFSET: f32 = 1_000_000.0;

/// Install a test-writer tracing subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// `0, 1, 2, ...` as f32; each value names its own input index.
pub fn generate_staircase(num_samples: usize) -> Vec<f32> {
    (0..num_samples).map(|i| i as f32).collect()
}

/// Left staircase plus a right channel offset by [`RIGHT_OFFSET`].
pub fn stereo_staircase(num_samples: usize) -> (Vec<f32>, Vec<f32>) {
    let left = generate_staircase(num_samples);
    let right = left.iter().map(|s| s + RIGHT_OFFSET).collect();
    (left, right)
}

/// Generate a sine wave at the given frequency.
pub fn generate_sine(frequency: f64, sample_rate: u32, num_samples: usize) -> Vec<f32> {
    (0..num_samples)
        .map(|i| {
            let t = i as f64 / sample_rate as f64;
            (2.0 * std::f64::consts::PI * frequency * t).sin() as f32
        })
        .collect()
}

/// Generate white noise (random samples in -1..1).
pub fn generate_noise(num_samples: usize, seed: u64) -> Vec<f32> {
    // Simple LCG for reproducible "random" noise
    let mut rng = seed;
    (0..num_samples)
        .map(|_| {
            rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((rng >> 32) as f32 / u32::MAX as f32) * 2.0 - 1.0
        })
        .collect()
}

/// Output buffer pre-filled with [`SENTINEL`].
pub fn sentinel_buffer(num_samples: usize) -> Vec<f32> {
    vec![SENTINEL; num_samples]
}

/// Calculate RMS of a signal.
pub fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = samples.iter().map(|&s| (s as f64) * (s as f64)).sum();
    (sum_sq / samples.len() as f64).sqrt() as f32
}

/// Calculate peak amplitude of a signal.
pub fn peak(samples: &[f32]) -> f32 {
    samples
        .iter()
        .map(|s| s.abs())
        .fold(0.0_f32, |a, b| a.max(b))
}

/// True when `output` holds exactly the values of `input`, in any order.
pub fn is_permutation_of(output: &[f32], input: &[f32]) -> bool {
    if output.len() != input.len() {
        return false;
    }
    let mut a = output.to_vec();
    let mut b = input.to_vec();
    a.sort_by(f32::total_cmp);
    b.sort_by(f32::total_cmp);
    a == b
}

/// Assert every output sample was written.
pub fn assert_fully_written(samples: &[f32]) {
    if let Some(index) = samples.iter().position(|&s| s == SENTINEL) {
        panic!("Output sample {} was never written", index);
    }
}

/// Assert the right channel moved with the left, given staircase input.
pub fn assert_stereo_coherent(left: &[f32], right: &[f32]) {
    assert_eq!(left.len(), right.len());
    for (i, (l, r)) in left.iter().zip(right).enumerate() {
        assert_eq!(
            *r,
            *l + RIGHT_OFFSET,
            "Channels diverged at output sample {}",
            i
        );
    }
}

/// One block of stereo input and sentinel-filled output.
pub struct StereoBuffers {
    pub input_left: Vec<f32>,
    pub input_right: Vec<f32>,
    pub output_left: Vec<f32>,
    pub output_right: Vec<f32>,
}

impl StereoBuffers {
    pub fn new(input_left: Vec<f32>, input_right: Vec<f32>) -> Self {
        let len = input_left.len();
        Self {
            input_left,
            input_right,
            output_left: sentinel_buffer(len),
            output_right: sentinel_buffer(len),
        }
    }

    pub fn staircase(num_samples: usize) -> Self {
        let (left, right) = stereo_staircase(num_samples);
        Self::new(left, right)
    }

    pub fn process<P: BlockProcessor>(&mut self, processor: &mut P) -> Result<()> {
        processor.process_slices(
            &mut self.input_left,
            &mut self.input_right,
            &mut self.output_left,
            &mut self.output_right,
        )?;
        Ok(())
    }

    /// Bind all four buffers to an instance's ports.
    pub fn connect(&mut self, instance: &mut PluginInstance) {
        let pointers = [
            self.input_left.as_mut_ptr(),
            self.input_right.as_mut_ptr(),
            self.output_left.as_mut_ptr(),
            self.output_right.as_mut_ptr(),
        ];
        for (port, data) in pointers.into_iter().enumerate() {
            instance
                .connect_port(port, data)
                .expect("Failed to connect port");
        }
    }

    pub fn outputs_untouched(&self) -> bool {
        self.output_left
            .iter()
            .chain(&self.output_right)
            .all(|&s| s == SENTINEL)
    }
}
