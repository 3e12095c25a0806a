//! Plugin instance lifecycle: instantiate, bind ports, run blocks, clean up.

use std::ptr::NonNull;

use jumble_core::{EngineConfig, StereoBlock, MAX_SAMPLE_RATE};
use jumble_dsp::{BlockProcessor, Effect, EffectKind};

use crate::error::{PluginError, Result};
use crate::metadata::PluginDescriptor;
use crate::port::{Port, PORT_COUNT};

/// One running effect, owned by the host.
///
/// The instance owns only its engine state. Port buffers belong to the host
/// and are never freed here.
#[derive(Debug)]
pub struct PluginInstance {
    effect: Effect,
    sample_rate: u32,
    ports: [Option<NonNull<f32>>; PORT_COUNT],
}

impl PluginInstance {
    /// Create an instance for `descriptor` with a clock-seeded generator.
    pub fn instantiate(descriptor: &PluginDescriptor, sample_rate: u64) -> Result<Box<Self>> {
        let sample_rate = checked_sample_rate(sample_rate)?;
        Self::with_config(descriptor, &EngineConfig::new(sample_rate))
    }

    /// Create an instance with explicit seeding and bookkeeping.
    pub fn with_config(descriptor: &PluginDescriptor, config: &EngineConfig) -> Result<Box<Self>> {
        checked_sample_rate(config.sample_rate.into())?;
        let kind = descriptor
            .effect_kind()
            .ok_or_else(|| PluginError::UnknownPlugin(descriptor.label.clone()))?;
        let effect = Effect::from_config(kind, config)?;

        tracing::debug!("Instantiated {} at {} Hz", kind, config.sample_rate);

        Ok(Box::new(Self {
            effect,
            sample_rate: config.sample_rate,
            ports: [None; PORT_COUNT],
        }))
    }

    pub fn kind(&self) -> EffectKind {
        self.effect.kind()
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Bind a port to a host buffer. A null pointer disconnects the port.
    ///
    /// Storing the pointer is safe; the pointer is only dereferenced in
    /// [`PluginInstance::run`].
    pub fn connect_port(&mut self, port: usize, data: *mut f32) -> Result<()> {
        let port = Port::try_from(port)?;
        self.ports[port.index()] = NonNull::new(data);
        Ok(())
    }

    pub fn is_connected(&self, port: Port) -> bool {
        self.ports[port.index()].is_some()
    }

    /// Process one block through the connected port buffers.
    ///
    /// Blocks that cannot be processed (fewer than two samples, an unbound
    /// port, overlapping buffers) are skipped with a logged warning and the
    /// output buffers are left untouched.
    ///
    /// # Safety
    ///
    /// Every connected pointer must be valid for reads and writes of
    /// `sample_count` `f32` values for the duration of the call, and nothing
    /// else may access those buffers while it runs.
    pub unsafe fn run(&mut self, sample_count: usize) {
        if let Err(e) = self.try_run(sample_count) {
            tracing::warn!("{}; plugin not executed", e);
        }
    }

    unsafe fn try_run(&mut self, sample_count: usize) -> Result<()> {
        if sample_count <= 1 {
            return Err(jumble_core::Error::InvalidBlockSize(sample_count).into());
        }

        let [input_left, input_right, output_left, output_right] = self.bound_ports()?;
        check_disjoint(
            &[input_left, input_right, output_left, output_right],
            sample_count,
        )?;

        let block = StereoBlock::new(
            std::slice::from_raw_parts_mut(input_left.as_ptr(), sample_count),
            std::slice::from_raw_parts_mut(input_right.as_ptr(), sample_count),
            std::slice::from_raw_parts_mut(output_left.as_ptr(), sample_count),
            std::slice::from_raw_parts_mut(output_right.as_ptr(), sample_count),
        )?;
        self.effect.process(block);
        Ok(())
    }

    fn bound_ports(&self) -> Result<[NonNull<f32>; PORT_COUNT]> {
        let mut bound = [NonNull::dangling(); PORT_COUNT];
        for port in Port::ALL {
            bound[port.index()] = self.ports[port.index()]
                .ok_or(PluginError::PortNotConnected(port))?;
        }
        Ok(bound)
    }

    /// Process one block from borrowed slices, bypassing port binding.
    pub fn process(
        &mut self,
        input_left: &mut [f32],
        input_right: &mut [f32],
        output_left: &mut [f32],
        output_right: &mut [f32],
    ) -> Result<()> {
        self.effect
            .process_slices(input_left, input_right, output_left, output_right)?;
        Ok(())
    }

    /// Release the instance. Host buffers are not touched.
    pub fn cleanup(self: Box<Self>) {
        tracing::debug!("Cleaning up {} instance", self.kind());
        drop(self);
    }
}

fn checked_sample_rate(sample_rate: u64) -> Result<u32> {
    u32::try_from(sample_rate)
        .ok()
        .filter(|rate| (1..=MAX_SAMPLE_RATE).contains(rate))
        .ok_or(PluginError::InvalidSampleRate(sample_rate))
}

fn check_disjoint(buffers: &[NonNull<f32>], len: usize) -> Result<()> {
    let bytes = len * std::mem::size_of::<f32>();
    for (i, a) in buffers.iter().enumerate() {
        let a_start = a.as_ptr() as usize;
        for b in &buffers[i + 1..] {
            let b_start = b.as_ptr() as usize;
            if a_start < b_start + bytes && b_start < a_start + bytes {
                return Err(PluginError::InPlaceUnsupported);
            }
        }
    }
    Ok(())
}
