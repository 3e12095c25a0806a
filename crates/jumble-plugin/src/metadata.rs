//! Plugin descriptors
//!
//! Static descriptive data a host reads once at load time: identifiers,
//! names, realtime properties and the port table. Built as plain values; no
//! process-wide state.

use crate::port::Port;
use jumble_dsp::EffectKind;
use serde::{Deserialize, Serialize};

pub const MAKER: &str = "Tyler Hayes (tgh@pdx.edu)";
pub const COPYRIGHT: &str = "GPL";

pub const KITE_UNIQUE_ID: u64 = 4304;
pub const SCRAMBLER_UNIQUE_ID: u64 = 4305;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortDirection {
    Input,
    Output,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortKind {
    Audio,
    Control,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortDescriptor {
    pub name: String,
    pub direction: PortDirection,
    pub kind: PortKind,
    /// Range hint bits; zero for audio ports.
    pub hint: u32,
}

impl From<Port> for PortDescriptor {
    fn from(port: Port) -> Self {
        Self {
            name: port.name().to_string(),
            direction: if port.is_input() {
                PortDirection::Input
            } else {
                PortDirection::Output
            },
            kind: PortKind::Audio,
            hint: 0,
        }
    }
}

/// Realtime capabilities advertised to the host
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginProperties {
    /// Plugin has a realtime dependency (e.g. listens to a hardware device)
    pub realtime: bool,
    /// Input and output buffers must not alias
    pub inplace_broken: bool,
    /// Safe to run in a hard realtime context
    pub hard_rt_capable: bool,
}

impl PluginProperties {
    pub const REALTIME: u32 = 0x1;
    pub const INPLACE_BROKEN: u32 = 0x2;
    pub const HARD_RT_CAPABLE: u32 = 0x4;

    /// Bit mask in the conventional host encoding.
    pub fn bits(&self) -> u32 {
        let mut bits = 0;
        if self.realtime {
            bits |= Self::REALTIME;
        }
        if self.inplace_broken {
            bits |= Self::INPLACE_BROKEN;
        }
        if self.hard_rt_capable {
            bits |= Self::HARD_RT_CAPABLE;
        }
        bits
    }

    pub fn from_bits(bits: u32) -> Self {
        Self {
            realtime: bits & Self::REALTIME != 0,
            inplace_broken: bits & Self::INPLACE_BROKEN != 0,
            hard_rt_capable: bits & Self::HARD_RT_CAPABLE != 0,
        }
    }
}

/// Everything a host needs to list and instantiate one plugin variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    pub unique_id: u64,

    /// Short identifier, no whitespace
    pub label: String,

    /// Human-readable name
    pub name: String,

    pub maker: String,

    pub copyright: String,

    pub properties: PluginProperties,

    pub ports: Vec<PortDescriptor>,
}

impl PluginDescriptor {
    /// Create a descriptor with the standard stereo port table.
    pub fn new(unique_id: u64, label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            unique_id,
            name: label.clone(),
            label,
            maker: String::new(),
            copyright: "None".to_string(),
            properties: PluginProperties::default(),
            ports: Port::ALL.iter().copied().map(PortDescriptor::from).collect(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn maker(mut self, maker: impl Into<String>) -> Self {
        self.maker = maker.into();
        self
    }

    pub fn copyright(mut self, copyright: impl Into<String>) -> Self {
        self.copyright = copyright.into();
        self
    }

    pub fn properties(mut self, properties: PluginProperties) -> Self {
        self.properties = properties;
        self
    }

    /// Descriptor for one of the built-in effects.
    ///
    /// Both engines consume their input buffer, so in-place use is flagged
    /// as broken.
    pub fn for_effect(kind: EffectKind) -> Self {
        let unique_id = match kind {
            EffectKind::Kite => KITE_UNIQUE_ID,
            EffectKind::Scrambler => SCRAMBLER_UNIQUE_ID,
        };
        Self::new(unique_id, kind.label())
            .maker(MAKER)
            .copyright(COPYRIGHT)
            .properties(PluginProperties {
                realtime: false,
                inplace_broken: true,
                hard_rt_capable: true,
            })
    }

    pub fn kite() -> Self {
        Self::for_effect(EffectKind::Kite)
    }

    pub fn scrambler() -> Self {
        Self::for_effect(EffectKind::Scrambler)
    }

    pub fn effect_kind(&self) -> Option<EffectKind> {
        EffectKind::from_label(&self.label)
    }

    pub fn port_count(&self) -> usize {
        self.ports.len()
    }

    /// `(audio inputs, audio outputs)`
    pub fn audio_io(&self) -> (usize, usize) {
        let audio = self.ports.iter().filter(|p| p.kind == PortKind::Audio);
        let inputs = audio
            .clone()
            .filter(|p| p.direction == PortDirection::Input)
            .count();
        let outputs = audio
            .filter(|p| p.direction == PortDirection::Output)
            .count();
        (inputs, outputs)
    }

    pub fn control_port_count(&self) -> usize {
        self.ports
            .iter()
            .filter(|p| p.kind == PortKind::Control)
            .count()
    }
}
