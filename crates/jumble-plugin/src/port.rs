//! The four audio ports every plugin variant exposes.

use crate::error::PluginError;
use serde::{Deserialize, Serialize};

pub const PORT_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(usize)]
pub enum Port {
    InputLeft = 0,
    InputRight = 1,
    OutputLeft = 2,
    OutputRight = 3,
}

impl Port {
    pub const ALL: [Port; PORT_COUNT] = [
        Port::InputLeft,
        Port::InputRight,
        Port::OutputLeft,
        Port::OutputRight,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Port::InputLeft => "Input Left Channel",
            Port::InputRight => "Input Right Channel",
            Port::OutputLeft => "Output Left Channel",
            Port::OutputRight => "Output Right Channel",
        }
    }

    pub fn is_input(self) -> bool {
        matches!(self, Port::InputLeft | Port::InputRight)
    }
}

impl TryFrom<usize> for Port {
    type Error = PluginError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Port::ALL
            .get(index)
            .copied()
            .ok_or(PluginError::UnknownPort(index))
    }
}

impl std::fmt::Display for Port {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
