//! Plugin enumeration
//!
//! A host walks indices from zero until it gets `None`.
//!
//! ```ignore
//! let mut index = 0;
//! while let Some(desc) = jumble_plugin::descriptor(index) {
//!     println!("{} ({})", desc.name, desc.unique_id);
//!     index += 1;
//! }
//! ```

use crate::metadata::PluginDescriptor;
use jumble_dsp::EffectKind;

/// Descriptor at `index`, or `None` past the end of the table.
pub fn descriptor(index: usize) -> Option<PluginDescriptor> {
    EffectKind::all()
        .get(index)
        .copied()
        .map(PluginDescriptor::for_effect)
}

/// Every descriptor this library exports, in index order.
pub fn descriptors() -> Vec<PluginDescriptor> {
    EffectKind::all()
        .iter()
        .copied()
        .map(PluginDescriptor::for_effect)
        .collect()
}

/// Look a descriptor up by its label.
pub fn find(label: &str) -> Option<PluginDescriptor> {
    EffectKind::from_label(label).map(PluginDescriptor::for_effect)
}
