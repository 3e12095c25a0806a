//! RT-safe sample-reordering engines.
//!
//! - [`KiteEngine`]: splits each block into variable-length sub-blocks,
//!   reverses some of them, and concatenates them into the output.
//! - [`ScramblerEngine`]: permutes every sample of the block.
//!
//! Both engines process one stereo block per call, keep no audio between
//! calls, and never allocate. Left and right samples always move together.

mod processor;
pub use processor::BlockProcessor;

mod planner;
pub use planner::{BlockDescriptor, SegmentPlanner};

mod reverse;
pub use reverse::{reverse_pair, reverse_range};

mod kite;
pub use kite::KiteEngine;

mod scrambler;
pub use scrambler::ScramblerEngine;

mod effect;
pub use effect::{Effect, EffectKind};

pub use jumble_core::{Bookkeeping, Error, Result};
