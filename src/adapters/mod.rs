//! Adapters - Implementations of port interfaces.
//!
//! - `random` - RandomSource implementations (seeded, thread-local, scripted)

pub mod random;

pub use random::{ScriptedRandomSource, SeededRandomSource, ThreadRandomSource};
