//! Random source adapters.
//!
//! Implementations of the RandomSource port.
//!
//! ## Available Adapters
//!
//! - `SeededRandomSource` - `StdRng` seeded once, reproducible
//! - `ThreadRandomSource` - thread-local generator
//! - `ScriptedRandomSource` - pre-recorded draws for tests and replays

mod rng_source;
mod scripted;

pub use rng_source::{SeededRandomSource, ThreadRandomSource};
pub use scripted::ScriptedRandomSource;
