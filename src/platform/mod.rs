//! Platform abstraction layer
//!
//! Everything between raw devices and the simulation:
//! - Input events to per-step intents
//! - Frame pacing, pause and restart

pub mod host;
pub mod input;

pub use host::GameLoop;
pub use input::{InputAdapter, Key};
