//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through the `dt` handed to each step
//! - Seeded RNG only, and only for obstacle sizes
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod engine;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, first_hit};
pub use engine::{RenderSnapshot, SimulationEngine};
pub use state::{GamePhase, GameState, Obstacle, Player};
pub use tick::{Intents, StepResult, tick};
