//! Moto Runner - A side-scrolling motorbike arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, spawning, collisions, scoring)
//! - `tuning`: Data-driven game balance
//! - `platform`: Input adapter and host loop
//! - `renderer`: Scene tessellation into coloured triangles
//! - `ui`: HUD text

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use sim::{GamePhase, Intents, SimulationEngine, StepResult};
pub use tuning::{Tuning, TuningError, Viewport};

/// Default gameplay constants
pub mod consts {
    /// Initial scroll speed (units/s)
    pub const INITIAL_SPEED: f32 = 200.0;
    /// Speed gained per second of riding (units/s²)
    pub const RAMP_RATE: f32 = 5.0;
    /// Distance-to-score conversion factor
    pub const DISTANCE_SCALE: f32 = 0.01;
    /// Score bonus for clearing an obstacle
    pub const PASS_BONUS: f32 = 5.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 60.0;
    pub const PLAYER_HEIGHT: f32 = 30.0;
    /// Horizontal start position as a fraction of world width
    pub const PLAYER_START_FRACTION: f32 = 0.2;
    /// Horizontal steering speed (units/s)
    pub const MOVE_SPEED: f32 = 300.0;
    pub const MARGIN_LEFT: f32 = 20.0;
    pub const MARGIN_RIGHT: f32 = 20.0;

    /// Downward acceleration (units/s², +y is down)
    pub const GRAVITY: f32 = 1500.0;
    /// Takeoff velocity (negative is up)
    pub const JUMP_VELOCITY: f32 = -600.0;

    /// Ground line as a fraction of viewport height
    pub const GROUND_FRACTION: f32 = 0.75;

    /// Obstacle spawning
    pub const OBSTACLE_SIZE_MIN: f32 = 30.0;
    pub const OBSTACLE_SIZE_RANGE: f32 = 40.0;
    /// Obstacles appear this far past the right edge
    pub const SPAWN_OFFSET: f32 = 50.0;
    /// Obstacles are dropped once their right edge is this far past the left edge
    pub const CULL_MARGIN: f32 = 50.0;
    pub const SPAWN_BASE_INTERVAL: f32 = 1.2;
    pub const SPAWN_MIN_INTERVAL: f32 = 0.3;
    pub const SPAWN_INTERVAL_DIVISOR: f32 = 1000.0;

    /// Largest step the host loop hands to the engine (seconds)
    pub const MAX_STEP: f32 = 0.05;
    /// How long a tap keeps a steering intent held (seconds)
    pub const TOUCH_HOLD: f32 = 0.15;
}
