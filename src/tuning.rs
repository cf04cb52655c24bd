//! Gameplay tuning
//!
//! Every balance constant the simulation reads lives here so a run can be
//! re-tuned from a JSON file without touching code. Missing fields fall back
//! to the defaults in [`crate::consts`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a tuning file is rejected
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must be negative (got {value})")]
    NotNegative { field: &'static str, value: f32 },
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("spawn_min_interval ({min}) exceeds spawn_base_interval ({base})")]
    IntervalFloorAboveBase { min: f32, base: f32 },
    #[error("ground_fraction must be within (0, 1] (got {0})")]
    GroundOutOfRange(f32),
    #[error("player_start_fraction must be within [0, 1] (got {0})")]
    StartOutOfRange(f32),
}

/// Visible world dimensions (world units)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

/// Gameplay balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Difficulty & scoring ===
    pub initial_speed: f32,
    pub ramp_rate: f32,
    pub distance_scale: f32,
    pub pass_bonus: f32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    pub player_start_fraction: f32,
    pub move_speed: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub gravity: f32,
    pub jump_velocity: f32,

    // === World ===
    pub ground_fraction: f32,

    // === Obstacles ===
    pub obstacle_size_min: f32,
    pub obstacle_size_range: f32,
    pub spawn_offset: f32,
    pub cull_margin: f32,
    pub spawn_base_interval: f32,
    pub spawn_min_interval: f32,
    pub spawn_interval_divisor: f32,

    // === Host ===
    /// Upper bound on a single simulation step (seconds)
    pub max_step: f32,
    /// Touch steering hold time (seconds)
    pub touch_hold: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            initial_speed: INITIAL_SPEED,
            ramp_rate: RAMP_RATE,
            distance_scale: DISTANCE_SCALE,
            pass_bonus: PASS_BONUS,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_start_fraction: PLAYER_START_FRACTION,
            move_speed: MOVE_SPEED,
            margin_left: MARGIN_LEFT,
            margin_right: MARGIN_RIGHT,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,

            ground_fraction: GROUND_FRACTION,

            obstacle_size_min: OBSTACLE_SIZE_MIN,
            obstacle_size_range: OBSTACLE_SIZE_RANGE,
            spawn_offset: SPAWN_OFFSET,
            cull_margin: CULL_MARGIN,
            spawn_base_interval: SPAWN_BASE_INTERVAL,
            spawn_min_interval: SPAWN_MIN_INTERVAL,
            spawn_interval_divisor: SPAWN_INTERVAL_DIVISOR,

            max_step: MAX_STEP,
            touch_hold: TOUCH_HOLD,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Parse a JSON tuning document, falling back to defaults on any error
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => {
                log::info!("Loaded tuning");
                tuning
            }
            Err(e) => {
                log::warn!("Rejected tuning ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the parameters describe a playable game
    pub fn validate(&self) -> Result<(), TuningError> {
        let all = [
            ("initial_speed", self.initial_speed),
            ("ramp_rate", self.ramp_rate),
            ("distance_scale", self.distance_scale),
            ("pass_bonus", self.pass_bonus),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("player_start_fraction", self.player_start_fraction),
            ("move_speed", self.move_speed),
            ("margin_left", self.margin_left),
            ("margin_right", self.margin_right),
            ("gravity", self.gravity),
            ("jump_velocity", self.jump_velocity),
            ("ground_fraction", self.ground_fraction),
            ("obstacle_size_min", self.obstacle_size_min),
            ("obstacle_size_range", self.obstacle_size_range),
            ("spawn_offset", self.spawn_offset),
            ("cull_margin", self.cull_margin),
            ("spawn_base_interval", self.spawn_base_interval),
            ("spawn_min_interval", self.spawn_min_interval),
            ("spawn_interval_divisor", self.spawn_interval_divisor),
            ("max_step", self.max_step),
            ("touch_hold", self.touch_hold),
        ];
        if let Some((field, _)) = all.into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(TuningError::NotFinite { field });
        }

        let positive = [
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("gravity", self.gravity),
            ("obstacle_size_min", self.obstacle_size_min),
            ("spawn_min_interval", self.spawn_min_interval),
            ("spawn_interval_divisor", self.spawn_interval_divisor),
            ("max_step", self.max_step),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(TuningError::NotPositive { field, value });
            }
        }

        let non_negative = [
            ("initial_speed", self.initial_speed),
            ("ramp_rate", self.ramp_rate),
            ("distance_scale", self.distance_scale),
            ("pass_bonus", self.pass_bonus),
            ("move_speed", self.move_speed),
            ("margin_left", self.margin_left),
            ("margin_right", self.margin_right),
            ("obstacle_size_range", self.obstacle_size_range),
            ("spawn_offset", self.spawn_offset),
            ("cull_margin", self.cull_margin),
            ("touch_hold", self.touch_hold),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(TuningError::Negative { field, value });
            }
        }

        if self.jump_velocity >= 0.0 {
            return Err(TuningError::NotNegative {
                field: "jump_velocity",
                value: self.jump_velocity,
            });
        }
        if self.spawn_min_interval > self.spawn_base_interval {
            return Err(TuningError::IntervalFloorAboveBase {
                min: self.spawn_min_interval,
                base: self.spawn_base_interval,
            });
        }
        if self.ground_fraction <= 0.0 || self.ground_fraction > 1.0 {
            return Err(TuningError::GroundOutOfRange(self.ground_fraction));
        }
        if !(0.0..=1.0).contains(&self.player_start_fraction) {
            return Err(TuningError::StartOutOfRange(self.player_start_fraction));
        }
        Ok(())
    }

    /// Ground line y-coordinate for a viewport
    pub fn ground_y(&self, viewport: Viewport) -> f32 {
        viewport.height * self.ground_fraction
    }

    /// Horizontal bounds for the player's left edge.
    ///
    /// On a viewport narrower than the margins plus the bike the range
    /// collapses to `margin_left`.
    pub fn player_x_bounds(&self, viewport: Viewport) -> (f32, f32) {
        let min = self.margin_left;
        let max = (viewport.width - self.margin_right - self.player_width).max(min);
        (min, max)
    }

    /// Countdown until the next spawn at the given speed
    pub fn spawn_interval(&self, speed: f32) -> f32 {
        (self.spawn_base_interval - speed / self.spawn_interval_divisor)
            .max(self.spawn_min_interval)
    }
}
