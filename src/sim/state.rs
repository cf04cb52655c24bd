//! Game state and core simulation types
//!
//! Everything one run needs lives in [`GameState`]; the engine owns exactly
//! one of these and nothing else is shared.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::tuning::{Tuning, Viewport};

/// Top-level game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for a restart (initial, and after a crash)
    #[default]
    Idle,
    /// Active gameplay
    Running,
}

/// The player's bike
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner (+y is down)
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (negative is up)
    pub vy: f32,
    pub on_ground: bool,
}

impl Player {
    /// Bike at its start position, resting on the ground
    pub fn spawn(tuning: &Tuning, viewport: Viewport) -> Self {
        let size = Vec2::new(tuning.player_width, tuning.player_height);
        let (min_x, max_x) = tuning.player_x_bounds(viewport);
        let x = (viewport.width * tuning.player_start_fraction).clamp(min_x, max_x);
        Self {
            pos: Vec2::new(x, tuning.ground_y(viewport) - size.y),
            size,
            vy: 0.0,
            on_ground: true,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// Bottom edge y-coordinate
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Put the bike flush on the ground line and stop vertical motion
    pub fn land(&mut self, ground_y: f32) {
        self.pos.y = ground_y - self.size.y;
        self.vy = 0.0;
        self.on_ground = true;
    }
}

/// A rock to jump over
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Set once the bike has fully cleared it (bonus already granted)
    pub passed: bool,
}

impl Obstacle {
    /// Square obstacle of side `side` resting on the ground line
    pub fn resting(id: u32, x: f32, ground_y: f32, side: f32) -> Self {
        Self {
            id,
            pos: Vec2::new(x, ground_y - side),
            size: Vec2::splat(side),
            passed: false,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// Right edge x-coordinate
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }
}

/// Complete state of one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub viewport: Viewport,
    pub phase: GamePhase,
    pub player: Player,
    /// Active obstacles in spawn order (which is also left-to-right order)
    pub obstacles: Vec<Obstacle>,
    /// Scroll speed (units/s), only ever grows during a run
    pub speed: f32,
    /// Score accumulator
    pub distance: f32,
    /// Seconds until the next spawn
    pub spawn_timer: f32,
    /// Runs started since creation
    pub runs: u32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Fresh state in the Idle phase, bike resting at its start position
    pub fn new(tuning: Tuning, viewport: Viewport) -> Self {
        let player = Player::spawn(&tuning, viewport);
        Self {
            speed: tuning.initial_speed,
            tuning,
            viewport,
            phase: GamePhase::Idle,
            player,
            obstacles: Vec::new(),
            distance: 0.0,
            spawn_timer: 0.0,
            runs: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Ground line y-coordinate
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.tuning.ground_y(self.viewport)
    }

    /// Integer score shown to the player
    #[inline]
    pub fn score(&self) -> u64 {
        self.distance.max(0.0).floor() as u64
    }

    /// Re-initialize every per-run field and enter Running
    pub fn start_run(&mut self) {
        self.player = Player::spawn(&self.tuning, self.viewport);
        self.obstacles.clear();
        self.speed = self.tuning.initial_speed;
        self.distance = 0.0;
        self.spawn_timer = 0.0;
        self.runs += 1;
        self.phase = GamePhase::Running;
    }

    /// Adopt a new viewport, keeping every body on or above the new ground
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let ground_y = self.ground_y();

        for obstacle in &mut self.obstacles {
            obstacle.pos.y = ground_y - obstacle.size.y;
        }

        let (min_x, max_x) = self.tuning.player_x_bounds(viewport);
        self.player.pos.x = self.player.pos.x.clamp(min_x, max_x);
        if self.player.on_ground || self.player.bottom() >= ground_y {
            self.player.land(ground_y);
        }
    }
}
