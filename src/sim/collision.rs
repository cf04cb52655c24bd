//! Axis-aligned collision tests
//!
//! Everything in the world is a box, so a single overlap test covers the
//! bike against every obstacle.

use glam::Vec2;

use super::state::{Obstacle, Player};

/// Axis-aligned box given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub const fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Overlap test with closed edges: boxes that merely touch collide
    pub fn intersects(&self, other: &Aabb) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        !(other.min.x > a_max.x
            || b_max.x < self.min.x
            || other.min.y > a_max.y
            || b_max.y < self.min.y)
    }
}

/// First obstacle (in spawn order) the bike overlaps, if any
pub fn first_hit<'a>(player: &Player, obstacles: &'a [Obstacle]) -> Option<&'a Obstacle> {
    let bike = player.bounds();
    obstacles.iter().find(|ob| bike.intersects(&ob.bounds()))
}
