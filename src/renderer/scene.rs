//! Scene tessellation
//!
//! Turns a simulation snapshot into one triangle list, back to front:
//! sky, mountains, ground, obstacles with shadows, then the bike.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use super::{RenderSnapshot, Renderer};

/// Tilt saturates at this many radians
pub const MAX_TILT: f32 = 0.6;
/// Vertical speed that produces a one-radian tilt
pub const TILT_SPEED: f32 = 600.0;
const WHEEL_SEGMENTS: u32 = 16;
const SHADOW_HEIGHT: f32 = 6.0;
const SHADOW_OFFSET: f32 = 5.0;

/// Bike pitch for a vertical velocity (nose up while climbing)
pub fn bike_tilt(vy: f32) -> f32 {
    (vy / TILT_SPEED).clamp(-MAX_TILT, MAX_TILT)
}

/// Renderer that collects the frame as vertices for upload
#[derive(Debug, Default)]
pub struct SceneBuilder {
    vertices: Vec<Vertex>,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertices of the last rendered frame
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Vertex data as raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.vertices.as_slice())
    }

    fn mountains(&mut self, size: Vec2, ground_y: f32) {
        // Ridge as fractions of the viewport
        let ridge = [
            (0.0, ground_y / size.y),
            (0.2, 0.5),
            (0.4, ground_y / size.y),
            (0.6, 0.55),
            (0.8, ground_y / size.y),
            (1.0, 0.6),
        ]
        .map(|(fx, fy)| Vec2::new(fx * size.x, fy * size.y));
        self.vertices
            .extend(shapes::silhouette(&ridge, size.y, colors::MOUNTAINS));
    }

    fn bike(&mut self, frame: &RenderSnapshot<'_>) {
        let player = frame.player;
        let center = player.pos + player.size / 2.0;
        let tilt = bike_tilt(player.vy);
        self.vertices
            .extend(shapes::rotated_rect(center, player.size, tilt, colors::BIKE));

        let rot = Vec2::from_angle(tilt);
        let wheel_radius = player.size.y / 3.0;
        for side in [-1.0, 1.0] {
            let offset = Vec2::new(side * player.size.x / 3.0, player.size.y / 2.0);
            self.vertices.extend(shapes::circle(
                center + rot.rotate(offset),
                wheel_radius,
                colors::WHEEL,
                WHEEL_SEGMENTS,
            ));
        }
    }
}

impl Renderer for SceneBuilder {
    fn render(&mut self, frame: &RenderSnapshot<'_>) {
        self.vertices.clear();
        let size = frame.viewport;

        self.vertices
            .extend(shapes::rect(Vec2::ZERO, size, colors::SKY));
        self.mountains(size, frame.ground_y);
        self.vertices.extend(shapes::rect(
            Vec2::new(0.0, frame.ground_y),
            Vec2::new(size.x, size.y - frame.ground_y),
            colors::GROUND,
        ));

        for obstacle in frame.obstacles {
            self.vertices
                .extend(shapes::rect(obstacle.pos, obstacle.size, colors::OBSTACLE));
            self.vertices.extend(shapes::rect(
                Vec2::new(
                    obstacle.pos.x + SHADOW_OFFSET,
                    frame.ground_y - SHADOW_HEIGHT,
                ),
                Vec2::new(obstacle.size.x, SHADOW_HEIGHT),
                colors::SHADOW,
            ));
        }

        self.bike(frame);
    }
}
