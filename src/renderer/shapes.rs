//! Shape generation for 2D primitives
//!
//! Every shape comes out as a triangle list.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for an axis-aligned rectangle (top-left + size)
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let max = min + size;
    quad(
        [
            min,
            Vec2::new(max.x, min.y),
            max,
            Vec2::new(min.x, max.y),
        ],
        color,
    )
}

/// Generate vertices for a rectangle rotated by `angle` radians around its center
pub fn rotated_rect(center: Vec2, size: Vec2, angle: f32, color: [f32; 4]) -> Vec<Vertex> {
    let half = size / 2.0;
    let rot = Vec2::from_angle(angle);
    let corners = [
        Vec2::new(-half.x, -half.y),
        Vec2::new(half.x, -half.y),
        Vec2::new(half.x, half.y),
        Vec2::new(-half.x, half.y),
    ]
    .map(|c| center + rot.rotate(c));
    quad(corners, color)
}

/// Two triangles over four corners given in winding order
pub fn quad(corners: [Vec2; 4], color: [f32; 4]) -> Vec<Vertex> {
    let [a, b, c, d] = corners;
    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(d.x, d.y, color),
        Vertex::new(a.x, a.y, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Fill the area below a ridge line down to `bottom`.
///
/// `ridge` must be sorted by x; each span becomes one trapezoid, so the
/// silhouette may be concave.
pub fn silhouette(ridge: &[Vec2], bottom: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(ridge.len().saturating_sub(1) * 6);
    for pair in ridge.windows(2) {
        let (p1, p2) = (pair[0], pair[1]);
        vertices.extend(quad(
            [p1, p2, Vec2::new(p2.x, bottom), Vec2::new(p1.x, bottom)],
            color,
        ));
    }
    vertices
}
