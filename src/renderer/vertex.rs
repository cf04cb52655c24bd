//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Byte stride of one vertex in a buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Colors for game elements
pub mod colors {
    pub const SKY: [f32; 4] = [0.53, 0.81, 0.92, 1.0];
    pub const MOUNTAINS: [f32; 4] = [0.18, 0.49, 0.2, 1.0]; // #2e7d32
    pub const GROUND: [f32; 4] = [0.29, 0.18, 0.04, 1.0]; // #4a2e0a
    pub const OBSTACLE: [f32; 4] = [0.36, 0.25, 0.22, 1.0]; // #5d4037
    pub const SHADOW: [f32; 4] = [0.0, 0.0, 0.0, 0.2];
    pub const BIKE: [f32; 4] = [1.0, 0.92, 0.23, 1.0]; // #ffeb3b
    pub const WHEEL: [f32; 4] = [0.13, 0.13, 0.13, 1.0]; // #212121
}
