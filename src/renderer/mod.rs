//! Rendering module
//!
//! The simulation only promises a data contract ([`RenderSnapshot`]); how a
//! frame is drawn is up to the [`Renderer`] the host plugs in.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use crate::sim::RenderSnapshot;
pub use scene::SceneBuilder;
pub use vertex::Vertex;

/// Draws one frame from a snapshot
pub trait Renderer {
    fn render(&mut self, frame: &RenderSnapshot<'_>);
}
