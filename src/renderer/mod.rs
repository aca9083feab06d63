//! WebGPU chart rendering module
//!
//! Rebuilds a triangle list from the trajectory log every frame and draws
//! it through a single color pipeline.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::frame_vertices;
