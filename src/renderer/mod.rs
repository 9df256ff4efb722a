//! WebGPU rendering module
//!
//! Triangulates each simulation frame on the CPU and draws it in one pass;
//! the vertex shader maps pixels to clip space.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderState, ViewportUniform};
pub use vertex::Vertex;
