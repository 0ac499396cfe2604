//! WebGPU rendering module
//!
//! Everything is flat-colored triangles built on the CPU each frame.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_scene;
pub use vertex::Vertex;
