//! Rendering module
//!
//! Entities draw themselves through the [`Surface`] trait. [`MeshSurface`]
//! turns those calls into vertex lists ready for GPU upload.

pub mod draw;
pub mod mesh;
pub mod shapes;
pub mod surface;
pub mod vertex;

pub use draw::render;
pub use mesh::MeshSurface;
pub use surface::{Rgba, Surface};
pub use vertex::Vertex;
