//! Vertex/primitive geometry containers.
//!
//! Responsibilities:
//! - define the `Vertex` record and the `PrimitiveType` topology tag
//! - own mutable, ordered vertex storage (`VertexBuffer`)
//! - compute derived geometry (axis-aligned bounds) on demand
//!
//! Grouping vertices into shapes is the renderer's job at draw time,
//! driven by the topology tag; nothing here interprets connectivity.

mod primitive;
mod vertex;
mod vertex_buffer;

pub use primitive::PrimitiveType;
pub use vertex::Vertex;
pub use vertex_buffer::VertexBuffer;
