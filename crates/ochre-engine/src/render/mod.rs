//! GPU rendering subsystem.
//!
//! The renderer consumes vertex slices tagged with a topology and issues
//! GPU commands via wgpu. It owns its own GPU resources (pipelines,
//! uniform buffer).
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - The vertex shader converts to NDC using a viewport uniform.

mod common;
mod ctx;
mod drawable;
mod states;
mod vertices;

pub use ctx::{RenderCtx, RenderTarget};
pub use drawable::{DrawPass, Drawable};
pub use states::{BlendMode, RenderStates};
pub use vertices::VertexRenderer;
