//! Color model shared between vertex data and renderers.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//!
//! Geometry types remain in `coords`.

mod color;

pub use color::Color;
