//! Ochre engine crate.
//!
//! A small 2D primitive-drawing core: vertex containers (`geometry`),
//! the draw-submission protocol (`render`), and the GPU context pieces
//! needed to exercise them headlessly (`device`).

pub mod coords;
pub mod device;
pub mod geometry;
pub mod logging;
pub mod paint;
pub mod render;
