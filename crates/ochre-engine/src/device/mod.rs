//! GPU device management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue (headless; windowing
//!   and swapchain management stay with the embedding application)
//! - creating offscreen color targets the renderer can draw into

mod gpu;

pub use gpu::{Gpu, GpuInit, OffscreenTarget};
