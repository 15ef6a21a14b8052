use crate::coords::Rect;

/// Blend function applied when compositing submitted geometry.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum BlendMode {
    /// Premultiplied alpha-over.
    #[default]
    Alpha,
    /// Source added onto destination (glow/light accumulation).
    Additive,
}

/// Per-submission render state.
///
/// Positions are consumed as-is; any transform is expected to be baked into
/// the vertex data before submission.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RenderStates {
    pub blend: BlendMode,
    /// Scissor rect in logical pixels. `None` = no clipping.
    pub clip_rect: Option<Rect>,
}

impl RenderStates {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_blend(blend: BlendMode) -> Self {
        Self { blend, clip_rect: None }
    }

    #[inline]
    pub fn clipped(self, rect: Rect) -> Self {
        Self { clip_rect: Some(rect), ..self }
    }
}
