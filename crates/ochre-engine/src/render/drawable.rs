use crate::geometry::{PrimitiveType, Vertex};

use super::{RenderCtx, RenderStates, RenderTarget, VertexRenderer};

/// Capability interface for anything that can submit itself for drawing.
///
/// Implementors hand their vertex data and topology to the pass; they are
/// not expected to transform geometry or track whether the device-level
/// draw succeeded.
pub trait Drawable {
    fn draw(&self, pass: &mut DrawPass<'_, '_>, states: &RenderStates);
}

/// A scoped drawing session: context + target + the vertex renderer.
///
/// Borrows everything it needs for the duration of a frame's recording and
/// is the single entry point drawables submit through.
pub struct DrawPass<'a, 'b> {
    ctx: &'a RenderCtx<'b>,
    target: &'a mut RenderTarget<'b>,
    renderer: &'a mut VertexRenderer,
}

impl<'a, 'b> DrawPass<'a, 'b> {
    #[inline]
    pub fn new(
        ctx: &'a RenderCtx<'b>,
        target: &'a mut RenderTarget<'b>,
        renderer: &'a mut VertexRenderer,
    ) -> Self {
        Self { ctx, target, renderer }
    }

    /// Draws a drawable with the given states.
    #[inline]
    pub fn draw(&mut self, drawable: &impl Drawable, states: &RenderStates) {
        drawable.draw(self, states);
    }

    /// Device-level submission: borrows `vertices` for this call only.
    #[inline]
    pub fn draw_vertices(
        &mut self,
        vertices: &[Vertex],
        primitive: PrimitiveType,
        states: &RenderStates,
    ) {
        self.renderer
            .draw_vertices(self.ctx, self.target, vertices, primitive, states);
    }
}
