use crate::coords::Rect;
use crate::render::{DrawPass, Drawable, RenderStates};

use super::{PrimitiveType, Vertex};

/// Growable, indexable vertex sequence plus one topology tag.
///
/// Insertion order is semantically significant: it defines connectivity for
/// strip/fan/line topologies and the index space callers address vertices by.
///
/// Performance characteristics:
/// - `push()` is amortized O(1)
/// - `clear()` keeps allocated capacity, so refilling a buffer every frame
///   does not reallocate
/// - `bounds()` is O(n) and never cached: vertices can be mutated in place
///   through index access without the container observing it, so the result
///   is valid as of the moment of the call only
///
/// Not synchronized; share across threads only behind external locking.
///
/// ```
/// use ochre_engine::coords::Vec2;
/// use ochre_engine::geometry::{PrimitiveType, Vertex, VertexBuffer};
///
/// let mut strip = VertexBuffer::with_primitive(PrimitiveType::LineStrip, 4);
/// strip[0].position = Vec2::new(10.0, 0.0);
/// strip[1].position = Vec2::new(20.0, 0.0);
/// strip[2].position = Vec2::new(30.0, 5.0);
/// strip[3].position = Vec2::new(40.0, 2.0);
/// assert_eq!(strip.bounds().min(), Vec2::new(10.0, 0.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexBuffer {
    vertices: Vec<Vertex>,
    primitive: PrimitiveType,
}

impl VertexBuffer {
    /// Creates an empty buffer tagged `PrimitiveType::Points`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a buffer holding `count` default vertices tagged `primitive`.
    pub fn with_primitive(primitive: PrimitiveType, count: usize) -> Self {
        Self {
            vertices: vec![Vertex::default(); count],
            primitive,
        }
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Vertex> {
        self.vertices.get_mut(index)
    }

    /// Vertex at `index` without a bounds check.
    ///
    /// # Safety
    /// `index` must be `< self.len()`; callers are expected to have validated
    /// it themselves. This is the hot-path variant of indexing; prefer the
    /// `Index` impl or [`get`](Self::get) everywhere else.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &Vertex {
        unsafe { self.vertices.get_unchecked(index) }
    }

    /// Mutable vertex at `index` without a bounds check.
    ///
    /// # Safety
    /// `index` must be `< self.len()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut Vertex {
        unsafe { self.vertices.get_unchecked_mut(index) }
    }

    /// All vertices in insertion order.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn vertices_mut(&mut self) -> &mut [Vertex] {
        &mut self.vertices
    }

    /// Removes all vertices, keeping allocated capacity for reuse.
    ///
    /// The topology tag is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Grows with default vertices or truncates to the first `count`.
    ///
    /// Existing vertices below `count` keep their values and indices.
    #[inline]
    pub fn resize(&mut self, count: usize) {
        self.vertices.resize(count, Vertex::default());
    }

    /// Appends a vertex at the end.
    #[inline]
    pub fn push(&mut self, vertex: Vertex) {
        self.vertices.push(vertex);
    }

    /// Current topology tag.
    #[inline]
    pub fn primitive_type(&self) -> PrimitiveType {
        self.primitive
    }

    /// Replaces the topology tag. Vertex data is untouched.
    #[inline]
    pub fn set_primitive_type(&mut self, primitive: PrimitiveType) {
        self.primitive = primitive;
    }

    /// Smallest axis-aligned rectangle containing every vertex position.
    ///
    /// Recomputed on every call; an empty buffer yields the zero rectangle
    /// at the origin.
    pub fn bounds(&self) -> Rect {
        let Some(first) = self.vertices.first() else {
            return Rect::default();
        };

        let mut min = first.position;
        let mut max = first.position;
        for v in &self.vertices[1..] {
            min = min.min(v.position);
            max = max.max(v.position);
        }

        Rect::from_min_max(min, max)
    }
}

impl core::ops::Index<usize> for VertexBuffer {
    type Output = Vertex;

    /// Panics if `index >= self.len()`; validate with [`VertexBuffer::len`] first.
    #[inline]
    fn index(&self, index: usize) -> &Vertex {
        &self.vertices[index]
    }
}

impl core::ops::IndexMut<usize> for VertexBuffer {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Vertex {
        &mut self.vertices[index]
    }
}

impl Extend<Vertex> for VertexBuffer {
    #[inline]
    fn extend<I: IntoIterator<Item = Vertex>>(&mut self, iter: I) {
        self.vertices.extend(iter);
    }
}

impl FromIterator<Vertex> for VertexBuffer {
    /// Collects into a buffer tagged `PrimitiveType::Points`.
    fn from_iter<I: IntoIterator<Item = Vertex>>(iter: I) -> Self {
        Self {
            vertices: iter.into_iter().collect(),
            primitive: PrimitiveType::default(),
        }
    }
}

impl Drawable for VertexBuffer {
    /// Borrows the vertex slice and topology tag for the duration of the
    /// submission; the buffer is not transformed or otherwise touched.
    fn draw(&self, pass: &mut DrawPass<'_, '_>, states: &RenderStates) {
        pass.draw_vertices(&self.vertices, self.primitive, states);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn v(x: f32, y: f32) -> Vertex {
        Vertex::from_position(Vec2::new(x, y))
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_is_empty_points() {
        let buf = VertexBuffer::new();
        assert_eq!(buf.len(), 0);
        assert!(buf.is_empty());
        assert_eq!(buf.primitive_type(), PrimitiveType::Points);
    }

    #[test]
    fn with_primitive_presizes_with_defaults() {
        let buf = VertexBuffer::with_primitive(PrimitiveType::Triangles, 6);
        assert_eq!(buf.len(), 6);
        assert_eq!(buf.primitive_type(), PrimitiveType::Triangles);
        assert!(buf.vertices().iter().all(|v| *v == Vertex::default()));
    }

    #[test]
    fn with_primitive_zero_count() {
        let buf = VertexBuffer::with_primitive(PrimitiveType::Quads, 0);
        assert!(buf.is_empty());
        assert_eq!(buf.primitive_type(), PrimitiveType::Quads);
    }

    // ── count consistency ─────────────────────────────────────────────────

    #[test]
    fn len_tracks_push_resize_clear() {
        let mut buf = VertexBuffer::new();
        buf.push(v(1.0, 1.0));
        buf.push(v(2.0, 2.0));
        assert_eq!(buf.len(), 2);

        buf.resize(5);
        assert_eq!(buf.len(), 5);

        buf.resize(1);
        assert_eq!(buf.len(), 1);

        buf.clear();
        assert_eq!(buf.len(), 0);

        buf.push(v(3.0, 3.0));
        assert_eq!(buf.len(), 1);
    }

    // ── resize ────────────────────────────────────────────────────────────

    #[test]
    fn resize_grow_preserves_prefix_and_defaults_rest() {
        let mut buf = VertexBuffer::new();
        buf.push(v(1.0, 2.0));
        buf.push(v(3.0, 4.0));

        buf.resize(5);
        assert_eq!(buf[0], v(1.0, 2.0));
        assert_eq!(buf[1], v(3.0, 4.0));
        for i in 2..5 {
            assert_eq!(buf[i], Vertex::default());
        }
    }

    #[test]
    fn resize_shrink_keeps_leading_vertices() {
        let mut buf: VertexBuffer =
            [v(0.0, 0.0), v(1.0, 1.0), v(2.0, 2.0), v(3.0, 3.0)].into_iter().collect();

        buf.resize(2);
        assert_eq!(buf.len(), 2);
        assert_eq!(buf[0], v(0.0, 0.0));
        assert_eq!(buf[1], v(1.0, 1.0));
    }

    #[test]
    fn resize_same_size_is_noop() {
        let mut buf = VertexBuffer::with_primitive(PrimitiveType::Lines, 3);
        buf[1] = v(9.0, 9.0);
        buf.resize(3);
        assert_eq!(buf.len(), 3);
        assert_eq!(buf[1], v(9.0, 9.0));
    }

    // ── clear ─────────────────────────────────────────────────────────────

    #[test]
    fn clear_keeps_primitive_type_and_restarts_indices() {
        let mut buf = VertexBuffer::with_primitive(PrimitiveType::TriangleFan, 8);
        buf.clear();
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.primitive_type(), PrimitiveType::TriangleFan);

        buf.push(v(1.0, 0.0));
        buf.push(v(2.0, 0.0));
        assert_eq!(buf[0], v(1.0, 0.0));
        assert_eq!(buf[1], v(2.0, 0.0));
    }

    // ── access ────────────────────────────────────────────────────────────

    #[test]
    fn get_is_bounds_checked() {
        let mut buf = VertexBuffer::with_primitive(PrimitiveType::Points, 2);
        assert!(buf.get(1).is_some());
        assert!(buf.get(2).is_none());
        assert!(buf.get_mut(2).is_none());
    }

    #[test]
    fn get_unchecked_reads_valid_index() {
        let mut buf = VertexBuffer::new();
        buf.push(v(7.0, 8.0));
        // Index validated against len() above.
        assert_eq!(unsafe { *buf.get_unchecked(0) }, v(7.0, 8.0));
        unsafe { buf.get_unchecked_mut(0) }.position.x = 9.0;
        assert_eq!(buf[0].position, Vec2::new(9.0, 8.0));
    }

    #[test]
    fn index_mut_writes_through() {
        let mut buf = VertexBuffer::with_primitive(PrimitiveType::Lines, 2);
        buf[0].color = Color::from_srgb_u8(255, 0, 0, 255);
        assert_eq!(buf[0].color, Color::from_srgb_u8(255, 0, 0, 255));
    }

    #[test]
    fn set_primitive_type_leaves_vertices_alone() {
        let mut buf = VertexBuffer::new();
        buf.push(v(1.0, 1.0));
        buf.set_primitive_type(PrimitiveType::TriangleStrip);
        assert_eq!(buf.primitive_type(), PrimitiveType::TriangleStrip);
        assert_eq!(buf[0], v(1.0, 1.0));
    }

    // ── bounds ────────────────────────────────────────────────────────────

    #[test]
    fn bounds_of_empty_buffer_is_zero_rect() {
        assert_eq!(VertexBuffer::new().bounds(), Rect::default());
    }

    #[test]
    fn bounds_single_vertex_is_degenerate_at_position() {
        let mut buf = VertexBuffer::new();
        buf.push(v(5.0, -2.0));
        let b = buf.bounds();
        assert_eq!(b.min(), Vec2::new(5.0, -2.0));
        assert_eq!(b.size(), Vec2::zero());
    }

    #[test]
    fn bounds_spans_min_and_max_positions() {
        let mut buf = VertexBuffer::new();
        buf.push(v(0.0, 0.0));
        buf.push(v(5.0, 5.0));
        buf.push(v(-3.0, 2.0));

        let b = buf.bounds();
        assert_eq!(b.min(), Vec2::new(-3.0, 0.0));
        assert_eq!(b.size(), Vec2::new(8.0, 5.0));
    }

    #[test]
    fn bounds_reflects_in_place_mutation() {
        let mut buf = VertexBuffer::with_primitive(PrimitiveType::Points, 2);
        buf[0].position = Vec2::new(1.0, 1.0);
        buf[1].position = Vec2::new(2.0, 2.0);
        assert_eq!(buf.bounds().max(), Vec2::new(2.0, 2.0));

        // Mutation through index access must show up in the next call.
        buf[1].position = Vec2::new(100.0, -50.0);
        let b = buf.bounds();
        assert_eq!(b.min(), Vec2::new(1.0, -50.0));
        assert_eq!(b.max(), Vec2::new(100.0, 1.0));
    }

    #[test]
    fn line_strip_scenario() {
        let mut strip = VertexBuffer::with_primitive(PrimitiveType::LineStrip, 4);
        strip[0].position = Vec2::new(10.0, 0.0);
        strip[1].position = Vec2::new(20.0, 0.0);
        strip[2].position = Vec2::new(30.0, 5.0);
        strip[3].position = Vec2::new(40.0, 2.0);

        assert_eq!(strip.len(), 4);
        assert_eq!(strip.primitive_type(), PrimitiveType::LineStrip);

        let b = strip.bounds();
        assert_eq!(b.min(), Vec2::new(10.0, 0.0));
        assert_eq!(b.size(), Vec2::new(30.0, 5.0));
    }

    // ── iterator impls ────────────────────────────────────────────────────

    #[test]
    fn extend_appends_in_order() {
        let mut buf = VertexBuffer::new();
        buf.push(v(0.0, 0.0));
        buf.extend([v(1.0, 0.0), v(2.0, 0.0)]);
        assert_eq!(buf.len(), 3);
        assert_eq!(buf[2], v(2.0, 0.0));
    }

    #[test]
    fn from_iterator_defaults_to_points() {
        let buf: VertexBuffer = (0..3).map(|i| v(i as f32, 0.0)).collect();
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.primitive_type(), PrimitiveType::Points);
    }
}
