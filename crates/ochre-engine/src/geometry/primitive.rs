/// Topology tag describing how consecutive vertices combine into shapes.
///
/// This is descriptive metadata carried alongside a vertex sequence; the
/// containers never interpret it. The renderer maps it to a device topology
/// (expanding fans and quads where the device has no native equivalent).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum PrimitiveType {
    /// Each vertex is an isolated point.
    #[default]
    Points,
    /// Every pair of vertices forms an independent line segment.
    Lines,
    /// Each vertex after the first extends a connected polyline.
    LineStrip,
    /// Every triple of vertices forms an independent triangle.
    Triangles,
    /// Each vertex after the second forms a triangle with the previous two.
    TriangleStrip,
    /// Each vertex after the second forms a triangle with the first and previous vertex.
    TriangleFan,
    /// Every group of four vertices forms an independent quad.
    Quads,
}
