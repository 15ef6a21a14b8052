use crate::coords::Vec2;
use crate::paint::Color;

/// A renderable point: position, color, texture coordinates.
///
/// Positions and texture coordinates are in logical pixels. No invariants
/// are enforced; a vertex is plain data the renderer consumes verbatim.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vertex {
    pub position: Vec2,
    pub color: Color,
    pub tex_coords: Vec2,
}

impl Vertex {
    #[inline]
    pub const fn new(position: Vec2, color: Color, tex_coords: Vec2) -> Self {
        Self { position, color, tex_coords }
    }

    /// White vertex at `position` with zero texture coordinates.
    #[inline]
    pub const fn from_position(position: Vec2) -> Self {
        Self {
            position,
            color: Color::WHITE,
            tex_coords: Vec2::zero(),
        }
    }

    /// Vertex at `position` with the given color and zero texture coordinates.
    #[inline]
    pub const fn colored(position: Vec2, color: Color) -> Self {
        Self {
            position,
            color,
            tex_coords: Vec2::zero(),
        }
    }
}

impl Default for Vertex {
    /// Position (0,0), opaque white, texture coordinates (0,0).
    #[inline]
    fn default() -> Self {
        Self::from_position(Vec2::zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_white_at_origin() {
        let v = Vertex::default();
        assert_eq!(v.position, Vec2::zero());
        assert_eq!(v.color, Color::WHITE);
        assert_eq!(v.tex_coords, Vec2::zero());
    }

    #[test]
    fn constructors_fill_remaining_fields() {
        let red = Color::from_srgb_u8(255, 0, 0, 255);

        let v = Vertex::colored(Vec2::new(1.0, 2.0), red);
        assert_eq!(v.position, Vec2::new(1.0, 2.0));
        assert_eq!(v.color, red);
        assert_eq!(v.tex_coords, Vec2::zero());

        let v = Vertex::new(Vec2::new(3.0, 4.0), red, Vec2::new(0.5, 0.5));
        assert_eq!(v.tex_coords, Vec2::new(0.5, 0.5));
    }
}
