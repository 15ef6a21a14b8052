use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
///
/// `Rect::default()` is the zero rectangle at the origin, which doubles as
/// the canonical "bounds of nothing" value.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Builds the rectangle spanning `min` to `max` (componentwise corners).
    #[inline]
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Top-left corner.
    #[inline]
    pub fn min(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Bottom-right corner (min + size).
    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    #[inline]
    pub fn size(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.x;
        let mut y = self.y;
        let mut w = self.width;
        let mut h = self.height;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        p.x >= r.x && p.y >= r.y && p.x < (r.x + r.width) && p.y < (r.y + r.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero_rect_at_origin() {
        let r = Rect::default();
        assert_eq!(r.min(), Vec2::zero());
        assert_eq!(r.size(), Vec2::zero());
    }

    #[test]
    fn from_min_max_round_trips_corners() {
        let r = Rect::from_min_max(Vec2::new(-3.0, 2.0), Vec2::new(5.0, 7.0));
        assert_eq!(r.min(), Vec2::new(-3.0, 2.0));
        assert_eq!(r.max(), Vec2::new(5.0, 7.0));
        assert_eq!(r.size(), Vec2::new(8.0, 5.0));
    }

    #[test]
    fn normalized_flips_negative_extents() {
        let n = Rect::new(10.0, 0.0, -4.0, 5.0).normalized();
        assert_eq!(n.x, 6.0);
        assert_eq!(n.width, 4.0);

        let n = Rect::new(0.0, 10.0, 5.0, -3.0).normalized();
        assert_eq!(n.y, 7.0);
        assert_eq!(n.height, 3.0);
    }

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Vec2::new(0.0, 0.0)));
        assert!(r.contains(Vec2::new(5.0, 5.0)));
        // Max edge is excluded.
        assert!(!r.contains(Vec2::new(10.0, 10.0)));
        assert!(!r.contains(Vec2::new(-1.0, 5.0)));
    }

    #[test]
    fn is_empty_zero_or_negative_size() {
        assert!(Rect::new(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(Rect::new(0.0, 0.0, 5.0, 0.0).is_empty());
        assert!(!Rect::new(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
