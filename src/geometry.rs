//! 2D geometry primitives used by the quad-tree.
//!
//! Vectors come from [`glam`]; this module adds the axis-aligned rectangle the
//! tree partitions and a line segment type usable as a query probe.

use glam::Vec2;

const EPSILON: f32 = 0.001;

/// Axis-aligned rectangle: `min` is the bottom-left corner, `max` the top-right.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    /// Bottom-left corner
    pub min: Vec2,
    /// Top-right corner
    pub max: Vec2,
}

impl Rect {
    /// Creates a rectangle from two opposite corners in any order.
    ///
    /// # Example
    /// ```
    /// use flatquad::geometry::Rect;
    /// use glam::Vec2;
    /// let r = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(0.0, 5.0));
    /// assert_eq!(r.min, Vec2::new(0.0, 0.0));
    /// assert_eq!(r.max, Vec2::new(10.0, 5.0));
    /// ```
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { min: a.min(b), max: a.max(b) }
    }

    /// Creates a rectangle from its bottom-left corner and size.
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self::new(origin, origin + size)
    }

    /// Square of half-width `half` centered at `center`.
    pub fn from_center(center: Vec2, half: f32) -> Self {
        Self::new(center - Vec2::splat(half), center + Vec2::splat(half))
    }

    /// Width and height.
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Midpoint of the rectangle.
    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Top-left corner.
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.min.x, self.max.y)
    }

    /// Bottom-right corner.
    pub fn bottom_right(&self) -> Vec2 {
        Vec2::new(self.max.x, self.min.y)
    }

    /// True when `self` lies within `other`, edges included.
    #[inline]
    pub fn inside_of(&self, other: &Self) -> bool {
        inside_of(self, other)
    }

    /// Half-open point test: `min <= p < max` on both axes.
    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// True when the midpoint falls strictly inside on both axes, so that
    /// [`quadrants`](Self::quadrants) are each smaller than `self`.
    #[inline]
    pub fn is_divisible(&self) -> bool {
        let mid = self.center();
        mid.x > self.min.x && mid.x < self.max.x && mid.y > self.min.y && mid.y < self.max.y
    }

    /// Splits the rectangle at its midpoint.
    ///
    /// Order is bottom-left, bottom-right, top-left, top-right. The four
    /// quadrants tile `self` exactly.
    pub fn quadrants(&self) -> [Self; 4] {
        let mid = self.center();
        [
            Self { min: self.min, max: mid },
            Self { min: Vec2::new(mid.x, self.min.y), max: Vec2::new(self.max.x, mid.y) },
            Self { min: Vec2::new(self.min.x, mid.y), max: Vec2::new(mid.x, self.max.y) },
            Self { min: mid, max: self.max },
        ]
    }
}

/// Checks whether two rectangles overlap.
///
/// Rectangles that only share an edge or a corner do not overlap.
#[inline]
pub fn overlap(a: &Rect, b: &Rect) -> bool {
    !(a.min.y >= b.max.y || a.max.y <= b.min.y || a.max.x <= b.min.x || a.min.x >= b.max.x)
}

/// Checks whether `inner` lies within `outer`, edges included.
#[inline]
pub fn inside_of(inner: &Rect, outer: &Rect) -> bool {
    inner.min.x >= outer.min.x
        && inner.min.y >= outer.min.y
        && inner.max.x <= outer.max.x
        && inner.max.y <= outer.max.y
}

/// 2D line segment between `p1` and `p2`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Segment {
    /// First endpoint
    pub p1: Vec2,
    /// Second endpoint
    pub p2: Vec2,
}

impl Segment {
    /// Creates a segment from its endpoints.
    pub fn new(p1: Vec2, p2: Vec2) -> Self {
        Self { p1, p2 }
    }

    /// Degenerate segment starting and ending at `p`.
    pub fn point(p: Vec2) -> Self {
        Self { p1: p, p2: p }
    }

    /// Bounding rectangle of the segment.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.p1, self.p2)
    }

    /// Checks if `o` projected onto the segment's line falls in `(p1, p2]`.
    pub fn projection_within(&self, o: Vec2) -> bool {
        let dir = self.p2 - self.p1;
        let len_sq = dir.length_squared();
        if len_sq == 0.0 {
            return false;
        }
        let t = (o - self.p1).dot(dir) / len_sq;
        t > 0.0 && t <= 1.0
    }

    /// Line coefficients `(a, b, c)` with `a*x + b*y + c = 0`.
    fn coefficients(&self) -> (f32, f32, f32) {
        let a = self.p2.y - self.p1.y;
        let b = self.p1.x - self.p2.x;
        let c = self.p2.x * self.p1.y - self.p1.x * self.p2.y;
        (a, b, c)
    }

    /// Intersection point of two segments.
    ///
    /// Returns `None` for disjoint or (near) parallel segments.
    pub fn intersection(&self, other: &Self) -> Option<Vec2> {
        let (a1, b1, c1) = self.coefficients();
        let r3 = a1 * other.p1.x + b1 * other.p1.y + c1;
        let r4 = a1 * other.p2.x + b1 * other.p2.y + c1;
        if r3 * r4 > EPSILON * EPSILON {
            return None;
        }

        let (a2, b2, c2) = other.coefficients();
        let r1 = a2 * self.p1.x + b2 * self.p1.y + c2;
        let r2 = a2 * self.p2.x + b2 * self.p2.y + c2;
        if r1 * r2 > EPSILON * EPSILON {
            return None;
        }

        let d = a1 * b2 - b1 * a2;
        if d.abs() < EPSILON {
            return None;
        }
        Some(Vec2::new((b1 * c2 - c1 * b2) / d, (c1 * a2 - a1 * c2) / d))
    }

    /// Checks if two segments intersect.
    pub fn has_intersection(&self, other: &Self) -> bool {
        self.intersection(other).is_some()
    }
}
