//! Shapes accepted by [`QuadTree::run`](crate::QuadTree::run).

use glam::Vec2;

use crate::geometry::{Rect, Segment};

/// Shape-specific containment test used to steer a `run` traversal.
///
/// `inside` answers whether the whole probe lies in `region`. A probe that
/// is inside a node but inside none of its children spans a quadrant
/// boundary, and the traversal then descends into every child.
///
/// Any `Fn(&Rect) -> bool` closure is a probe.
pub trait Probe {
    /// Returns true when the probe lies entirely within `region`.
    fn inside(&self, region: &Rect) -> bool;
}

/// Half-open point containment, matching the quadrant split.
impl Probe for Vec2 {
    #[inline]
    fn inside(&self, region: &Rect) -> bool {
        region.contains_point(*self)
    }
}

/// Both endpoints must lie inside the region (half-open).
impl Probe for Segment {
    #[inline]
    fn inside(&self, region: &Rect) -> bool {
        region.contains_point(self.p1) && region.contains_point(self.p2)
    }
}

impl Probe for Rect {
    #[inline]
    fn inside(&self, region: &Rect) -> bool {
        self.inside_of(region)
    }
}

impl<F> Probe for F
where
    F: Fn(&Rect) -> bool,
{
    #[inline]
    fn inside(&self, region: &Rect) -> bool {
        self(region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_probe_needs_both_endpoints() {
        let region = Rect::new(Vec2::ZERO, Vec2::splat(64.0));
        let inside = Segment::new(Vec2::new(1.0, 1.0), Vec2::new(63.0, 63.0));
        let crossing = Segment::new(Vec2::new(1.0, 1.0), Vec2::new(65.0, 65.0));
        assert!(inside.inside(&region));
        assert!(!crossing.inside(&region), "one endpoint outside");
    }

    #[test]
    fn test_closure_probe() {
        let probe = |r: &Rect| r.min.x >= 10.0;
        assert!(probe.inside(&Rect::new(Vec2::new(10.0, 0.0), Vec2::splat(20.0))));
        assert!(!probe.inside(&Rect::new(Vec2::ZERO, Vec2::ONE)));
    }
}
