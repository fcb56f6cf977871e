//! Recursive build phase.
//!
//! Produces an owned tree of [`BuildNode`]s: each node keeps the elements that
//! did not fit exclusively into one of its quadrants and owns up to four boxed
//! children. The tree is consumed by [`crate::flatten`] and never queried
//! directly.

use glam::Vec2;
use tracing::trace;

use crate::geometry::Rect;

/// Decides whether an element belongs inside the quadrant `[min, max)`.
///
/// Implemented for every `Fn(&T, Vec2, Vec2) -> bool`, so a closure is the
/// usual distributor:
///
/// ```
/// use flatquad::prelude::*;
///
/// let half_open = |p: &Vec2, min: Vec2, max: Vec2| {
///     p.x >= min.x && p.x < max.x && p.y >= min.y && p.y < max.y
/// };
/// assert!(half_open.fits(&Vec2::new(1.0, 1.0), Vec2::ZERO, Vec2::splat(2.0)));
/// ```
pub trait Distributor<T> {
    /// Returns true when `element` fits inside the quadrant `min`..`max`.
    fn fits(&self, element: &T, min: Vec2, max: Vec2) -> bool;
}

impl<T, F> Distributor<T> for F
where
    F: Fn(&T, Vec2, Vec2) -> bool,
{
    #[inline]
    fn fits(&self, element: &T, min: Vec2, max: Vec2) -> bool {
        self(element, min, max)
    }
}

/// Node of the owned build-time tree.
#[derive(Debug)]
pub(crate) struct BuildNode<T> {
    pub(crate) region: Rect,
    pub(crate) elements: Vec<T>,
    pub(crate) children: [Option<Box<Self>>; 4],
}

impl<T> BuildNode<T> {
    fn leaf(region: Rect, elements: Vec<T>) -> Self {
        Self { region, elements, children: [None, None, None, None] }
    }

    /// Region covered by this node.
    pub(crate) fn region(&self) -> Rect {
        self.region
    }

    /// Elements stored directly at this node.
    pub(crate) fn elements(&self) -> &[T] {
        &self.elements
    }

    /// Children in bottom-left, bottom-right, top-left, top-right order.
    pub(crate) fn children(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().flatten().map(|child| &**child)
    }

    /// Number of nodes in this subtree, including `self`.
    pub(crate) fn node_count(&self) -> usize {
        1 + self.children().map(Self::node_count).sum::<usize>()
    }
}

/// Builds the owned tree over `region` down to `max_depth` split levels.
///
/// An element moves into a quadrant only when exactly one of the four
/// quadrants accepts it; otherwise it stays at the current node. Quadrants
/// that receive no element are not created, and splitting stops early once
/// a region is too small for its midpoint to separate anything.
pub(crate) fn build_tree<T, D>(elements: Vec<T>, region: Rect, max_depth: u32, distributor: &D) -> BuildNode<T>
where
    D: Distributor<T> + ?Sized,
{
    let mut root = BuildNode::leaf(region, elements);
    split(&mut root, 0, max_depth, distributor);
    root
}

fn split<T, D>(node: &mut BuildNode<T>, depth: u32, max_depth: u32, distributor: &D)
where
    D: Distributor<T> + ?Sized,
{
    if depth >= max_depth || node.elements.is_empty() {
        return;
    }
    if !node.region.is_divisible() {
        trace!(depth, region = ?node.region, "region below float resolution");
        return;
    }

    let quadrants = node.region.quadrants();
    let mut pending: [Vec<T>; 4] = Default::default();
    let mut kept = Vec::new();

    for element in node.elements.drain(..) {
        match exclusive_quadrant(&element, &quadrants, distributor) {
            Some(q) => pending[q].push(element),
            None => kept.push(element),
        }
    }
    node.elements = kept;

    for (q, (slot, elements)) in node.children.iter_mut().zip(pending).enumerate() {
        if elements.is_empty() {
            trace!(depth = depth + 1, quadrant = q, "pruned empty quadrant");
            continue;
        }
        let mut child = BuildNode::leaf(quadrants[q], elements);
        split(&mut child, depth + 1, max_depth, distributor);
        *slot = Some(Box::new(child));
    }
}

/// Index of the only quadrant accepting `element`, if there is exactly one.
fn exclusive_quadrant<T, D>(element: &T, quadrants: &[Rect; 4], distributor: &D) -> Option<usize>
where
    D: Distributor<T> + ?Sized,
{
    let mut found = None;
    for (q, quadrant) in quadrants.iter().enumerate() {
        if distributor.fits(element, quadrant.min, quadrant.max) {
            if found.is_some() {
                return None;
            }
            found = Some(q);
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn half_open(p: &Vec2, min: Vec2, max: Vec2) -> bool {
        Rect { min, max }.contains_point(*p)
    }

    fn closed(p: &Vec2, min: Vec2, max: Vec2) -> bool {
        p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
    }

    fn square(size: f32) -> Rect {
        Rect::from_origin_size(Vec2::ZERO, Vec2::splat(size))
    }

    #[test]
    fn test_zero_depth_keeps_everything_at_root() {
        let points = vec![Vec2::new(1.0, 1.0), Vec2::new(9.0, 9.0)];
        let root = build_tree(points, square(10.0), 0, &half_open);
        assert_eq!(root.elements().len(), 2, "depth 0 must not split");
        assert_eq!(root.node_count(), 1);
    }

    #[test]
    fn test_empty_input_is_a_single_node() {
        let root = build_tree(Vec::<Vec2>::new(), square(10.0), 6, &half_open);
        assert_eq!(root.node_count(), 1, "empty input should not create children");
        assert!(root.elements().is_empty());
    }

    #[test]
    fn test_empty_quadrants_are_pruned() {
        let points = vec![Vec2::new(1.0, 1.0)];
        let root = build_tree(points, square(16.0), 3, &half_open);
        // one chain down the bottom-left corner
        assert_eq!(root.node_count(), 4, "only populated quadrants are built");
        assert!(root.children[0].is_some(), "bottom-left holds the point");
        assert!(root.children[1..].iter().all(Option::is_none), "other quadrants pruned");
    }

    #[test]
    fn test_straddling_element_stays_at_parent() {
        // (8, 8) sits on the corner shared by all four quadrants
        let points = vec![Vec2::new(8.0, 8.0), Vec2::new(2.0, 2.0)];
        let root = build_tree(points, square(16.0), 2, &closed);
        assert_eq!(root.elements(), &[Vec2::new(8.0, 8.0)], "shared corner is ambiguous");
        let bl = root.children[0].as_deref().expect("bottom-left child");
        assert_eq!(bl.region(), square(8.0));
    }

    #[test]
    fn test_rejected_element_stays_at_root() {
        let points = vec![Vec2::new(-5.0, 3.0), Vec2::new(3.0, 3.0)];
        let root = build_tree(points, square(8.0), 4, &half_open);
        assert_eq!(root.elements(), &[Vec2::new(-5.0, 3.0)], "outside point stays at root");
    }

    #[test]
    fn test_depth_bounds_the_tree() {
        let points: Vec<Vec2> = (0..64).map(|i| Vec2::new(i as f32 + 0.5, 0.5)).collect();
        let root = build_tree(points, square(64.0), 2, &half_open);
        fn depth<T>(n: &BuildNode<T>) -> u32 {
            1 + n.children().map(depth).max().unwrap_or(0)
        }
        assert_eq!(depth(&root), 3, "two split levels below the root");
    }

    #[test]
    fn test_coincident_points_stop_at_float_resolution() {
        let points = vec![Vec2::splat(1.0); 4];
        let root = build_tree(points, square(2.0), 100_000, &half_open);

        let mut node = &root;
        let mut levels = 0;
        while let Some(child) = node.children().next() {
            assert!(child.region().is_divisible() || child.children().next().is_none());
            node = child;
            levels += 1;
        }
        assert_eq!(node.elements().len(), 4, "all points end in the deepest node");
        assert_eq!(root.node_count(), levels + 1, "a single chain down to the points");
        assert!(levels < 64, "chain bounded by f32 precision, got {levels}");
    }
}
