//! Static quad-tree stored as two flat arrays.
//!
//! Memory layout:
//! - `elements`: every input element, grouped by owning node in pre-order
//! - `nodes`: one [`Node`] record per materialized quadrant, root at index 0
//!
//! Children are referenced by [`NodeId`]; an absent quadrant is `None`, so the
//! "no child" marker can never be confused with the root index.

use std::ops::Range;

use glam::Vec2;
use tracing::{debug, debug_span};

use crate::build::{Distributor, build_tree};
use crate::flatten::{Flattened, flatten};
use crate::geometry::Rect;
use crate::view::ElementView;

/// Default number of split levels below the root.
pub const DEFAULT_MAX_DEPTH: u32 = 8;

/// Index of a node in [`QuadTree::nodes`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node.
    pub const ROOT: Self = Self(0);

    #[inline]
    #[expect(clippy::cast_possible_truncation, reason = "node count is far below u32::MAX")]
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(u32::try_from(index).is_ok(), "node index overflows u32");
        Self(index as u32)
    }

    /// Position in the node array.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Flattened node record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    pub(crate) region: Rect,
    pub(crate) start: usize,
    pub(crate) own: usize,
    pub(crate) total: usize,
    pub(crate) children: [Option<NodeId>; 4],
}

impl Node {
    /// Quadrant covered by this node.
    #[inline]
    pub fn region(&self) -> Rect {
        self.region
    }

    /// Element range stored directly at this node.
    #[inline]
    pub fn own_range(&self) -> Range<usize> {
        self.start..self.start + self.own
    }

    /// Element range of the whole subtree rooted here.
    #[inline]
    pub fn subtree_range(&self) -> Range<usize> {
        self.start..self.start + self.total
    }

    /// Number of elements stored directly at this node.
    pub fn own_count(&self) -> usize {
        self.own
    }

    /// Number of elements in the subtree rooted here.
    pub fn subtree_count(&self) -> usize {
        self.total
    }

    /// Child slots in bottom-left, bottom-right, top-left, top-right order.
    pub fn children(&self) -> &[Option<NodeId>; 4] {
        &self.children
    }

    /// True when no quadrant below this node was materialized.
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }
}

/// Build parameters: root placement and depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Bottom-left corner of the root region
    pub origin: Vec2,
    /// Width and height of the root region
    pub size: Vec2,
    /// Number of split levels below the root
    pub max_depth: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self { origin: Vec2::ZERO, size: Vec2::ONE, max_depth: DEFAULT_MAX_DEPTH }
    }
}

impl Config {
    /// Root region at `origin` with `size`, default depth.
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size, ..Self::default() }
    }

    /// Sets the number of split levels.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the bottom-left corner of the root region.
    #[must_use]
    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Sets the size of the root region.
    #[must_use]
    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    /// Root region described by this config.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }
}

/// Immutable quad-tree over elements of type `T`.
///
/// Built once with [`QuadTree::build`]; queries only need `&self`, so a tree
/// can be shared across threads behind an `Arc`.
///
/// # Example
/// ```
/// use flatquad::prelude::*;
///
/// let points = vec![Vec2::new(25.0, 25.0), Vec2::new(75.0, 75.0)];
/// let tree = QuadTree::build(points, Vec2::ZERO, Vec2::splat(100.0), 2, |p: &Vec2, min: Vec2, max: Vec2| {
///     Rect { min, max }.contains_point(*p)
/// });
///
/// let mut hits = Vec::new();
/// tree.region(&Rect::new(Vec2::ZERO, Vec2::splat(50.0)), |p| hits.push(*p));
/// assert_eq!(hits, vec![Vec2::new(25.0, 25.0)]);
/// ```
#[derive(Clone, Debug)]
pub struct QuadTree<T> {
    pub(crate) elements: Vec<T>,
    pub(crate) nodes: Vec<Node>,
    pub(crate) max_depth: u32,
}

impl<T> QuadTree<T> {
    /// Builds the tree over the region `origin..origin + size`.
    ///
    /// # Arguments
    /// * `elements` - Elements to index, moved into the tree
    /// * `origin` - Bottom-left corner of the root region
    /// * `size` - Width and height of the root region
    /// * `max_depth` - Number of split levels below the root; `0` keeps every element at the root
    /// * `distributor` - Decides whether an element fits inside a quadrant
    pub fn build<D>(elements: Vec<T>, origin: Vec2, size: Vec2, max_depth: u32, distributor: D) -> Self
    where
        D: Distributor<T>,
    {
        Self::build_with(elements, &Config { origin, size, max_depth }, distributor)
    }

    /// Builds the tree from a [`Config`].
    pub fn build_with<D>(elements: Vec<T>, config: &Config, distributor: D) -> Self
    where
        D: Distributor<T>,
    {
        let span = debug_span!("quadtree_build", elements = elements.len(), max_depth = config.max_depth);
        let _enter = span.enter();

        let element_count = elements.len();
        let root = build_tree(elements, config.bounds(), config.max_depth, &distributor);
        let node_count = root.node_count();
        let Flattened { elements: arena, nodes } = flatten(root, element_count, node_count);

        let tree = Self { elements: arena, nodes, max_depth: config.max_depth };
        debug!(
            elements = tree.elements.len(),
            nodes = tree.nodes.len(),
            at_root = tree.root().own,
            "quadtree built"
        );
        tree
    }

    /// Number of indexed elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns whether the tree holds no element.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element at `index` in construction (pre-order) order.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Iterates elements in construction order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Read-only indexed view over the element array.
    pub fn view(&self) -> ElementView<'_, T> {
        ElementView::new(&self.elements)
    }

    /// Root node record.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.nodes[NodeId::ROOT.index()]
    }

    /// Node record for `id`.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this tree.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// All node records in pre-order; the root is first.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of materialized nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Region covered by the root.
    pub fn bounds(&self) -> Rect {
        self.root().region
    }

    /// Configured number of split levels.
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Elements in `range` of the element array.
    #[inline]
    pub(crate) fn slice(&self, range: Range<usize>) -> &[T] {
        &self.elements[range]
    }
}

impl<'a, T> IntoIterator for &'a QuadTree<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T> std::ops::Index<usize> for QuadTree<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}
