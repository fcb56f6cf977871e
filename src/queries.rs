//! Query implementations for [`QuadTree`].
//!
//! Every traversal walks the node array with an explicit stack and reports
//! visited elements as ranges of the element array. The public entry points
//! either hand each element of those ranges to a visitor or collect the
//! element indices into a results vector.
//!
//! Visiting order is pre-order, children in bottom-left, bottom-right,
//! top-left, top-right order.

use std::ops::Range;

use glam::Vec2;

use crate::geometry::{Rect, overlap};
use crate::probe::Probe;
use crate::quadtree::{NodeId, QuadTree};

impl<T> QuadTree<T> {
    // --- Range walkers ---

    fn walk_select<S, E>(&self, selector: &S, mut emit: E)
    where
        S: Fn(&Rect) -> bool + ?Sized,
        E: FnMut(Range<usize>),
    {
        if !selector(&self.root().region) {
            return;
        }

        let mut stack = vec![NodeId::ROOT];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if node.own > 0 {
                emit(node.own_range());
            }
            for &child in node.children.iter().rev().flatten() {
                if selector(&self.node(child).region) {
                    stack.push(child);
                }
            }
        }
    }

    fn walk_region<E>(&self, query: &Rect, mut emit: E)
    where
        E: FnMut(Range<usize>),
    {
        let mut stack = vec![NodeId::ROOT];
        while let Some(id) = stack.pop() {
            let node = self.node(id);

            // Whole subtree is one contiguous range
            if node.region.inside_of(query) {
                if node.total > 0 {
                    emit(node.subtree_range());
                }
                continue;
            }
            if !overlap(&node.region, query) {
                continue;
            }

            if node.own > 0 {
                emit(node.own_range());
            }
            stack.extend(node.children.iter().rev().flatten());
        }
    }

    fn walk_run<P, E>(&self, probe: &P, mut emit: E)
    where
        P: Probe + ?Sized,
        E: FnMut(Range<usize>),
    {
        if !probe.inside(&self.root().region) {
            return;
        }

        let mut stack = vec![NodeId::ROOT];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if node.own > 0 {
                emit(node.own_range());
            }

            let mut matched = [None; 4];
            let mut any = false;
            for (slot, child) in matched.iter_mut().zip(node.children) {
                if let Some(child) = child
                    && probe.inside(&self.node(child).region)
                {
                    *slot = Some(child);
                    any = true;
                }
            }

            // The probe spans several quadrants: none can be pruned
            let next = if any { &matched } else { &node.children };
            stack.extend(next.iter().rev().flatten());
        }
    }

    // --- Visitor queries ---

    /// Visits the elements of every node selected by `selector`.
    ///
    /// The root is visited only if `selector` accepts its region. At each
    /// visited node every own element is passed to `visitor`, then each
    /// present child whose region passes `selector` is visited in turn.
    ///
    /// # Example
    /// ```
    /// use flatquad::prelude::*;
    ///
    /// let points = vec![Vec2::new(1.0, 1.0), Vec2::new(3.0, 3.0)];
    /// let tree = QuadTree::build(points, Vec2::ZERO, Vec2::splat(4.0), 1, |p: &Vec2, min: Vec2, max: Vec2| {
    ///     Rect { min, max }.contains_point(*p)
    /// });
    ///
    /// let mut seen = Vec::new();
    /// tree.select(|r: &Rect| r.min.x < 2.0, |p| seen.push(*p));
    /// assert_eq!(seen, vec![Vec2::new(1.0, 1.0)]);
    /// ```
    pub fn select<S, V>(&self, selector: S, mut visitor: V)
    where
        S: Fn(&Rect) -> bool,
        V: FnMut(&T),
    {
        self.walk_select(&selector, |range| self.slice(range).iter().for_each(&mut visitor));
    }

    /// Visits every element stored in a node whose region overlaps `query`.
    ///
    /// Nodes lying entirely inside `query` hand over their whole subtree in
    /// one pass without descending. Elements are not filtered individually:
    /// an element stored at a visited node is reported even if it lies
    /// outside `query`.
    pub fn region<V>(&self, query: &Rect, mut visitor: V)
    where
        V: FnMut(&T),
    {
        self.walk_region(query, |range| self.slice(range).iter().for_each(&mut visitor));
    }

    /// Region query over the square `[center - radius, center + radius]`.
    ///
    /// This is an axis-aligned approximation of the circle: elements in the
    /// square's corners are visited too, and callers needing exact circular
    /// containment must filter the visited elements themselves. The sign of
    /// `radius` is ignored.
    pub fn radius<V>(&self, center: Vec2, radius: f32, visitor: V)
    where
        V: FnMut(&T),
    {
        self.region(&Rect::from_center(center, radius), visitor);
    }

    /// Visits the nodes containing `probe`.
    ///
    /// Nothing is visited when the probe is not inside the root region.
    /// Below that, the traversal follows every child containing the probe;
    /// when no child contains it (a segment crossing a quadrant boundary,
    /// for instance) it descends into all children instead.
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
    /// let mut seen = Vec::new();
    /// tree.run(&Vec2::new(30.0, 30.0), |p| seen.push(*p));
    /// assert_eq!(seen, vec![Vec2::new(25.0, 25.0)]);
    /// ```
    pub fn run<P, V>(&self, probe: &P, mut visitor: V)
    where
        P: Probe + ?Sized,
        V: FnMut(&T),
    {
        self.walk_run(probe, |range| self.slice(range).iter().for_each(&mut visitor));
    }

    // --- Index queries ---

    /// Collects the element indices visited by [`select`](Self::select).
    ///
    /// `results` is cleared first; indices refer to [`QuadTree::get`].
    pub fn query_select<S>(&self, selector: S, results: &mut Vec<usize>)
    where
        S: Fn(&Rect) -> bool,
    {
        results.clear();
        self.walk_select(&selector, |range| results.extend(range));
    }

    /// Collects the element indices visited by [`region`](Self::region).
    ///
    /// # Example
    /// ```
    /// use flatquad::prelude::*;
    ///
    /// let points: Vec<Vec2> = (0..8).map(|i| Vec2::new(i as f32 + 0.5, 0.5)).collect();
    /// let tree = QuadTree::build(points, Vec2::ZERO, Vec2::splat(8.0), 3, |p: &Vec2, min: Vec2, max: Vec2| {
    ///     Rect { min, max }.contains_point(*p)
    /// });
    ///
    /// let mut results = Vec::new();
    /// tree.query_region(&Rect::new(Vec2::ZERO, Vec2::new(2.0, 1.0)), &mut results);
    /// let xs: Vec<f32> = results.iter().map(|&i| tree[i].x).collect();
    /// assert_eq!(xs, vec![0.5, 1.5]);
    /// ```
    pub fn query_region(&self, query: &Rect, results: &mut Vec<usize>) {
        results.clear();
        self.walk_region(query, |range| results.extend(range));
    }

    /// Collects the element indices visited by [`radius`](Self::radius).
    pub fn query_radius(&self, center: Vec2, radius: f32, results: &mut Vec<usize>) {
        self.query_region(&Rect::from_center(center, radius), results);
    }

    /// Collects the element indices visited by [`run`](Self::run).
    pub fn query_run<P>(&self, probe: &P, results: &mut Vec<usize>)
    where
        P: Probe + ?Sized,
    {
        results.clear();
        self.walk_run(probe, |range| results.extend(range));
    }
}
