//! # flatquad - Static Flattened Quad-tree
//!
//! A Rust library providing a static quad-tree over arbitrary elements, built
//! once and queried many times through a cache-friendly flat layout.
//!
//! ## Features
//!
//! - **Caller-defined placement**: a distributor predicate decides which quadrant an element belongs to
//! - **Flat storage**: elements and node records live in two contiguous arrays in pre-order
//! - **Region queries** with a full-containment shortcut that hands over whole subtrees at once
//! - **Radius queries**, approximated by the enclosing axis-aligned square
//! - **Shape probes** (points, segments, rectangles, closures) with a fallback for probes spanning quadrants
//! - **Immutable after build**: queries take `&self` and can run from many threads
//!
//! ## Quick Start
//!
//! ```rust
//! use flatquad::prelude::*;
//!
//! // Points on a 128x128 grid
//! let points: Vec<Vec2> = (0..128)
//!     .flat_map(|x| (0..128).map(move |y| Vec2::new(x as f32, y as f32)))
//!     .collect();
//!
//! // Half-open membership so points on a split line go to exactly one quadrant
//! let fits = |p: &Vec2, min: Vec2, max: Vec2| Rect { min, max }.contains_point(*p);
//! let tree = QuadTree::build(points, Vec2::ZERO, Vec2::splat(128.0), 4, fits);
//!
//! // Region query
//! let mut count = 0;
//! tree.region(&Rect::new(Vec2::ZERO, Vec2::splat(16.0)), |_| count += 1);
//! assert_eq!(count, 256);
//!
//! // Index results can be reused across queries
//! let mut results = Vec::new();
//! tree.query_run(&Vec2::new(30.0, 30.0), &mut results);
//! assert!(results.iter().all(|&i| tree[i].x >= 24.0 && tree[i].x < 32.0));
//! ```
//!
//! ## How It Works
//!
//! The build phase starts with every element at the root and splits each
//! node at its midpoint into four quadrants (bottom-left, bottom-right,
//! top-left, top-right) until the configured depth. An element moves down
//! only when exactly one quadrant accepts it; elements straddling a split
//! line stay at the parent. Empty quadrants are never created.
//!
//! The owned tree is then flattened in pre-order. Because a node's own
//! elements are written just before those of its descendants, every subtree
//! is a single range of the element array, which lets a region query report
//! a fully covered subtree without walking it.

mod build;
mod flatten;
pub mod geometry;
pub mod prelude;
pub mod probe;
pub mod quadtree;
mod queries;
pub mod view;


pub use build::Distributor;
pub use geometry::{Rect, Segment};
pub use probe::Probe;
pub use quadtree::{Config, DEFAULT_MAX_DEPTH, Node, NodeId, QuadTree};
pub use view::ElementView;
