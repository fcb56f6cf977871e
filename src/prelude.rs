//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate,
//! together with [`glam::Vec2`]. Users can import everything they need with:
//!
//! ```
//! use flatquad::prelude::*;
//! ```

pub use crate::geometry::{Rect, Segment, inside_of, overlap};
pub use crate::{Config, Distributor, ElementView, Probe, QuadTree};
pub use glam::Vec2;
