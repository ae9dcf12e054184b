//! Squircle geometry: per-corner curve lengths, edge spacing, merge damping.
//!
//! Responsibilities:
//! - derive each corner's arc / ramp lengths from radius and smoothing
//! - measure how much straight edge is left between two corners
//! - blend ramps toward a single arc when an edge is fully consumed
//! - recompute only the subset invalidated by a parameter change
//!
//! Extending: anything added to [`CornerGeometry`] must depend only on
//! `(radius, smoothing)` or be refreshed by [`CornerGeometry::refresh_axis`];
//! the incremental engine relies on that split.

mod corner;
mod edge;
mod merge;
mod squircle;

pub use corner::{AxisRamp, CornerGeometry};
pub use edge::EdgeState;
pub use merge::{resolve_merge, DEFAULT_MERGE_DAMPING};
pub use squircle::{Dirty, SquircleGeometry};
