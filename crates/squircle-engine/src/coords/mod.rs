//! Coordinate and addressing types shared by the geometry pipeline.
//!
//! Canonical path space:
//! - Origin top-left
//! - +X right, +Y down
//! - Units are whatever the consumer renders in (usually CSS pixels)
//!
//! All values are `f64`; dimensions are rounded to whole units by the
//! normalizer before any geometry is derived from them.

mod corner;
mod corner_radii;
mod size;

pub use corner::{Axis, Corner, Edge};
pub use corner_radii::CornerRadii;
pub use size::Size;
