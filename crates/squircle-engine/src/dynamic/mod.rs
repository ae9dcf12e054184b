//! Incremental squircle engine.
//!
//! [`DynamicSquircle`] keeps the derived geometry of one outline alive between
//! calls and, on each [`update`](DynamicSquircle::update), recomputes only the
//! corners and edges the changed parameters touch. The path it returns is the
//! same one [`compute_squircle_path_with`](crate::compute_squircle_path_with)
//! would produce for the current parameters.
//!
//! Instances are plain owned values with no interior mutability; share them
//! across threads only behind external locking.

mod engine;
mod update;

pub use engine::DynamicSquircle;
pub use update::{Snapshot, SquircleUpdate};
