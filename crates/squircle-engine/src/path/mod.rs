//! Path command stream and SVG path-data rendering.
//!
//! Responsibilities:
//! - store outline commands in emission order ([`PathList`])
//! - render them to a compact `d` string with fixed number formatting
//! - build the degenerate shapes (rectangle, circle, rounded rectangle)
//! - walk a [`SquircleGeometry`](crate::geometry::SquircleGeometry) into commands

mod assemble;
mod cmd;
mod format;
mod list;
mod shortcut;

pub use assemble::squircle_path;
pub use cmd::PathCmd;
pub use format::{write_number, DEFAULT_PRECISION};
pub use list::PathList;
pub use shortcut::Shortcut;
