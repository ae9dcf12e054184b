//! Squircle engine crate.
//!
//! Computes the outline of a rectangle with smoothed corners (a "squircle")
//! and renders it as SVG path data, usable as an SVG `d` attribute or a CSS
//! `path()` value.
//!
//! Two entry points share one geometry pipeline:
//! - [`compute_squircle_path`]: stateless, one call per outline
//! - [`DynamicSquircle`]: keeps derived geometry between calls and only
//!   recomputes what a parameter change invalidates

pub mod coords;
pub mod params;
pub mod geometry;
pub mod path;
pub mod dynamic;
pub mod export;

pub mod logging;
mod squircle;

pub use coords::{Corner, CornerRadii, Size};
pub use dynamic::{DynamicSquircle, Snapshot, SquircleUpdate};
pub use export::{css_clip_path, svg_document};
pub use params::{RadiusPatch, RadiusSpec, RadiusSpecError};
pub use squircle::{
    compute_squircle_path,
    compute_squircle_path_with,
    squircle_geometry,
    squircle_path_list,
    SquircleArgs,
    SquircleConfig,
};
