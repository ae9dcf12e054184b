//! Raw parameters and the normalizer that turns them into valid geometry input.
//!
//! Nothing here rejects input: negative or non-finite values clamp to the
//! nearest valid value. The only fallible entry point is parsing a textual
//! radius spec, which tooling uses to accept radii on the command line.

mod error;
mod normalize;
mod radius_spec;

pub use error::RadiusSpecError;
pub use normalize::{fit_radii, normalize_size, normalize_smoothing, resolve_radii};
pub use radius_spec::{RadiusPatch, RadiusSpec};

/// Smoothing used when the caller does not pick one.
pub const DEFAULT_SMOOTHING: f64 = 0.6;
