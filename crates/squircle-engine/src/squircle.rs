use serde::{Deserialize, Serialize};

use crate::coords::Size;
use crate::geometry::{SquircleGeometry, DEFAULT_MERGE_DAMPING};
use crate::params::{normalize_size, normalize_smoothing, resolve_radii, RadiusSpec, DEFAULT_SMOOTHING};
use crate::path::{squircle_path, PathList, Shortcut, DEFAULT_PRECISION};

/// Engine tunables.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquircleConfig {
    /// Decimal places for non-integral numbers in the rendered path.
    pub precision: usize,
    /// Divisor applied to `length_b` when ramps blend on a consumed edge.
    pub merge_damping: f64,
}

impl Default for SquircleConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            merge_damping: DEFAULT_MERGE_DAMPING,
        }
    }
}

/// Raw inputs of one squircle outline.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquircleArgs {
    pub height: f64,
    pub width: f64,
    pub radius: RadiusSpec,
    pub smoothing: f64,
}

impl Default for SquircleArgs {
    fn default() -> Self {
        Self {
            height: 0.0,
            width: 0.0,
            radius: RadiusSpec::default(),
            smoothing: DEFAULT_SMOOTHING,
        }
    }
}

impl SquircleArgs {
    #[inline]
    pub fn new(height: f64, width: f64) -> Self {
        Self { height, width, ..Self::default() }
    }

    #[inline]
    #[must_use]
    pub fn with_radius(mut self, radius: impl Into<RadiusSpec>) -> Self {
        self.radius = radius.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = smoothing;
        self
    }
}

/// Computes the outline of a squircle as SVG path data.
///
/// The result is usable as an SVG `d` attribute or inside CSS `path()`.
/// Out-of-range inputs are clamped; a zero width or height yields `""`.
///
/// ```
/// use squircle_engine::compute_squircle_path;
///
/// let d = compute_squircle_path(200.0, 200.0, 100.0, 0.6);
/// assert_eq!(d, "M 100 0 a 100 100 0 0 0 0 200 a 100 100 0 0 0 0 -200 Z");
/// ```
pub fn compute_squircle_path(
    height: f64,
    width: f64,
    radius: impl Into<RadiusSpec>,
    smoothing: f64,
) -> String {
    let args = SquircleArgs { height, width, radius: radius.into(), smoothing };
    compute_squircle_path_with(&args, &SquircleConfig::default())
}

/// [`compute_squircle_path`] with explicit args and config.
pub fn compute_squircle_path_with(args: &SquircleArgs, config: &SquircleConfig) -> String {
    squircle_path_list(args, config).render(config.precision)
}

/// Runs the pipeline and returns the structured command list.
pub fn squircle_path_list(args: &SquircleArgs, config: &SquircleConfig) -> PathList {
    let size = normalize_size(args.height, args.width);
    if size.is_empty() {
        return PathList::new();
    }
    let smoothing = normalize_smoothing(args.smoothing);
    let radii = resolve_radii(&args.radius, size);

    if let Some(shortcut) = Shortcut::detect(size, &radii, smoothing) {
        log::debug!("{shortcut:?} shortcut for {}x{}", size.width, size.height);
        return shortcut.path(size, &radii);
    }

    squircle_path(&SquircleGeometry::new(size, radii, smoothing, config.merge_damping))
}

/// Derived geometry for `args`, without rendering. `None` for an empty size.
pub fn squircle_geometry(args: &SquircleArgs, config: &SquircleConfig) -> Option<SquircleGeometry> {
    let size: Size = normalize_size(args.height, args.width);
    if size.is_empty() {
        return None;
    }
    let radii = resolve_radii(&args.radius, size);
    Some(SquircleGeometry::new(size, radii, normalize_smoothing(args.smoothing), config.merge_damping))
}
