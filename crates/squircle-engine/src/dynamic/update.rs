use serde::{Deserialize, Serialize};

use crate::coords::Corner;
use crate::geometry::SquircleGeometry;
use crate::params::{RadiusPatch, RadiusSpec};
use crate::path::Shortcut;
use crate::squircle::{SquircleArgs, SquircleConfig};

/// Partial parameter change. `None` fields keep their current value.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SquircleUpdate {
    pub height: Option<f64>,
    pub width: Option<f64>,
    pub radius: Option<RadiusPatch>,
    pub smoothing: Option<f64>,
}

impl SquircleUpdate {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_radius(mut self, radius: impl Into<RadiusPatch>) -> Self {
        self.radius = Some(radius.into());
        self
    }

    /// Sets one corner, merging with any per-corner patch already present.
    #[must_use]
    pub fn with_corner(mut self, corner: Corner, value: f64) -> Self {
        let patch = match self.radius {
            Some(RadiusPatch::PerCorner { top_left, top_right, bottom_right, bottom_left }) => {
                let mut radii = [top_left, top_right, bottom_right, bottom_left];
                radii[corner.index()] = Some(value);
                let [top_left, top_right, bottom_right, bottom_left] = radii;
                RadiusPatch::PerCorner { top_left, top_right, bottom_right, bottom_left }
            }
            _ => RadiusPatch::corner(corner, value),
        };
        self.radius = Some(patch);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = Some(smoothing);
        self
    }

    /// Every parameter of `args`, as a full replacement.
    ///
    /// A uniform radius stays uniform; a per-corner spec is patched corner by
    /// corner with its resolved raw values.
    pub fn from_args(args: &SquircleArgs) -> Self {
        let radius = match args.radius {
            RadiusSpec::Uniform(r) => RadiusPatch::Uniform(r),
            RadiusSpec::PerCorner { .. } => {
                let raw = args.radius.raw_radii();
                RadiusPatch::PerCorner {
                    top_left: Some(raw.top_left),
                    top_right: Some(raw.top_right),
                    bottom_right: Some(raw.bottom_right),
                    bottom_left: Some(raw.bottom_left),
                }
            }
        };
        Self {
            height: Some(args.height),
            width: Some(args.width),
            radius: Some(radius),
            smoothing: Some(args.smoothing),
        }
    }
}

/// Read-only copy of a [`DynamicSquircle`](super::DynamicSquircle)'s state.
///
/// `geometry` holds the normalized inputs; its corner and edge records reflect
/// the last draw. `stale` is set when an update took a shortcut and the
/// per-corner records have not been recomputed since.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub args: SquircleArgs,
    pub config: SquircleConfig,
    pub shortcut: Option<Shortcut>,
    pub stale: bool,
    pub geometry: SquircleGeometry,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let u = SquircleUpdate::new().with_height(10.0).with_smoothing(0.2);
        assert_eq!(u.height, Some(10.0));
        assert_eq!(u.width, None);
        assert_eq!(u.radius, None);
        assert_eq!(u.smoothing, Some(0.2));
    }

    #[test]
    fn corners_accumulate() {
        let u = SquircleUpdate::new()
            .with_corner(Corner::TopLeft, 4.0)
            .with_corner(Corner::BottomRight, 9.0);
        let patch = u.radius.unwrap();
        assert_eq!(patch.get(Corner::TopLeft), Some(4.0));
        assert_eq!(patch.get(Corner::BottomRight), Some(9.0));
        assert_eq!(patch.get(Corner::TopRight), None);
    }

    #[test]
    fn corner_replaces_uniform_patch() {
        let u = SquircleUpdate::new().with_radius(20.0).with_corner(Corner::TopRight, 5.0);
        let patch = u.radius.unwrap();
        assert_eq!(patch.get(Corner::TopRight), Some(5.0));
        assert_eq!(patch.get(Corner::TopLeft), None);
    }

    #[test]
    fn from_args_keeps_uniform_radius() {
        let u = SquircleUpdate::from_args(&SquircleArgs::new(80.0, 120.0).with_radius(12.0));
        assert_eq!(u.radius, Some(RadiusPatch::Uniform(12.0)));
    }

    #[test]
    fn from_args_covers_every_corner() {
        let args = SquircleArgs::new(80.0, 120.0).with_radius(RadiusSpec::with_default(6.0).corner(Corner::BottomLeft, 30.0));
        let u = SquircleUpdate::from_args(&args);
        let patch = u.radius.unwrap();
        for corner in Corner::ALL {
            assert_eq!(patch.get(corner), Some(args.radius.raw_radii().get(corner)));
        }
        assert_eq!(u.height, Some(80.0));
        assert_eq!(u.width, Some(120.0));
    }
}
