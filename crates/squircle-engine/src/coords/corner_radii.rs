use serde::{Deserialize, Serialize};

use super::Corner;

/// Per-corner radii of a squircle (path units).
///
/// Corners follow CSS convention: top-left, top-right, bottom-right, bottom-left.
/// Values produced by the normalizer are non-negative and no two radii sharing
/// an edge add up to more than that edge's length.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CornerRadii {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f64, top_right: f64, bottom_right: f64, bottom_left: f64) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f64) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    #[inline]
    pub fn get(&self, corner: Corner) -> f64 {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomRight => self.bottom_right,
            Corner::BottomLeft => self.bottom_left,
        }
    }

    #[inline]
    pub fn set(&mut self, corner: Corner, value: f64) {
        match corner {
            Corner::TopLeft => self.top_left = value,
            Corner::TopRight => self.top_right = value,
            Corner::BottomRight => self.bottom_right = value,
            Corner::BottomLeft => self.bottom_left = value,
        }
    }

    /// Builds radii by evaluating `f` for each corner.
    #[inline]
    pub fn from_fn(mut f: impl FnMut(Corner) -> f64) -> Self {
        Self::new(
            f(Corner::TopLeft),
            f(Corner::TopRight),
            f(Corner::BottomRight),
            f(Corner::BottomLeft),
        )
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        Corner::ALL.iter().all(|&c| self.get(c) == 0.0)
    }

    /// Returns the shared value when all four corners are equal.
    #[inline]
    pub fn uniform(&self) -> Option<f64> {
        let r = self.top_left;
        (self.top_right == r && self.bottom_right == r && self.bottom_left == r).then_some(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_set_round_trip_each_corner() {
        let mut radii = CornerRadii::zero();
        for (i, corner) in Corner::ALL.into_iter().enumerate() {
            radii.set(corner, i as f64 + 1.0);
        }
        assert_eq!(radii, CornerRadii::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn uniform_detects_equal_corners() {
        assert_eq!(CornerRadii::all(12.0).uniform(), Some(12.0));
        assert_eq!(CornerRadii::new(12.0, 12.0, 12.0, 11.0).uniform(), None);
    }

    #[test]
    fn zero_is_zero() {
        assert!(CornerRadii::zero().is_zero());
        assert!(!CornerRadii::new(0.0, 0.0, 0.5, 0.0).is_zero());
    }
}
