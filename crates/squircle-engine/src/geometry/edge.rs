use serde::{Deserialize, Serialize};

/// Straight-edge bookkeeping for one side of the rectangle.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeState {
    /// Edge length minus both corner radii. Negative when the corners overlap.
    pub space: f64,
    /// No straight segment remains: the corners meet along this edge.
    pub merged: bool,
}

impl EdgeState {
    #[inline]
    pub fn measure(length: f64, radius_a: f64, radius_b: f64) -> Self {
        let space = length - (radius_a + radius_b);
        Self { space, merged: space <= 0.0 }
    }

    /// Space available to each of the two corners.
    #[inline]
    pub fn half_space(&self) -> f64 {
        self.space / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_edge() {
        let e = EdgeState::measure(400.0, 100.0, 50.0);
        assert_eq!(e.space, 250.0);
        assert_eq!(e.half_space(), 125.0);
        assert!(!e.merged);
    }

    #[test]
    fn exactly_filled_edge_is_merged() {
        assert!(EdgeState::measure(200.0, 100.0, 100.0).merged);
    }

    #[test]
    fn overlapping_edge_has_negative_space() {
        let e = EdgeState::measure(100.0, 80.0, 40.0);
        assert_eq!(e.space, -20.0);
        assert!(e.merged);
    }
}
