use serde::{Deserialize, Serialize};

use crate::coords::Axis;

/// Cubic-ramp lengths along one axis of a corner.
///
/// `length_a` is the segment nearest the straight edge, `length_b` the one
/// nearest the arc. Before merge damping `length_a == 2 * length_b`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisRamp {
    /// Distance the whole corner curve consumes along this axis.
    pub transition_length: f64,
    pub length_a: f64,
    pub length_b: f64,
}

/// Derived curve lengths for one corner.
///
/// The angle-dependent fields (`arc_movement_length`, `length_c`, `length_d`,
/// `max_transition_length`) depend only on `(radius, smoothing)`. The two
/// [`AxisRamp`]s also depend on the free space of the adjacent edges.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CornerGeometry {
    pub radius: f64,
    pub smoothing: f64,
    pub max_transition_length: f64,
    /// Per-axis projection of the circular arc.
    pub arc_movement_length: f64,
    /// Tangent offsets of the arc end point, along and across the ramp.
    pub length_c: f64,
    pub length_d: f64,
    pub vertical: AxisRamp,
    pub horizontal: AxisRamp,
}

impl CornerGeometry {
    /// Derives a corner from its radius, smoothing and the half-edge space
    /// available on each side. Spaces may be negative when neighbours overlap.
    pub fn new(radius: f64, smoothing: f64, vertical_space: f64, horizontal_space: f64) -> Self {
        let half_standard_arc_angle = 45.0 * (1.0 - smoothing);
        let arc_movement_length =
            half_standard_arc_angle.to_radians().sin() * radius * std::f64::consts::SQRT_2;

        let half_complement_angle = (45.0 - half_standard_arc_angle) / 2.0;
        let distance34 = radius * half_complement_angle.to_radians().tan();
        let transition_angle = (45.0 * smoothing).to_radians();

        let mut corner = Self {
            radius,
            smoothing,
            max_transition_length: (1.0 + smoothing) * radius,
            arc_movement_length,
            length_c: distance34 * transition_angle.cos(),
            length_d: distance34 * transition_angle.sin(),
            vertical: AxisRamp::default(),
            horizontal: AxisRamp::default(),
        };
        corner.refresh_axis(Axis::Vertical, vertical_space);
        corner.refresh_axis(Axis::Horizontal, horizontal_space);
        corner
    }

    /// Part of a transition that is not cubic ramp: arc projection plus both tangent offsets.
    #[inline]
    pub fn base_length(&self) -> f64 {
        self.arc_movement_length + self.length_c + self.length_d
    }

    /// A zero-radius corner is drawn as a plain right angle.
    #[inline]
    pub fn is_sharp(&self) -> bool {
        self.radius == 0.0
    }

    /// True when this corner was derived from exactly these inputs.
    #[inline]
    pub fn matches(&self, radius: f64, smoothing: f64) -> bool {
        self.radius == radius && self.smoothing == smoothing
    }

    #[inline]
    pub fn ramp(&self, axis: Axis) -> &AxisRamp {
        match axis {
            Axis::Vertical => &self.vertical,
            Axis::Horizontal => &self.horizontal,
        }
    }

    #[inline]
    pub fn ramp_mut(&mut self, axis: Axis) -> &mut AxisRamp {
        match axis {
            Axis::Vertical => &mut self.vertical,
            Axis::Horizontal => &mut self.horizontal,
        }
    }

    /// Recomputes one axis from a new half-edge space, keeping the
    /// angle-dependent fields. Undoes any merge damping on that axis.
    pub fn refresh_axis(&mut self, axis: Axis, half_space: f64) {
        let transition_length = self.max_transition_length.min(self.radius + half_space);
        let length_b = if half_space < 0.0 {
            0.0
        } else {
            (transition_length - self.base_length()) / 3.0
        };
        *self.ramp_mut(axis) = AxisRamp { transition_length, length_a: 2.0 * length_b, length_b };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn zero_smoothing_is_a_plain_arc() {
        let c = CornerGeometry::new(40.0, 0.0, 100.0, 100.0);
        assert!(approx_eq(c.arc_movement_length, 40.0));
        assert!(approx_eq(c.length_c, 0.0));
        assert!(approx_eq(c.length_d, 0.0));
        assert_eq!(c.max_transition_length, 40.0);
        assert!(approx_eq(c.vertical.length_b, 0.0));
    }

    #[test]
    fn full_transition_when_space_allows() {
        let c = CornerGeometry::new(100.0, 0.8, 100.0, 50.0);
        assert!(approx_eq(c.max_transition_length, 180.0));
        assert!(approx_eq(c.horizontal.transition_length, 150.0));
        // vertical space 100 leaves room for the whole 180
        assert!(approx_eq(c.vertical.transition_length, 180.0));
    }

    #[test]
    fn ramp_segments_fill_the_transition() {
        let c = CornerGeometry::new(64.0, 0.6, 30.0, 500.0);
        for ramp in [c.vertical, c.horizontal] {
            assert!(approx_eq(ramp.length_a, 2.0 * ramp.length_b));
            assert!(approx_eq(
                ramp.length_a + ramp.length_b + c.base_length(),
                ramp.transition_length
            ));
        }
    }

    #[test]
    fn negative_space_removes_ramps() {
        let c = CornerGeometry::new(50.0, 0.5, -10.0, 20.0);
        assert_eq!(c.vertical.length_a, 0.0);
        assert_eq!(c.vertical.length_b, 0.0);
        assert!(approx_eq(c.vertical.transition_length, 40.0));
        assert!(c.horizontal.length_b > 0.0);
    }

    #[test]
    fn full_smoothing_has_no_arc() {
        let c = CornerGeometry::new(10.0, 1.0, 100.0, 100.0);
        assert!(approx_eq(c.arc_movement_length, 0.0));
        assert!(approx_eq(c.length_c, c.length_d));
    }

    #[test]
    fn refresh_axis_matches_fresh_derivation() {
        let mut c = CornerGeometry::new(30.0, 0.7, 5.0, 5.0);
        c.refresh_axis(Axis::Horizontal, 80.0);
        let fresh = CornerGeometry::new(30.0, 0.7, 5.0, 80.0);
        assert_eq!(c, fresh);
    }

    #[test]
    fn zero_radius_is_sharp() {
        let c = CornerGeometry::new(0.0, 0.6, 10.0, 10.0);
        assert!(c.is_sharp());
        assert_eq!(c.vertical.transition_length, 0.0);
    }
}
