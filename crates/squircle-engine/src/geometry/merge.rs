use crate::coords::Axis;

use super::{AxisRamp, CornerGeometry, EdgeState};

/// Divisor applied to `length_b` when shifting ramp length toward the arc.
///
/// Smaller values pull the merged outline closer to a semicircle.
pub const DEFAULT_MERGE_DAMPING: f64 = 1.9;

/// Blends the ramps of two corners sharing an edge once their transitions
/// consume the whole edge.
///
/// Length moves from each `length_a` into `length_b` by a cubic falloff of the
/// remaining edge space, so the outline degenerates smoothly into a single
/// arc as the space reaches zero. `length_a + length_b` is conserved.
///
/// Returns `true` when damping was applied.
pub fn resolve_merge(
    a: &mut CornerGeometry,
    b: &mut CornerGeometry,
    axis: Axis,
    edge_length: f64,
    edge: &EdgeState,
    damping: f64,
) -> bool {
    if a.ramp(axis).transition_length + b.ramp(axis).transition_length < edge_length {
        return false;
    }

    let full_transition_length =
        a.max_transition_length + b.max_transition_length - a.radius - b.radius;
    if full_transition_length <= 0.0 {
        // No smoothing on either corner: nothing to blend.
        return false;
    }

    let delta = edge.space / full_transition_length;
    damp(a.ramp_mut(axis), delta, damping);
    damp(b.ramp_mut(axis), delta, damping);
    true
}

fn damp(ramp: &mut AxisRamp, delta: f64, damping: f64) {
    let shift = (ramp.length_a - ramp.length_b / damping) * (1.0 - delta).powi(3);
    ramp.length_a -= shift;
    ramp.length_b += shift;
}
