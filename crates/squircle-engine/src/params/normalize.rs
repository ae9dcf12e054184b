use crate::coords::{CornerRadii, Size};

use super::RadiusSpec;

/// Decimal places kept when an over-constrained radius pair is rescaled.
const FIT_DECIMALS: i32 = 4;

/// Clamps both dimensions to `>= 0` and rounds them to whole units.
pub fn normalize_size(height: f64, width: f64) -> Size {
    let size = Size::new(non_negative(width).round(), non_negative(height).round());
    if size.height != height || size.width != width {
        log::debug!("size {width}x{height} normalized to {}x{}", size.width, size.height);
    }
    size
}

/// Clamps smoothing to `[0, 1]`. NaN is treated as zero.
pub fn normalize_smoothing(smoothing: f64) -> f64 {
    let s = non_negative(smoothing).min(1.0);
    if s != smoothing {
        log::debug!("smoothing {smoothing} clamped to {s}");
    }
    s
}

/// Resolves a radius request against a normalized size.
///
/// A uniform radius is rounded first, then clamped to half of the shorter
/// side. Clamping last keeps an odd-sized square valid: 101×101 with radius
/// 60 resolves to 50.5, where clamp-then-round would give 51 and overlap.
/// Per-corner radii go through [`fit_radii`].
pub fn resolve_radii(spec: &RadiusSpec, size: Size) -> CornerRadii {
    match *spec {
        RadiusSpec::Uniform(r) => {
            let limit = size.width.min(size.height) / 2.0;
            let rounded = non_negative(r).round();
            if rounded > limit {
                log::debug!("radius {r} clamped to {limit}");
            }
            CornerRadii::all(rounded.min(limit))
        }
        RadiusSpec::PerCorner { .. } => fit_radii(spec.raw_radii(), size),
    }
}

/// Rounds raw per-corner radii and shrinks adjacent pairs that overflow an edge.
///
/// The height pass runs first on landscape rectangles and last otherwise.
/// Both passes only ever shrink radii.
pub fn fit_radii(raw: CornerRadii, size: Size) -> CornerRadii {
    let mut radii = CornerRadii::from_fn(|c| non_negative(raw.get(c)).round());

    if size.width > size.height {
        fit_height(&mut radii, size.height);
        fit_width(&mut radii, size.width);
    } else {
        fit_width(&mut radii, size.width);
        fit_height(&mut radii, size.height);
    }
    radii
}

fn fit_height(radii: &mut CornerRadii, height: f64) {
    fit_pair(&mut radii.top_left, &mut radii.bottom_left, height);
    fit_pair(&mut radii.top_right, &mut radii.bottom_right, height);
}

fn fit_width(radii: &mut CornerRadii, width: f64) {
    fit_pair(&mut radii.top_left, &mut radii.top_right, width);
    fit_pair(&mut radii.bottom_right, &mut radii.bottom_left, width);
}

/// Scales `a` and `b` so that they sum to `length` when they exceed it.
fn fit_pair(a: &mut f64, b: &mut f64, length: f64) {
    let diameter = *a + *b;
    if diameter <= length {
        return;
    }
    log::debug!("radii {a} + {b} exceed edge {length}; scaling down");
    *a = round_to(*a / diameter * length, FIT_DECIMALS);
    *b = round_to(*b / diameter * length, FIT_DECIMALS);
}

#[inline]
fn non_negative(v: f64) -> f64 {
    // f64::max ignores a NaN operand, so NaN lands on zero here too.
    v.max(0.0)
}

#[inline]
fn round_to(v: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (v * factor).round() / factor
}
